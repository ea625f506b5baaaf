use shared::types::Amount;
use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributorConfig {
    pub admin: Address,
    /// The only address allowed to push share updates: the reward token for
    /// the holder stream, the ticket-NFT contract for the ticket stream.
    pub controller: Address,
    pub reward_token: Address,
    pub min_period: u64,
    pub min_distribution: Amount,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Source,               // optional eligibility source contract
    TotalShares,
    PerShareAcc,
    TotalDeposited,
    TotalDistributed,
    Cursor,               // process() resume position
    Holders,              // Vec<Address> of accounts with a positive share
    Share(Address),
    HolderIndex(Address), // position in Holders, for swap-remove
    LastClaim(Address),
}
