use shared::types::{Amount, FeeSchedule, FeeWindow};
use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenConfig {
    pub admin: Address,
    pub distributor: Address,
    pub converter: Address,
    pub reward_token: Address,
    pub marketing_receiver: Address,
    pub fees: FeeSchedule,
    pub max_tx_amount: Amount,
    pub swap_enabled: bool,
    pub swap_threshold: Amount,
    pub fee_window: FeeWindow,
    pub total_supply: Amount,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    InSwap, // swap-back re-entry guard
    Balance(Address),
    FeeExempt(Address),
    TxLimitExempt(Address),
    DividendExempt(Address),
    Blacklisted(Address),
}
