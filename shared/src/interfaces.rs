use soroban_sdk::{contractclient, Address, Env};

/// Liquidity collaborator that converts accumulated fee tokens into the
/// reward asset. The ledger transfers the fee tokens to the converter first,
/// then invokes `convert`; proceeds are sent back to `recipient` and the
/// delivered reward amount is returned. Invoked through the generated
/// `try_convert` so a conversion failure never aborts the caller.
#[contractclient(name = "FeeConverterClient")]
pub trait FeeConverter {
    fn convert(env: Env, recipient: Address, amount: i128) -> i128;
}

/// The dividend distributor surface the ledger drives on every
/// balance-affecting event.
#[contractclient(name = "DistributorClient")]
pub trait Distributor {
    fn set_share(env: Env, holder: Address, balance: i128);
    fn deposit(env: Env, from: Address, amount: i128);
}

/// Ownership query used by the ticket-stream distributor to recompute a
/// holder's eligible share from the external NFT component.
#[contractclient(name = "OwnershipSourceClient")]
pub trait OwnershipSource {
    fn balance_of(env: Env, owner: Address) -> i128;
}
