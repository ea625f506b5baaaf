use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config, // shared::types::SaleConfig
    TotalRaised,
    Closed,
    Contribution(Address),
    Whitelisted(Address),
}
