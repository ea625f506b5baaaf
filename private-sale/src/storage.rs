use soroban_sdk::{Address, Env};

use shared::types::{Amount, SaleConfig};

use crate::types::DataKey;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<SaleConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_total_raised(env: &Env) -> Amount {
    env.storage().instance().get(&DataKey::TotalRaised).unwrap_or(0)
}

pub fn set_total_raised(env: &Env, total: Amount) {
    env.storage().instance().set(&DataKey::TotalRaised, &total);
}

pub fn is_closed(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Closed).unwrap_or(false)
}

pub fn set_closed(env: &Env) {
    env.storage().instance().set(&DataKey::Closed, &true);
}

pub fn get_contribution(env: &Env, buyer: &Address) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(buyer.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, buyer: &Address, amount: Amount) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(buyer.clone()), &amount);
}

pub fn is_whitelisted(env: &Env, buyer: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(buyer.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, buyer: &Address, listed: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Whitelisted(buyer.clone()), &listed);
}
