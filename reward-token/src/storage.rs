use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{Address, Env};

use crate::types::{DataKey, TokenConfig};

pub fn set_config(env: &Env, config: &TokenConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<TokenConfig, Error> {
    env.storage()
        .instance()
        .get::<DataKey, TokenConfig>(&DataKey::Config)
        .ok_or(Error::NotInit)
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_in_swap(env: &Env, in_swap: bool) {
    env.storage().instance().set(&DataKey::InSwap, &in_swap);
}

pub fn get_in_swap(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::InSwap)
        .unwrap_or(false)
}

pub fn set_balance(env: &Env, holder: &Address, balance: Amount) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(holder.clone()), &balance);
}

pub fn get_balance(env: &Env, holder: &Address) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

pub fn set_fee_exempt(env: &Env, holder: &Address, exempt: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::FeeExempt(holder.clone()), &exempt);
}

pub fn is_fee_exempt(env: &Env, holder: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::FeeExempt(holder.clone()))
        .unwrap_or(false)
}

pub fn set_tx_limit_exempt(env: &Env, holder: &Address, exempt: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::TxLimitExempt(holder.clone()), &exempt);
}

pub fn is_tx_limit_exempt(env: &Env, holder: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::TxLimitExempt(holder.clone()))
        .unwrap_or(false)
}

pub fn set_dividend_exempt(env: &Env, holder: &Address, exempt: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::DividendExempt(holder.clone()), &exempt);
}

pub fn is_dividend_exempt(env: &Env, holder: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::DividendExempt(holder.clone()))
        .unwrap_or(false)
}

pub fn set_blacklisted(env: &Env, holder: &Address, blacklisted: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Blacklisted(holder.clone()), &blacklisted);
}

pub fn is_blacklisted(env: &Env, holder: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Blacklisted(holder.clone()))
        .unwrap_or(false)
}
