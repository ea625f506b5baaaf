use shared::errors::Error;
use shared::types::{Amount, ShareInfo};
use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, DistributorConfig};

pub fn set_config(env: &Env, config: &DistributorConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<DistributorConfig, Error> {
    env.storage()
        .instance()
        .get::<DataKey, DistributorConfig>(&DataKey::Config)
        .ok_or(Error::NotInit)
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_source(env: &Env, source: &Address) {
    env.storage().instance().set(&DataKey::Source, source);
}

pub fn get_source(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Source)
}

pub fn set_total_shares(env: &Env, total: Amount) {
    env.storage().instance().set(&DataKey::TotalShares, &total);
}

pub fn get_total_shares(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn set_per_share_acc(env: &Env, acc: Amount) {
    env.storage().instance().set(&DataKey::PerShareAcc, &acc);
}

pub fn get_per_share_acc(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::PerShareAcc)
        .unwrap_or(0)
}

pub fn set_total_deposited(env: &Env, total: Amount) {
    env.storage().instance().set(&DataKey::TotalDeposited, &total);
}

pub fn get_total_deposited(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::TotalDeposited)
        .unwrap_or(0)
}

pub fn set_total_distributed(env: &Env, total: Amount) {
    env.storage()
        .instance()
        .set(&DataKey::TotalDistributed, &total);
}

pub fn get_total_distributed(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::TotalDistributed)
        .unwrap_or(0)
}

pub fn set_cursor(env: &Env, cursor: u32) {
    env.storage().instance().set(&DataKey::Cursor, &cursor);
}

pub fn get_cursor(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::Cursor)
        .unwrap_or(0)
}

pub fn set_share(env: &Env, holder: &Address, share: &ShareInfo) {
    env.storage()
        .persistent()
        .set(&DataKey::Share(holder.clone()), share);
}

pub fn get_share(env: &Env, holder: &Address) -> ShareInfo {
    env.storage()
        .persistent()
        .get(&DataKey::Share(holder.clone()))
        .unwrap_or(ShareInfo {
            amount: 0,
            total_excluded: 0,
            total_realised: 0,
        })
}

pub fn set_last_claim(env: &Env, holder: &Address, at: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::LastClaim(holder.clone()), &at);
}

pub fn get_last_claim(env: &Env, holder: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::LastClaim(holder.clone()))
        .unwrap_or(0)
}

pub fn get_holders(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get::<DataKey, Vec<Address>>(&DataKey::Holders)
        .unwrap_or(Vec::new(env))
}

pub fn set_holders(env: &Env, holders: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Holders, holders);
}

fn set_holder_index(env: &Env, holder: &Address, index: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::HolderIndex(holder.clone()), &index);
}

fn get_holder_index(env: &Env, holder: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::HolderIndex(holder.clone()))
}

/// Append a holder to the cyclic process list.
pub fn add_holder(env: &Env, holder: &Address) {
    let mut holders = get_holders(env);
    set_holder_index(env, holder, holders.len());
    holders.push_back(holder.clone());
    set_holders(env, &holders);
}

/// Swap-remove a holder from the process list, keeping indexes dense so the
/// cursor never skips a live entry for longer than one full cycle.
pub fn remove_holder(env: &Env, holder: &Address) {
    let Some(index) = get_holder_index(env, holder) else {
        return;
    };
    let mut holders = get_holders(env);
    let last_index = holders.len() - 1;
    if let Some(last) = holders.get(last_index) {
        holders.set(index, last.clone());
        set_holder_index(env, &last, index);
    }
    holders.pop_back();
    set_holders(env, &holders);
    env.storage()
        .persistent()
        .remove(&DataKey::HolderIndex(holder.clone()));
}
