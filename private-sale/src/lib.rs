#![no_std]

//! Capped, whitelisted fundraising sale.
//!
//! Buyers commit a payment asset during a fixed window. Once an admin closes
//! the round, settlement goes one of two ways: if the soft cap was reached,
//! contributors claim `contribution * price` units of the sale asset; if the
//! round ended below the soft cap and was left open, contributors release
//! their payment back in full.

use soroban_sdk::{
    contract, contractimpl, contractmeta, token, Address, Env, Vec,
};

use shared::errors::Error;
use shared::events;
use shared::types::{Amount, SaleConfig, SaleOutcome};

mod storage;
mod types;
mod validation;


use storage::{
    get_admin, get_config, get_contribution, get_total_raised, has_config, is_closed,
    is_whitelisted, set_admin, set_closed, set_config, set_contribution, set_total_raised,
    set_whitelisted,
};
use validation::{validate_caps, validate_price, validate_schedule};

contractmeta!(key = "Description", val = "Whitelisted capped token sale");

#[contract]
pub struct PrivateSale;

#[contractimpl]
impl PrivateSale {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        token_out: Address,
        start_time: u64,
        end_time: u64,
        min_commitment: Amount,
        max_commitment: Amount,
        soft_cap: Amount,
        hard_cap: Amount,
        price: Amount,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        validate_schedule(start_time, end_time)?;
        validate_caps(min_commitment, max_commitment, soft_cap, hard_cap)?;
        validate_price(price)?;

        set_admin(&env, &admin);
        set_config(
            &env,
            &SaleConfig {
                payment_token,
                token_out,
                start_time,
                end_time,
                min_commitment,
                max_commitment,
                soft_cap,
                hard_cap,
                price,
            },
        );
        set_total_raised(&env, 0);
        Ok(())
    }

    /// Commit `amount` of the payment asset. The first purchase must meet the
    /// minimum commitment; later top-ups may be arbitrarily small as long as
    /// the running total stays at or below the per-buyer maximum.
    pub fn purchase_tokens(env: Env, buyer: Address, amount: Amount) -> Result<(), Error> {
        buyer.require_auth();
        let config = require_config(&env)?;
        let now = env.ledger().timestamp();

        if now < config.start_time {
            return Err(Error::TooEarly);
        }
        if now >= config.end_time {
            return Err(Error::TooLate);
        }
        if is_closed(&env) {
            return Err(Error::SaleClosed);
        }
        if !is_whitelisted(&env, &buyer) {
            return Err(Error::NotWhitelisted);
        }
        if amount <= 0 {
            return Err(Error::InvInput);
        }

        let contributed = get_contribution(&env, &buyer);
        if contributed == 0 && amount < config.min_commitment {
            return Err(Error::BelowMinCommit);
        }
        let new_contribution = contributed.checked_add(amount).ok_or(Error::Overflow)?;
        if new_contribution > config.max_commitment {
            return Err(Error::AboveMaxCommit);
        }
        let total = get_total_raised(&env);
        let new_total = total.checked_add(amount).ok_or(Error::Overflow)?;
        if new_total > config.hard_cap {
            return Err(Error::HardcapHit);
        }

        token::Client::new(&env, &config.payment_token).transfer(
            &buyer,
            &env.current_contract_address(),
            &amount,
        );
        set_contribution(&env, &buyer, new_contribution);
        set_total_raised(&env, new_total);

        env.events()
            .publish((events::PURCHASE,), (buyer, amount, new_total));
        Ok(())
    }

    /// Seal the round. Allowed once the hard cap is reached or the window has
    /// ended; closing a round that ended below the soft cap forfeits refunds,
    /// so the admin is expected to leave failed rounds open.
    pub fn close_sale(env: Env) -> Result<(), Error> {
        let config = require_config(&env)?;
        require_admin(&env)?;

        if is_closed(&env) {
            return Err(Error::AlreadyClosed);
        }
        let total = get_total_raised(&env);
        let now = env.ledger().timestamp();
        if total < config.hard_cap && now < config.end_time {
            return Err(Error::CannotClose);
        }
        set_closed(&env);

        env.events().publish((events::SALE_CLOSED,), total);
        Ok(())
    }

    /// Redeem a contribution for the sale asset after a successful, closed
    /// round. Pays `contribution * price` and zeroes the contribution.
    pub fn claim_tokens(env: Env, buyer: Address) -> Result<(), Error> {
        buyer.require_auth();
        let config = require_config(&env)?;

        if !is_closed(&env) {
            return Err(Error::SaleNotClosed);
        }
        if get_total_raised(&env) < config.soft_cap {
            return Err(Error::CapNotMet);
        }
        let contributed = get_contribution(&env, &buyer);
        if contributed == 0 {
            return Err(Error::NothingToClaim);
        }

        let payout = contributed.checked_mul(config.price).ok_or(Error::Overflow)?;
        set_contribution(&env, &buyer, 0);
        token::Client::new(&env, &config.token_out).transfer(
            &env.current_contract_address(),
            &buyer,
            &payout,
        );

        env.events()
            .publish((events::TOKENS_CLAIMED,), (buyer, payout));
        Ok(())
    }

    /// Refund a contribution in full after a round that ended below the soft
    /// cap without being closed.
    pub fn release_tokens(env: Env, buyer: Address) -> Result<(), Error> {
        buyer.require_auth();
        let config = require_config(&env)?;

        if env.ledger().timestamp() < config.end_time {
            return Err(Error::EndNotPassed);
        }
        if get_total_raised(&env) >= config.soft_cap {
            return Err(Error::SoftcapMet);
        }
        if is_closed(&env) {
            return Err(Error::SaleIsClosed);
        }
        let contributed = get_contribution(&env, &buyer);
        if contributed == 0 {
            return Err(Error::NothingToRelease);
        }

        set_contribution(&env, &buyer, 0);
        token::Client::new(&env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &buyer,
            &contributed,
        );

        env.events().publish((events::REFUND,), (buyer, contributed));
        Ok(())
    }

    // --- admin ---

    pub fn add_to_whitelist(env: Env, buyers: Vec<Address>) -> Result<(), Error> {
        require_config(&env)?;
        require_admin(&env)?;
        for buyer in buyers.iter() {
            set_whitelisted(&env, &buyer, true);
            env.events().publish((events::WHITELIST_ADD,), buyer);
        }
        Ok(())
    }

    pub fn remove_from_whitelist(env: Env, buyers: Vec<Address>) -> Result<(), Error> {
        require_config(&env)?;
        require_admin(&env)?;
        for buyer in buyers.iter() {
            set_whitelisted(&env, &buyer, false);
            env.events().publish((events::WHITELIST_REMOVE,), buyer);
        }
        Ok(())
    }

    /// Move the opening of the window. The schedule is frozen once the sale
    /// has opened: contributors committed under the published window.
    pub fn set_start_date(env: Env, start_time: u64) -> Result<(), Error> {
        let mut config = require_config(&env)?;
        require_admin(&env)?;
        if is_closed(&env) {
            return Err(Error::AlreadyClosed);
        }
        if env.ledger().timestamp() >= config.start_time {
            return Err(Error::SaleStarted);
        }
        validate_schedule(start_time, config.end_time)?;
        config.start_time = start_time;
        set_config(&env, &config);

        env.events()
            .publish((events::SCHEDULE_SET,), (config.start_time, config.end_time));
        Ok(())
    }

    pub fn set_end_date(env: Env, end_time: u64) -> Result<(), Error> {
        let mut config = require_config(&env)?;
        require_admin(&env)?;
        if is_closed(&env) {
            return Err(Error::AlreadyClosed);
        }
        if env.ledger().timestamp() >= config.start_time {
            return Err(Error::SaleStarted);
        }
        validate_schedule(config.start_time, end_time)?;
        config.end_time = end_time;
        set_config(&env, &config);

        env.events()
            .publish((events::SCHEDULE_SET,), (config.start_time, config.end_time));
        Ok(())
    }

    pub fn set_price(env: Env, price: Amount) -> Result<(), Error> {
        let mut config = require_config(&env)?;
        require_admin(&env)?;
        validate_price(price)?;
        config.price = price;
        set_config(&env, &config);

        env.events().publish((events::PRICE_SET,), price);
        Ok(())
    }

    pub fn set_token_out(env: Env, token_out: Address) -> Result<(), Error> {
        let mut config = require_config(&env)?;
        require_admin(&env)?;
        if is_closed(&env) {
            return Err(Error::SaleIsClosed);
        }
        config.token_out = token_out;
        set_config(&env, &config);
        Ok(())
    }

    /// Sweep the contract's entire payment-asset balance to the admin.
    pub fn withdraw_payment(env: Env) -> Result<(), Error> {
        let config = require_config(&env)?;
        let admin = require_admin(&env)?;

        let client = token::Client::new(&env, &config.payment_token);
        let balance = client.balance(&env.current_contract_address());
        if balance > 0 {
            client.transfer(&env.current_contract_address(), &admin, &balance);
        }

        env.events()
            .publish((events::WITHDRAWN,), (config.payment_token, balance));
        Ok(())
    }

    /// Recover an arbitrary asset held by the sale, unsold inventory included.
    pub fn withdraw_token(env: Env, asset: Address, to: Address, amount: Amount) -> Result<(), Error> {
        require_config(&env)?;
        require_admin(&env)?;
        if amount <= 0 {
            return Err(Error::InvInput);
        }
        token::Client::new(&env, &asset).transfer(&env.current_contract_address(), &to, &amount);

        env.events().publish((events::WITHDRAWN,), (asset, amount));
        Ok(())
    }

    // --- views ---

    pub fn config(env: Env) -> Result<SaleConfig, Error> {
        require_config(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        get_admin(&env).ok_or(Error::NotInit)
    }

    pub fn total_raised(env: Env) -> Amount {
        get_total_raised(&env)
    }

    pub fn contribution(env: Env, buyer: Address) -> Amount {
        get_contribution(&env, &buyer)
    }

    pub fn is_whitelisted(env: Env, buyer: Address) -> bool {
        is_whitelisted(&env, &buyer)
    }

    pub fn is_closed(env: Env) -> bool {
        is_closed(&env)
    }

    /// Sale-asset units still purchasable before the hard cap.
    pub fn tokens_remaining(env: Env) -> Result<Amount, Error> {
        let config = require_config(&env)?;
        let headroom = config.hard_cap - get_total_raised(&env);
        headroom.checked_mul(config.price).ok_or(Error::Overflow)
    }

    /// Payment-asset headroom before the hard cap.
    pub fn payment_remaining(env: Env) -> Result<Amount, Error> {
        let config = require_config(&env)?;
        Ok(config.hard_cap - get_total_raised(&env))
    }

    pub fn outcome(env: Env) -> Result<SaleOutcome, Error> {
        let config = require_config(&env)?;
        let total = get_total_raised(&env);
        if total >= config.hard_cap {
            return Ok(SaleOutcome::HardcapMet);
        }
        if is_closed(&env) || env.ledger().timestamp() >= config.end_time {
            if total >= config.soft_cap {
                return Ok(SaleOutcome::SoftcapMet);
            }
            return Ok(SaleOutcome::Failed);
        }
        Ok(SaleOutcome::Raising)
    }
}

fn require_config(env: &Env) -> Result<SaleConfig, Error> {
    get_config(env).ok_or(Error::NotInit)
}

fn require_admin(env: &Env) -> Result<Address, Error> {
    let admin = get_admin(env).ok_or(Error::NotInit)?;
    admin.require_auth();
    Ok(admin)
}
