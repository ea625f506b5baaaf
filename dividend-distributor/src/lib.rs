#![no_std]

use shared::{
    constants::SHARE_PRECISION,
    errors::Error,
    events::{CRITERIA_SET, DIVIDEND_PAID, REWARD_DEPOSIT, SHARE_SET},
    interfaces::OwnershipSourceClient,
    types::{Amount, ShareInfo},
};
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

mod storage;
mod types;

#[cfg(test)]
mod tests;

use storage::*;
use types::DistributorConfig;

contractmeta!(key = "name", val = "Dividend Distributor");

/// Proportional dividend engine over a changing holder set. One deployment
/// tracks reward-token balances (controller = the token contract), a second
/// independently parameterized deployment tracks ticket-NFT ownership
/// (controller = the NFT contract). The algorithm is identical; only the
/// eligibility source differs.
#[contract]
pub struct DividendDistributor;

#[contractimpl]
impl DividendDistributor {
    /// Initialize the distributor.
    ///
    /// # Arguments
    /// * `controller` - Only address allowed to push share updates
    /// * `reward_token` - Asset paid out to holders, held in custody here
    /// * `min_period` - Minimum seconds between payouts to one holder
    /// * `min_distribution` - Minimum pending amount worth paying out
    pub fn initialize(
        env: Env,
        admin: Address,
        controller: Address,
        reward_token: Address,
        min_period: u64,
        min_distribution: Amount,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        if min_distribution < 0 {
            return Err(Error::InvInput);
        }

        set_config(
            &env,
            &DistributorConfig {
                admin,
                controller,
                reward_token,
                min_period,
                min_distribution,
            },
        );
        Ok(())
    }

    /// Mirror a holder's eligible balance into its share. Controller only.
    ///
    /// Any pending reward earned under the old share amount is paid out
    /// before the amount changes, so resizing never forfeits accrued value.
    pub fn set_share(env: Env, holder: Address, balance: Amount) -> Result<(), Error> {
        let config = get_config(&env)?;
        config.controller.require_auth();

        if balance < 0 {
            return Err(Error::InvInput);
        }

        update_share(&env, &config, &holder, balance)
    }

    /// Record a reward deposit. The reward asset must already have been
    /// transferred into the distributor's custody by `from`.
    ///
    /// With zero total shares this is a no-op: the funds stay in custody and
    /// the accumulator is untouched, rather than faulting on the division.
    pub fn deposit(env: Env, from: Address, amount: Amount) -> Result<(), Error> {
        let config = get_config(&env)?;
        from.require_auth();
        if from != config.controller && from != config.admin {
            return Err(Error::Unauthorized);
        }
        if amount <= 0 {
            return Err(Error::InvInput);
        }

        let total_deposited = get_total_deposited(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        set_total_deposited(&env, total_deposited);

        let total_shares = get_total_shares(&env);
        if total_shares == 0 {
            return Ok(());
        }

        // Floor division; the remainder is recovered by later deposits.
        let delta = amount
            .checked_mul(SHARE_PRECISION)
            .ok_or(Error::Overflow)?
            / total_shares;
        set_per_share_acc(&env, get_per_share_acc(&env) + delta);

        env.events().publish((REWARD_DEPOSIT,), (from, amount));
        Ok(())
    }

    /// Pull the caller's accrued reward.
    pub fn claim_dividend(env: Env, holder: Address) -> Result<(), Error> {
        let config = get_config(&env)?;
        holder.require_auth();

        let now = env.ledger().timestamp();
        if now - get_last_claim(&env, &holder) < config.min_period {
            return Err(Error::TooSoon);
        }
        let pending = pending_amount(&env, &holder)?;
        if pending < config.min_distribution || pending == 0 {
            return Err(Error::BelowMinPay);
        }

        let mut share = get_share(&env, &holder);
        pay_out(&env, &config, &holder, &mut share, pending)?;
        set_share(&env, &holder, &share);
        Ok(())
    }

    /// Budgeted sweep that auto-pays eligible holders in cyclic order.
    ///
    /// The cursor persists across calls, so every holder is visited at least
    /// once per full cycle for any positive budget. Permissionless: the sweep
    /// only pays holders what claiming would have paid them.
    pub fn process(env: Env, budget: u32) -> Result<(), Error> {
        let config = get_config(&env)?;
        let holders = get_holders(&env);
        let count = holders.len();
        if count == 0 || budget == 0 {
            return Ok(());
        }

        let now = env.ledger().timestamp();
        let mut cursor = get_cursor(&env);
        let steps = budget.min(count);
        for _ in 0..steps {
            if cursor >= count {
                cursor = 0;
            }
            if let Some(holder) = holders.get(cursor) {
                let pending = pending_amount(&env, &holder)?;
                if pending > 0
                    && pending >= config.min_distribution
                    && now - get_last_claim(&env, &holder) >= config.min_period
                {
                    let mut share = get_share(&env, &holder);
                    pay_out(&env, &config, &holder, &mut share, pending)?;
                    set_share(&env, &holder, &share);
                }
            }
            cursor += 1;
        }
        if cursor >= count {
            cursor = 0;
        }
        set_cursor(&env, cursor);
        Ok(())
    }

    /// Recompute a holder's share from the configured eligibility source
    /// (ticket stream). Permissionless: the source is authoritative.
    pub fn sync_from_source(env: Env, holder: Address) -> Result<(), Error> {
        let config = get_config(&env)?;
        let source = get_source(&env).ok_or(Error::NoSource)?;

        let balance = OwnershipSourceClient::new(&env, &source).balance_of(&holder);
        if balance < 0 {
            return Err(Error::InvInput);
        }
        update_share(&env, &config, &holder, balance)
    }

    /// Update the payout rate limits. Admin only.
    pub fn set_distribution_criteria(
        env: Env,
        min_period: u64,
        min_distribution: Amount,
    ) -> Result<(), Error> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();
        if min_distribution < 0 {
            return Err(Error::InvInput);
        }
        config.min_period = min_period;
        config.min_distribution = min_distribution;
        set_config(&env, &config);
        env.events()
            .publish((CRITERIA_SET,), (min_period, min_distribution));
        Ok(())
    }

    /// Configure the ownership-query contract for the ticket stream. Admin only.
    pub fn set_eligibility_source(env: Env, source: Address) -> Result<(), Error> {
        let config = get_config(&env)?;
        config.admin.require_auth();
        set_source(&env, &source);
        Ok(())
    }

    // ---------- Views ----------

    pub fn share(env: Env, holder: Address) -> ShareInfo {
        get_share(&env, &holder)
    }

    pub fn pending(env: Env, holder: Address) -> Result<Amount, Error> {
        pending_amount(&env, &holder)
    }

    pub fn total_shares(env: Env) -> Amount {
        get_total_shares(&env)
    }

    pub fn total_deposited(env: Env) -> Amount {
        get_total_deposited(&env)
    }

    pub fn total_distributed(env: Env) -> Amount {
        get_total_distributed(&env)
    }

    pub fn min_period(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.min_period)
    }

    pub fn min_distribution(env: Env) -> Result<Amount, Error> {
        Ok(get_config(&env)?.min_distribution)
    }

    pub fn holder_count(env: Env) -> u32 {
        get_holders(&env).len()
    }
}

/// Reward attributed to `amount` shares over the accumulator's lifetime,
/// floored to base units.
fn cumulative(env: &Env, amount: Amount) -> Result<Amount, Error> {
    amount
        .checked_mul(get_per_share_acc(env))
        .map(|scaled| scaled / SHARE_PRECISION)
        .ok_or(Error::Overflow)
}

fn pending_amount(env: &Env, holder: &Address) -> Result<Amount, Error> {
    let share = get_share(env, holder);
    if share.amount == 0 {
        return Ok(0);
    }
    let earned = cumulative(env, share.amount)?;
    if earned <= share.total_excluded {
        return Ok(0);
    }
    Ok(earned - share.total_excluded)
}

/// Transfer `pending` to the holder and roll the exclusion forward so the
/// amount cannot be paid twice.
fn pay_out(
    env: &Env,
    config: &DistributorConfig,
    holder: &Address,
    share: &mut ShareInfo,
    pending: Amount,
) -> Result<(), Error> {
    token::Client::new(env, &config.reward_token).transfer(
        &env.current_contract_address(),
        holder,
        &pending,
    );

    share.total_realised = share
        .total_realised
        .checked_add(pending)
        .ok_or(Error::Overflow)?;
    share.total_excluded = cumulative(env, share.amount)?;
    set_last_claim(env, holder, env.ledger().timestamp());
    set_total_distributed(env, get_total_distributed(env) + pending);

    env.events().publish((DIVIDEND_PAID,), (holder.clone(), pending));
    Ok(())
}

fn update_share(
    env: &Env,
    config: &DistributorConfig,
    holder: &Address,
    balance: Amount,
) -> Result<(), Error> {
    let mut share = get_share(env, holder);

    if share.amount > 0 {
        let pending = pending_amount(env, holder)?;
        if pending > 0 {
            pay_out(env, config, holder, &mut share, pending)?;
        }
    }

    if balance > 0 && share.amount == 0 {
        add_holder(env, holder);
    } else if balance == 0 && share.amount > 0 {
        remove_holder(env, holder);
    }

    let total = get_total_shares(env)
        .checked_sub(share.amount)
        .and_then(|t| t.checked_add(balance))
        .ok_or(Error::Overflow)?;
    set_total_shares(env, total);

    share.amount = balance;
    share.total_excluded = cumulative(env, balance)?;
    set_share(env, holder, &share);

    env.events()
        .publish((SHARE_SET,), (holder.clone(), balance));
    Ok(())
}
