#![no_std]

use shared::{
    constants::{
        DEFAULT_LIQUIDITY_FEE_BPS, DEFAULT_MARKETING_FEE_BPS, DEFAULT_REFLECTION_FEE_BPS,
        INITIAL_SUPPLY, MIN_TX_LIMIT_DIVISOR, SWAP_THRESHOLD_DIVISOR, TOKEN_DECIMALS,
    },
    errors::Error,
    events::{
        BLACKLIST_SET, EXEMPT_SET, FEES_SET, FEE_WINDOW_SET, RECEIVERS_SET, SWAP_BACK,
        SWAP_SETTINGS, TX_LIMIT_SET,
    },
    interfaces::{DistributorClient, FeeConverterClient},
    types::{Amount, FeeSchedule, FeeWindow},
    BPS_DENOMINATOR, MAX_TOTAL_FEE_BPS,
};
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env, String};
use soroban_token_sdk::TokenUtils;

mod storage;
mod types;


use storage::*;
use types::TokenConfig;

contractmeta!(key = "name", val = "Meridian Reward Token");

const NAME: &str = "Meridian";
const SYMBOL: &str = "MRD";

/// Fixed-supply ledger with transfer-time fee extraction. Fees accumulate as
/// the contract's own balance (the fee pool) and, once a threshold is
/// crossed, are swapped into the reward asset and routed to the dividend
/// distributor and the marketing receiver.
#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    /// Mint the full supply to `admin` and wire up the collaborators.
    ///
    /// The distributor must already be initialized with this contract as its
    /// controller so the initial share sync below succeeds.
    pub fn initialize(
        env: Env,
        admin: Address,
        distributor: Address,
        converter: Address,
        reward_token: Address,
        marketing_receiver: Address,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        let config = TokenConfig {
            admin: admin.clone(),
            distributor: distributor.clone(),
            converter: converter.clone(),
            reward_token,
            marketing_receiver,
            fees: FeeSchedule {
                liquidity_bps: DEFAULT_LIQUIDITY_FEE_BPS,
                reflection_bps: DEFAULT_REFLECTION_FEE_BPS,
                marketing_bps: DEFAULT_MARKETING_FEE_BPS,
            },
            max_tx_amount: INITIAL_SUPPLY / MIN_TX_LIMIT_DIVISOR,
            swap_enabled: true,
            swap_threshold: INITIAL_SUPPLY / SWAP_THRESHOLD_DIVISOR,
            fee_window: FeeWindow {
                start_at: 0,
                length: 3600,
            },
            total_supply: INITIAL_SUPPLY,
        };
        set_config(&env, &config);

        set_balance(&env, &admin, INITIAL_SUPPLY);
        set_fee_exempt(&env, &admin, true);
        set_tx_limit_exempt(&env, &admin, true);

        // Non-holder accounts never participate in dividends.
        let this = env.current_contract_address();
        set_dividend_exempt(&env, &this, true);
        set_dividend_exempt(&env, &converter, true);
        set_dividend_exempt(&env, &distributor, true);

        DistributorClient::new(&env, &config.distributor).set_share(&admin, &INITIAL_SUPPLY);

        TokenUtils::new(&env)
            .events()
            .mint(admin.clone(), admin, INITIAL_SUPPLY);
        Ok(())
    }

    /// Move `amount` from `from` to `to`, extracting the transfer fee into
    /// the fee pool unless either party is fee-exempt or the global
    /// fee-exempt window is active. Both parties' dividend shares are
    /// resynchronized, then swap-back is attempted opportunistically.
    pub fn transfer(env: Env, from: Address, to: Address, amount: Amount) -> Result<(), Error> {
        from.require_auth();
        let config = get_config(&env)?;

        if amount <= 0 {
            return Err(Error::InvInput);
        }
        if is_blacklisted(&env, &from) || is_blacklisted(&env, &to) {
            return Err(Error::Blacklisted);
        }
        if amount > config.max_tx_amount && !is_tx_limit_exempt(&env, &from) {
            return Err(Error::TxLimitHit);
        }
        let from_balance = get_balance(&env, &from);
        if from_balance < amount {
            return Err(Error::InsufBalance);
        }

        let now = env.ledger().timestamp();
        let feeless = is_fee_exempt(&env, &from)
            || is_fee_exempt(&env, &to)
            || config.fee_window.is_active(now);
        let fee = if feeless {
            0
        } else {
            amount
                .checked_mul(config.fees.total_bps() as Amount)
                .ok_or(Error::Overflow)?
                / BPS_DENOMINATOR
        };
        let received = amount - fee;

        set_balance(&env, &from, from_balance - amount);
        let to_balance = get_balance(&env, &to)
            .checked_add(received)
            .ok_or(Error::Overflow)?;
        set_balance(&env, &to, to_balance);
        if fee > 0 {
            let this = env.current_contract_address();
            set_balance(&env, &this, get_balance(&env, &this) + fee);
        }

        sync_share(&env, &config, &from);
        sync_share(&env, &config, &to);

        TokenUtils::new(&env).events().transfer(from, to, received);

        try_swap_back(&env, &config);
        Ok(())
    }

    /// Attempt a swap-back outside of a transfer. Permissionless; respects
    /// the threshold, the enabled flag and the in-progress guard.
    pub fn trigger_swap_back(env: Env) -> Result<(), Error> {
        let config = get_config(&env)?;
        try_swap_back(&env, &config);
        Ok(())
    }

    // ---------- Admin operations ----------

    /// Replace the fee schedule. The component sum is capped at update time.
    pub fn set_fees(
        env: Env,
        liquidity_bps: u32,
        reflection_bps: u32,
        marketing_bps: u32,
    ) -> Result<(), Error> {
        let mut config = require_admin(&env)?;
        let fees = FeeSchedule {
            liquidity_bps,
            reflection_bps,
            marketing_bps,
        };
        if fees.total_bps() > MAX_TOTAL_FEE_BPS as u64 {
            return Err(Error::FeeTooHigh);
        }
        config.fees = fees;
        set_config(&env, &config);
        env.events().publish(
            (FEES_SET,),
            (liquidity_bps, reflection_bps, marketing_bps),
        );
        Ok(())
    }

    /// Set the per-transfer size limit; may not drop below supply / 2000.
    pub fn set_tx_limit(env: Env, amount: Amount) -> Result<(), Error> {
        let mut config = require_admin(&env)?;
        if amount < config.total_supply / MIN_TX_LIMIT_DIVISOR {
            return Err(Error::TxLimitLow);
        }
        config.max_tx_amount = amount;
        set_config(&env, &config);
        env.events().publish((TX_LIMIT_SET,), amount);
        Ok(())
    }

    pub fn set_is_fee_exempt(env: Env, holder: Address, exempt: bool) -> Result<(), Error> {
        require_admin(&env)?;
        set_fee_exempt(&env, &holder, exempt);
        env.events().publish((EXEMPT_SET,), (holder, exempt));
        Ok(())
    }

    pub fn set_is_tx_limit_exempt(env: Env, holder: Address, exempt: bool) -> Result<(), Error> {
        require_admin(&env)?;
        set_tx_limit_exempt(&env, &holder, exempt);
        env.events().publish((EXEMPT_SET,), (holder, exempt));
        Ok(())
    }

    /// Exempting zeroes the holder's dividend share immediately; re-admitting
    /// restores it from the current balance.
    pub fn set_is_dividend_exempt(env: Env, holder: Address, exempt: bool) -> Result<(), Error> {
        let config = require_admin(&env)?;
        if holder == env.current_contract_address() {
            return Err(Error::InvInput);
        }
        set_dividend_exempt(&env, &holder, exempt);
        let share = if exempt { 0 } else { get_balance(&env, &holder) };
        DistributorClient::new(&env, &config.distributor).set_share(&holder, &share);
        env.events().publish((EXEMPT_SET,), (holder, exempt));
        Ok(())
    }

    pub fn set_is_blacklisted(env: Env, holder: Address, blacklisted: bool) -> Result<(), Error> {
        require_admin(&env)?;
        set_blacklisted(&env, &holder, blacklisted);
        env.events().publish((BLACKLIST_SET,), (holder, blacklisted));
        Ok(())
    }

    pub fn set_swap_back_settings(
        env: Env,
        enabled: bool,
        threshold: Amount,
    ) -> Result<(), Error> {
        let mut config = require_admin(&env)?;
        if threshold <= 0 {
            return Err(Error::InvInput);
        }
        config.swap_enabled = enabled;
        config.swap_threshold = threshold;
        set_config(&env, &config);
        env.events().publish((SWAP_SETTINGS,), (enabled, threshold));
        Ok(())
    }

    /// Schedule a global fee-exempt window. The start must be strictly in
    /// the future.
    pub fn set_fee_exempt_settings(env: Env, start_at: u64, length: u64) -> Result<(), Error> {
        let mut config = require_admin(&env)?;
        if start_at <= env.ledger().timestamp() {
            return Err(Error::WindowNotFut);
        }
        config.fee_window = FeeWindow { start_at, length };
        set_config(&env, &config);
        env.events().publish((FEE_WINDOW_SET,), (start_at, length));
        Ok(())
    }

    /// Cancel the fee-exempt window; the configured length is kept.
    pub fn clear_fee_exempt(env: Env) -> Result<(), Error> {
        let mut config = require_admin(&env)?;
        config.fee_window.start_at = 0;
        set_config(&env, &config);
        env.events()
            .publish((FEE_WINDOW_SET,), (0u64, config.fee_window.length));
        Ok(())
    }

    pub fn set_fee_receivers(env: Env, marketing_receiver: Address) -> Result<(), Error> {
        let mut config = require_admin(&env)?;
        config.marketing_receiver = marketing_receiver.clone();
        set_config(&env, &config);
        env.events().publish((RECEIVERS_SET,), marketing_receiver);
        Ok(())
    }

    // ---------- Views ----------

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        TOKEN_DECIMALS
    }

    pub fn total_supply(env: Env) -> Result<Amount, Error> {
        Ok(get_config(&env)?.total_supply)
    }

    pub fn balance(env: Env, holder: Address) -> Amount {
        get_balance(&env, &holder)
    }

    /// Accumulated, not-yet-swapped fees: the contract's own balance.
    pub fn fee_pool(env: Env) -> Amount {
        get_balance(&env, &env.current_contract_address())
    }

    pub fn fees(env: Env) -> Result<FeeSchedule, Error> {
        Ok(get_config(&env)?.fees)
    }

    pub fn total_fee(env: Env) -> Result<u32, Error> {
        // Stored schedules always pass the ceiling check, so this fits.
        Ok(get_config(&env)?.fees.total_bps() as u32)
    }

    pub fn max_tx_amount(env: Env) -> Result<Amount, Error> {
        Ok(get_config(&env)?.max_tx_amount)
    }

    pub fn swap_enabled(env: Env) -> Result<bool, Error> {
        Ok(get_config(&env)?.swap_enabled)
    }

    pub fn swap_threshold(env: Env) -> Result<Amount, Error> {
        Ok(get_config(&env)?.swap_threshold)
    }

    pub fn fee_window(env: Env) -> Result<FeeWindow, Error> {
        Ok(get_config(&env)?.fee_window)
    }

    pub fn is_fee_exempt(env: Env, holder: Address) -> bool {
        storage::is_fee_exempt(&env, &holder)
    }

    pub fn is_tx_limit_exempt(env: Env, holder: Address) -> bool {
        storage::is_tx_limit_exempt(&env, &holder)
    }

    pub fn is_dividend_exempt(env: Env, holder: Address) -> bool {
        storage::is_dividend_exempt(&env, &holder)
    }

    pub fn is_blacklisted(env: Env, holder: Address) -> bool {
        storage::is_blacklisted(&env, &holder)
    }

    pub fn marketing_fee_receiver(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.marketing_receiver)
    }
}

fn require_admin(env: &Env) -> Result<TokenConfig, Error> {
    let config = get_config(env)?;
    config.admin.require_auth();
    Ok(config)
}

fn sync_share(env: &Env, config: &TokenConfig, holder: &Address) {
    if !is_dividend_exempt(env, holder) {
        DistributorClient::new(env, &config.distributor)
            .set_share(holder, &get_balance(env, holder));
    }
}

/// Convert the fee pool once it crosses the threshold. The conversion call
/// is the only place an external failure is swallowed: the pool is restored
/// and retried on a later transfer rather than aborting the caller.
fn try_swap_back(env: &Env, config: &TokenConfig) {
    if !config.swap_enabled || get_in_swap(env) {
        return;
    }
    let this = env.current_contract_address();
    let pool = get_balance(env, &this);
    if pool < config.swap_threshold {
        return;
    }

    set_in_swap(env, true);

    // The converter takes custody of the fee tokens, swaps them, and sends
    // the reward asset back to this contract.
    set_balance(env, &this, 0);
    set_balance(env, &config.converter, get_balance(env, &config.converter) + pool);

    let outcome = FeeConverterClient::new(env, &config.converter).try_convert(&this, &pool);
    match outcome {
        Ok(Ok(received)) if received > 0 => {
            route_proceeds(env, config, &this, received);
            env.events().publish((SWAP_BACK,), (pool, received));
        }
        _ => {
            // Failed or empty conversion: take the pool back for retry.
            let converter_balance = get_balance(env, &config.converter);
            set_balance(env, &config.converter, converter_balance - pool);
            set_balance(env, &this, get_balance(env, &this) + pool);
        }
    }

    set_in_swap(env, false);
}

/// Split conversion proceeds by fee component: reflection to the dividend
/// distributor, marketing to its receiver, liquidity retained in custody.
fn route_proceeds(env: &Env, config: &TokenConfig, this: &Address, received: Amount) {
    let total = config.fees.total_bps() as Amount;
    if total == 0 {
        return;
    }
    let reflection = received * config.fees.reflection_bps as Amount / total;
    let marketing = received * config.fees.marketing_bps as Amount / total;

    let reward = token::Client::new(env, &config.reward_token);
    if reflection > 0 {
        reward.transfer(this, &config.distributor, &reflection);
        DistributorClient::new(env, &config.distributor).deposit(this, &reflection);
    }
    if marketing > 0 {
        reward.transfer(this, &config.marketing_receiver, &marketing);
    }
}
