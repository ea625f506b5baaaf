/// Basis-point denominator for all fee and share math.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Hard ceiling on the sum of all transfer fee components, in basis points.
/// Enforced when fees are updated, not merely when they are applied.
pub const MAX_TOTAL_FEE_BPS: u32 = 2_500;

/// Fixed-point scale for the reward-per-share accumulator. Rounding is
/// floor in both the accumulator update and the cumulative lookup, which
/// keeps a holder's pending amount bounded by deposits. A share amount
/// never exceeds `total_shares`, so `amount * per_share_acc` stays below
/// `total_deposited * SHARE_PRECISION` and fits in i128.
pub const SHARE_PRECISION: i128 = 1_000_000_000_000;

/// Token decimals for the reward token ledger.
pub const TOKEN_DECIMALS: u32 = 9;

/// Fixed total supply, in base units (1B whole tokens at 9 decimals).
pub const INITIAL_SUPPLY: i128 = 1_000_000_000 * 1_000_000_000;

/// The per-transfer size limit may never be set below supply / this divisor.
pub const MIN_TX_LIMIT_DIVISOR: i128 = 2_000;

/// Default swap-back threshold is supply / this divisor.
pub const SWAP_THRESHOLD_DIVISOR: i128 = 20_000;

// Default fee schedule, 900 bps total.
pub const DEFAULT_LIQUIDITY_FEE_BPS: u32 = 200;
pub const DEFAULT_REFLECTION_FEE_BPS: u32 = 500;
pub const DEFAULT_MARKETING_FEE_BPS: u32 = 200;
