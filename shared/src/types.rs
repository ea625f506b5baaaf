use soroban_sdk::{contracttype, Address};

pub type Amount = i128;

/// Transfer fee components, each in basis points. The total is the sum of
/// the components and may never exceed `MAX_TOTAL_FEE_BPS`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSchedule {
    pub liquidity_bps: u32,
    pub reflection_bps: u32,
    pub marketing_bps: u32,
}

impl FeeSchedule {
    /// Component sum, widened so any `u32` combination is comparable against
    /// the ceiling.
    pub fn total_bps(&self) -> u64 {
        self.liquidity_bps as u64 + self.reflection_bps as u64 + self.marketing_bps as u64
    }
}

/// Time-boxed global fee exemption, compared against the ledger clock.
/// A zero `start_at` means no window is configured.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeWindow {
    pub start_at: u64,
    pub length: u64,
}

impl FeeWindow {
    pub fn is_active(&self, now: u64) -> bool {
        self.start_at != 0 && now >= self.start_at && now < self.start_at + self.length
    }
}

/// Per-holder dividend accounting record.
/// `amount` mirrors the holder's eligible balance; `total_excluded` is the
/// cumulative reward already attributed at the last sync; `total_realised`
/// is the cumulative amount actually paid out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareInfo {
    pub amount: Amount,
    pub total_excluded: Amount,
    pub total_realised: Amount,
}

/// Immutable-identity sale parameters. Schedule, price and output token stay
/// mutable through admin setters until settlement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub payment_token: Address,
    pub token_out: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub min_commitment: Amount,
    pub max_commitment: Amount,
    pub soft_cap: Amount,
    pub hard_cap: Amount,
    pub price: Amount,
}

/// The sale's three-way terminal disambiguation, plus the in-progress state.
/// Hardcap success and softcap-at-expiry success both settle through claims;
/// a below-softcap expiry settles through refunds.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleOutcome {
    Raising,
    HardcapMet,
    SoftcapMet,
    Failed,
}
