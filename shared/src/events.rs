use soroban_sdk::{symbol_short, Symbol};

// Ledger events
pub const FEES_SET: Symbol = symbol_short!("fees_set");
pub const TX_LIMIT_SET: Symbol = symbol_short!("tx_limit");
pub const EXEMPT_SET: Symbol = symbol_short!("exempt");
pub const BLACKLIST_SET: Symbol = symbol_short!("blacklist");
pub const SWAP_SETTINGS: Symbol = symbol_short!("swap_cfg");
pub const FEE_WINDOW_SET: Symbol = symbol_short!("fee_wnd");
pub const RECEIVERS_SET: Symbol = symbol_short!("receivers");
pub const SWAP_BACK: Symbol = symbol_short!("swapback");

// Distributor events
pub const SHARE_SET: Symbol = symbol_short!("share_set");
pub const REWARD_DEPOSIT: Symbol = symbol_short!("deposit");
pub const DIVIDEND_PAID: Symbol = symbol_short!("dividend");
pub const CRITERIA_SET: Symbol = symbol_short!("criteria");

// Sale events
pub const PURCHASE: Symbol = symbol_short!("purchase");
pub const SALE_CLOSED: Symbol = symbol_short!("closed");
pub const TOKENS_CLAIMED: Symbol = symbol_short!("claimed");
pub const REFUND: Symbol = symbol_short!("refund");
pub const WHITELIST_ADD: Symbol = symbol_short!("wl_add");
pub const WHITELIST_REMOVE: Symbol = symbol_short!("wl_rem");
pub const SCHEDULE_SET: Symbol = symbol_short!("schedule");
pub const PRICE_SET: Symbol = symbol_short!("price_set");
pub const WITHDRAWN: Symbol = symbol_short!("withdraw");
