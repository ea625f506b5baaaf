#![no_std]

pub mod constants;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod types;

pub use constants::{BPS_DENOMINATOR, MAX_TOTAL_FEE_BPS};
