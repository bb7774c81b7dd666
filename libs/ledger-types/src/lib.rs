#![no_std]

mod ledger;
mod operation;
mod sale;

pub use ledger::*;
pub use operation::*;
pub use sale::*;

/// Fee charged for every metered operation, in ledger token base units
pub const FEE: i128 = 1;

/// Length of the sale window in seconds (two weeks)
pub const SALE_DURATION: u64 = 14 * 24 * 60 * 60;

/// Decimals of the ledger token
pub const TOKEN_DECIMALS: u32 = 18;
