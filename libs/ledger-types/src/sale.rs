use soroban_sdk::{contracttype, Address};

/// Sale configuration - written once by the constructor, never mutated
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Ledger token being sold
    pub token: Address,
    /// Token contract of the payment currency
    pub payment_token: Address,
    /// Receives proceeds; owns the inventory on the ledger
    pub beneficiary: Address,
    /// Whole payment units per token base unit
    pub token_price: i128,
    /// Payment base units per whole payment unit (10^decimals)
    pub payment_unit: i128,
    /// Payment base units per token base unit (token_price * payment_unit)
    pub cost_per_token: i128,
    /// Ledger timestamp at construction
    pub sale_start: u64,
    /// First timestamp at which the sale is closed
    pub sale_end: u64,
    /// Ledger total supply at construction
    pub initial_supply: i128,
}
