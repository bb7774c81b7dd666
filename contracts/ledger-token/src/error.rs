use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Amounts must be non-negative
    NegativeAmount = 100,
    /// Balance too low for the transfer
    InsufficientBalance = 101,
    /// Spender is not approved for the amount
    InsufficientAllowance = 102,
    /// Allowance expiration is already in the past
    InvalidExpiration = 103,
}
