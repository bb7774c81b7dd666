use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    /// Payment is not enough to buy one token
    InsufficientPayment = 300,
    /// The sale window has closed
    SaleEnded = 301,
    /// The sale window is still open
    SaleNotEnded = 302,
    /// Only the beneficiary may withdraw proceeds
    NotBeneficiary = 303,
    /// Purchase would sell past the initial supply
    SupplyExhausted = 304,
}
