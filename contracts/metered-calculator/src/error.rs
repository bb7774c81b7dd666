use ledger_math::ArithmeticError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CalculatorError {
    /// Insufficient funds to cover the operation fee
    InsufficientBalance = 200,
    /// Impossible to divide by zero
    DivisionByZero = 201,
    /// Impossible to take a remainder modulo zero
    ModuloByZero = 202,
    /// Result does not fit in an i128
    Overflow = 203,
}

impl From<ArithmeticError> for CalculatorError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => CalculatorError::DivisionByZero,
            ArithmeticError::ModuloByZero => CalculatorError::ModuloByZero,
            ArithmeticError::Overflow => CalculatorError::Overflow,
        }
    }
}
