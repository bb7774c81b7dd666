use ledger_types::Operation;

/// Failure of a metered arithmetic operation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArithmeticError {
    DivisionByZero,
    ModuloByZero,
    Overflow,
}

/// Apply `op` to `(a, b)` with checked arithmetic.
///
/// Division and remainder truncate toward zero. A zero divisor is reported
/// before any overflow check so `i128::MIN / 0` is a division by zero.
pub fn apply_operation(op: Operation, a: i128, b: i128) -> Result<i128, ArithmeticError> {
    match op {
        Operation::Add => a.checked_add(b).ok_or(ArithmeticError::Overflow),
        Operation::Sub => a.checked_sub(b).ok_or(ArithmeticError::Overflow),
        Operation::Mul => a.checked_mul(b).ok_or(ArithmeticError::Overflow),
        Operation::Div => {
            if b == 0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            // i128::MIN / -1
            a.checked_div(b).ok_or(ArithmeticError::Overflow)
        }
        Operation::Rem => {
            if b == 0 {
                return Err(ArithmeticError::ModuloByZero);
            }
            a.checked_rem(b).ok_or(ArithmeticError::Overflow)
        }
    }
}
