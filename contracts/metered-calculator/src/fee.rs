use crate::error::CalculatorError;
use crate::storage::get_token;
use ledger_types::{LedgerClient, FEE};
use soroban_sdk::{log, Address, Env};

/// Pull the operation fee from `caller` into the calculator's own account.
///
/// The balance is checked here so that a caller without funds gets
/// `InsufficientBalance`. A caller with funds but no allowance gets the
/// ledger's own allowance error from `transfer_from`, unchanged.
pub fn collect_fee(env: &Env, caller: &Address) -> Result<i128, CalculatorError> {
    let ledger = LedgerClient::new(env, &get_token(env));

    if ledger.balance(caller) < FEE {
        return Err(CalculatorError::InsufficientBalance);
    }

    let calculator = env.current_contract_address();
    ledger.transfer_from(&calculator, caller, &calculator, &FEE);

    log!(env, "collected fee {} from {}", FEE, caller.clone());
    Ok(FEE)
}
