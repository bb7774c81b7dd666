#![no_std]

mod error;
mod fee;
mod storage;

pub use error::CalculatorError;

use ledger_math::apply_operation;
use ledger_types::{LedgerClient, Operation, FEE};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};
use storage::{get_token, has_token, set_token};

/// Arithmetic service that charges a fixed ledger-token fee per call.
///
/// The fee is pulled through the ledger allowance mechanism, so callers
/// approve the calculator before using it. Every entry point runs in the
/// same order: balance check, fee pull, then the operation itself. A
/// failure at any step reverts the whole invocation, fee included.
#[contract]
pub struct MeteredCalculator;

#[contractimpl]
impl MeteredCalculator {
    pub fn __constructor(env: Env, token: Address) {
        if has_token(&env) {
            panic!("Already initialized");
        }
        set_token(&env, &token);
    }

    /// Returns `a + b`
    pub fn add(env: Env, caller: Address, a: i128, b: i128) -> Result<i128, CalculatorError> {
        operate(&env, caller, Operation::Add, a, b)
    }

    /// Returns `a - b`
    pub fn sub(env: Env, caller: Address, a: i128, b: i128) -> Result<i128, CalculatorError> {
        operate(&env, caller, Operation::Sub, a, b)
    }

    /// Returns `a * b`
    pub fn mul(env: Env, caller: Address, a: i128, b: i128) -> Result<i128, CalculatorError> {
        operate(&env, caller, Operation::Mul, a, b)
    }

    /// Returns `a / b`, truncated toward zero
    pub fn div(env: Env, caller: Address, a: i128, b: i128) -> Result<i128, CalculatorError> {
        operate(&env, caller, Operation::Div, a, b)
    }

    /// Returns `a % b`
    pub fn modulo(env: Env, caller: Address, a: i128, b: i128) -> Result<i128, CalculatorError> {
        operate(&env, caller, Operation::Rem, a, b)
    }

    // === View Functions ===

    /// Get the ledger token address
    pub fn token_address(env: Env) -> Address {
        get_token(&env)
    }

    /// Get the per-call fee
    pub fn fee(_env: Env) -> i128 {
        FEE
    }

    /// Fees held by the calculator on the ledger
    pub fn collected_fees(env: Env) -> i128 {
        LedgerClient::new(&env, &get_token(&env)).balance(&env.current_contract_address())
    }
}

fn operate(
    env: &Env,
    caller: Address,
    op: Operation,
    a: i128,
    b: i128,
) -> Result<i128, CalculatorError> {
    caller.require_auth();

    fee::collect_fee(env, &caller)?;
    let result = apply_operation(op, a, b)?;

    env.events().publish(
        (Symbol::new(env, "operated"), caller),
        (a, op.symbol_string(env), b, result),
    );

    Ok(result)
}
