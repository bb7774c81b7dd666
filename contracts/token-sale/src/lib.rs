#![no_std]

mod certora_specs;
mod error;
mod invariants;
mod storage;

pub use error::SaleError;

use ledger_math::{
    cost_per_token, is_sale_closed, is_sale_open, payment_unit, remaining_supply, sale_end,
    tokens_for_payment,
};
use ledger_types::{LedgerClient, SaleConfig, SALE_DURATION};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Symbol};
use storage::{get_config, get_total_sold, has_config, set_config, set_total_sold};

/// Fixed-price, time-bounded sale of ledger tokens.
///
/// Inventory stays on the beneficiary's ledger account and is moved to
/// buyers with `transfer_from`, so the beneficiary approves the sale for
/// the amount on offer. Payments are held by the sale until the window
/// closes and the beneficiary withdraws them.
#[contract]
pub struct TokenSale;

#[contractimpl]
impl TokenSale {
    /// Open a sale of `token` priced at `token_price` whole units of
    /// `payment_token` per token. The window starts now and lasts
    /// `SALE_DURATION`; the beneficiary is the ledger's owner.
    pub fn __constructor(env: Env, token: Address, payment_token: Address, token_price: i128) {
        if has_config(&env) {
            panic!("Already initialized");
        }
        if token_price <= 0 {
            panic!("Token price must be positive");
        }

        let ledger = LedgerClient::new(&env, &token);
        let payment_decimals = token::Client::new(&env, &payment_token).decimals();
        let payment_unit = payment_unit(payment_decimals).expect("Payment decimals too large");
        let cost_per_token =
            cost_per_token(token_price, payment_unit).expect("Token price too large");

        let sale_start = env.ledger().timestamp();
        let config = SaleConfig {
            beneficiary: ledger.owner(),
            initial_supply: ledger.total_supply(),
            token,
            payment_token,
            token_price,
            payment_unit,
            cost_per_token,
            sale_start,
            sale_end: sale_end(sale_start, SALE_DURATION),
        };
        set_config(&env, &config);
        set_total_sold(&env, 0);
    }

    /// Buy as many tokens as `payment` covers. The whole payment is kept,
    /// including any remainder below the cost of one more token.
    ///
    /// # Returns
    /// Number of tokens transferred to `buyer`
    pub fn buy_token(env: Env, buyer: Address, payment: i128) -> Result<i128, SaleError> {
        buyer.require_auth();

        let config = get_config(&env);
        let now = env.ledger().timestamp();

        let tokens = tokens_for_payment(payment, config.cost_per_token);
        if tokens < 1 {
            return Err(SaleError::InsufficientPayment);
        }
        if is_sale_closed(now, config.sale_end) {
            return Err(SaleError::SaleEnded);
        }

        let total_sold = get_total_sold(&env);
        let new_total_sold = next_total_sold(total_sold, tokens, config.initial_supply)
            .ok_or(SaleError::SupplyExhausted)?;

        let sale = env.current_contract_address();
        LedgerClient::new(&env, &config.token).transfer_from(
            &sale,
            &config.beneficiary,
            &buyer,
            &tokens,
        );
        set_total_sold(&env, new_total_sold);

        debug_assert!(invariants::sold_within_supply(
            new_total_sold,
            config.initial_supply
        ));
        debug_assert!(invariants::sold_monotonic(total_sold, new_total_sold));

        env.events().publish(
            (Symbol::new(&env, "bought_token"), buyer.clone()),
            tokens,
        );

        token::Client::new(&env, &config.payment_token).transfer(&buyer, &sale, &payment);

        log!(&env, "sold {} tokens for {}", tokens, payment);
        Ok(tokens)
    }

    /// Send every payment held by the sale to the beneficiary.
    /// Only allowed once the sale window has closed.
    ///
    /// # Returns
    /// Amount of payment currency transferred
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, SaleError> {
        caller.require_auth();

        let config = get_config(&env);
        let now = env.ledger().timestamp();
        debug_assert!(invariants::window_states_exclusive(now, config.sale_end));

        if is_sale_open(now, config.sale_end) {
            return Err(SaleError::SaleNotEnded);
        }
        if caller != config.beneficiary {
            return Err(SaleError::NotBeneficiary);
        }

        let payment_client = token::Client::new(&env, &config.payment_token);
        let sale = env.current_contract_address();
        let amount = payment_client.balance(&sale);
        if amount > 0 {
            payment_client.transfer(&sale, &config.beneficiary, &amount);
        }

        env.events().publish(
            (Symbol::new(&env, "withdrawn"), config.beneficiary),
            amount,
        );

        log!(&env, "withdrew {}", amount);
        Ok(amount)
    }

    // === View Functions ===

    /// Get the ledger token address
    pub fn token_address(env: Env) -> Address {
        get_config(&env).token
    }

    /// Get the payment currency token address
    pub fn payment_token(env: Env) -> Address {
        get_config(&env).payment_token
    }

    /// Get the price in whole payment units per token
    pub fn token_price(env: Env) -> i128 {
        get_config(&env).token_price
    }

    /// Ledger token name, proxied
    pub fn name(env: Env) -> String {
        LedgerClient::new(&env, &get_config(&env).token).name()
    }

    /// Ledger token symbol, proxied
    pub fn symbol(env: Env) -> String {
        LedgerClient::new(&env, &get_config(&env).token).symbol()
    }

    /// Ledger total supply when the sale was opened
    pub fn initial_supply(env: Env) -> i128 {
        get_config(&env).initial_supply
    }

    /// Tokens sold so far
    pub fn already_bought(env: Env) -> i128 {
        get_total_sold(&env)
    }

    /// Tokens still on offer
    pub fn token_for_sale(env: Env) -> i128 {
        let config = get_config(&env);
        let total_sold = get_total_sold(&env);
        debug_assert!(invariants::inventory_conserved(config.initial_supply, total_sold));
        remaining_supply(config.initial_supply, total_sold)
    }

    pub fn beneficiary(env: Env) -> Address {
        get_config(&env).beneficiary
    }

    pub fn sale_start(env: Env) -> u64 {
        get_config(&env).sale_start
    }

    pub fn sale_end(env: Env) -> u64 {
        get_config(&env).sale_end
    }

    /// Whether purchases are accepted at the current ledger time
    pub fn is_open(env: Env) -> bool {
        is_sale_open(env.ledger().timestamp(), get_config(&env).sale_end)
    }
}

/// Total sold after selling `tokens` more, or `None` if that would pass
/// the initial supply
pub(crate) fn next_total_sold(total_sold: i128, tokens: i128, initial_supply: i128) -> Option<i128> {
    total_sold
        .checked_add(tokens)
        .filter(|new_total| *new_total <= initial_supply)
}
