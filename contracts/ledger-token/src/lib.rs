#![no_std]

mod error;
mod storage;

pub use error::TokenError;

use ledger_types::TOKEN_DECIMALS;
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String, Symbol};
use storage::{
    get_allowance, get_balance, get_metadata, get_owner, get_total_supply, has_owner,
    set_allowance, set_balance, set_metadata, set_owner, set_total_supply, TokenMetadata,
};

/// Fixed-supply fungible token. The whole supply is minted to `owner` at
/// construction; there is no later mint or burn, so the sum of all balances
/// always equals `total_supply`.
#[contract]
pub struct LedgerToken;

#[contractimpl]
impl LedgerToken {
    pub fn __constructor(
        env: Env,
        owner: Address,
        initial_supply: i128,
        name: String,
        symbol: String,
    ) {
        if has_owner(&env) {
            panic!("Already initialized");
        }
        if initial_supply < 0 {
            panic!("Negative initial supply");
        }

        set_owner(&env, &owner);
        set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals: TOKEN_DECIMALS,
            },
        );
        set_total_supply(&env, initial_supply);
        set_balance(&env, &owner, initial_supply);

        log!(&env, "ledger token minted {} to {}", initial_supply, owner);
    }

    // === Transfers ===

    /// Grant `spender` the right to move up to `amount` of `from`'s tokens
    /// until `expiration_ledger`. Overwrites any previous allowance.
    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);

        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            panic_with_error!(&env, TokenError::InvalidExpiration);
        }

        set_allowance(&env, &from, &spender, amount, expiration_ledger);

        env.events().publish(
            (Symbol::new(&env, "approve"), from, spender),
            (amount, expiration_ledger),
        );
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);

        move_balance(&env, &from, &to, amount);

        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`.
    /// The allowance is checked before the balance.
    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&env, amount);

        spend_allowance(&env, &from, &spender, amount);
        move_balance(&env, &from, &to, amount);

        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
    }

    // === View Functions ===

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    pub fn decimals(env: Env) -> u32 {
        get_metadata(&env).decimals
    }

    pub fn name(env: Env) -> String {
        get_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        get_metadata(&env).symbol
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    /// Account the initial supply was minted to
    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }
}

fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(env, TokenError::NegativeAmount);
    }
}

fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = get_allowance(env, from, spender);
    if allowance.amount < amount {
        panic_with_error!(env, TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        set_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        panic_with_error!(env, TokenError::InsufficientBalance);
    }
    set_balance(env, from, from_balance - amount);

    // Self-transfers must read the debited balance
    let to_balance = get_balance(env, to);
    set_balance(env, to, to_balance + amount);
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::{Address as _, Ledger};
    use soroban_sdk::{Address, Env, String};

    const TOTAL_SUPPLY: i128 = 500_000_000_000 * 1_000_000_000_000_000_000;

    fn setup_token(env: &Env, owner: &Address) -> LedgerTokenClient<'static> {
        let contract_id = env.register(
            LedgerToken,
            (
                owner.clone(),
                TOTAL_SUPPLY,
                String::from_str(env, "LokToken"),
                String::from_str(env, "LOK"),
            ),
        );
        LedgerTokenClient::new(env, &contract_id)
    }

    // === Deployment Tests ===

    #[test]
    fn test_metadata() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let client = setup_token(&env, &owner);

        assert_eq!(client.name(), String::from_str(&env, "LokToken"));
        assert_eq!(client.symbol(), String::from_str(&env, "LOK"));
        assert_eq!(client.decimals(), 18);
        assert_eq!(client.owner(), owner);
    }

    #[test]
    fn test_total_supply_minted_to_owner() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let client = setup_token(&env, &owner);

        assert_eq!(client.total_supply(), TOTAL_SUPPLY);
        assert_eq!(client.balance(&owner), TOTAL_SUPPLY);
        assert_eq!(client.balance(&Address::generate(&env)), 0);
    }

    #[test]
    #[should_panic(expected = "Negative initial supply")]
    fn test_negative_supply_rejected() {
        let env = Env::default();
        let owner = Address::generate(&env);
        env.register(
            LedgerToken,
            (
                owner,
                -1i128,
                String::from_str(&env, "LokToken"),
                String::from_str(&env, "LOK"),
            ),
        );
    }

    // === Transfer Tests ===

    #[test]
    fn test_transfer() {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let alice = Address::generate(&env);
        let client = setup_token(&env, &owner);

        client.transfer(&owner, &alice, &10);

        assert_eq!(client.balance(&alice), 10);
        assert_eq!(client.balance(&owner), TOTAL_SUPPLY - 10);
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let client = setup_token(&env, &owner);

        client.transfer(&owner, &owner, &10);

        assert_eq!(client.balance(&owner), TOTAL_SUPPLY);
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        let client = setup_token(&env, &owner);

        client.transfer(&owner, &alice, &5);

        let result = client.try_transfer(&alice, &bob, &6);
        assert_eq!(result, Err(Ok(TokenError::InsufficientBalance.into())));
        assert_eq!(client.balance(&alice), 5);
        assert_eq!(client.balance(&bob), 0);
    }

    #[test]
    fn test_transfer_negative_amount() {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let alice = Address::generate(&env);
        let client = setup_token(&env, &owner);

        let result = client.try_transfer(&owner, &alice, &-1);
        assert_eq!(result, Err(Ok(TokenError::NegativeAmount.into())));
    }

    // === Allowance Tests ===

    #[test]
    fn test_approve_and_transfer_from() {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let spender = Address::generate(&env);
        let alice = Address::generate(&env);
        let client = setup_token(&env, &owner);

        let expiration = env.ledger().sequence() + 1000;
        client.approve(&owner, &spender, &100, &expiration);
        assert_eq!(client.allowance(&owner, &spender), 100);

        client.transfer_from(&spender, &owner, &alice, &40);

        assert_eq!(client.balance(&alice), 40);
        assert_eq!(client.balance(&owner), TOTAL_SUPPLY - 40);
        assert_eq!(client.allowance(&owner, &spender), 60);
    }

    #[test]
    fn test_transfer_from_without_allowance() {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let spender = Address::generate(&env);
        let alice = Address::generate(&env);
        let client = setup_token(&env, &owner);

        let result = client.try_transfer_from(&spender, &owner, &alice, &1);
        assert_eq!(result, Err(Ok(TokenError::InsufficientAllowance.into())));
        assert_eq!(client.balance(&owner), TOTAL_SUPPLY);
    }

    #[test]
    fn test_allowance_checked_before_balance() {
        let env = Env::default();
        env.mock_all_auths();

        let alice = Address::generate(&env);
        let spender = Address::generate(&env);
        let owner = Address::generate(&env);
        let client = setup_token(&env, &owner);

        // Alice holds nothing and approved nothing
        let result = client.try_transfer_from(&spender, &alice, &owner, &1);
        assert_eq!(result, Err(Ok(TokenError::InsufficientAllowance.into())));

        // Approved but unfunded
        let expiration = env.ledger().sequence() + 1000;
        client.approve(&alice, &spender, &1, &expiration);
        let result = client.try_transfer_from(&spender, &alice, &owner, &1);
        assert_eq!(result, Err(Ok(TokenError::InsufficientBalance.into())));
    }

    #[test]
    fn test_allowance_expires() {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let spender = Address::generate(&env);
        let client = setup_token(&env, &owner);

        let expiration = env.ledger().sequence() + 10;
        client.approve(&owner, &spender, &100, &expiration);
        assert_eq!(client.allowance(&owner, &spender), 100);

        env.ledger().with_mut(|li| li.sequence_number = expiration + 1);
        assert_eq!(client.allowance(&owner, &spender), 0);
    }

    #[test]
    fn test_approve_past_expiration_rejected() {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|li| li.sequence_number = 100);

        let owner = Address::generate(&env);
        let spender = Address::generate(&env);
        let client = setup_token(&env, &owner);

        let result = client.try_approve(&owner, &spender, &1, &99);
        assert_eq!(result, Err(Ok(TokenError::InvalidExpiration.into())));

        // Clearing an allowance is allowed with any expiration
        client.approve(&owner, &spender, &0, &0);
        assert_eq!(client.allowance(&owner, &spender), 0);
    }

    #[test]
    fn test_supply_conserved_across_transfers() {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        let client = setup_token(&env, &owner);

        client.transfer(&owner, &alice, &100);
        client.transfer(&alice, &bob, &30);
        client.transfer(&bob, &owner, &5);

        let sum = client.balance(&owner) + client.balance(&alice) + client.balance(&bob);
        assert_eq!(sum, client.total_supply());
    }
}
