use soroban_sdk::{contractclient, Address, Env, String};

/// Interface of the fungible token ledger both services settle against.
///
/// This is the standard Soroban token surface extended with `total_supply`
/// and `owner`, which the sale needs to snapshot its inventory and find its
/// beneficiary.
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn allowance(env: Env, from: Address, spender: Address) -> i128;
    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn decimals(env: Env) -> u32;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn total_supply(env: Env) -> i128;
    fn owner(env: Env) -> Address;
}
