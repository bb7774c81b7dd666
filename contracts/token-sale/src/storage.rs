use ledger_types::SaleConfig;
use soroban_sdk::{contracttype, Env};

/// Storage keys for the sale contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Sale configuration (Instance storage)
    Config,
    /// Cumulative tokens sold (Instance storage)
    TotalSold,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> SaleConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Sale not initialized")
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Total sold ===

pub fn get_total_sold(env: &Env) -> i128 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalSold)
        .unwrap_or(0)
}

pub fn set_total_sold(env: &Env, total_sold: i128) {
    env.storage().instance().set(&DataKey::TotalSold, &total_sold);
    extend_instance_ttl(env);
}
