//! Storage layout and accessors
//!
//! Sale-wide state (config and the raised total) lives in instance storage;
//! per-user records live in persistent storage keyed by address. User records
//! are created on first collateral stake and never deleted.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::IfoError;

// TTL bumps, in ledgers (~5s each).
pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;
pub const TTL_THRESHOLD: u32 = WEEK_OF_LEDGERS;
pub const TTL_EXTEND_TO: u32 = WEEK_OF_LEDGERS * 4;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    TotalRaised,
    /// Per-participant record, keyed by the depositing address.
    User(Address),
}

/// Sale parameters, fixed at `initialize`. The offering and raising amounts
/// may be retuned by the admin strictly before the sale opens.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub raising_token: Address,
    pub offering_token: Address,
    pub collateral_token: Address,
    pub start_ledger: u32,
    pub end_ledger: u32,
    pub offering_amount: i128,
    pub raising_amount: i128,
    pub required_collateral: i128,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserRecord {
    pub has_collateral: bool,
    pub collateral: i128,
    /// Raising tokens deposited during the sale window.
    pub amount: i128,
    pub claimed: bool,
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, IfoError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(IfoError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &total);
}

pub fn get_user(env: &Env, user: &Address) -> UserRecord {
    env.storage()
        .persistent()
        .get(&DataKey::User(user.clone()))
        .unwrap_or_default()
}

pub fn set_user(env: &Env, user: &Address, record: &UserRecord) {
    let key = DataKey::User(user.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
