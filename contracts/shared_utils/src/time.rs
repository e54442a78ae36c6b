//! Ledger-window predicates
//!
//! Sale phases are defined over ledger sequence numbers. The window
//! `[start, end]` is inclusive on both ends; a sale counts as ended from
//! `end` onward, so the boundary ledger admits both a last deposit and a
//! first harvest.

use soroban_sdk::Env;

/// Current ledger sequence number, the contract's block clock.
pub fn current_ledger(env: &Env) -> u32 {
    env.ledger().sequence()
}

/// True once the ledger has reached `start`.
pub fn has_started(env: &Env, start: u32) -> bool {
    current_ledger(env) >= start
}

/// True while the ledger lies inside the inclusive window `[start, end]`.
pub fn window_contains(env: &Env, start: u32, end: u32) -> bool {
    let now = current_ledger(env);
    now >= start && now <= end
}

/// True once the ledger has reached `end`.
pub fn has_ended(env: &Env, end: u32) -> bool {
    current_ledger(env) >= end
}
