//! Integration test suite for the offering contract
//!
//! Exercises the deployed contract against real Stellar asset contracts:
//! - `harness`: reusable sale fixture (tokens, funding, ledger clock)
//! - `lifecycle_tests`: the reference single-depositor sale, end to end
//! - `collateral_tests`: collateral gating across the whole timeline
//! - `allocation_tests`: multi-depositor proportionality and oversubscription
//! - `admin_tests`: parameter updates and the final withdrawal

#![cfg(test)]

pub mod harness;


// Re-export the harness for convenience.
pub use harness::*;
