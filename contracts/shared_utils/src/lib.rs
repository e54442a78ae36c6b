#![no_std]

//! Shared utility library for the offering contracts
//!
//! Provides the helpers the sale contract leans on:
//! - Checked fixed-point math (mul-div with floor rounding)
//! - Ledger-window predicates (sale phase checks)

pub mod math;
pub mod time;


// Re-exports for consumers of the crate.
#[allow(unused_imports)]
pub use math::*;
#[allow(unused_imports)]
pub use time::*;
