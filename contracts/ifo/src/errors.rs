//! Contract error codes
//!
//! Every precondition failure is a tagged variant; the whole invocation
//! reverts, so no partial state ever survives a failure. Auth failures are
//! signaled by host panic (`require_auth`).

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum IfoError {
    /// `initialize` was already called on this instance.
    AlreadyInitialized = 1,
    /// The contract has not been initialized yet.
    NotInitialized = 2,
    /// Constructor window is malformed (`start_ledger >= end_ledger`).
    InvalidSaleWindow = 3,
    /// A zero or negative token amount was supplied.
    InvalidAmount = 4,
    /// Caller is not the configured admin.
    Unauthorized = 5,

    // ── Timing ("not ifo time" / "not harvest time") ─────────────
    /// Collateral staking attempted before the sale opens.
    SaleNotStarted = 10,
    /// Raising-token deposit attempted outside the sale window.
    NotSaleTime = 11,
    /// Harvest attempted before the sale closes.
    NotHarvestTime = 12,
    /// Admin parameter update attempted once the sale has opened.
    SaleAlreadyStarted = 13,

    // ── Collateral gate ──────────────────────────────────────────
    /// Caller's collateral-token balance is below the required stake.
    InsufficientCollateral = 20,
    /// Caller already staked collateral; a single stake is allowed.
    AlreadyStaked = 21,
    /// Operation requires a prior collateral stake.
    CollateralRequired = 22,

    // ── Settlement ───────────────────────────────────────────────
    /// Caller already harvested; harvest is a one-shot action.
    AlreadyClaimed = 30,
    /// Admin withdrawal exceeds the contract's token balance.
    InsufficientFunds = 31,

    /// Amount arithmetic overflowed i128.
    Overflow = 40,
}
