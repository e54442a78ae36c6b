#![no_std]

//! Initial Farm Offering with a collateral-staking precondition
//!
//! A fixed-window token sale over three external token ledgers. Participants
//! must stake a fixed collateral amount before they may subscribe with the
//! raising token; once the sale window closes, `harvest` settles everything in
//! one shot: the collateral comes back, the proportional offering-token
//! entitlement is paid out, and any raising-token excess beyond the cap share
//! is refunded.
//!
//! The clock is the ledger sequence number. A sale is `NotStarted` below
//! `start_ledger`, `Open` within `[start_ledger, end_ledger]`, and `Closed`
//! from `end_ledger` onward. Collateral may be staked from `Open` onward,
//! raising-token deposits are accepted only while `Open`, and harvest (plus
//! the admin's final withdrawal) only once `Closed`.

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use shared_utils::{math, time};

mod errors;
mod events;
mod storage;

pub use errors::IfoError;
pub use storage::{Config, UserRecord};

/// Allocation shares are tracked in parts per million of the raised total.
pub const ALLOCATION_PRECISION: i128 = 1_000_000;

#[contract]
pub struct IfoContract;

#[contractimpl]
impl IfoContract {
    /// Sets up the sale. Callable once; parameter order follows the original
    /// offering deployments.
    pub fn initialize(
        env: Env,
        raising_token: Address,
        offering_token: Address,
        start_ledger: u32,
        end_ledger: u32,
        offering_amount: i128,
        raising_amount: i128,
        admin: Address,
        collateral_token: Address,
        required_collateral: i128,
    ) -> Result<(), IfoError> {
        if storage::has_config(&env) {
            return Err(IfoError::AlreadyInitialized);
        }
        if start_ledger >= end_ledger {
            return Err(IfoError::InvalidSaleWindow);
        }
        if offering_amount <= 0 || raising_amount <= 0 || required_collateral <= 0 {
            return Err(IfoError::InvalidAmount);
        }

        let config = Config {
            raising_token,
            offering_token,
            collateral_token,
            start_ledger,
            end_ledger,
            offering_amount,
            raising_amount,
            required_collateral,
            admin: admin.clone(),
        };
        storage::set_config(&env, &config);
        storage::set_total_raised(&env, 0);
        storage::extend_instance_ttl(&env);

        events::initialized(&env, &admin, offering_amount, raising_amount);
        Ok(())
    }

    /// Stakes the fixed collateral amount for `user`. Allowed from the sale's
    /// start ledger onward, at most once per address.
    pub fn deposit_collateral(env: Env, user: Address) -> Result<(), IfoError> {
        user.require_auth();
        let config = storage::get_config(&env)?;

        if !time::has_started(&env, config.start_ledger) {
            return Err(IfoError::SaleNotStarted);
        }

        let mut record = storage::get_user(&env, &user);
        if record.has_collateral {
            return Err(IfoError::AlreadyStaked);
        }

        let collateral = token::Client::new(&env, &config.collateral_token);
        if collateral.balance(&user) < config.required_collateral {
            return Err(IfoError::InsufficientCollateral);
        }
        collateral.transfer(
            &user,
            &env.current_contract_address(),
            &config.required_collateral,
        );

        record.has_collateral = true;
        record.collateral = config.required_collateral;
        storage::set_user(&env, &user, &record);
        storage::extend_instance_ttl(&env);

        events::collateral_deposited(&env, &user, config.required_collateral);
        Ok(())
    }

    /// Subscribes `amount` of the raising token for `user`. Requires a prior
    /// collateral stake and an open sale window.
    pub fn deposit(env: Env, user: Address, amount: i128) -> Result<(), IfoError> {
        user.require_auth();
        let config = storage::get_config(&env)?;

        let mut record = storage::get_user(&env, &user);
        if !record.has_collateral {
            return Err(IfoError::CollateralRequired);
        }
        if !time::window_contains(&env, config.start_ledger, config.end_ledger) {
            return Err(IfoError::NotSaleTime);
        }
        if amount <= 0 {
            return Err(IfoError::InvalidAmount);
        }

        token::Client::new(&env, &config.raising_token).transfer(
            &user,
            &env.current_contract_address(),
            &amount,
        );

        record.amount = record.amount.checked_add(amount).ok_or(IfoError::Overflow)?;
        storage::set_user(&env, &user, &record);

        let total = storage::get_total_raised(&env)
            .checked_add(amount)
            .ok_or(IfoError::Overflow)?;
        storage::set_total_raised(&env, total);
        storage::extend_instance_ttl(&env);

        events::deposited(&env, &user, amount, total);
        Ok(())
    }

    /// Settles `user` after the sale closes: returns the collateral, pays the
    /// offering entitlement, refunds any raising-token excess. One shot:
    /// `claimed` flips true and locks.
    pub fn harvest(env: Env, user: Address) -> Result<(), IfoError> {
        user.require_auth();
        let config = storage::get_config(&env)?;

        let mut record = storage::get_user(&env, &user);
        if !record.has_collateral {
            return Err(IfoError::CollateralRequired);
        }
        if !time::has_ended(&env, config.end_ledger) {
            return Err(IfoError::NotHarvestTime);
        }
        if record.claimed {
            return Err(IfoError::AlreadyClaimed);
        }

        let total_raised = storage::get_total_raised(&env);
        let (offering_due, refund_due) = entitlement(&config, total_raised, record.amount)?;
        let contract = env.current_contract_address();

        token::Client::new(&env, &config.collateral_token).transfer(
            &contract,
            &user,
            &record.collateral,
        );
        if offering_due > 0 {
            token::Client::new(&env, &config.offering_token).transfer(
                &contract,
                &user,
                &offering_due,
            );
        }
        if refund_due > 0 {
            token::Client::new(&env, &config.raising_token).transfer(
                &contract,
                &user,
                &refund_due,
            );
        }

        record.claimed = true;
        storage::set_user(&env, &user, &record);

        events::harvested(&env, &user, offering_due, refund_due, record.collateral);
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Whether `user` has staked collateral. Pure read.
    pub fn has_collateral(env: Env, user: Address) -> bool {
        storage::get_user(&env, &user).has_collateral
    }

    /// `user`'s share of the raised total, in parts per million.
    pub fn get_user_allocation(env: Env, user: Address) -> Result<i128, IfoError> {
        let record = storage::get_user(&env, &user);
        let total_raised = storage::get_total_raised(&env);
        if record.amount == 0 || total_raised == 0 {
            return Ok(0);
        }
        math::mul_div_floor(record.amount, ALLOCATION_PRECISION, total_raised)
            .ok_or(IfoError::Overflow)
    }

    /// What a harvest would pay `user` right now: (offering tokens due,
    /// raising tokens refunded).
    pub fn get_user_amount(env: Env, user: Address) -> Result<(i128, i128), IfoError> {
        let config = storage::get_config(&env)?;
        let record = storage::get_user(&env, &user);
        entitlement(&config, storage::get_total_raised(&env), record.amount)
    }

    pub fn get_user(env: Env, user: Address) -> UserRecord {
        storage::get_user(&env, &user)
    }

    pub fn total_raised(env: Env) -> i128 {
        storage::get_total_raised(&env)
    }

    pub fn get_config(env: Env) -> Result<Config, IfoError> {
        storage::get_config(&env)
    }

    // ── Admin ────────────────────────────────────────────────────

    /// Retunes the offering amount. Admin only, and only before the sale
    /// opens.
    pub fn set_offering_amount(env: Env, amount: i128) -> Result<(), IfoError> {
        let mut config = storage::get_config(&env)?;
        config.admin.require_auth();
        if time::has_started(&env, config.start_ledger) {
            return Err(IfoError::SaleAlreadyStarted);
        }
        if amount <= 0 {
            return Err(IfoError::InvalidAmount);
        }
        config.offering_amount = amount;
        storage::set_config(&env, &config);
        events::amounts_updated(&env, &config.admin, config.offering_amount, config.raising_amount);
        Ok(())
    }

    /// Retunes the raising cap. Admin only, and only before the sale opens.
    pub fn set_raising_amount(env: Env, amount: i128) -> Result<(), IfoError> {
        let mut config = storage::get_config(&env)?;
        config.admin.require_auth();
        if time::has_started(&env, config.start_ledger) {
            return Err(IfoError::SaleAlreadyStarted);
        }
        if amount <= 0 {
            return Err(IfoError::InvalidAmount);
        }
        config.raising_amount = amount;
        storage::set_config(&env, &config);
        events::amounts_updated(&env, &config.admin, config.offering_amount, config.raising_amount);
        Ok(())
    }

    /// Sweeps raised and unsold tokens to the admin once the sale is closed,
    /// bounded by the contract's actual balances.
    pub fn final_withdraw(
        env: Env,
        raise_amount: i128,
        offer_amount: i128,
    ) -> Result<(), IfoError> {
        let config = storage::get_config(&env)?;
        config.admin.require_auth();

        if !time::has_ended(&env, config.end_ledger) {
            return Err(IfoError::NotHarvestTime);
        }
        if raise_amount < 0 || offer_amount < 0 {
            return Err(IfoError::InvalidAmount);
        }

        let contract = env.current_contract_address();
        let raising = token::Client::new(&env, &config.raising_token);
        let offering = token::Client::new(&env, &config.offering_token);
        if raise_amount > raising.balance(&contract) || offer_amount > offering.balance(&contract)
        {
            return Err(IfoError::InsufficientFunds);
        }

        if raise_amount > 0 {
            raising.transfer(&contract, &config.admin, &raise_amount);
        }
        if offer_amount > 0 {
            offering.transfer(&contract, &config.admin, &offer_amount);
        }

        events::final_withdrawn(&env, &config.admin, raise_amount, offer_amount);
        Ok(())
    }
}

/// Harvest math. Undersubscribed sales pay `amount * offering / raising` with
/// no refund; oversubscribed sales pay the ppm share of the offering and
/// refund the contribution beyond the cap share.
fn entitlement(
    config: &Config,
    total_raised: i128,
    amount: i128,
) -> Result<(i128, i128), IfoError> {
    if amount == 0 {
        return Ok((0, 0));
    }

    if total_raised > config.raising_amount {
        let allocation = math::mul_div_floor(amount, ALLOCATION_PRECISION, total_raised)
            .ok_or(IfoError::Overflow)?;
        let offering_due =
            math::ppm_share(config.offering_amount, allocation).ok_or(IfoError::Overflow)?;
        let cap_share =
            math::ppm_share(config.raising_amount, allocation).ok_or(IfoError::Overflow)?;
        // cap_share <= raising * amount / total < amount, so the refund
        // cannot go negative
        Ok((offering_due, amount - cap_share))
    } else {
        let offering_due =
            math::mul_div_floor(amount, config.offering_amount, config.raising_amount)
                .ok_or(IfoError::Overflow)?;
        Ok((offering_due, 0))
    }
}
