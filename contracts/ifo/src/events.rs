//! Event publication
//!
//! One short-symbol topic per state-changing operation, with the acting
//! address and the amounts moved as data.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

const EVENT_INIT: Symbol = symbol_short!("init");
const EVENT_COLLATERAL: Symbol = symbol_short!("col_dep");
const EVENT_DEPOSIT: Symbol = symbol_short!("deposit");
const EVENT_HARVEST: Symbol = symbol_short!("harvest");
const EVENT_FINAL_WD: Symbol = symbol_short!("final_wd");
const EVENT_CFG_SET: Symbol = symbol_short!("cfg_set");

pub fn initialized(env: &Env, admin: &Address, offering_amount: i128, raising_amount: i128) {
    env.events().publish(
        (EVENT_INIT, admin.clone()),
        (offering_amount, raising_amount),
    );
}

pub fn collateral_deposited(env: &Env, user: &Address, amount: i128) {
    env.events().publish((EVENT_COLLATERAL, user.clone()), amount);
}

pub fn deposited(env: &Env, user: &Address, amount: i128, total_raised: i128) {
    env.events()
        .publish((EVENT_DEPOSIT, user.clone()), (amount, total_raised));
}

pub fn harvested(env: &Env, user: &Address, offering: i128, refund: i128, collateral: i128) {
    env.events()
        .publish((EVENT_HARVEST, user.clone()), (offering, refund, collateral));
}

pub fn final_withdrawn(env: &Env, admin: &Address, raise_amount: i128, offer_amount: i128) {
    env.events()
        .publish((EVENT_FINAL_WD, admin.clone()), (raise_amount, offer_amount));
}

pub fn amounts_updated(env: &Env, admin: &Address, offering_amount: i128, raising_amount: i128) {
    env.events().publish(
        (EVENT_CFG_SET, admin.clone()),
        (offering_amount, raising_amount),
    );
}
