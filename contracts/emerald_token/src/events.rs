use soroban_sdk::{symbol_short, Address, Env, String};
use soroban_token_sdk::TokenUtils;

use crate::storage::Film;

pub struct TokenEvents;

impl TokenEvents {
    /// SEP-41 `transfer` event.
    ///
    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env).events().transfer(from.clone(), to.clone(), amount);
    }

    /// SEP-41 `mint` event. `owner` is the account that authorized the mint.
    ///
    /// Topics: `("mint", owner, to)`
    /// Data:   `amount`
    pub fn mint(env: &Env, owner: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env).events().mint(owner.clone(), to.clone(), amount);
    }

    /// Emitted whenever an allowance changes, carrying the resulting value.
    ///
    /// Topics: `("approve", from, spender)`
    /// Data:   `amount`
    ///
    /// Allowances here never expire, so the SEP-41 `expiration_ledger`
    /// field is omitted.
    pub fn approve(env: &Env, from: &Address, spender: &Address, amount: i128) {
        env.events().publish((symbol_short!("approve"), from, spender), amount);
    }

    /// Ownership moved to `new_owner`. Uses the SEP-41 `set_admin` shape.
    ///
    /// Topics: `("set_admin", previous_owner)`
    /// Data:   `new_owner`
    pub fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
        TokenUtils::new(env).events().set_admin(previous_owner.clone(), new_owner.clone());
    }

    pub fn ownership_renounced(env: &Env, previous_owner: &Address) {
        env.events().publish((symbol_short!("renounce"), previous_owner), ());
    }

    /// Topics: `("film_add",)`
    /// Data:   `(title, year, genre)`
    pub fn film_added(env: &Env, film: &Film) {
        env.events().publish(
            (symbol_short!("film_add"),),
            (film.title.clone(), film.year, film.genre),
        );
    }

    /// Topics: `("film_del",)`
    /// Data:   `title`
    pub fn film_deleted(env: &Env, title: &String) {
        env.events().publish((symbol_short!("film_del"),), title.clone());
    }
}
