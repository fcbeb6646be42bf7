#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod config;
mod errors;
mod events;
mod films;
mod ledger;
mod ownable;
mod storage;

#[cfg(test)]
mod test;

pub use errors::TokenError;
pub use storage::{Film, Genre};

use config::{TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};
use events::TokenEvents;
use ledger::{ensure_initialized, ensure_non_negative};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use storage::TokenMetadata;

#[contract]
pub struct EmeraldToken;

#[contractimpl]
impl EmeraldToken {
    /// Creates the ledger: stores the metadata, makes `owner` the owner and
    /// credits it with the whole `initial_supply`.
    pub fn initialize(env: Env, owner: Address, initial_supply: i128) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        owner.require_auth();
        ensure_non_negative(initial_supply)?;

        storage::set_metadata(
            &env,
            &TokenMetadata {
                decimals: TOKEN_DECIMALS,
                name: String::from_str(&env, TOKEN_NAME),
                symbol: String::from_str(&env, TOKEN_SYMBOL),
            },
        );
        storage::set_owner(&env, &owner);
        storage::set_total_supply(&env, initial_supply);
        storage::write_balance(&env, &owner, initial_supply);
        storage::extend_instance_ttl(&env);

        TokenEvents::mint(&env, &owner, &owner, initial_supply);
        log!(&env, "initialized: owner {}, supply {}", owner, initial_supply);
        Ok(())
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Self::metadata(&env).map(|m| m.decimals)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &from, &spender)
    }

    /// `None` once ownership has been renounced.
    pub fn owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        ensure_initialized(&env)?;
        ensure_non_negative(amount)?;

        ledger::move_balance(&env, &from, &to, amount)?;
        storage::extend_instance_ttl(&env);
        TokenEvents::transfer(&env, &from, &to, amount);
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// exactly `amount` of the allowance `from` granted to `spender`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        ensure_initialized(&env)?;
        ensure_non_negative(amount)?;

        let remaining = ledger::remaining_allowance(&env, &from, &spender, amount)?;
        ledger::move_balance(&env, &from, &to, amount)?;
        if amount > 0 {
            storage::write_allowance(&env, &from, &spender, remaining);
        }
        storage::extend_instance_ttl(&env);
        TokenEvents::transfer(&env, &from, &to, amount);
        Ok(())
    }

    /// Sets the allowance to exactly `amount`, replacing any previous value.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        from.require_auth();
        ensure_initialized(&env)?;
        ensure_non_negative(amount)?;

        storage::write_allowance(&env, &from, &spender, amount);
        storage::extend_instance_ttl(&env);
        TokenEvents::approve(&env, &from, &spender, amount);
        Ok(())
    }

    pub fn increase_allowance(
        env: Env,
        from: Address,
        spender: Address,
        delta: i128,
    ) -> Result<(), TokenError> {
        from.require_auth();
        ensure_initialized(&env)?;
        ensure_non_negative(delta)?;

        let allowance = ledger::add_allowance(&env, &from, &spender, delta)?;
        storage::extend_instance_ttl(&env);
        TokenEvents::approve(&env, &from, &spender, allowance);
        Ok(())
    }

    pub fn decrease_allowance(
        env: Env,
        from: Address,
        spender: Address,
        delta: i128,
    ) -> Result<(), TokenError> {
        from.require_auth();
        ensure_initialized(&env)?;
        ensure_non_negative(delta)?;

        let allowance = ledger::sub_allowance(&env, &from, &spender, delta)?;
        storage::extend_instance_ttl(&env);
        TokenEvents::approve(&env, &from, &spender, allowance);
        Ok(())
    }

    /// Owner-only supply expansion.
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        let owner = ownable::only_owner(&env, &caller)?;
        ensure_non_negative(amount)?;

        ledger::mint_balance(&env, &to, amount)?;
        storage::extend_instance_ttl(&env);
        TokenEvents::mint(&env, &owner, &to, amount);
        log!(&env, "minted {} to {}", amount, to);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        let previous = ownable::only_owner(&env, &caller)?;

        storage::set_owner(&env, &new_owner);
        storage::extend_instance_ttl(&env);
        TokenEvents::ownership_transferred(&env, &previous, &new_owner);
        log!(&env, "ownership transferred: {} -> {}", previous, new_owner);
        Ok(())
    }

    /// Leaves the ledger without an owner. Minting is impossible afterwards.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        let previous = ownable::only_owner(&env, &caller)?;

        storage::remove_owner(&env);
        storage::extend_instance_ttl(&env);
        TokenEvents::ownership_renounced(&env, &previous);
        log!(&env, "ownership renounced by {}", previous);
        Ok(())
    }

    /// Owner-only: registers a film under its title.
    pub fn add_film(
        env: Env,
        caller: Address,
        title: String,
        year: u32,
        genre: Genre,
    ) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        ownable::only_owner(&env, &caller)?;

        let film = Film { title, year, genre };
        films::add(&env, &film)?;
        storage::extend_instance_ttl(&env);
        TokenEvents::film_added(&env, &film);
        Ok(())
    }

    /// Owner-only: removes the film registered under `title`.
    pub fn delete_film(env: Env, caller: Address, title: String) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        ownable::only_owner(&env, &caller)?;

        films::delete(&env, &title)?;
        storage::extend_instance_ttl(&env);
        TokenEvents::film_deleted(&env, &title);
        Ok(())
    }

    pub fn film(env: Env, title: String) -> Option<Film> {
        storage::read_film(&env, &title)
    }
}

impl EmeraldToken {
    fn metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
        storage::get_metadata(env).ok_or(TokenError::NotInitialized)
    }
}
