//! Balance and allowance transitions shared by the contract entry points.
//!
//! Every function validates before its first storage write, so a returned
//! error leaves the ledger as it was.

use soroban_sdk::{Address, Env};

use crate::{
    errors::TokenError,
    storage::{
        get_total_supply, is_initialized, read_allowance, read_balance, set_total_supply,
        write_allowance, write_balance,
    },
};

pub fn ensure_initialized(env: &Env) -> Result<(), TokenError> {
    if !is_initialized(env) {
        return Err(TokenError::NotInitialized);
    }
    Ok(())
}

pub fn ensure_non_negative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

/// Moves `amount` from `from` to `to`.
///
/// Zero amounts and self-transfers are valid and write nothing.
pub fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    if amount == 0 || from == to {
        return Ok(());
    }

    let to_balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    write_balance(env, from, from_balance - amount);
    write_balance(env, to, to_balance);
    Ok(())
}

/// Credits `amount` to `to` and grows the total supply by the same amount.
pub fn mint_balance(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    let balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    set_total_supply(env, supply);
    write_balance(env, to, balance);
    Ok(())
}

/// Returns the allowance left after `spender` spends `amount` of `from`'s
/// funds. Nothing is written; the caller commits the result once the
/// balance move has succeeded.
pub fn remaining_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<i128, TokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(allowance - amount)
}

pub fn add_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    delta: i128,
) -> Result<i128, TokenError> {
    let allowance = read_allowance(env, from, spender)
        .checked_add(delta)
        .ok_or(TokenError::Overflow)?;
    write_allowance(env, from, spender, allowance);
    Ok(allowance)
}

pub fn sub_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    delta: i128,
) -> Result<i128, TokenError> {
    let current = read_allowance(env, from, spender);
    if delta > current {
        return Err(TokenError::AllowanceUnderflow);
    }
    let allowance = current - delta;
    write_allowance(env, from, spender, allowance);
    Ok(allowance)
}
