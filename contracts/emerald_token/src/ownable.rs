use soroban_sdk::{Address, Env};

use crate::{errors::TokenError, storage::get_owner};

/// Authenticates `caller` and checks it is the current owner.
///
/// Returns the owner on success. Fails with `NotOwner` for any other
/// caller, including every caller once ownership has been renounced.
pub fn only_owner(env: &Env, caller: &Address) -> Result<Address, TokenError> {
    caller.require_auth();
    match get_owner(env) {
        Some(owner) if owner == *caller => Ok(owner),
        _ => Err(TokenError::NotOwner),
    }
}
