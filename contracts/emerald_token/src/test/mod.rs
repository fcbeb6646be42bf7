#![cfg(test)]


use crate::{EmeraldToken, EmeraldTokenClient, TokenError};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

pub(crate) const INITIAL_SUPPLY: i128 = 100_000;

/// Registers the token and initializes it for a fresh `owner`, the way the
/// deployment flow does. Returns `(env, client, owner, alice, bob)`.
pub(crate) fn setup_token() -> (Env, EmeraldTokenClient<'static>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register_contract(None, EmeraldToken);
    let client = EmeraldTokenClient::new(&env, &token_id);

    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.initialize(&owner, &INITIAL_SUPPLY);

    (env, client, owner, alice, bob)
}

// ---------- Correct setup ----------

mod setup_tests {
    use super::*;

    #[test]
    fn test_named_emerald() {
        let (env, client, _, _, _) = setup_token();
        assert_eq!(client.name(), String::from_str(&env, "Emerald"));
    }

    #[test]
    fn test_symbol_and_decimals() {
        let (env, client, _, _, _) = setup_token();
        assert_eq!(client.symbol(), String::from_str(&env, "EMR"));
        assert_eq!(client.decimals(), 18);
    }

    #[test]
    fn test_initial_supply() {
        let (_env, client, _, _, _) = setup_token();
        assert_eq!(client.total_supply(), INITIAL_SUPPLY);
    }

    #[test]
    fn test_owner_holds_whole_supply() {
        let (_env, client, owner, alice, bob) = setup_token();
        assert_eq!(client.balance(&owner), INITIAL_SUPPLY);
        assert_eq!(client.balance(&alice), 0);
        assert_eq!(client.balance(&bob), 0);
        assert_eq!(client.owner(), Some(owner));
    }

    #[test]
    fn test_double_initialize_fails() {
        let (_env, client, _, alice, _) = setup_token();

        let result = client.try_initialize(&alice, &1_000);
        assert_eq!(result, Err(Ok(TokenError::AlreadyInitialized)));
        assert_eq!(client.total_supply(), INITIAL_SUPPLY);
        assert_eq!(client.balance(&alice), 0);
    }

    #[test]
    fn test_negative_initial_supply_fails() {
        let env = Env::default();
        env.mock_all_auths();
        let client = EmeraldTokenClient::new(&env, &env.register_contract(None, EmeraldToken));
        let owner = Address::generate(&env);

        let result = client.try_initialize(&owner, &-1);
        assert_eq!(result, Err(Ok(TokenError::NegativeAmount)));
        assert_eq!(client.owner(), None);
    }

    #[test]
    fn test_zero_initial_supply() {
        let env = Env::default();
        env.mock_all_auths();
        let client = EmeraldTokenClient::new(&env, &env.register_contract(None, EmeraldToken));
        let owner = Address::generate(&env);

        client.initialize(&owner, &0);
        assert_eq!(client.total_supply(), 0);
        assert_eq!(client.balance(&owner), 0);
    }

    #[test]
    fn test_uninitialized_ledger() {
        let env = Env::default();
        env.mock_all_auths();
        let client = EmeraldTokenClient::new(&env, &env.register_contract(None, EmeraldToken));
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        assert_eq!(client.total_supply(), 0);
        assert_eq!(client.balance(&alice), 0);
        assert_eq!(client.owner(), None);
        assert_eq!(client.try_name(), Err(Ok(TokenError::NotInitialized)));
        assert_eq!(client.try_transfer(&alice, &bob, &0), Err(Ok(TokenError::NotInitialized)));
        assert_eq!(client.try_approve(&alice, &bob, &10), Err(Ok(TokenError::NotInitialized)));
        assert_eq!(client.try_mint(&alice, &bob, &10), Err(Ok(TokenError::NotInitialized)));
    }
}

// ---------- Transfers ----------

mod transfer_tests {
    use super::*;

    #[test]
    fn test_owner_transfers_to_alice() {
        let (_env, client, owner, alice, _) = setup_token();

        assert_eq!(client.balance(&alice), 0);
        client.transfer(&owner, &alice, &1_000);

        assert_eq!(client.balance(&alice), 1_000);
        assert_eq!(client.balance(&owner), 99_000);
        assert_eq!(client.total_supply(), INITIAL_SUPPLY);
    }

    #[test]
    fn test_owner_to_alice_then_alice_to_bob() {
        let (_env, client, owner, alice, bob) = setup_token();

        client.transfer(&owner, &alice, &1_000);
        assert_eq!(client.balance(&bob), 0);
        client.transfer(&alice, &bob, &1_000);

        assert_eq!(client.balance(&bob), 1_000);
        assert_eq!(client.balance(&alice), 0);
        assert_eq!(client.balance(&owner), 99_000);
    }

    #[test]
    fn test_transfer_more_than_balance_fails() {
        let (_env, client, owner, alice, _) = setup_token();

        let result = client.try_transfer(&owner, &alice, &(INITIAL_SUPPLY + 1));
        assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));

        assert_eq!(client.balance(&owner), INITIAL_SUPPLY);
        assert_eq!(client.balance(&alice), 0);
    }

    #[test]
    fn test_transfer_from_empty_account_fails() {
        let (_env, client, _, alice, bob) = setup_token();

        let result = client.try_transfer(&alice, &bob, &1);
        assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    }

    #[test]
    fn test_transfer_entire_balance() {
        let (_env, client, owner, alice, _) = setup_token();

        client.transfer(&owner, &alice, &INITIAL_SUPPLY);
        assert_eq!(client.balance(&owner), 0);
        assert_eq!(client.balance(&alice), INITIAL_SUPPLY);
    }

    #[test]
    fn test_zero_transfer_is_noop() {
        let (_env, client, owner, alice, bob) = setup_token();

        client.transfer(&owner, &alice, &0);
        client.transfer(&bob, &alice, &0);

        assert_eq!(client.balance(&owner), INITIAL_SUPPLY);
        assert_eq!(client.balance(&alice), 0);
        assert_eq!(client.balance(&bob), 0);
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let (_env, client, owner, _, _) = setup_token();

        client.transfer(&owner, &owner, &5_000);
        assert_eq!(client.balance(&owner), INITIAL_SUPPLY);

        let result = client.try_transfer(&owner, &owner, &(INITIAL_SUPPLY + 1));
        assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    }

    #[test]
    fn test_negative_transfer_fails() {
        let (_env, client, owner, alice, _) = setup_token();

        let result = client.try_transfer(&owner, &alice, &-1);
        assert_eq!(result, Err(Ok(TokenError::NegativeAmount)));
        assert_eq!(client.balance(&owner), INITIAL_SUPPLY);
        assert_eq!(client.balance(&alice), 0);
    }
}

// ---------- Minting ----------

mod mint_tests {
    use super::*;

    #[test]
    fn test_mint_only_for_owner() {
        let (_env, client, owner, alice, _) = setup_token();

        let result = client.try_mint(&alice, &alice, &1_000);
        assert_eq!(result, Err(Ok(TokenError::NotOwner)));

        assert_eq!(client.total_supply(), INITIAL_SUPPLY);
        assert_eq!(client.balance(&alice), 0);
        assert_eq!(client.balance(&owner), INITIAL_SUPPLY);
    }

    #[test]
    fn test_mint_increases_supply() {
        let (_env, client, owner, alice, bob) = setup_token();

        client.mint(&owner, &alice, &1_000);

        assert_eq!(client.total_supply(), INITIAL_SUPPLY + 1_000);
        assert_eq!(client.balance(&alice), 1_000);
        assert_eq!(client.balance(&bob), 0);
        assert_eq!(client.balance(&owner), INITIAL_SUPPLY);
    }

    #[test]
    fn test_owner_mints_to_self() {
        let (_env, client, owner, _, _) = setup_token();

        client.mint(&owner, &owner, &500);
        assert_eq!(client.balance(&owner), INITIAL_SUPPLY + 500);
        assert_eq!(client.total_supply(), INITIAL_SUPPLY + 500);
    }

    #[test]
    fn test_negative_mint_fails() {
        let (_env, client, owner, alice, _) = setup_token();

        let result = client.try_mint(&owner, &alice, &-5);
        assert_eq!(result, Err(Ok(TokenError::NegativeAmount)));
        assert_eq!(client.total_supply(), INITIAL_SUPPLY);
    }

    #[test]
    fn test_mint_overflow_fails() {
        let (_env, client, owner, alice, _) = setup_token();

        let result = client.try_mint(&owner, &alice, &i128::MAX);
        assert_eq!(result, Err(Ok(TokenError::Overflow)));
        assert_eq!(client.total_supply(), INITIAL_SUPPLY);
        assert_eq!(client.balance(&alice), 0);
    }
}
