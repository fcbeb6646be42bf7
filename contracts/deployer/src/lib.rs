#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod storage;


pub use errors::DeployerError;

use events::DeployerEvents;
use soroban_sdk::{contract, contractclient, contractimpl, log, Address, BytesN, Env};

/// One whole token at 18 decimals.
const ONE_TOKEN: i128 = 1_000_000_000_000_000_000;

#[contractclient(name = "TokenClient")]
pub trait TokenInterface {
    fn initialize(env: Env, owner: Address, initial_supply: i128);
}

#[contract]
pub struct Deployer;

#[contractimpl]
impl Deployer {
    /// Deploys the token WASM at the address derived from `salt` and
    /// initializes it, crediting `initial_supply` to `deployer` as owner.
    pub fn deploy(
        env: Env,
        deployer: Address,
        wasm_hash: BytesN<32>,
        salt: BytesN<32>,
        initial_supply: i128,
    ) -> Result<Address, DeployerError> {
        deployer.require_auth();

        if initial_supply < 0 {
            return Err(DeployerError::NegativeSupply);
        }
        if storage::get_deployment(&env, &salt).is_some() {
            return Err(DeployerError::AlreadyDeployed);
        }
        let count = storage::get_deployment_count(&env)
            .checked_add(1)
            .ok_or(DeployerError::Overflow)?;

        log!(&env, "address deploying the contract: {}", deployer);

        // 1. Deploy token
        let token = env
            .deployer()
            .with_current_contract(salt.clone())
            .deploy(wasm_hash);

        // 2. Initialize token
        TokenClient::new(&env, &token).initialize(&deployer, &initial_supply);

        // 3. Record deployment
        storage::set_deployment(&env, &salt, &token);
        storage::set_deployment_count(&env, count);
        storage::extend_instance_ttl(&env);

        // 4. Emit event
        DeployerEvents::deployed(&env, &deployer, &token, initial_supply);
        log!(&env, "token contract address: {}", token);

        Ok(token)
    }

    /// The address `deploy` would use for `salt`.
    pub fn deployed_address(env: Env, salt: BytesN<32>) -> Address {
        env.deployer().with_current_contract(salt).deployed_address()
    }

    pub fn deployment(env: Env, salt: BytesN<32>) -> Option<Address> {
        storage::get_deployment(&env, &salt)
    }

    pub fn deployment_count(env: Env) -> u32 {
        storage::get_deployment_count(&env)
    }

    /// Converts whole token `units` to base units at 18 decimals.
    pub fn scaled_supply(_env: Env, units: i128) -> Result<i128, DeployerError> {
        if units < 0 {
            return Err(DeployerError::NegativeSupply);
        }
        units.checked_mul(ONE_TOKEN).ok_or(DeployerError::Overflow)
    }
}
