use soroban_sdk::{symbol_short, Address, Env};

pub struct DeployerEvents;

impl DeployerEvents {
    /// Emits a `deployed` event once a token has been deployed and initialized.
    ///
    /// Topics: `("deployed", deployer)`
    /// Data:   `(token, initial_supply)`
    pub fn deployed(env: &Env, deployer: &Address, token: &Address, initial_supply: i128) {
        env.events()
            .publish((symbol_short!("deployed"), deployer), (token.clone(), initial_supply));
    }
}
