use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DeployerError {
    NegativeSupply = 500,
    AlreadyDeployed = 501,
    Overflow = 502,
}
