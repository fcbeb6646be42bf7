use soroban_sdk::{contracttype, Address, Env, String};

const DAY_IN_LEDGERS: u32 = 17280; // ~1 day in 5s ledgers

const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

const ENTRY_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Genre {
    Action = 0,
    Comedy = 1,
    Drama = 2,
    Horror = 3,
    SciFi = 4,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Film {
    pub title: String,
    pub year: u32,
    pub genre: Genre,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Balance(Address),
    Allowance(Address, Address),
    TotalSupply,
    Metadata,
    Owner,
    Film(String),
}

/// Total supply is written exactly once by `initialize`, so its presence
/// marks an initialized ledger.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::TotalSupply)
}

pub fn get_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().instance().get(&DataKey::Metadata)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn remove_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::Owner);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            extend_entry_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    extend_entry_ttl(env, &key);
}

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(amount) => {
            extend_entry_ttl(env, &key);
            amount
        }
        None => 0,
    }
}

/// A zero allowance is stored as an absent entry.
pub fn write_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_entry_ttl(env, &key);
}

pub fn read_film(env: &Env, title: &String) -> Option<Film> {
    let key = DataKey::Film(title.clone());
    let film = env.storage().persistent().get::<DataKey, Film>(&key);
    if film.is_some() {
        extend_entry_ttl(env, &key);
    }
    film
}

pub fn write_film(env: &Env, film: &Film) {
    let key = DataKey::Film(film.title.clone());
    env.storage().persistent().set(&key, film);
    extend_entry_ttl(env, &key);
}

pub fn remove_film(env: &Env, title: &String) {
    env.storage().persistent().remove(&DataKey::Film(title.clone()));
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_entry_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}
