use soroban_sdk::{contracttype, Address, Env};

use crate::error::Error;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    AddressesProvider,
    Pool,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_addresses_provider(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::AddressesProvider)
}

pub fn write_addresses_provider(env: &Env, addresses_provider: &Address) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::AddressesProvider, addresses_provider);
}

pub fn read_addresses_provider(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::AddressesProvider)
        .ok_or(Error::Uninitialized)
}

pub fn write_pool(env: &Env, pool: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Pool, pool);
}

pub fn read_pool(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(Error::Uninitialized)
}
