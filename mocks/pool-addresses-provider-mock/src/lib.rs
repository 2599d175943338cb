#![deny(warnings)]
#![no_std]

use pool_addresses_provider_interface::{Error, PoolAddressesProviderTrait};
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env, Symbol};

use crate::storage::*;

mod storage;
#[cfg(test)]
mod test;

#[contractclient(name = "PoolAddressesProviderAdminClient")]
pub trait PoolAddressesProviderAdminTrait {
    fn initialize(env: Env, admin: Address, pool: Address) -> Result<(), Error>;

    fn set_pool_impl(env: Env, pool: Address) -> Result<(), Error>;
}

#[contract]
pub struct PoolAddressesProviderMock;

#[contractimpl]
impl PoolAddressesProviderTrait for PoolAddressesProviderMock {
    fn get_pool(env: Env) -> Result<Address, Error> {
        read_pool(&env)
    }
}

#[contractimpl]
impl PoolAddressesProviderAdminTrait for PoolAddressesProviderMock {
    fn initialize(env: Env, admin: Address, pool: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }

        write_admin(&env, &admin);
        write_pool(&env, &pool);

        Ok(())
    }

    fn set_pool_impl(env: Env, pool: Address) -> Result<(), Error> {
        read_admin(&env)?.require_auth();

        let old_pool = read_pool(&env)?;
        write_pool(&env, &pool);

        env.events()
            .publish((Symbol::new(&env, "pool_updated"),), (old_pool, pool));

        Ok(())
    }
}
