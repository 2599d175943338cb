use pool_addresses_provider_interface::{Error, PoolAddressesProviderClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use crate::{PoolAddressesProviderAdminClient, PoolAddressesProviderMock};

fn create_provider<'a>(
    env: &Env,
) -> (
    PoolAddressesProviderClient<'a>,
    PoolAddressesProviderAdminClient<'a>,
) {
    let address = env.register_contract(None, PoolAddressesProviderMock);

    (
        PoolAddressesProviderClient::new(env, &address),
        PoolAddressesProviderAdminClient::new(env, &address),
    )
}

#[test]
fn should_fail_get_pool_when_uninitialized() {
    let env = Env::default();

    let (provider, _) = create_provider(&env);

    assert_eq!(
        provider.try_get_pool().unwrap_err().unwrap(),
        Error::Uninitialized
    );
}

#[test]
fn should_return_pool() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let pool = Address::generate(&env);

    let (provider, provider_admin) = create_provider(&env);
    provider_admin.initialize(&admin, &pool);

    assert_eq!(provider.get_pool(), pool);
    assert_eq!(
        provider_admin.try_initialize(&admin, &pool).unwrap_err().unwrap(),
        Error::AlreadyInitialized
    );
}

#[test]
fn should_require_admin_to_set_pool() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let pool = Address::generate(&env);
    let new_pool = Address::generate(&env);

    let (provider, provider_admin) = create_provider(&env);
    provider_admin.initialize(&admin, &pool);

    assert!(provider_admin.try_set_pool_impl(&new_pool).is_err());
    assert_eq!(provider.get_pool(), pool);

    env.mock_all_auths();
    provider_admin.set_pool_impl(&new_pool);

    assert_eq!(provider.get_pool(), new_pool);
}
