use crate::tests::sut::{create_pool_contract, init_pool, PREMIUM_TOTAL};
use pool_interface::types::error::Error;
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, Env, IntoVal};

#[test]
fn should_fail_second_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);

    assert_eq!(
        sut.pool
            .try_initialize(&sut.admin, &sut.treasury, &PREMIUM_TOTAL, &0)
            .unwrap_err()
            .unwrap(),
        Error::AlreadyInitialized
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #401)")]
fn should_fail_when_premium_exceeds_percentage_factor() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);

    create_pool_contract(&env, &admin, &treasury, 10_001);
}

#[test]
fn should_fail_init_reserve_second_time() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);

    assert_eq!(
        sut.pool
            .try_init_reserve(&sut.token.address)
            .unwrap_err()
            .unwrap(),
        Error::ReserveAlreadyInitialized
    );
}

#[test]
fn should_set_flash_loan_premium() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);

    assert_eq!(sut.pool.flash_loan_premium_total(), PREMIUM_TOTAL);
    assert_eq!(sut.pool.flash_loan_premium_to_protocol(), 0);

    sut.pool.set_flash_loan_premium(&9, &10_000);

    assert_eq!(sut.pool.flash_loan_premium_total(), 9);
    assert_eq!(sut.pool.flash_loan_premium_to_protocol(), 10_000);

    assert_eq!(
        sut.pool
            .try_set_flash_loan_premium(&10_001, &0)
            .unwrap_err()
            .unwrap(),
        Error::MustBeLtePercentageFactor
    );
}

#[test]
fn should_require_admin_to_pause() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    env.set_auths(&[]);

    assert!(sut.pool.try_set_pause(&true).is_err());
    assert!(!sut.pool.paused());

    sut.pool
        .mock_auths(&[MockAuth {
            address: &sut.admin,
            invoke: &MockAuthInvoke {
                contract: &sut.pool.address,
                fn_name: "set_pause",
                args: (true,).into_val(&env),
                sub_invokes: &[],
            },
        }])
        .set_pause(&true);

    assert!(sut.pool.paused());
}

#[test]
fn should_return_treasury() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);

    assert_eq!(sut.pool.treasury(), sut.treasury);
}
