use crate::tests::sut::{
    create_flash_loan_receiver_contract, init_pool, LIQUIDITY, RECEIVER_BALANCE,
};
use pool_interface::types::error::Error;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, Bytes, Env, IntoVal, Symbol};

#[test]
fn should_require_receiver_to_pay_premium() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);

    sut.pool.flash_loan_simple(
        &initiator,
        &sut.receiver.address,
        &sut.token.address,
        &1_000_000,
        &Bytes::new(&env),
        &0,
    );

    // 1_000_000 * 0.05%
    assert_eq!(sut.token.balance(&sut.pool.address), LIQUIDITY + 500);
    assert_eq!(
        sut.token.balance(&sut.receiver.address),
        RECEIVER_BALANCE - 500
    );
    assert_eq!(sut.token.balance(&sut.treasury), 0);
}

#[test]
fn should_round_premium_half_up() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);

    sut.pool.flash_loan_simple(
        &initiator,
        &sut.receiver.address,
        &sut.token.address,
        &1_000,
        &Bytes::new(&env),
        &0,
    );

    assert_eq!(
        sut.token.balance(&sut.receiver.address),
        RECEIVER_BALANCE - 1
    );
}

#[test]
fn should_send_protocol_share_to_treasury() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 4_000);
    let initiator = Address::generate(&env);

    sut.pool.flash_loan_simple(
        &initiator,
        &sut.receiver.address,
        &sut.token.address,
        &1_000_000,
        &Bytes::new(&env),
        &0,
    );

    assert_eq!(sut.token.balance(&sut.treasury), 200);
    assert_eq!(sut.token.balance(&sut.pool.address), LIQUIDITY + 300);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #310)")]
fn should_fail_when_receiver_returns_false() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);
    let receiver = create_flash_loan_receiver_contract(&env, &sut.pool.address, true);

    sut.pool.flash_loan_simple(
        &initiator,
        &receiver.address,
        &sut.token.address,
        &1_000_000,
        &Bytes::new(&env),
        &0,
    );
}

#[test]
fn should_fail_when_liquidity_is_insufficient() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);

    assert_eq!(
        sut.pool
            .try_flash_loan_simple(
                &initiator,
                &sut.receiver.address,
                &sut.token.address,
                &(LIQUIDITY + 1),
                &Bytes::new(&env),
                &0,
            )
            .unwrap_err()
            .unwrap(),
        Error::InsufficientLiquidity
    );

    assert_eq!(sut.token.balance(&sut.pool.address), LIQUIDITY);
    assert_eq!(sut.token.balance(&sut.receiver.address), RECEIVER_BALANCE);
}

#[test]
fn should_fail_when_receiver_cannot_pay_premium() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);
    let receiver = create_flash_loan_receiver_contract(&env, &sut.pool.address, false);

    assert!(sut
        .pool
        .try_flash_loan_simple(
            &initiator,
            &receiver.address,
            &sut.token.address,
            &1_000_000,
            &Bytes::new(&env),
            &0,
        )
        .is_err());

    assert_eq!(sut.token.balance(&sut.pool.address), LIQUIDITY);
    assert_eq!(sut.token.balance(&receiver.address), 0);
}

#[test]
fn should_fail_for_unknown_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);
    let unknown_asset = Address::generate(&env);

    assert_eq!(
        sut.pool
            .try_flash_loan_simple(
                &initiator,
                &sut.receiver.address,
                &unknown_asset,
                &1_000,
                &Bytes::new(&env),
                &0,
            )
            .unwrap_err()
            .unwrap(),
        Error::NoActiveReserve
    );
}

#[test]
fn should_fail_for_non_positive_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);

    assert_eq!(
        sut.pool
            .try_flash_loan_simple(
                &initiator,
                &sut.receiver.address,
                &sut.token.address,
                &0,
                &Bytes::new(&env),
                &0,
            )
            .unwrap_err()
            .unwrap(),
        Error::InvalidAmount
    );
}

#[test]
fn should_fail_when_paused() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);

    sut.pool.set_pause(&true);

    assert_eq!(
        sut.pool
            .try_flash_loan_simple(
                &initiator,
                &sut.receiver.address,
                &sut.token.address,
                &1_000,
                &Bytes::new(&env),
                &0,
            )
            .unwrap_err()
            .unwrap(),
        Error::Paused
    );
}

#[test]
fn should_require_initiator_auth() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);

    env.set_auths(&[]);

    assert!(sut
        .pool
        .try_flash_loan_simple(
            &initiator,
            &sut.receiver.address,
            &sut.token.address,
            &1_000,
            &Bytes::new(&env),
            &0,
        )
        .is_err());
    assert_eq!(sut.token.balance(&sut.pool.address), LIQUIDITY);
}

#[test]
fn should_report_available_liquidity() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);

    assert_eq!(sut.pool.available_liquidity(&sut.token.address), LIQUIDITY);

    sut.token_admin.mint(&sut.pool.address, &1_000);
    assert_eq!(
        sut.pool.available_liquidity(&sut.token.address),
        LIQUIDITY + 1_000
    );

    assert_eq!(
        sut.pool
            .try_available_liquidity(&Address::generate(&env))
            .unwrap_err()
            .unwrap(),
        Error::NoActiveReserve
    );
}

#[test]
fn should_emit_events() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env, 0);
    let initiator = Address::generate(&env);

    sut.pool.flash_loan_simple(
        &initiator,
        &sut.receiver.address,
        &sut.token.address,
        &1_000_000,
        &Bytes::new(&env),
        &7,
    );

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.pool.address.clone(),
                (
                    Symbol::new(&env, "flash_loan"),
                    &initiator,
                    &sut.receiver.address,
                    &sut.token.address
                )
                    .into_val(&env),
                (1_000_000i128, 500i128, 7u32).into_val(&env)
            ),
        ]
    );
}
