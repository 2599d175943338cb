use crate::tests::sut::vacant_contract;
use crate::*;

#[test]
fn should_parse_environment_names() {
    assert_eq!("mainnet".parse::<Environment>().unwrap(), Environment::Mainnet);
    assert_eq!("Testnet".parse::<Environment>().unwrap(), Environment::Testnet);
    assert_eq!(Environment::Testnet.to_string(), "testnet");
}

#[test]
fn should_reject_unknown_environment() {
    let err = "futurenet".parse::<Environment>().unwrap_err();

    assert!(matches!(err, ScenarioError::UnknownEnvironment(name) if name == "futurenet"));
}

#[test]
fn should_share_token_and_provider_across_environments() {
    let mainnet = Environment::Mainnet.addresses();
    let testnet = Environment::Testnet.addresses();

    assert_eq!(mainnet.token, testnet.token);
    assert_eq!(mainnet.pool_addresses_provider, testnet.pool_addresses_provider);
    assert_ne!(mainnet.whale, testnet.whale);

    mainnet.validate().unwrap();
    testnet.validate().unwrap();
}

#[test]
fn should_use_fixed_amounts() {
    let config = ScenarioConfig::for_environment(Environment::Mainnet);

    assert_eq!(config.funding_units, 2_000);
    assert_eq!(config.loan_amount, 1_000);
    assert_eq!(config.funding_amount(18).unwrap(), 2_000 * 10i128.pow(18));
    assert_eq!(config.funding_amount(0).unwrap(), 2_000);
}

#[test]
fn should_fail_on_funding_overflow() {
    let config = ScenarioConfig::for_environment(Environment::Mainnet);

    assert!(matches!(
        config.funding_amount(40),
        Err(ScenarioError::AmountOverflow)
    ));
}

#[test]
fn should_reject_misplaced_strkeys() {
    let mut addresses = Environment::Mainnet.addresses();
    addresses.whale = vacant_contract();

    assert!(matches!(
        addresses.validate(),
        Err(ScenarioError::InvalidAddress { address, .. }) if address == addresses.whale
    ));

    let mut addresses = Environment::Mainnet.addresses();
    addresses.token = "not-a-strkey".to_string();

    assert!(matches!(
        addresses.validate(),
        Err(ScenarioError::InvalidAddress { .. })
    ));
}
