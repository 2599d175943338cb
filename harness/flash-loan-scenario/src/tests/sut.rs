use crate::{Environment, ForkSeed, ScenarioConfig, SimulatedFork};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn launch(environment: Environment, seed: ForkSeed) -> (ScenarioConfig, SimulatedFork) {
    init_logger();

    let config = ScenarioConfig::for_environment(environment);
    let fork = SimulatedFork::launch(&config, seed).unwrap();

    (config, fork)
}

/// Contract strkey nothing is deployed at on a fresh fork.
pub fn vacant_contract() -> String {
    stellar_strkey::Contract([7u8; 32]).to_string()
}
