use log::info;
use soroban_sdk::Address;

use crate::config::ScenarioConfig;
use crate::deployment::DeployedExample;
use crate::error::{settle, ScenarioError};
use crate::fork::SimulatedFork;

/// Outcome of a passing round trip.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub example: Address,
    pub funding_amount: i128,
    pub loan_amount: i128,
    /// Balance the receiver lost to the loan
    pub premium: i128,
    pub remaining_balance: i128,
}

pub struct FlashLoanScenario {
    config: ScenarioConfig,
}

impl FlashLoanScenario {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Deploys the receiver, funds it from the whale, takes one flash loan and
    /// checks the receiver paid for it. Stops at the first failing step.
    pub fn run(&self, fork: &SimulatedFork) -> Result<ScenarioReport, ScenarioError> {
        let addresses = &self.config.addresses;
        addresses.validate()?;

        info!("running flash loan scenario on {}", self.config.environment);

        let provider = fork.address(&addresses.pool_addresses_provider)?;
        let example = DeployedExample::deploy(fork, &provider)?;

        let token = fork.token_at(&addresses.token)?;
        let decimals = settle(token.try_decimals()).map_err(ScenarioError::Simulation)?;
        let funding_amount = self.config.funding_amount(decimals)?;

        let whale = fork.impersonate(&addresses.whale)?;
        whale.transfer(&token, example.address(), funding_amount)?;
        info!("funded receiver with {}", funding_amount);

        example.create_flash_loan(&token.address, self.config.loan_amount)?;

        let remaining_balance =
            settle(token.try_balance(example.address())).map_err(ScenarioError::Simulation)?;
        info!("receiver balance after the loan: {}", remaining_balance);

        if remaining_balance >= funding_amount {
            return Err(ScenarioError::Assertion {
                remaining: remaining_balance,
                funding: funding_amount,
            });
        }

        Ok(ScenarioReport {
            example: example.address().clone(),
            funding_amount,
            loan_amount: self.config.loan_amount,
            premium: funding_amount - remaining_balance,
            remaining_balance,
        })
    }
}
