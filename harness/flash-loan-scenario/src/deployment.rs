use flash_loan_example::{FlashLoanExample, FlashLoanExampleClient};
use pool_interface::FlashLoanPoolClient;
use soroban_sdk::testutils::MockAuthInvoke;
use soroban_sdk::{Address, Bytes, IntoVal};

use crate::error::{settle, ScenarioError};
use crate::fork::SimulatedFork;

const REFERRAL_CODE: u32 = 0;

/// Handle to a freshly deployed `FlashLoanExample`.
pub struct DeployedExample<'a> {
    fork: &'a SimulatedFork,
    client: FlashLoanExampleClient<'a>,
}

impl<'a> DeployedExample<'a> {
    /// Registers the contract and runs its initializer with `addresses_provider`.
    pub fn deploy(
        fork: &'a SimulatedFork,
        addresses_provider: &Address,
    ) -> Result<Self, ScenarioError> {
        let env = fork.env();
        let client = FlashLoanExampleClient::new(env, &env.register_contract(None, FlashLoanExample));

        settle(client.try_initialize(addresses_provider)).map_err(ScenarioError::Deployment)?;

        log::info!("flash loan example deployed at {:?}", client.address);

        Ok(Self { fork, client })
    }

    pub fn address(&self) -> &Address {
        &self.client.address
    }

    pub fn pool(&self) -> Result<Address, ScenarioError> {
        settle(self.client.try_pool()).map_err(ScenarioError::Simulation)
    }

    /// Borrows `amount` of `asset` from the pool the contract was deployed
    /// against, with the contract as receiver. Returns once the loan is repaid
    /// or reverted.
    pub fn create_flash_loan(&self, asset: &Address, amount: i128) -> Result<(), ScenarioError> {
        let pool = FlashLoanPoolClient::new(self.fork.env(), &self.pool()?);

        log::info!("requesting flash loan of {} from {:?}", amount, pool.address);

        let operator = self.fork.operator();
        let initiator = operator.address();
        let params = Bytes::new(self.fork.env());

        operator.authorize(&MockAuthInvoke {
            contract: &pool.address,
            fn_name: "flash_loan_simple",
            args: (
                initiator,
                self.address(),
                asset,
                amount,
                params.clone(),
                REFERRAL_CODE,
            )
                .into_val(self.fork.env()),
            sub_invokes: &[],
        })?;

        settle(pool.try_flash_loan_simple(
            initiator,
            self.address(),
            asset,
            &amount,
            &params,
            &REFERRAL_CODE,
        ))
        .map_err(ScenarioError::LoanCall)
    }
}
