use soroban_sdk::testutils::{MockAuth, MockAuthInvoke};
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::xdr::{AccountId, ScAddress, SorobanAuthorizationEntry, SorobanCredentials};
use soroban_sdk::{Address, Env, IntoVal};

use crate::error::{settle, ScenarioError};

/// Account whose authorization the fork grants without a signature.
///
/// Only obtainable from [`SimulatedFork`](crate::SimulatedFork), so it never
/// exists outside a simulated ledger. Each authorization covers one invocation
/// made by this address and nothing else.
pub struct Signer {
    env: Env,
    address: Address,
}

impl Signer {
    pub(crate) fn new(env: &Env, address: Address) -> Self {
        Self {
            env: env.clone(),
            address,
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Authorizes `invoke` on behalf of this signer. The authorization is
    /// consumed by the first matching `require_auth`.
    ///
    /// Accounts sign as the transaction source account; contract addresses
    /// get a mocked `__check_auth`.
    pub fn authorize(&self, invoke: &MockAuthInvoke) -> Result<(), ScenarioError> {
        match ScAddress::from(&self.address) {
            ScAddress::Account(account) => self.authorize_as_source(account, invoke),
            ScAddress::Contract(_) => {
                self.env.mock_auths(&[MockAuth {
                    address: &self.address,
                    invoke,
                }]);
                Ok(())
            }
        }
    }

    pub fn transfer(
        &self,
        token: &TokenClient,
        to: &Address,
        amount: i128,
    ) -> Result<(), ScenarioError> {
        log::debug!("transferring {} from {:?} to {:?}", amount, self.address, to);

        self.authorize(&MockAuthInvoke {
            contract: &token.address,
            fn_name: "transfer",
            args: (&self.address, to, amount).into_val(&self.env),
            sub_invokes: &[],
        })?;

        settle(token.try_transfer(&self.address, to, &amount)).map_err(ScenarioError::Transfer)
    }

    fn authorize_as_source(
        &self,
        account: AccountId,
        invoke: &MockAuthInvoke,
    ) -> Result<(), ScenarioError> {
        self.env
            .host()
            .set_source_account(account)
            .map_err(|err| ScenarioError::Impersonation {
                address: format!("{:?}", self.address),
                reason: format!("{err:?}"),
            })?;

        self.env.set_auths(&[SorobanAuthorizationEntry {
            credentials: SorobanCredentials::SourceAccount,
            root_invocation: invoke.into(),
        }]);

        Ok(())
    }
}
