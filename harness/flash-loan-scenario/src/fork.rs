use log::{debug, info};
use pool_addresses_provider_mock::{PoolAddressesProviderAdminClient, PoolAddressesProviderMock};
use pool_interface::FlashLoanPoolClient;
use pool_mock::{PoolAdminClient, PoolMock};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::{Address, Env, String};
use token_mock::{TokenMock, TokenMockClient};

use crate::config::{kind_of, scale, AddressKind, ScenarioConfig};
use crate::error::{settle, ScenarioError};
use crate::impersonation::Signer;

pub const TOKEN_NAME: &str = "Dai Stablecoin";
pub const TOKEN_SYMBOL: &str = "DAI";

/// State a fork of the network already holds before the scenario runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkSeed {
    pub token_decimals: u32,
    /// Whole tokens held by the whale
    pub whale_balance_units: i128,
    /// Smallest token units held by the pool
    pub pool_liquidity: i128,
    /// Basis points
    pub premium_total: u32,
    /// Basis points of the premium forwarded to the treasury
    pub premium_to_protocol: u32,
    pub allow_impersonation: bool,
}

impl Default for ForkSeed {
    fn default() -> Self {
        Self {
            token_decimals: 18,
            whale_balance_units: 1_000_000,
            pool_liquidity: 1_000_000 * 10i128.pow(18),
            premium_total: 5,
            premium_to_protocol: 0,
            allow_impersonation: true,
        }
    }
}

/// In-process ledger holding the token, the lending pool and its registry at
/// the configured addresses.
pub struct SimulatedFork {
    env: Env,
    seed: ForkSeed,
    token: Address,
    pool: Address,
    treasury: Address,
    operator: Signer,
}

impl SimulatedFork {
    pub fn launch(config: &ScenarioConfig, seed: ForkSeed) -> Result<Self, ScenarioError> {
        config.addresses.validate()?;

        let env = Env::default();
        env.budget().reset_unlimited();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let treasury = Address::generate(&env);
        let operator = Address::generate(&env);

        let token = strkey_address(&env, &config.addresses.token);
        env.register_contract(&token, TokenMock);
        let token_admin = TokenMockClient::new(&env, &token);
        settle(token_admin.try_initialize(
            &admin,
            &seed.token_decimals,
            &String::from_str(&env, TOKEN_NAME),
            &String::from_str(&env, TOKEN_SYMBOL),
        ))
        .map_err(ScenarioError::Simulation)?;

        let pool = env.register_contract(None, PoolMock);
        let pool_admin = PoolAdminClient::new(&env, &pool);
        settle(pool_admin.try_initialize(
            &admin,
            &treasury,
            &seed.premium_total,
            &seed.premium_to_protocol,
        ))
        .map_err(ScenarioError::Simulation)?;
        settle(pool_admin.try_init_reserve(&token)).map_err(ScenarioError::Simulation)?;

        let provider = strkey_address(&env, &config.addresses.pool_addresses_provider);
        env.register_contract(&provider, PoolAddressesProviderMock);
        settle(PoolAddressesProviderAdminClient::new(&env, &provider).try_initialize(&admin, &pool))
            .map_err(ScenarioError::Simulation)?;

        let whale = strkey_address(&env, &config.addresses.whale);
        let whale_balance = scale(seed.whale_balance_units, seed.token_decimals)?;
        settle(token_admin.try_mint(&whale, &whale_balance)).map_err(ScenarioError::Simulation)?;
        settle(token_admin.try_mint(&pool, &seed.pool_liquidity))
            .map_err(ScenarioError::Simulation)?;

        env.set_auths(&[]);

        info!(
            "{} fork launched: pool {:?}, liquidity {}, premium {} bps",
            config.environment, pool, seed.pool_liquidity, seed.premium_total
        );

        let operator = Signer::new(&env, operator);

        Ok(Self {
            env,
            seed,
            token,
            pool,
            treasury,
            operator,
        })
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn seed(&self) -> &ForkSeed {
        &self.seed
    }

    pub fn token(&self) -> TokenClient<'_> {
        TokenClient::new(&self.env, &self.token)
    }

    /// Token interface of the contract at `strkey`.
    pub fn token_at(&self, strkey: &str) -> Result<TokenClient<'_>, ScenarioError> {
        Ok(TokenClient::new(&self.env, &self.address(strkey)?))
    }

    pub fn pool(&self) -> FlashLoanPoolClient<'_> {
        FlashLoanPoolClient::new(&self.env, &self.pool)
    }

    pub fn treasury(&self) -> &Address {
        &self.treasury
    }

    /// Account sending transactions that need no impersonation.
    pub fn operator(&self) -> &Signer {
        &self.operator
    }

    /// Resolves a strkey to an address on this fork.
    pub fn address(&self, strkey: &str) -> Result<Address, ScenarioError> {
        kind_of(strkey)?;

        Ok(strkey_address(&self.env, strkey))
    }

    /// Takes control of an account without its key.
    ///
    /// # Errors
    ///
    /// `Impersonation` when the fork forbids it or `strkey` is not an account.
    pub fn impersonate(&self, strkey: &str) -> Result<Signer, ScenarioError> {
        let refuse = |reason: &str| ScenarioError::Impersonation {
            address: strkey.to_string(),
            reason: reason.to_string(),
        };

        if !self.seed.allow_impersonation {
            return Err(refuse("impersonation is disabled on this fork"));
        }

        match kind_of(strkey) {
            Ok(AddressKind::Account) => {}
            Ok(AddressKind::Contract) => return Err(refuse("contracts can't be impersonated")),
            Err(_) => return Err(refuse("malformed strkey")),
        }

        debug!("impersonating {}", strkey);

        Ok(Signer::new(&self.env, strkey_address(&self.env, strkey)))
    }
}

fn strkey_address(env: &Env, strkey: &str) -> Address {
    Address::from_string(&String::from_str(env, strkey))
}
