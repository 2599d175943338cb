use core::fmt;
use core::str::FromStr;

use stellar_strkey::Strkey;

use crate::error::ScenarioError;

/// DAI stablecoin contract
pub const TOKEN: &str = "CBG6NO2OJJWCAWEYDSLHE3TRIK6EQ5MI5LPX6MK3DV64K3RQZRI2U5NA";
pub const POOL_ADDRESSES_PROVIDER: &str =
    "CCWKBXVB2H3LRNZGXLARZLCTNSASY2VIWRU26UBHHGWPGY4KEWCDU27R";
pub const MAINNET_WHALE: &str = "GAFGJAKAO7ESPS7HTYFOFVXFVM4O4ZVJX6GQP7HXIQFLKIHHBPTQMRFJ";
pub const TESTNET_WHALE: &str = "GDWDDKKNMLTWHXA4R25ZLFCUV2I2V3HAYFNS2QICU4VKPI2DS6GCD2IE";

pub const FUNDING_UNITS: i128 = 2_000;
pub const LOAN_AMOUNT: i128 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Mainnet,
    Testnet,
}

impl Environment {
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Mainnet => "mainnet",
            Environment::Testnet => "testnet",
        }
    }

    pub fn addresses(&self) -> NetworkAddresses {
        let whale = match self {
            Environment::Mainnet => MAINNET_WHALE,
            Environment::Testnet => TESTNET_WHALE,
        };

        NetworkAddresses {
            token: TOKEN.to_string(),
            whale: whale.to_string(),
            pool_addresses_provider: POOL_ADDRESSES_PROVIDER.to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ScenarioError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Environment::Mainnet),
            "testnet" => Ok(Environment::Testnet),
            _ => Err(ScenarioError::UnknownEnvironment(name.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressKind {
    Account,
    Contract,
}

/// Strkeys the scenario works against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddresses {
    pub token: String,
    pub whale: String,
    pub pool_addresses_provider: String,
}

impl NetworkAddresses {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        require_kind(&self.token, AddressKind::Contract)?;
        require_kind(&self.whale, AddressKind::Account)?;
        require_kind(&self.pool_addresses_provider, AddressKind::Contract)
    }
}

pub(crate) fn kind_of(address: &str) -> Result<AddressKind, ScenarioError> {
    match Strkey::from_string(address) {
        Ok(Strkey::PublicKeyEd25519(_)) => Ok(AddressKind::Account),
        Ok(Strkey::Contract(_)) => Ok(AddressKind::Contract),
        Ok(_) => Err(ScenarioError::InvalidAddress {
            address: address.to_string(),
            reason: "neither an account nor a contract".to_string(),
        }),
        Err(err) => Err(ScenarioError::InvalidAddress {
            address: address.to_string(),
            reason: format!("{err:?}"),
        }),
    }
}

fn require_kind(address: &str, expected: AddressKind) -> Result<(), ScenarioError> {
    let kind = kind_of(address)?;
    if kind != expected {
        return Err(ScenarioError::InvalidAddress {
            address: address.to_string(),
            reason: format!("expected {expected:?}, found {kind:?}"),
        });
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub environment: Environment,
    pub addresses: NetworkAddresses,
    /// Whole tokens moved from the whale to the receiver
    pub funding_units: i128,
    /// Smallest token units borrowed
    pub loan_amount: i128,
}

impl ScenarioConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            addresses: environment.addresses(),
            funding_units: FUNDING_UNITS,
            loan_amount: LOAN_AMOUNT,
        }
    }

    pub fn funding_amount(&self, decimals: u32) -> Result<i128, ScenarioError> {
        scale(self.funding_units, decimals)
    }
}

/// `units * 10^decimals` with overflow reported.
pub(crate) fn scale(units: i128, decimals: u32) -> Result<i128, ScenarioError> {
    10i128
        .checked_pow(decimals)
        .and_then(|factor| units.checked_mul(factor))
        .ok_or(ScenarioError::AmountOverflow)
}
