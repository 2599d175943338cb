#![deny(warnings)]
#![no_std]

use flash_loan_receiver_interface::FlashLoanReceiverTrait;
use pool_addresses_provider_interface::PoolAddressesProviderClient;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, Bytes, Env, String,
};

use crate::storage::*;

pub use crate::error::Error;

mod error;
mod event;
mod storage;

/// Strkey of the all-zero contract id
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Ledgers the repayment allowance stays valid for
const ALLOWANCE_LEDGERS: u32 = 20;

#[contract]
pub struct FlashLoanExample;

#[contractimpl]
impl FlashLoanExample {
    /// Initializes the receiver with the registry locating the lending pool.
    ///
    /// The pool is resolved once and stored; callbacks are accepted from it only.
    ///
    /// # Errors
    ///
    /// - `AlreadyInitialized` on a second call
    /// - `InvalidProvider` when `addresses_provider` is the zero contract or its pool
    ///   can't be resolved
    pub fn initialize(env: Env, addresses_provider: Address) -> Result<(), Error> {
        if has_addresses_provider(&env) {
            return Err(Error::AlreadyInitialized);
        }

        if addresses_provider == Address::from_string(&String::from_str(&env, ZERO_CONTRACT)) {
            return Err(Error::InvalidProvider);
        }

        let pool = match PoolAddressesProviderClient::new(&env, &addresses_provider).try_get_pool()
        {
            Ok(Ok(pool)) => pool,
            _ => return Err(Error::InvalidProvider),
        };

        write_addresses_provider(&env, &addresses_provider);
        write_pool(&env, &pool);

        event::initialized(&env, &addresses_provider, &pool);

        Ok(())
    }

    pub fn addresses_provider(env: Env) -> Result<Address, Error> {
        read_addresses_provider(&env)
    }

    pub fn pool(env: Env) -> Result<Address, Error> {
        read_pool(&env)
    }
}

#[contractimpl]
impl FlashLoanReceiverTrait for FlashLoanExample {
    /// Approves the pool to pull back the loan with its premium.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not the stored pool or the receiver is uninitialized.
    fn execute_operation(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        _initiator: Address,
        _params: Bytes,
    ) -> bool {
        let pool = match read_pool(&env) {
            Ok(pool) => pool,
            Err(err) => panic_with_error!(&env, err),
        };
        pool.require_auth();

        let amount_owing = amount
            .checked_add(premium)
            .expect("flash-loan-example: no overflow");

        token::Client::new(&env, &asset).approve(
            &env.current_contract_address(),
            &pool,
            &amount_owing,
            &(env.ledger().sequence() + ALLOWANCE_LEDGERS),
        );

        log!(&env, "flash loan received", asset, amount_owing);
        event::log(&env, &asset, amount_owing);

        true
    }
}
