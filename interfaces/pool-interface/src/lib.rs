#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};
use types::error::Error;

pub mod types;

pub struct Spec;

/// Interface of a lending pool lending single-asset flash loans
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FlashLoanPoolClient")]
pub trait FlashLoanPoolTrait {
    /// Lends `amount` of `asset` to `receiver` for the duration of one invocation.
    ///
    /// The pool transfers the amount to the receiver, calls its `execute_operation`
    /// and pulls back `amount + premium` with `transfer_from`.
    ///
    /// # Errors
    ///
    /// - `Paused` when the pool is paused
    /// - `InvalidAmount` when amount is not positive
    /// - `NoActiveReserve` when asset is not listed
    /// - `InsufficientLiquidity` when the pool holds less than amount
    /// - `FlashLoanReceiverError` when the receiver returns `false`
    fn flash_loan_simple(
        env: Env,
        initiator: Address,
        receiver: Address,
        asset: Address,
        amount: i128,
        params: Bytes,
        referral_code: u32,
    ) -> Result<(), Error>;

    /// Total premium in basis points
    fn flash_loan_premium_total(env: Env) -> u32;

    /// Share of the premium sent to the treasury, in basis points of the premium
    fn flash_loan_premium_to_protocol(env: Env) -> u32;

    fn available_liquidity(env: Env, asset: Address) -> Result<i128, Error>;
}
