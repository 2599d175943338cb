#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, Env};

pub struct Spec;

#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FlashLoanReceiverClient")]
pub trait FlashLoanReceiverTrait {
    /// Called by the pool after `amount` of `asset` was transferred to the receiver.
    /// The receiver must allow the pool to pull `amount + premium` before returning `true`.
    fn execute_operation(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        initiator: Address,
        params: Bytes,
    ) -> bool;
}
