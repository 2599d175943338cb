#![deny(warnings)]
#![no_std]

use methods::{
    flash_loan_simple::flash_loan_simple, init_reserve::init_reserve, initialize::initialize,
    set_flash_loan_premium::set_flash_loan_premium, set_pause::set_pause,
};
use pool_interface::types::error::Error;
use pool_interface::FlashLoanPoolTrait;
use soroban_sdk::{contract, contractclient, contractimpl, token, Address, Bytes, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contractclient(name = "PoolAdminClient")]
pub trait PoolAdminTrait {
    fn initialize(
        env: Env,
        admin: Address,
        treasury: Address,
        premium_total: u32,
        premium_to_protocol: u32,
    ) -> Result<(), Error>;

    fn init_reserve(env: Env, asset: Address) -> Result<(), Error>;

    fn set_flash_loan_premium(
        env: Env,
        premium_total: u32,
        premium_to_protocol: u32,
    ) -> Result<(), Error>;

    fn set_pause(env: Env, value: bool) -> Result<(), Error>;

    fn paused(env: Env) -> bool;

    fn treasury(env: Env) -> Result<Address, Error>;
}

#[contract]
pub struct PoolMock;

#[contractimpl]
impl FlashLoanPoolTrait for PoolMock {
    fn flash_loan_simple(
        env: Env,
        initiator: Address,
        receiver: Address,
        asset: Address,
        amount: i128,
        params: Bytes,
        referral_code: u32,
    ) -> Result<(), Error> {
        flash_loan_simple(
            &env,
            &initiator,
            &receiver,
            &asset,
            amount,
            &params,
            referral_code,
        )
    }

    fn flash_loan_premium_total(env: Env) -> u32 {
        read_flash_loan_premium_total(&env)
    }

    fn flash_loan_premium_to_protocol(env: Env) -> u32 {
        read_flash_loan_premium_to_protocol(&env)
    }

    fn available_liquidity(env: Env, asset: Address) -> Result<i128, Error> {
        if !is_active_reserve(&env, &asset) {
            return Err(Error::NoActiveReserve);
        }

        Ok(token::Client::new(&env, &asset).balance(&env.current_contract_address()))
    }
}

#[contractimpl]
impl PoolAdminTrait for PoolMock {
    fn initialize(
        env: Env,
        admin: Address,
        treasury: Address,
        premium_total: u32,
        premium_to_protocol: u32,
    ) -> Result<(), Error> {
        initialize(&env, &admin, &treasury, premium_total, premium_to_protocol)
    }

    fn init_reserve(env: Env, asset: Address) -> Result<(), Error> {
        init_reserve(&env, &asset)
    }

    fn set_flash_loan_premium(
        env: Env,
        premium_total: u32,
        premium_to_protocol: u32,
    ) -> Result<(), Error> {
        set_flash_loan_premium(&env, premium_total, premium_to_protocol)
    }

    fn set_pause(env: Env, value: bool) -> Result<(), Error> {
        set_pause(&env, value)
    }

    fn paused(env: Env) -> bool {
        paused(&env)
    }

    fn treasury(env: Env) -> Result<Address, Error> {
        read_treasury(&env)
    }
}
