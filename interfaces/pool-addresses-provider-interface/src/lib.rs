#![deny(warnings)]
#![no_std]

use soroban_sdk::{contracterror, contractclient, contractspecfn, Address, Env};

pub struct Spec;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
}

/// Registry locating the lending pool of a market
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PoolAddressesProviderClient")]
pub trait PoolAddressesProviderTrait {
    fn get_pool(env: Env) -> Result<Address, Error>;
}
