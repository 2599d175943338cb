#![deny(warnings)]
#![no_std]

use flash_loan_receiver_interface::FlashLoanReceiverTrait;
use soroban_sdk::{contract, contractclient, contractimpl, token, Address, Bytes, Env};
use storage::{read_pool, read_should_fail, write_pool, write_should_fail};

mod storage;

#[contractclient(name = "FlashLoanReceiverAdminClient")]
pub trait FlashLoanReceiverAdminTrait {
    fn initialize(env: Env, pool: Address, should_fail: bool);
}

#[contract]
pub struct FlashLoanReceiver;

#[contractimpl]
impl FlashLoanReceiverTrait for FlashLoanReceiver {
    fn execute_operation(
        env: Env,
        asset: Address,
        amount: i128,
        premium: i128,
        _initiator: Address,
        _params: Bytes,
    ) -> bool {
        if read_should_fail(&env) {
            return false;
        }

        let pool = read_pool(&env);
        let ledger = env.ledger().sequence() + 20;

        token::Client::new(&env, &asset).approve(
            &env.current_contract_address(),
            &pool,
            &(amount + premium),
            &ledger,
        );

        true
    }
}

#[contractimpl]
impl FlashLoanReceiverAdminTrait for FlashLoanReceiver {
    fn initialize(env: Env, pool: Address, should_fail: bool) {
        write_pool(&env, &pool);
        write_should_fail(&env, should_fail);
    }
}
