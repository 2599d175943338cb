use common::PercentageMath;
use flash_loan_receiver_interface::FlashLoanReceiverClient;
use pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, log, token, Address, Bytes, Env};

use crate::event;
use crate::storage::{
    read_flash_loan_premium_to_protocol, read_flash_loan_premium_total, read_treasury,
};

use super::utils::validation::{
    require_active_reserve, require_not_paused, require_positive_amount,
};

pub fn flash_loan_simple(
    env: &Env,
    initiator: &Address,
    receiver: &Address,
    asset: &Address,
    amount: i128,
    params: &Bytes,
    referral_code: u32,
) -> Result<(), Error> {
    initiator.require_auth();
    require_not_paused(env);
    require_positive_amount(env, amount);
    require_active_reserve(env, asset);

    let pool = env.current_contract_address();
    let underlying_asset = token::Client::new(env, asset);

    if underlying_asset.balance(&pool) < amount {
        return Err(Error::InsufficientLiquidity);
    }

    let premium = amount
        .percent_mul(read_flash_loan_premium_total(env))
        .ok_or(Error::MathOverflowError)?;
    let amount_plus_premium = amount
        .checked_add(premium)
        .ok_or(Error::MathOverflowError)?;

    underlying_asset.transfer(&pool, receiver, &amount);

    let loan_receiver = FlashLoanReceiverClient::new(env, receiver);
    let executed = loan_receiver.execute_operation(asset, &amount, &premium, initiator, params);
    assert_with_error!(env, executed, Error::FlashLoanReceiverError);

    underlying_asset.transfer_from(&pool, receiver, &pool, &amount_plus_premium);

    let premium_to_protocol = premium
        .percent_mul(read_flash_loan_premium_to_protocol(env))
        .ok_or(Error::MathOverflowError)?;

    if premium_to_protocol > 0 {
        underlying_asset.transfer(&pool, &read_treasury(env)?, &premium_to_protocol);
    }

    log!(env, "flash loan repaid", amount, premium);

    event::flash_loan(
        env,
        initiator,
        receiver,
        asset,
        amount,
        premium,
        referral_code,
    );

    Ok(())
}
