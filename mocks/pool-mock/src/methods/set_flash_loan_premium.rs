use pool_interface::types::error::Error;
use soroban_sdk::Env;

use crate::event;
use crate::storage::write_flash_loan_premium;

use super::utils::validation::{require_admin, require_lte_percentage_factor};

pub fn set_flash_loan_premium(
    env: &Env,
    premium_total: u32,
    premium_to_protocol: u32,
) -> Result<(), Error> {
    require_admin(env)?;
    require_lte_percentage_factor(env, premium_total);
    require_lte_percentage_factor(env, premium_to_protocol);

    write_flash_loan_premium(env, premium_total, premium_to_protocol);

    event::flash_loan_premium_updated(env, premium_total, premium_to_protocol);

    Ok(())
}
