use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{write_admin, write_flash_loan_premium, write_pause, write_treasury};

use super::utils::validation::{require_admin_not_exist, require_lte_percentage_factor};

pub fn initialize(
    env: &Env,
    admin: &Address,
    treasury: &Address,
    premium_total: u32,
    premium_to_protocol: u32,
) -> Result<(), Error> {
    require_admin_not_exist(env);
    require_lte_percentage_factor(env, premium_total);
    require_lte_percentage_factor(env, premium_to_protocol);

    write_admin(env, admin);
    write_treasury(env, treasury);
    write_flash_loan_premium(env, premium_total, premium_to_protocol);
    write_pause(env, false);

    event::initialized(env, admin, treasury, premium_total, premium_to_protocol);

    Ok(())
}
