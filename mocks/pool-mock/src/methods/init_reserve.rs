use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_reserve;

use super::utils::validation::{require_admin, require_uninitialized_reserve};

pub fn init_reserve(env: &Env, asset: &Address) -> Result<(), Error> {
    require_admin(env)?;
    require_uninitialized_reserve(env, asset);

    write_reserve(env, asset);

    event::reserve_initialized(env, asset);

    Ok(())
}
