use pool_interface::types::error::Error;
use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Treasury,
    FlashLoanPremiumTotal,
    FlashLoanPremiumToProtocol,
    Pause,
    Reserve(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_admin(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_treasury(env: &Env, treasury: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Treasury, treasury);
}

pub fn read_treasury(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .ok_or(Error::Uninitialized)
}

pub fn write_flash_loan_premium(env: &Env, premium_total: u32, premium_to_protocol: u32) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::FlashLoanPremiumTotal, &premium_total);
    env.storage()
        .instance()
        .set(&DataKey::FlashLoanPremiumToProtocol, &premium_to_protocol);
}

pub fn read_flash_loan_premium_total(env: &Env) -> u32 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::FlashLoanPremiumTotal)
        .unwrap_or(0)
}

pub fn read_flash_loan_premium_to_protocol(env: &Env) -> u32 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::FlashLoanPremiumToProtocol)
        .unwrap_or(0)
}

pub fn write_pause(env: &Env, paused: bool) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Pause, &paused);
}

pub fn paused(env: &Env) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or(false)
}

pub fn has_reserve(env: &Env, asset: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Reserve(asset.clone()))
}

pub fn write_reserve(env: &Env, asset: &Address) {
    let key = DataKey::Reserve(asset.clone());

    env.storage().persistent().set(&key, &true);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn is_active_reserve(env: &Env, asset: &Address) -> bool {
    let key = DataKey::Reserve(asset.clone());
    let active: Option<bool> = env.storage().persistent().get(&key);

    if active.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    active.unwrap_or(false)
}
