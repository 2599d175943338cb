use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;

const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Pool,
    ShouldFail,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn write_pool(env: &Env, pool: &Address) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::Pool, pool);
}

pub fn read_pool(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .expect("receiver: not initialized")
}

pub fn write_should_fail(env: &Env, should_fail: bool) {
    bump_instance(env);
    env.storage()
        .instance()
        .set(&DataKey::ShouldFail, &should_fail);
}

pub fn read_should_fail(env: &Env) -> bool {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ShouldFail)
        .unwrap_or(false)
}
