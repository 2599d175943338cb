use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, addresses_provider: &Address, pool: &Address) {
    let topics = (Symbol::new(e, "initialize"), addresses_provider.clone());
    e.events().publish(topics, pool.clone());
}

pub(crate) fn log(e: &Env, asset: &Address, amount_owing: i128) {
    let topics = (symbol_short!("log"), asset.clone());
    e.events().publish(topics, amount_owing);
}
