use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(
    e: &Env,
    admin: &Address,
    treasury: &Address,
    premium_total: u32,
    premium_to_protocol: u32,
) {
    let topics = (Symbol::new(e, "initialize"), admin, treasury);
    e.events()
        .publish(topics, (premium_total, premium_to_protocol));
}

pub(crate) fn reserve_initialized(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "reserve_initialized"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn flash_loan_premium_updated(e: &Env, premium_total: u32, premium_to_protocol: u32) {
    let topics = (Symbol::new(e, "flash_loan_premium"),);
    e.events()
        .publish(topics, (premium_total, premium_to_protocol));
}

pub(crate) fn flash_loan(
    e: &Env,
    initiator: &Address,
    receiver: &Address,
    asset: &Address,
    amount: i128,
    premium: i128,
    referral_code: u32,
) {
    let topics = (
        Symbol::new(e, "flash_loan"),
        initiator.clone(),
        receiver.clone(),
        asset.clone(),
    );
    e.events().publish(topics, (amount, premium, referral_code));
}

pub(crate) fn paused(e: &Env, paused: bool) {
    let topics = (symbol_short!("paused"),);
    e.events().publish(topics, paused);
}
