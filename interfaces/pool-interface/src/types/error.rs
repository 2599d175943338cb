use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Paused = 2,

    NoActiveReserve = 100,
    ReserveAlreadyInitialized = 101,

    InsufficientLiquidity = 200,

    InvalidAmount = 303,
    FlashLoanReceiverError = 310,

    MathOverflowError = 400,
    MustBeLtePercentageFactor = 401,
}
