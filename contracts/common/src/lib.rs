#![deny(warnings)]
#![no_std]

mod percentage_math;

pub use percentage_math::*;

/// Percent representation, 1 bps - 1, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;
