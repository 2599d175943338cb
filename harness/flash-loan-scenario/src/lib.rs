#![deny(warnings)]

//! Flash loan round trip against a simulated fork: deploy the receiver,
//! fund it from an impersonated whale, borrow and check the premium was paid.

pub use config::*;
pub use deployment::DeployedExample;
pub use error::{Revert, ScenarioError};
pub use fork::{ForkSeed, SimulatedFork};
pub use impersonation::Signer;
pub use scenario::{FlashLoanScenario, ScenarioReport};

mod config;
mod deployment;
mod error;
mod fork;
mod impersonation;
mod scenario;
#[cfg(test)]
mod tests;
