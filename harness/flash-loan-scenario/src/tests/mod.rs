mod config;
pub mod sut;
