pub mod flash_loan_simple;
pub mod init_reserve;
pub mod initialize;
pub mod set_flash_loan_premium;
pub mod set_pause;

pub mod utils;
