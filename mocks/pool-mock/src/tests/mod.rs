mod admin;
mod flash_loan_simple;
