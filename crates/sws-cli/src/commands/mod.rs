pub mod filter;
pub mod generate;
