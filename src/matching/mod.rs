pub mod filter;
pub mod matcher;
