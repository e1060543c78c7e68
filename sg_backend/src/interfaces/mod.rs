pub mod generate;
pub mod ping;
