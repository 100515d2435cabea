pub mod config;
pub mod utils;
