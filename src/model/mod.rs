pub mod config;
pub mod filter;

pub use config::*;
pub use filter::*;
