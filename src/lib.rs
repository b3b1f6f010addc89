pub mod config;
pub mod dice;
pub mod error;
pub mod server;

pub use error::{Error, Result};
