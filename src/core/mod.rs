pub mod config;
pub mod error;
pub mod random;
pub mod types;

pub use config::KingdomConfig;
pub use error::{KingdomError, Result};
