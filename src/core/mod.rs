pub mod config;
pub mod error;

pub use config::VerifyConfig;
pub use error::{BoomwalkError, Result};
