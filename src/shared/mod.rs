/// Shared utilities and error types used across layers
pub mod error;
pub mod result;

pub use error::{ConfigError, ExitCode, RelayError};
pub use result::{RelayResult, Result};
