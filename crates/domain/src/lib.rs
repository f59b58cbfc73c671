//! DNS Transport Domain Layer
pub mod config;
pub mod domain_strategy;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, TransportConfig};
pub use domain_strategy::DomainStrategy;
pub use errors::{CancelCause, TransportError};
