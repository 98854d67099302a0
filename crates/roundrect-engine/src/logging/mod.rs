//! Logging setup.
//!
//! The library only emits through the `log` facade; hosts that have no
//! logger of their own can install `env_logger` here.

mod init;

pub use init::{LoggingConfig, init_logging};
