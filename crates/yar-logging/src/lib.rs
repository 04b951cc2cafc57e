//! yar-logging - tracing setup for yar binaries and embedders
//!
//! This crate provides:
//! - [`init_logging`] installing a stderr `fmt` subscriber
//! - [`set_log_level`] for changing the level after startup

mod init;

pub use init::{init_from_config, init_logging, set_log_level};
pub use yar_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, init_from_config, init_logging, set_log_level};
}
