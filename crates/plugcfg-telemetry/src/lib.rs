//! Logging setup for plugcfg hosts and tools.
//!
//! The config loader only emits `tracing` events; installing a subscriber
//! is left to the host. This crate provides the subscriber setup used by the
//! `plugcfg` CLI and available to any host that wants the same output.
//!
//! # Example
//!
//! ```rust,no_run
//! use plugcfg_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), plugcfg_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("plugcfg_config=debug");
//!
//! setup_logging(&config)?;
//! tracing::info!("Loading plugin configs");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{LogConfig, LogFormat, setup_logging};
