//! plugcfg Test - Shared test utilities.
//!
//! Provides sample plugin config shapes and a temporary config root with
//! helpers for seeding real and example files.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! plugcfg-test.workspace = true
//! ```
//!
//! ```rust,ignore
//! use plugcfg_test::{EconomyConfig, TestRoot};
//!
//! #[test]
//! fn loads_example() {
//!     let root = TestRoot::new();
//!     root.write_example("Economy", ConfigFormat::Json, r#"{"currency": "gems"}"#);
//!     let economy: EconomyConfig = root.loader().load("Economy").unwrap().into_inner();
//!     assert_eq!(economy.currency, "gems");
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;
