//! Configuration loading and management for the income calculation engine.
//!
//! This module provides the engine's configuration surface: user settings
//! (night-differential window, break rules, bulk-entry defaults) and the
//! jurisdiction tax constants, loadable from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use workmate_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! let threshold = loader.config().tax().threshold;
//! println!("Tracking against a threshold of ¥{threshold}");
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BreakRule, EngineConfig, Settings, TaxPolicy};
