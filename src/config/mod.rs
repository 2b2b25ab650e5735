//! Configuration loading and management for the calculator.
//!
//! This module loads calculator metadata, server settings and the starting
//! values for new calculation rows from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use productivity_impact::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Serving on port {}", config.server().port);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, CalculatorFile, CalculatorMetadata, FormDefaults, ServerConfig};
