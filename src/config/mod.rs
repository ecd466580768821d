//! Configuration loading and validation
//!
//! Run configuration is a TOML file describing where the seed table lives,
//! how its columns are laid out, and where outputs go.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, OutputConfig, SeedsConfig};
pub use validation::validate;
