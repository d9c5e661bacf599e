pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalSource;
#[cfg(feature = "cli")]
pub use config::{CliConfig, StatsFormat};

pub use crate::core::{
    aggregator::{DomainAggregator, ExtractReport},
    classifier::classify_line,
    extract::ExtractEngine,
};
pub use utils::error::{ExtractError, Result};
