pub mod aggregator;
pub mod classifier;
pub mod extract;
pub mod summary;

pub use crate::domain::model::{DomainSet, DomainToken, FileOutcome, LineClass, RunStats};
pub use crate::domain::ports::{ConfigProvider, SourceTree};
pub use crate::utils::error::Result;
