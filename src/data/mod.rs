//! Data module - CSV loading and usage records

mod loader;
mod record;

pub use loader::{DataLoader, LoaderError};
pub use record::{Category, LoadOutcome, UsageRecord, UsageTable};
