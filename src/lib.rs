//! Water Usage Optimizer - household water consumption analysis
//!
//! Loads daily per-activity usage from a CSV file, averages each category and
//! suggests a flat reduction target per category.

pub mod cli;
pub mod data;
pub mod report;
pub mod stats;
