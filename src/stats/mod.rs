//! Stats module - Usage averages and savings suggestions

mod calculator;

pub use calculator::{Analysis, CategoryAverages, Recommendations, UsageAnalyzer, SAVINGS_RATE};
