//! Report module - Terminal output

mod printer;

pub use printer::{ReportPrinter, NO_RECOMMENDATIONS, REPORT_HEADER};
