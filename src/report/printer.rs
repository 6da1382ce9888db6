//! Report Printer Module
//! Formats recommendations as plain text lines for the terminal.

use crate::stats::Analysis;

pub const REPORT_HEADER: &str = "Personalized Water Usage Recommendations to Reduce Waste:";
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";

/// Text report writer for analysis results.
pub struct ReportPrinter;

impl ReportPrinter {
    /// Build the report lines, header first.
    pub fn render_lines(analysis: &Analysis) -> Vec<String> {
        match analysis {
            Analysis::NoData => vec![NO_RECOMMENDATIONS.to_string()],
            Analysis::HasRecommendations(recs) => {
                let mut lines = Vec::with_capacity(recs.len() + 1);
                lines.push(REPORT_HEADER.to_string());
                for (category, suggestion) in recs.iter() {
                    lines.push(format!("- {}: {}", category.label(), suggestion));
                }
                lines
            }
        }
    }

    /// Print the report to stdout.
    pub fn display(analysis: &Analysis) {
        for line in Self::render_lines(analysis) {
            println!("{}", line);
        }
    }
}
