//! Usage Statistics Calculator Module
//! Per-category averages and flat-rate savings suggestions.

use crate::data::{Category, UsageTable};
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Share of the average daily usage suggested as a reduction target.
pub const SAVINGS_RATE: f64 = 0.2;

/// Mean daily liters per category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAverages(BTreeMap<Category, f64>);

impl CategoryAverages {
    pub fn get(&self, category: Category) -> Option<f64> {
        self.0.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }
}

/// Suggestion text per category, iterated in `Category::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations(BTreeMap<Category, String>);

impl Recommendations {
    pub fn get(&self, category: Category) -> Option<&str> {
        self.0.get(&category).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        self.0.iter().map(|(c, s)| (*c, s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of the analysis step.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    HasRecommendations(Recommendations),
    NoData,
}

impl Analysis {
    pub fn recommendations(&self) -> Option<&Recommendations> {
        match self {
            Analysis::HasRecommendations(recs) => Some(recs),
            Analysis::NoData => None,
        }
    }
}

/// Stateless usage calculations.
pub struct UsageAnalyzer;

impl UsageAnalyzer {
    /// Arithmetic mean; NaN for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        values.mean()
    }

    /// Average of every category over the present cells of the table.
    pub fn compute_averages(table: &UsageTable) -> CategoryAverages {
        CategoryAverages(
            Category::ALL
                .into_iter()
                .map(|category| (category, Self::mean(&table.values(category))))
                .collect(),
        )
    }

    pub fn savings_potential(average: f64) -> f64 {
        average * SAVINGS_RATE
    }

    /// Suggestion text; a NaN amount is written as `nan`.
    pub fn suggestion(category: Category, savings: f64) -> String {
        let amount = if savings.is_nan() {
            "nan".to_string()
        } else {
            format!("{:.2}", savings)
        };
        format!(
            "Reduce {} usage by {} liters per day.",
            category.column_name(),
            amount
        )
    }

    /// Build one suggestion per category, or `NoData` for an empty table.
    pub fn analyze(table: &UsageTable) -> Analysis {
        if table.is_empty() {
            warn!("No data to analyze.");
            return Analysis::NoData;
        }

        let averages = Self::compute_averages(table);
        let recommendations = averages
            .iter()
            .map(|(category, average)| {
                let savings = Self::savings_potential(average);
                debug!(
                    "{}: average {:.2} L/day, savings potential {:.2} L/day",
                    category, average, savings
                );
                (category, Self::suggestion(category, savings))
            })
            .collect();

        Analysis::HasRecommendations(Recommendations(recommendations))
    }
}
