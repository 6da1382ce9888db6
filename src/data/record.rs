//! Usage Record Module
//! Fixed-field daily records and the in-memory usage table.

use std::fmt;

/// A tracked water-use activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Shower,
    Toilet,
    Tap,
    WashingMachine,
    Dishwasher,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Shower,
        Category::Toilet,
        Category::Tap,
        Category::WashingMachine,
        Category::Dishwasher,
        Category::Other,
    ];

    /// Column name as it appears in the CSV header.
    pub fn column_name(self) -> &'static str {
        match self {
            Category::Shower => "shower",
            Category::Toilet => "toilet",
            Category::Tap => "tap",
            Category::WashingMachine => "washing_machine",
            Category::Dishwasher => "dishwasher",
            Category::Other => "other",
        }
    }

    pub fn from_column_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.column_name() == name)
    }

    /// Display name with only the first letter upper-cased.
    pub fn label(self) -> String {
        let name = self.column_name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// One day of measurements, in liters.
///
/// `None` marks a blank or non-numeric cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageRecord {
    pub date: String,
    pub shower: Option<f64>,
    pub toilet: Option<f64>,
    pub tap: Option<f64>,
    pub washing_machine: Option<f64>,
    pub dishwasher: Option<f64>,
    pub other: Option<f64>,
}

impl UsageRecord {
    pub fn usage(&self, category: Category) -> Option<f64> {
        match category {
            Category::Shower => self.shower,
            Category::Toilet => self.toilet,
            Category::Tap => self.tap,
            Category::WashingMachine => self.washing_machine,
            Category::Dishwasher => self.dishwasher,
            Category::Other => self.other,
        }
    }

    pub(crate) fn set_usage(&mut self, category: Category, value: Option<f64>) {
        let slot = match category {
            Category::Shower => &mut self.shower,
            Category::Toilet => &mut self.toilet,
            Category::Tap => &mut self.tap,
            Category::WashingMachine => &mut self.washing_machine,
            Category::Dishwasher => &mut self.dishwasher,
            Category::Other => &mut self.other,
        };
        *slot = value;
    }
}

/// All records loaded from one file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageTable {
    records: Vec<UsageRecord>,
}

impl UsageTable {
    pub fn new(records: Vec<UsageRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    /// Present values of one category, skipping blank cells.
    pub fn values(&self, category: Category) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|r| r.usage(category))
            .collect()
    }
}

/// Result of the load step.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(UsageTable),
    /// File existed but held no data rows.
    Empty,
}

impl LoadOutcome {
    pub fn is_empty(&self) -> bool {
        match self {
            LoadOutcome::Loaded(table) => table.is_empty(),
            LoadOutcome::Empty => true,
        }
    }

    pub fn into_table(self) -> UsageTable {
        match self {
            LoadOutcome::Loaded(table) => table,
            LoadOutcome::Empty => UsageTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, shower: Option<f64>) -> UsageRecord {
        UsageRecord {
            date: date.to_string(),
            shower,
            ..Default::default()
        }
    }

    #[test]
    fn test_category_order_and_names() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.column_name()).collect();
        assert_eq!(
            names,
            vec!["shower", "toilet", "tap", "washing_machine", "dishwasher", "other"]
        );

        let mut sorted = Category::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Category::ALL.to_vec());
    }

    #[test]
    fn test_category_label_keeps_underscores() {
        assert_eq!(Category::Shower.label(), "Shower");
        assert_eq!(Category::WashingMachine.label(), "Washing_machine");
        assert_eq!(Category::Other.to_string(), "other");
    }

    #[test]
    fn test_from_column_name() {
        assert_eq!(
            Category::from_column_name("washing_machine"),
            Some(Category::WashingMachine)
        );
        assert_eq!(Category::from_column_name("Shower"), None);
        assert_eq!(Category::from_column_name("date"), None);
    }

    #[test]
    fn test_set_and_get_usage() {
        let mut r = UsageRecord::default();
        for (i, c) in Category::ALL.into_iter().enumerate() {
            r.set_usage(c, Some(i as f64));
        }
        for (i, c) in Category::ALL.into_iter().enumerate() {
            assert_eq!(r.usage(c), Some(i as f64));
        }
    }

    #[test]
    fn test_table_values_skip_missing() {
        let table = UsageTable::new(vec![
            record("2024-01-01", Some(100.0)),
            record("2024-01-02", None),
            record("2024-01-03", Some(200.0)),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.values(Category::Shower), vec![100.0, 200.0]);
        assert!(table.values(Category::Tap).is_empty());
    }

    #[test]
    fn test_load_outcome_into_table() {
        assert!(LoadOutcome::Empty.is_empty());
        assert!(LoadOutcome::Empty.into_table().is_empty());

        let table = UsageTable::new(vec![record("2024-01-01", Some(1.0))]);
        let outcome = LoadOutcome::Loaded(table.clone());
        assert!(!outcome.is_empty());
        assert_eq!(outcome.into_table(), table);
    }
}
