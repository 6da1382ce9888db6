//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::Parser;

/// Default input file, looked up in the working directory.
pub const DEFAULT_DATA_FILE: &str = "water_usage_data.csv";

/// Water Usage Optimizer - suggest where a household can cut water use
#[derive(Parser, Debug)]
#[command(name = "water_usage_optimizer")]
#[command(about = "Analyze daily water usage and suggest reductions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CSV file with columns: date, shower, toilet, tap, washing_machine, dishwasher, other
    #[arg(default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file() {
        let cli = Cli::parse_from(["water_usage_optimizer"]);
        assert_eq!(cli.file, PathBuf::from("water_usage_data.csv"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_custom_file_and_verbose() {
        let cli = Cli::parse_from(["water_usage_optimizer", "-v", "march.csv"]);
        assert_eq!(cli.file, PathBuf::from("march.csv"));
        assert!(cli.verbose);
    }
}
