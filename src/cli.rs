//! Command-line interface definitions and argument parsing

use clap::Parser;

use crate::filter::FilterConfig;

/// Electoral district analysis CLI: find high elector-ratio, low-turnout districts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file
    #[arg(short, long, default_value = "election_data.csv")]
    pub input: String,

    /// Output path for the cleaned, projected table
    #[arg(long, default_value = "cleaned_data.csv")]
    pub cleaned_output: String,

    /// Output path for the filtered districts
    #[arg(short, long, default_value = "high_ratio_low_turnout.csv")]
    pub output: String,

    /// Output path for the scatter plot PNG
    #[arg(short, long, default_value = "turnout_plot.png")]
    pub plot: String,

    /// Select districts with Elector Ratio strictly above this value
    #[arg(long, default_value = "0.75")]
    pub ratio_threshold: f64,

    /// Select districts with Voter Turnout strictly below this percentage
    #[arg(long, default_value = "55")]
    pub turnout_threshold: f64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the filter configuration from the threshold flags
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            elector_ratio_threshold: self.ratio_threshold,
            voter_turnout_threshold: self.turnout_threshold,
        }
    }
}
