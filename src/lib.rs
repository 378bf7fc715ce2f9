//! TurnoutScope: A Rust CLI application for electoral district analysis
//!
//! This library loads electoral district data, derives the Elector Ratio
//! (Electors / Population), filters districts with a high elector ratio and
//! low voter turnout, plots the relationship, and exports the filtered set.

pub mod cli;
pub mod data;
pub mod error;
pub mod export;
pub mod filter;
pub mod viz;

// Re-export public items for easier access
pub use cli::Args;
pub use data::{load_and_clean_data, DistrictRecord};
pub use error::PipelineError;
pub use export::save_results;
pub use filter::{filter_high_ratio_low_turnout, FilterConfig};
pub use viz::create_turnout_scatter;

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
