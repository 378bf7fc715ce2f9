//! TurnoutScope: electoral district analysis CLI
//!
//! This is the main entrypoint that orchestrates data loading, threshold
//! filtering, visualization, and export.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use turnoutscope::{
    create_turnout_scatter, filter_high_ratio_low_turnout, load_and_clean_data, save_results, Args,
};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.verbose {
        println!("TurnoutScope - Electoral District Analysis");
        println!("==========================================\n");
    }

    run_pipeline(&args)
}

/// Run the full analysis pipeline: load, filter, visualize, export
fn run_pipeline(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: Load and clean data
    if args.verbose {
        println!("Step 1: Loading and cleaning data");
        println!("  Input file: {}", args.input);
        println!("  Cleaned output: {}", args.cleaned_output);
    }

    let load_start = Instant::now();
    let data = load_and_clean_data(Path::new(&args.input), Path::new(&args.cleaned_output))
        .with_context(|| format!("loading stage failed for {}", args.input))?;
    let load_time = load_start.elapsed();

    println!("✓ Data loaded: {} districts", data.len());
    if args.verbose {
        println!("  Processing time: {:.2}s", load_time.as_secs_f64());
    }

    // Step 2: Filter high-ratio, low-turnout districts
    let config = args.filter_config();
    if args.verbose {
        println!("\nStep 2: Filtering districts");
        println!("  Elector ratio threshold: {}", config.elector_ratio_threshold);
        println!("  Voter turnout threshold: {}", config.voter_turnout_threshold);
    }

    let filtered = filter_high_ratio_low_turnout(&data, &config);

    println!(
        "✓ Found {} districts with Elector Ratio > {} and Voter Turnout < {}",
        filtered.len(),
        config.elector_ratio_threshold,
        config.voter_turnout_threshold
    );

    // Step 3: Generate the scatter plot
    if args.verbose {
        println!("\nStep 3: Generating scatter plot");
        println!("  Output file: {}", args.plot);
    }

    let viz_start = Instant::now();
    create_turnout_scatter(&data, &filtered, Path::new(&args.plot), None)
        .with_context(|| format!("visualization stage failed for {}", args.plot))?;
    let viz_time = viz_start.elapsed();

    println!("✓ Scatter plot saved to: {}", args.plot);
    if args.verbose {
        println!("  Rendering time: {:.2}s", viz_time.as_secs_f64());
    }

    // Step 4: Export the filtered set
    if args.verbose {
        println!("\nStep 4: Exporting filtered districts");
        println!("  Output file: {}", args.output);
    }

    save_results(&filtered, Path::new(&args.output))
        .with_context(|| format!("export stage failed for {}", args.output))?;

    let total_time = start_time.elapsed();
    println!("\n=== Pipeline Complete ===");
    println!("Total processing time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
