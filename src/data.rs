//! Data loading, cleaning, and projection of electoral district records

use std::fs::File;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Columns the input file must provide
const REQUIRED_COLUMNS: [&str; 5] = [
    "Province",
    "Electoral District Name",
    "Population",
    "Electors",
    "Percentage of Voter Turnout",
];

/// One row of the raw input table
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Province")]
    province: String,
    #[serde(rename = "Electoral District Name")]
    district: String,
    #[serde(rename = "Population")]
    population: f64,
    #[serde(rename = "Electors")]
    electors: f64,
    #[serde(rename = "Percentage of Voter Turnout")]
    turnout: f64,
}

/// One cleaned, projected district record
///
/// Records are immutable after loading; the filter stage works on copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRecord {
    #[serde(rename = "Province")]
    pub province: String,
    #[serde(rename = "Electoral District Name")]
    pub district: String,
    #[serde(rename = "Elector Ratio")]
    pub elector_ratio: f64,
    #[serde(rename = "Percentage of Voter Turnout")]
    pub turnout: f64,
}

/// Load district data from a CSV file and clean it
///
/// # Arguments
/// * `input` - Path to the input CSV file
/// * `cleaned_output` - Path where the cleaned, projected table is written
///
/// # Returns
/// * The cleaned table: rows with Population > 0 and a finite Elector Ratio,
///   projected to {Province, Electoral District Name, Elector Ratio,
///   Percentage of Voter Turnout}
pub fn load_and_clean_data(input: &Path, cleaned_output: &Path) -> crate::Result<Vec<DistrictRecord>> {
    let file = File::open(input).map_err(|source| PipelineError::FileAccess {
        path: input.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    check_schema(&mut reader, input)?;

    let mut cleaned = Vec::new();
    let mut dropped_population = 0usize;
    let mut dropped_ratio = 0usize;

    for result in reader.deserialize::<RawRecord>() {
        let raw = result.map_err(|source| PipelineError::Parse {
            path: input.to_path_buf(),
            source,
        })?;

        // Population <= 0 would make the ratio undefined or nonsensical
        if raw.population <= 0.0 {
            dropped_population += 1;
            continue;
        }

        let elector_ratio = raw.electors / raw.population;
        if !elector_ratio.is_finite() {
            dropped_ratio += 1;
            continue;
        }

        cleaned.push(DistrictRecord {
            province: raw.province,
            district: raw.district,
            elector_ratio,
            turnout: raw.turnout,
        });
    }

    info!(
        "loaded {} districts from {} ({} dropped for Population <= 0, {} for undefined ratio)",
        cleaned.len(),
        input.display(),
        dropped_population,
        dropped_ratio
    );

    write_cleaned_data(&cleaned, cleaned_output)?;

    Ok(cleaned)
}

/// Verify that every required column is present in the header row
fn check_schema(reader: &mut csv::Reader<File>, input: &Path) -> crate::Result<()> {
    let headers = reader.headers().map_err(|source| PipelineError::Parse {
        path: input.to_path_buf(),
        source,
    })?;

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PipelineError::Schema {
                path: input.to_path_buf(),
                column: column.to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Write the cleaned table with a leading row-index column
///
/// The index column has an empty header name and 0-based positions, matching
/// the default serialization of the source this tool replaces.
fn write_cleaned_data(records: &[DistrictRecord], output: &Path) -> crate::Result<()> {
    let file = File::create(output).map_err(|source| PipelineError::FileAccess {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "",
        "Province",
        "Electoral District Name",
        "Elector Ratio",
        "Percentage of Voter Turnout",
    ])?;

    for (index, record) in records.iter().enumerate() {
        writer.write_record([
            index.to_string(),
            record.province.clone(),
            record.district.clone(),
            record.elector_ratio.to_string(),
            record.turnout.to_string(),
        ])?;
    }

    writer.flush()?;
    info!("cleaned data written to {}", output.display());

    Ok(())
}
