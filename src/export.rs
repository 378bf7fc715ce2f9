//! Export of the filtered district set to CSV

use std::fs::File;
use std::path::Path;

use log::info;

use crate::data::DistrictRecord;
use crate::error::PipelineError;

/// Serialize the filtered districts to a CSV file
///
/// The output carries the four projected columns and no row-index column.
/// An empty subset produces a header-only file.
pub fn save_results(filtered: &[DistrictRecord], output_path: &Path) -> crate::Result<()> {
    let file = File::create(output_path).map_err(|source| PipelineError::FileAccess {
        path: output_path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    for record in filtered {
        writer.serialize(record)?;
    }

    // serialize() only emits headers once a record is written; an empty
    // subset still needs the header row
    if filtered.is_empty() {
        writer.write_record([
            "Province",
            "Electoral District Name",
            "Elector Ratio",
            "Percentage of Voter Turnout",
        ])?;
    }

    writer.flush()?;
    info!("results saved to {}", output_path.display());
    println!("Results saved to {}", output_path.display());

    Ok(())
}
