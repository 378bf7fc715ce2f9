//! Scatter plot of elector ratio against voter turnout using Plotters

use std::path::Path;

use log::info;
use plotters::prelude::*;

use crate::data::DistrictRecord;

/// Create a scatter plot of Elector Ratio vs Voter Turnout
///
/// All districts are drawn in blue; the filtered high-ratio, low-turnout
/// districts are overlaid in red. The plot is saved to a PNG file rather than
/// displayed interactively.
///
/// # Arguments
/// * `data` - The full cleaned table
/// * `filtered` - The filtered subset to highlight
/// * `output_path` - Path to save the PNG plot
/// * `plot_title` - Title for the plot
pub fn create_turnout_scatter(
    data: &[DistrictRecord],
    filtered: &[DistrictRecord],
    output_path: &Path,
    plot_title: Option<&str>,
) -> crate::Result<()> {
    let title = plot_title.unwrap_or("Relationship Between Elector Ratio and Voter Turnout");

    let (ratio_range, turnout_range) = plot_bounds(data);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(ratio_range, turnout_range)?;

    chart
        .configure_mesh()
        .x_desc("Elector Ratio (Electors / Population)")
        .y_desc("Voter Turnout (%)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart
        .draw_series(
            data.iter()
                .map(|r| Circle::new((r.elector_ratio, r.turnout), 4, BLUE.filled())),
        )?
        .label(format!("Total: {}", data.len()))
        .legend(|(x, y)| Circle::new((x + 5, y), 4, BLUE.filled()));

    chart
        .draw_series(
            filtered
                .iter()
                .map(|r| Circle::new((r.elector_ratio, r.turnout), 4, RED.filled())),
        )?
        .label("High Ratio & Low Turnout")
        .legend(|(x, y)| Circle::new((x + 5, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("scatter plot saved to {}", output_path.display());

    Ok(())
}

/// Compute padded axis bounds from the data
///
/// An empty table falls back to fixed bounds so the chart can still be built.
fn plot_bounds(data: &[DistrictRecord]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    if data.is_empty() {
        return (0.0..1.0, 0.0..100.0);
    }

    let ratio_min = data
        .iter()
        .map(|r| r.elector_ratio)
        .fold(f64::INFINITY, f64::min);
    let ratio_max = data
        .iter()
        .map(|r| r.elector_ratio)
        .fold(f64::NEG_INFINITY, f64::max);
    let turnout_min = data.iter().map(|r| r.turnout).fold(f64::INFINITY, f64::min);
    let turnout_max = data
        .iter()
        .map(|r| r.turnout)
        .fold(f64::NEG_INFINITY, f64::max);

    (
        (ratio_min - 0.05)..(ratio_max + 0.05),
        (turnout_min - 5.0)..(turnout_max + 5.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_data() -> (Vec<DistrictRecord>, Vec<DistrictRecord>) {
        let data = vec![
            DistrictRecord {
                province: "A".to_string(),
                district: "D1".to_string(),
                elector_ratio: 0.8,
                turnout: 50.0,
            },
            DistrictRecord {
                province: "B".to_string(),
                district: "D2".to_string(),
                elector_ratio: 0.5,
                turnout: 60.0,
            },
        ];
        let filtered = vec![data[0].clone()];
        (data, filtered)
    }

    #[test]
    fn test_create_turnout_scatter() {
        let (data, filtered) = create_test_data();
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("test_plot.png");

        let result = create_turnout_scatter(&data, &filtered, &output_path, None);
        assert!(result.is_ok());
        assert!(output_path.exists());
    }

    #[test]
    fn test_scatter_with_custom_title() {
        let (data, filtered) = create_test_data();
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("titled_plot.png");

        let result =
            create_turnout_scatter(&data, &filtered, &output_path, Some("Custom Title"));
        assert!(result.is_ok());
        assert!(output_path.exists());
    }

    #[test]
    fn test_scatter_with_empty_table() {
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("empty_plot.png");

        let result = create_turnout_scatter(&[], &[], &output_path, None);
        assert!(result.is_ok());
        assert!(output_path.exists());
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let (data, filtered) = create_test_data();
        let before = data.clone();
        let dir = tempdir().unwrap();

        create_turnout_scatter(&data, &filtered, &dir.path().join("p.png"), None).unwrap();

        assert_eq!(data, before);
    }
}
