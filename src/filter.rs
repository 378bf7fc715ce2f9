//! Threshold-based selection of high-ratio, low-turnout districts

use crate::data::DistrictRecord;

/// Threshold configuration for the district filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    /// Districts with Elector Ratio strictly above this value are selected
    pub elector_ratio_threshold: f64,
    /// Districts with Voter Turnout strictly below this percentage are selected
    pub voter_turnout_threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            elector_ratio_threshold: 0.75,
            voter_turnout_threshold: 55.0,
        }
    }
}

/// Select districts where the Elector Ratio exceeds the ratio threshold and
/// Voter Turnout is below the turnout threshold
///
/// Both comparisons are strict. Row order and the full column set are
/// preserved; an empty result is valid.
pub fn filter_high_ratio_low_turnout(
    data: &[DistrictRecord],
    config: &FilterConfig,
) -> Vec<DistrictRecord> {
    data.iter()
        .filter(|record| {
            record.elector_ratio > config.elector_ratio_threshold
                && record.turnout < config.voter_turnout_threshold
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(province: &str, district: &str, ratio: f64, turnout: f64) -> DistrictRecord {
        DistrictRecord {
            province: province.to_string(),
            district: district.to_string(),
            elector_ratio: ratio,
            turnout,
        }
    }

    #[test]
    fn test_selects_high_ratio_low_turnout() {
        let data = vec![
            record("A", "D1", 0.8, 50.0),
            record("B", "D2", 0.5, 60.0),
        ];

        let filtered = filter_high_ratio_low_turnout(&data, &FilterConfig::default());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].district, "D1");
    }

    #[test]
    fn test_boundary_values_are_excluded() {
        // Exactly at threshold fails the strict comparison on either axis
        let data = vec![
            record("A", "AtRatio", 0.75, 40.0),
            record("A", "AtTurnout", 0.9, 55.0),
            record("A", "JustInside", 0.7500001, 54.9999),
        ];

        let filtered = filter_high_ratio_low_turnout(&data, &FilterConfig::default());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].district, "JustInside");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = vec![
            record("A", "D1", 0.8, 50.0),
            record("B", "D2", 0.9, 30.0),
            record("C", "D3", 0.6, 70.0),
        ];
        let config = FilterConfig::default();

        let once = filter_high_ratio_low_turnout(&data, &config);
        let twice = filter_high_ratio_low_turnout(&once, &config);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let data = vec![
            record("A", "D3", 0.9, 10.0),
            record("A", "D1", 0.8, 20.0),
            record("A", "D2", 0.85, 15.0),
        ];

        let filtered = filter_high_ratio_low_turnout(&data, &FilterConfig::default());

        let districts: Vec<&str> = filtered.iter().map(|r| r.district.as_str()).collect();
        assert_eq!(districts, vec!["D3", "D1", "D2"]);
    }

    #[test]
    fn test_empty_input_and_empty_result() {
        let config = FilterConfig::default();
        assert!(filter_high_ratio_low_turnout(&[], &config).is_empty());

        let data = vec![record("A", "D1", 0.1, 90.0)];
        assert!(filter_high_ratio_low_turnout(&data, &config).is_empty());
    }
}
