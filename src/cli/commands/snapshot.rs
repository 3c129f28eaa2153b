use anyhow::{Context, Result};
use clap::ValueEnum;
use common::{DashboardData, Period};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

/// Render the dashboard datasets as they appear with `period` selected.
pub fn snapshot(period: Period, format: SnapshotFormat) -> Result<String> {
    let data = DashboardData::for_period(period);
    debug!(
        "Rendering {:?} snapshot for period {} ({} metrics, {} revenue points)",
        format,
        period,
        data.metrics.len(),
        data.revenue.len()
    );

    match format {
        SnapshotFormat::Json => {
            serde_json::to_string_pretty(&data).context("Failed to serialize snapshot as JSON")
        }
        SnapshotFormat::Yaml => {
            serde_yaml::to_string(&data).context("Failed to serialize snapshot as YAML")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_snapshot_round_trips() {
        let output = snapshot(Period::Year, SnapshotFormat::Json).unwrap();
        let parsed: DashboardData = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, DashboardData::for_period(Period::Year));
    }

    #[test]
    fn test_json_snapshot_uses_english_keys() {
        let output = snapshot(Period::Month, SnapshotFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["period"], "month");
        assert_eq!(value["revenue"][0]["month"], "Jan");
        assert_eq!(value["revenue"][0]["actual"], 45000.0);
        assert_eq!(value["metrics"][3]["trend"], "down");
        assert_eq!(value["categories"][0]["percent"], 35.0);
    }

    #[test]
    fn test_yaml_snapshot() {
        let output = snapshot(Period::Week, SnapshotFormat::Yaml).unwrap();
        assert!(output.contains("period: week"));
        let parsed: DashboardData = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.quick_stats.len(), 4);
    }

    #[test]
    fn test_snapshots_differ_only_in_period() {
        let week: serde_json::Value =
            serde_json::from_str(&snapshot(Period::Week, SnapshotFormat::Json).unwrap()).unwrap();
        let year: serde_json::Value =
            serde_json::from_str(&snapshot(Period::Year, SnapshotFormat::Json).unwrap()).unwrap();
        assert_ne!(week["period"], year["period"]);
        assert_eq!(week["revenue"], year["revenue"]);
        assert_eq!(week["sales"], year["sales"]);
        assert_eq!(week["categories"], year["categories"]);
    }
}
