use serde::{Deserialize, Serialize};

/// Aggregate for one measured quantity over the reporting period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricStats {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// The four quantities the backend tracks per participant.
/// Wire names are snake_case as emitted by the metrics service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsSummary {
    #[serde(default)]
    pub fatigue: Option<MetricStats>,
    #[serde(default)]
    pub heart_rate: Option<MetricStats>,
    #[serde(default)]
    pub concentration: Option<MetricStats>,
    #[serde(default)]
    pub productivity: Option<MetricStats>,
}

/// Server-rendered chart markup. Opaque to this client: rendering it is the
/// UI's concern, this layer just carries the strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartSet {
    #[serde(default)]
    pub fatigue_chart: Option<String>,
    #[serde(default)]
    pub heart_rate_chart: Option<String>,
    #[serde(default)]
    pub composite_chart: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsReport {
    #[serde(default)]
    pub stats: Option<MetricsSummary>,
    #[serde(default)]
    pub charts: Option<ChartSet>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub total_measurements: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metrics_report() {
        let json = r#"{
            "stats": {
                "fatigue": {"min": 1.0, "avg": 3.2, "max": 7.5},
                "heart_rate": {"min": 52.0, "avg": 74.1, "max": 140.0}
            },
            "charts": {
                "fatigue_chart": "<svg>...</svg>",
                "composite_chart": "<svg>...</svg>"
            },
            "period": "2026-03-01 - 2026-03-14",
            "total_measurements": 322
        }"#;
        let report: MetricsReport = serde_json::from_str(json).expect("metrics report");

        let stats = report.stats.expect("stats");
        assert_eq!(stats.fatigue.unwrap().avg, Some(3.2));
        assert!(stats.concentration.is_none());

        let charts = report.charts.expect("charts");
        assert!(charts.fatigue_chart.is_some());
        assert!(charts.heart_rate_chart.is_none());
        assert_eq!(report.total_measurements, Some(322));
    }

    #[test]
    fn test_parse_empty_report() {
        // A participant with no measurements yet produces an empty object
        let report: MetricsReport = serde_json::from_str("{}").expect("empty report");
        assert!(report.stats.is_none());
        assert!(report.charts.is_none());
    }
}
