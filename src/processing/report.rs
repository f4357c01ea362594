use serde::Serialize;

use crate::state::dataset::Dataset;

/// Output format for the printed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// The six reported metrics. Absent metrics (empty dataset) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub count: usize,
    pub mean: Option<f64>,
    pub variance: Option<f64>,
    pub standard_deviation: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub median: Option<f64>,
}

impl Report {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        match dataset.summary() {
            Some(s) => Report {
                count: s.count,
                mean: Some(s.mean),
                variance: Some(s.variance),
                standard_deviation: Some(s.std_dev),
                minimum: Some(s.min),
                maximum: Some(s.max),
                median: Some(s.median),
            },
            None => Report {
                count: 0,
                mean: None,
                variance: None,
                standard_deviation: None,
                minimum: None,
                maximum: None,
                median: None,
            },
        }
    }

    /// Six `Label: value` lines. Absent metrics print as `0`.
    ///
    /// Values use `f64`'s `Display`, so whole numbers print without a
    /// fractional part (`5`, not `5.0`).
    pub fn render_text(&self) -> String {
        let v = |m: Option<f64>| m.unwrap_or(0.0);
        format!(
            "Mean: {}\nVariance: {}\nStandard Deviation: {}\nMinimum: {}\nMaximum: {}\nMedian: {}\n",
            v(self.mean),
            v(self.variance),
            v(self.standard_deviation),
            v(self.minimum),
            v(self.maximum),
            v(self.median),
        )
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.render_json().map(|s| s + "\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_order_and_labels() {
        let ds = Dataset::from_values(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let text = Report::from_dataset(&ds).render_text();
        assert_eq!(
            text,
            "Mean: 5\nVariance: 4\nStandard Deviation: 2\nMinimum: 2\nMaximum: 9\nMedian: 4.5\n"
        );
    }

    #[test]
    fn empty_dataset_prints_zero_sentinel() {
        let report = Report::from_dataset(&Dataset::new());
        assert_eq!(report.count, 0);
        let text = report.render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.ends_with(": 0")));
    }

    #[test]
    fn json_report_uses_null_for_absent_metrics() {
        let json = Report::from_dataset(&Dataset::new()).render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 0);
        assert!(value["mean"].is_null());
        assert!(value["median"].is_null());
    }

    #[test]
    fn json_report_carries_values() {
        let ds = Dataset::from_values(vec![1.0, 2.0, 3.0, 4.0]);
        let out = Report::from_dataset(&ds).render(ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 4);
        assert_eq!(value["mean"], 2.5);
        assert_eq!(value["median"], 2.5);
        assert_eq!(value["minimum"], 1.0);
        assert_eq!(value["maximum"], 4.0);
    }
}
