use serde::Serialize;

use crate::types::{EncroachmentRecord, Severity};

/// Aggregate view of a finished analysis, for dashboards and reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub total_encroachments: usize,
    pub critical: usize,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub mean_depth_m: f64,
    pub median_depth_m: f64,
    pub total_encroached_area_sqm: f64,
    pub mean_ratio: f64,
}

impl AnalysisSummary {
    pub(crate) fn from_records(records: &[EncroachmentRecord]) -> Self {
        let count = |s: Severity| records.iter().filter(|r| r.severity == s).count();

        let mut depths: Vec<f64> = records.iter().map(|r| r.encroachment_depth).collect();
        depths.sort_by(f64::total_cmp);
        let median_depth_m = match depths.len() {
            0 => 0.0,
            n if n % 2 == 1 => depths[n / 2],
            n => (depths[n / 2 - 1] + depths[n / 2]) / 2.0,
        };

        let mean = |total: f64| {
            if records.is_empty() {
                0.0
            } else {
                total / records.len() as f64
            }
        };

        Self {
            total_encroachments: records.len(),
            critical: count(Severity::Critical),
            high: count(Severity::High),
            moderate: count(Severity::Moderate),
            low: count(Severity::Low),
            mean_depth_m: mean(depths.iter().sum()),
            median_depth_m,
            total_encroached_area_sqm: records.iter().map(|r| r.encroached_area_sqm).sum(),
            mean_ratio: mean(records.iter().map(|r| r.encroachment_ratio).sum()),
        }
    }
}
