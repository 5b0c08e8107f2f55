use serde::Serialize;

/// Severity thresholds, in metres of encroachment depth. Policy constants
/// for a 50 m statutory reserve; a production deployment would read these
/// from configuration rather than recompiling.
pub const CRITICAL_DEPTH_M: f64 = 30.0;
pub const HIGH_DEPTH_M: f64 = 15.0;
pub const MODERATE_DEPTH_M: f64 = 5.0;

/// Ordinal severity of an encroachment, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Critical, // depth > 30 m
    High,     // 15 m < depth <= 30 m
    Moderate, // 5 m < depth <= 15 m
    Low,      // depth <= 5 m
}

impl Severity {
    /// Classify an encroachment depth. Boundary values fall to the less
    /// severe tier (strict greater-than on each upper bound).
    pub fn classify(depth_m: f64) -> Self {
        if depth_m > CRITICAL_DEPTH_M {
            Severity::Critical
        } else if depth_m > HIGH_DEPTH_M {
            Severity::High
        } else if depth_m > MODERATE_DEPTH_M {
            Severity::Moderate
        } else {
            Severity::Low
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Moderate => "Moderate",
            Severity::Low => "Low",
        }
    }

    pub fn order() -> [Severity; 4] {
        [
            Severity::Critical,
            Severity::High,
            Severity::Moderate,
            Severity::Low,
        ]
    }
}
