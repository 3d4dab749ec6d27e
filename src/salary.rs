use serde::Deserialize;

/// A salary range attached to a listing, possibly one-sided.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SalaryRange {
    /// The lower bound of the range.
    #[serde(rename = "from")]
    pub lower: Option<f64>,
    /// The upper bound of the range.
    #[serde(rename = "to")]
    pub upper: Option<f64>,
    /// The currency code reported by the platform.
    pub currency: Option<String>,
}

impl SalaryRange {
    pub fn new(lower: Option<f64>, upper: Option<f64>, currency: impl Into<String>) -> Self {
        Self {
            lower,
            upper,
            currency: Some(currency.into()),
        }
    }

    /// A single representative salary for this range, if it has one.
    pub fn estimate(&self) -> Option<u64> {
        predict_salary(self.lower, self.upper)
    }
}

/// Collapses a salary range into a point estimate.
///
/// A one-sided range is extrapolated: a bare lower bound is scaled up by
/// 20%, a bare upper bound is scaled down by 20%. The platforms report an
/// absent bound as null or 0, so both count as missing. A range with no
/// usable bound has no estimate.
pub fn predict_salary(lower: Option<f64>, upper: Option<f64>) -> Option<u64> {
    match (usable(lower), usable(upper)) {
        (Some(lower), Some(upper)) => Some(((lower + upper) / 2.0).round() as u64),
        (Some(lower), None) => Some((lower * 1.2).round() as u64),
        (None, Some(upper)) => Some((upper * 0.8).round() as u64),
        (None, None) => None,
    }
}

fn usable(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| *value != 0.0)
}
