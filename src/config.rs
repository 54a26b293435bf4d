use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env as std_env;
use validator::Validate;

use crate::reports::criteria::CriteriaSelection;
use crate::reports::period::PeriodKind;

/// Default values for report configuration
const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 10;

/// Caller-supplied parameters for a single report-generation call.
///
/// The object is immutable for the duration of the call; a caller that wants
/// a different period, criteria, or threshold builds a new value. This
/// replaces mutable setters on a long-lived generator, which could be
/// observed mid-update by a concurrent `generate`.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct ReportParameters {
    /// Kind of reporting period to resolve.
    pub period: PeriodKind,

    /// Reference date anchoring `Daily`/`Weekly`/`Monthly` periods.
    pub reference_date: NaiveDate,

    /// Per-dimension accepted-value sets; empty set = unrestricted.
    #[serde(default)]
    pub criteria: CriteriaSelection,

    /// Quantity at or below which a product counts as low stock.
    #[serde(default = "default_low_stock_threshold")]
    #[validate(range(min = 0, message = "low-stock threshold must be non-negative"))]
    pub low_stock_threshold: i32,
}

fn default_low_stock_threshold() -> i32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl ReportParameters {
    pub fn new(period: PeriodKind, reference_date: NaiveDate) -> Self {
        Self {
            period,
            reference_date,
            criteria: CriteriaSelection::default(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn with_criteria(mut self, criteria: CriteriaSelection) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: i32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}

/// Initializes tracing using the provided log level as the default filter
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::fmt;

    let default_directive = format!("backoffice_reporting={}", level);
    let filter_directive = std_env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt().with_env_filter(filter_directive).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter_directive).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_valid() {
        let params = ReportParameters::new(
            PeriodKind::Daily,
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        );
        assert_eq!(params.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn negative_threshold_fails_validation() {
        let params = ReportParameters::new(
            PeriodKind::Daily,
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        )
        .with_low_stock_threshold(-1);
        assert!(params.validate().is_err());
    }

    #[test]
    fn parameters_deserialize_with_defaults() {
        let params: ReportParameters = serde_json::from_str(
            r#"{"period": "Monthly", "reference_date": "2025-05-15"}"#,
        )
        .unwrap();
        assert_eq!(params.period, PeriodKind::Monthly);
        assert!(params.criteria.is_unrestricted());
        assert_eq!(params.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }
}
