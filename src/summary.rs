//! Combined schedule facts for display

use crate::describe::describe_cron_expression;
use crate::expression::validate_cron_expression;
use crate::next_run::NextRunEstimator;
use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// Everything a schedule view shows about one cron expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "DateTime<Tz>: Serialize"))]
pub struct ScheduleSummary<Tz: TimeZone> {
    /// The expression as entered
    pub expression: String,
    /// Whether the expression passes validation
    pub valid: bool,
    /// English description, or the expression itself
    pub description: String,
    /// Estimated next run
    pub next_run: DateTime<Tz>,
}

impl<Tz: TimeZone> ScheduleSummary<Tz> {
    pub fn new(cron: &str, now: &DateTime<Tz>) -> Self {
        Self::with_estimator(cron, now, &NextRunEstimator::default())
    }

    pub fn with_estimator(cron: &str, now: &DateTime<Tz>, estimator: &NextRunEstimator) -> Self {
        Self {
            expression: cron.to_string(),
            valid: validate_cron_expression(cron),
            description: describe_cron_expression(cron),
            next_run: estimator.estimate(cron, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_summary_of_valid_schedule() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let summary = ScheduleSummary::new("0 2 * * 0", &now);

        assert!(summary.valid);
        assert_eq!(summary.description, "Weekly on Sunday at 2:00 AM");
        assert_eq!(
            summary.next_run,
            Utc.with_ymd_and_hms(2024, 1, 16, 2, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_summary_of_invalid_schedule() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let summary = ScheduleSummary::new("invalid", &now);

        assert!(!summary.valid);
        assert_eq!(summary.description, "invalid");
        assert_eq!(summary.expression, "invalid");
    }
}
