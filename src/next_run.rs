//! Next-run estimates for backup schedules
//!
//! The estimate is deliberately coarse: it only looks at the minute and hour
//! fields and always lands on a later calendar day ("tomorrow at H:MM", or the
//! day after if that is still behind `now`). Day-of-month, month and
//! day-of-week are ignored.

use crate::expression::parse_leading_int;
use chrono::{DateTime, Days, Duration, Local, LocalResult, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Fallback time of day used when the cron string does not provide one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Hour used when the hour field is missing or unparseable (default: 2)
    pub default_hour: u32,
    /// Minute used when the minute field is missing or unparseable (default: 0)
    pub default_minute: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_hour: 2,
            default_minute: 0,
        }
    }
}

/// Estimates when a backup schedule fires next
#[derive(Debug, Clone, Copy, Default)]
pub struct NextRunEstimator {
    config: EstimatorConfig,
}

impl NextRunEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate the next run of `cron` after `now`, in `now`'s time zone
    pub fn estimate<Tz: TimeZone>(&self, cron: &str, now: &DateTime<Tz>) -> DateTime<Tz> {
        let (hour, minute) = self.time_of_day(cron);
        let tz = now.timezone();
        let local_now = now.naive_local();

        let candidate = wall_clock_tomorrow(local_now, hour, minute).or_else(|| {
            tracing::debug!(
                "Time {}:{} from '{}' overflows, using default",
                hour,
                minute,
                cron
            );
            self.default_tomorrow(local_now)
        });

        let Some((candidate, mut next)) =
            candidate.and_then(|c| resolve_local(&tz, c).map(|next| (c, next)))
        else {
            return step_past(now);
        };

        if next < *now {
            next = candidate
                .checked_add_days(Days::new(1))
                .and_then(|dt| resolve_local(&tz, dt))
                .unwrap_or_else(|| step_past(now));
        }
        next
    }

    /// `(hour, minute)` read from the first two fields, with defaults
    fn time_of_day(&self, cron: &str) -> (i64, i64) {
        let parts: Vec<&str> = cron.split(' ').collect();
        if parts.len() < 2 {
            return (
                i64::from(self.config.default_hour),
                i64::from(self.config.default_minute),
            );
        }

        let minute =
            parse_leading_int(parts[0]).unwrap_or_else(|| i64::from(self.config.default_minute));
        let hour =
            parse_leading_int(parts[1]).unwrap_or_else(|| i64::from(self.config.default_hour));
        (hour, minute)
    }

    fn default_tomorrow(&self, local_now: NaiveDateTime) -> Option<NaiveDateTime> {
        wall_clock_tomorrow(
            local_now,
            i64::from(self.config.default_hour),
            i64::from(self.config.default_minute),
        )
    }
}

/// Local midnight of the next calendar day plus `hour` hours and `minute`
/// minutes. Values outside 0-23 / 0-59 roll into neighbouring days.
fn wall_clock_tomorrow(
    local_now: NaiveDateTime,
    hour: i64,
    minute: i64,
) -> Option<NaiveDateTime> {
    let midnight = local_now
        .date()
        .checked_add_days(Days::new(1))?
        .and_hms_opt(0, 0, 0)?;
    let offset = Duration::try_hours(hour)?.checked_add(&Duration::try_minutes(minute)?)?;
    midnight.checked_add_signed(offset)
}

/// Map a local wall-clock time into `tz`. Ambiguous times take the earlier
/// instant; times inside a DST gap move forward one hour.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(a, b) => Some(a.min(b)),
        LocalResult::None => {
            let shifted = naive.checked_add_signed(Duration::try_hours(1)?)?;
            tz.from_local_datetime(&shifted).earliest()
        }
    }
}

/// Used when no wall-clock candidate can be built or mapped into the zone:
/// one day after `now`, else one minute after it. Only the last representable
/// minute comes back unchanged.
fn step_past<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    tracing::debug!("No wall-clock candidate after {:?}, stepping past it", now);
    now.clone()
        .checked_add_days(Days::new(1))
        .or_else(|| now.clone().checked_add_signed(Duration::try_minutes(1)?))
        .unwrap_or_else(|| now.clone())
}

/// Estimate the next run of `cron` after `now`
///
/// # Examples
///
/// ```
/// use backup_schedule::next_run_time;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
/// let next = next_run_time("0 2 * * *", &now);
/// assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 16, 2, 0, 0).unwrap());
/// ```
pub fn next_run_time<Tz: TimeZone>(cron: &str, now: &DateTime<Tz>) -> DateTime<Tz> {
    NextRunEstimator::default().estimate(cron, now)
}

/// [`next_run_time`] against the current local time
pub fn next_run_time_now(cron: &str) -> DateTime<Local> {
    next_run_time(cron, &Local::now())
}
