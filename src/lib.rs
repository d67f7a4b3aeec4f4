//! # backup-schedule
//!
//! Cron helpers behind the backup scheduling screens.
//!
//! ## Overview
//!
//! Backup schedules are restricted 5-field cron expressions where every field
//! is either `*` or a single number. This crate validates them, turns them
//! into short English phrases, estimates when they fire next, and maps backup
//! export formats to display icons. Every public function is total: bad input
//! degrades to `false`, the input string, or a default time.
//!
//! ## Quick Start
//!
//! ```rust
//! use backup_schedule::{
//!     describe_cron_expression, get_format_icon, next_run_time, validate_cron_expression,
//! };
//! use chrono::{TimeZone, Utc};
//!
//! assert!(validate_cron_expression("0 2 * * 0"));
//! assert_eq!(describe_cron_expression("0 2 * * 0"), "Weekly on Sunday at 2:00 AM");
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
//! let next = next_run_time("0 2 * * 0", &now);
//! assert_eq!(next, Utc.with_ymd_and_hms(2024, 1, 16, 2, 0, 0).unwrap());
//!
//! assert_eq!(get_format_icon("csv").icon, "table");
//! ```
//!
//! ## Modules
//!
//! - **expression** — strict parsing and validation
//! - **describe** — curated and composed English descriptions
//! - **next_run** — coarse next-run estimates
//! - **icon** — format tag to icon table
//! - **summary** — the above bundled for one expression

pub mod describe;
pub mod error;
pub mod expression;
pub mod icon;
pub mod next_run;
pub mod summary;

pub use describe::{describe_cron_expression, KNOWN_SCHEDULES};
pub use error::{Result, ScheduleError};
pub use expression::{validate_cron_expression, CronExpression, CronField, FieldKind};
pub use icon::{get_format_icon, FormatIcon};
pub use next_run::{next_run_time, next_run_time_now, EstimatorConfig, NextRunEstimator};
pub use summary::ScheduleSummary;

/// Alias kept for callers that know the describer by its dashboard name
pub use describe::describe_cron_expression as parse_cron_expression;
