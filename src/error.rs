//! Error types for backup-schedule

use thiserror::Error;

use crate::expression::FieldKind;

/// Errors raised by strict cron expression parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The expression did not split into exactly five fields
    #[error("Expected 5 fields, got {found}")]
    FieldCount { found: usize },

    /// A field is neither `*` nor a plain integer literal
    #[error("Invalid value '{value}' in {field}")]
    InvalidField { field: FieldKind, value: String },

    /// A numeric field lies outside its allowed range
    #[error("Value {value} out of range ({min}-{max}) in {field}")]
    OutOfRange {
        field: FieldKind,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Result type alias for schedule operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
