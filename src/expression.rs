//! Cron expression parser
//!
//! Accepts the restricted 5-field form used by backup schedules:
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-6, 0=Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```
//!
//! Each field is either `*` or a single integer. Lists, ranges and steps
//! (`1,3,5`, `1-5`, `*/5`) are rejected. Fields are separated by exactly one
//! space; no trimming happens, so doubled or surrounding spaces produce empty
//! fields and fail validation.

use crate::error::{Result, ScheduleError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five positions of a cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All field kinds in expression order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Inclusive `(min, max)` range accepted for this field
    pub fn range(self) -> (u32, u32) {
        match self {
            FieldKind::Minute => (0, 59),
            FieldKind::Hour => (0, 23),
            FieldKind::DayOfMonth => (1, 31),
            FieldKind::Month => (1, 12),
            FieldKind::DayOfWeek => (0, 6),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Minute => write!(f, "minute"),
            FieldKind::Hour => write!(f, "hour"),
            FieldKind::DayOfMonth => write!(f, "day of month"),
            FieldKind::Month => write!(f, "month"),
            FieldKind::DayOfWeek => write!(f, "day of week"),
        }
    }
}

/// A single cron field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CronField {
    /// `*`
    Any,
    /// A literal value inside the field's range
    Value(u32),
}

impl CronField {
    /// Parse one field, checking it against the range of `kind`
    pub fn parse(text: &str, kind: FieldKind) -> Result<Self> {
        if text == "*" {
            return Ok(CronField::Any);
        }

        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScheduleError::InvalidField {
                field: kind,
                value: text.to_string(),
            });
        }

        let value: u32 = text.parse().map_err(|_| ScheduleError::InvalidField {
            field: kind,
            value: text.to_string(),
        })?;

        let (min, max) = kind.range();
        if value < min || value > max {
            return Err(ScheduleError::OutOfRange {
                field: kind,
                value,
                min,
                max,
            });
        }

        Ok(CronField::Value(value))
    }

    /// The literal value, or `None` for `*`
    pub fn value(self) -> Option<u32> {
        match self {
            CronField::Any => None,
            CronField::Value(v) => Some(v),
        }
    }

    /// Whether the field is `*`
    pub fn is_any(self) -> bool {
        self == CronField::Any
    }
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CronField::Any => write!(f, "*"),
            CronField::Value(v) => write!(f, "{}", v),
        }
    }
}

/// A validated backup cron expression
///
/// Serializes as its 5-field text; deserializing goes through [`CronExpression::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CronExpression {
    pub minute: CronField,
    pub hour: CronField,
    pub day_of_month: CronField,
    pub month: CronField,
    pub day_of_week: CronField,
}

impl CronExpression {
    /// Parse a cron expression string
    ///
    /// # Examples
    ///
    /// ```
    /// use backup_schedule::{CronExpression, CronField};
    ///
    /// let expr = CronExpression::parse("30 2 * * 1").unwrap();
    /// assert_eq!(expr.hour, CronField::Value(2));
    /// assert!(expr.day_of_month.is_any());
    ///
    /// assert!(CronExpression::parse("*/5 * * * *").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let parts: Vec<&str> = expression.split(' ').collect();

        if parts.len() != 5 {
            return Err(ScheduleError::FieldCount { found: parts.len() });
        }

        Ok(Self {
            minute: CronField::parse(parts[0], FieldKind::Minute)?,
            hour: CronField::parse(parts[1], FieldKind::Hour)?,
            day_of_month: CronField::parse(parts[2], FieldKind::DayOfMonth)?,
            month: CronField::parse(parts[3], FieldKind::Month)?,
            day_of_week: CronField::parse(parts[4], FieldKind::DayOfWeek)?,
        })
    }

    /// Field by kind
    pub fn field(&self, kind: FieldKind) -> CronField {
        match kind {
            FieldKind::Minute => self.minute,
            FieldKind::Hour => self.hour,
            FieldKind::DayOfMonth => self.day_of_month,
            FieldKind::Month => self.month,
            FieldKind::DayOfWeek => self.day_of_week,
        }
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}

impl std::str::FromStr for CronExpression {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CronExpression {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<CronExpression> for String {
    fn from(expr: CronExpression) -> Self {
        expr.to_string()
    }
}

/// Check whether `cron` is a valid backup schedule expression
///
/// Never fails; malformed input simply returns `false`.
pub fn validate_cron_expression(cron: &str) -> bool {
    match CronExpression::parse(cron) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("Rejected cron expression '{}': {}", cron, e);
            false
        }
    }
}

/// Lenient integer parse: optional leading whitespace and sign, then the
/// longest run of ASCII digits. Trailing text is ignored.
pub(crate) fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_wildcards() {
        let expr = CronExpression::parse("* * * * *").unwrap();
        for kind in FieldKind::ALL {
            assert!(expr.field(kind).is_any());
        }
    }

    #[test]
    fn test_parse_specific_time() {
        let expr = CronExpression::parse("30 2 * * *").unwrap();
        assert_eq!(expr.minute, CronField::Value(30));
        assert_eq!(expr.hour, CronField::Value(2));
        assert_eq!(expr.to_string(), "30 2 * * *");
    }

    #[test]
    fn test_parse_field_bounds() {
        let expr = CronExpression::parse("59 23 31 12 6").unwrap();
        assert_eq!(expr.day_of_week.value(), Some(6));
        assert!(CronExpression::parse("0 0 1 1 0").is_ok());
    }

    #[test]
    fn test_parse_invalid_field_count() {
        assert_eq!(
            CronExpression::parse("* * *"),
            Err(ScheduleError::FieldCount { found: 3 })
        );
        assert_eq!(
            CronExpression::parse("* * * * * *"),
            Err(ScheduleError::FieldCount { found: 6 })
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = CronExpression::parse("0 24 * * *").unwrap_err();
        assert_eq!(
            err,
            ScheduleError::OutOfRange {
                field: FieldKind::Hour,
                value: 24,
                min: 0,
                max: 23
            }
        );
        assert_eq!(err.to_string(), "Value 24 out of range (0-23) in hour");
    }

    #[test]
    fn test_parse_rejects_extended_syntax() {
        for expr in ["*/5 * * * *", "0 9-17 * * *", "0 0 * * 1,3,5", "-1 * * * *"] {
            assert!(
                matches!(
                    CronExpression::parse(expr),
                    Err(ScheduleError::InvalidField { .. })
                ),
                "{} should be rejected",
                expr
            );
        }
    }

    #[test]
    fn test_parse_rejects_empty_fields() {
        assert!(CronExpression::parse("0  2 * * *").is_err());
        assert!(CronExpression::parse(" 0 2 * * *").is_err());
        assert!(CronExpression::parse("0 2 * * * ").is_err());
    }

    #[test]
    fn test_parse_huge_number() {
        assert!(matches!(
            CronExpression::parse("99999999999 * * * *"),
            Err(ScheduleError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let expr: CronExpression = "0 2 15 * *".parse().unwrap();
        assert_eq!(expr.day_of_month, CronField::Value(15));
    }

    #[test]
    fn test_serde_uses_text_form() {
        let expr = CronExpression::parse("30 4 * * 2").unwrap();
        assert_eq!(serde_json::to_string(&expr).unwrap(), r#""30 4 * * 2""#);

        let back: CronExpression = serde_json::from_str(r#""30 4 * * 2""#).unwrap();
        assert_eq!(back, expr);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        for json in [r#""99 77 * * 9""#, r#""0 2 * * 7""#, r#""0 2 * *""#, r#""*/5 * * * *""#] {
            let err = serde_json::from_str::<CronExpression>(json).unwrap_err();
            assert!(err.is_data(), "{}: {}", json, err);
        }

        let err = serde_json::from_str::<CronExpression>(r#""0 24 * * *""#).unwrap_err();
        assert!(err.to_string().contains("out of range (0-23) in hour"));
    }

    #[test]
    fn test_deserialize_rejects_field_objects() {
        let json = r#"{"minute":{"value":99},"hour":{"value":77},"day_of_month":"any","month":"any","day_of_week":{"value":9}}"#;
        assert!(serde_json::from_str::<CronExpression>(json).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(validate_cron_expression("0 2 * * *"));
        assert!(!validate_cron_expression(""));
        assert!(!validate_cron_expression("0 2 * *"));
        assert!(!validate_cron_expression("0 2 0 * *"));
        assert!(!validate_cron_expression("0 2 32 * *"));
        assert!(!validate_cron_expression("0 2 * 13 *"));
        assert!(!validate_cron_expression("0 2 * 0 *"));
        assert!(!validate_cron_expression("0 2 * * 7"));
        assert!(!validate_cron_expression("60 2 * * *"));
        assert!(!validate_cron_expression("a b c d e"));
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("15"), Some(15));
        assert_eq!(parse_leading_int("1-5"), Some(1));
        assert_eq!(parse_leading_int("1,15"), Some(1));
        assert_eq!(parse_leading_int(" -3x"), Some(-3));
        assert_eq!(parse_leading_int("*/15"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}
