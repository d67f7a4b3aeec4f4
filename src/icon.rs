//! Display icons for backup export formats

use serde::Serialize;

/// Icon identifier and CSS color classes for a backup format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatIcon {
    pub icon: &'static str,
    pub color: &'static str,
}

const CSV: FormatIcon = FormatIcon {
    icon: "table",
    color: "text-green-600 dark:text-green-400",
};

const JSON: FormatIcon = FormatIcon {
    icon: "code",
    color: "text-yellow-600 dark:text-yellow-400",
};

const PARQUET: FormatIcon = FormatIcon {
    icon: "database",
    color: "text-blue-600 dark:text-blue-400",
};

const FULL_DUMP: FormatIcon = FormatIcon {
    icon: "archive",
    color: "text-purple-600 dark:text-purple-400",
};

/// Look up the icon for a backup format tag
///
/// Matching is exact and case-sensitive; unknown tags get the parquet icon.
pub fn get_format_icon(format: &str) -> FormatIcon {
    match format {
        "csv" => CSV,
        "json" => JSON,
        "parquet" => PARQUET,
        "full_dump" => FULL_DUMP,
        _ => PARQUET,
    }
}
