//! Display formatting for metric values.
//!
//! Dashboards reading the derived tables render numbers through
//! [`format_value`] so every view shows missing data and large counts the
//! same way.

use std::fmt;

/// Placeholder rendered for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// How a value is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatMode {
    /// One decimal place followed by `%`, e.g. `50.0%`.
    Percentage,
    /// Integer grouped by thousands, e.g. `1,234`.
    Thousands,
    /// Millions with one decimal place, e.g. `1.2M`.
    Millions,
    /// Same rendering as [`FormatMode::Thousands`].
    #[default]
    Default,
}

impl FormatMode {
    /// Parses a mode tag. Unrecognized tags select [`FormatMode::Default`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "percentage" => FormatMode::Percentage,
            "thousands" => FormatMode::Thousands,
            "millions" => FormatMode::Millions,
            _ => FormatMode::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatMode::Percentage => "percentage",
            FormatMode::Thousands => "thousands",
            FormatMode::Millions => "millions",
            FormatMode::Default => "default",
        }
    }
}

impl From<&str> for FormatMode {
    fn from(tag: &str) -> Self {
        FormatMode::from_tag(tag)
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `value` for display.
///
/// `None` and NaN render as `N/A` in every mode.
///
/// ```
/// use vax_common::{FormatMode, format_value};
///
/// assert_eq!(format_value(Some(1_234_567.0), FormatMode::Millions), "1.2M");
/// assert_eq!(format_value(Some(50.0), FormatMode::Percentage), "50.0%");
/// assert_eq!(format_value(None, FormatMode::Thousands), "N/A");
/// ```
pub fn format_value(value: Option<f64>, mode: FormatMode) -> String {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return NOT_AVAILABLE.to_string();
    };
    match mode {
        FormatMode::Percentage => format!("{value:.1}%"),
        FormatMode::Millions => format!("{:.1}M", value / 1_000_000.0),
        FormatMode::Thousands | FormatMode::Default => group_thousands(value),
    }
}

/// Rounds to an integer and inserts `,` between groups of three digits.
fn group_thousands(value: f64) -> String {
    let rendered = format!("{value:.0}");
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        // inf
        return rendered;
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
