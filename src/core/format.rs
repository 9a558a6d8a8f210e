//! Lexical formatting of amounts and dates for CII output.
//!
//! Decimal text always uses `.` and never groups digits; the output is
//! independent of any host locale.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits for monetary amounts.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Date lexical format (UNTDID 2379 code for `udt:DateTimeString/@format`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// 102: `yyyyMMdd`.
    #[default]
    Code102,
    /// `yyyy-MM-ddTHH:mm:ss`.
    DateTime,
}

impl DateFormat {
    /// Map a format code to a lexical format. Anything but `"102"` selects
    /// the full date-time form.
    pub fn from_code(code: &str) -> Self {
        match code {
            "102" => Self::Code102,
            _ => Self::DateTime,
        }
    }

    /// Value of the `format` attribute, if the form has a 2379 code.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Code102 => Some("102"),
            Self::DateTime => None,
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::Code102 => "%Y%m%d",
            Self::DateTime => "%Y-%m-%dT%H:%M:%S",
        }
    }
}

/// Render `value` with exactly `decimals` fractional digits.
///
/// Rounds half away from zero. A result of zero is never signed.
pub fn format_amount(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(decimals);
    rounded.to_string()
}

/// Render `value` as plain decimal text without trailing fractional zeros.
pub fn format_plain(value: Decimal) -> String {
    let mut normalized = value.normalize();
    if normalized.is_zero() {
        normalized.set_sign_positive(true);
    }
    normalized.to_string()
}

/// Format a calendar date. In [`DateFormat::DateTime`] mode the time is
/// midnight.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    format_datetime(date.and_time(NaiveTime::MIN), format)
}

/// Format a date-time.
pub fn format_datetime(dt: NaiveDateTime, format: DateFormat) -> String {
    dt.format(format.pattern()).to_string()
}
