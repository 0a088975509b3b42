use chrono::NaiveDate;
use tracing::warn;

/// Decimal digits used by [`round_default`].
pub const DEFAULT_ROUND_DIGITS: u32 = 2;

/// Date key formats accepted from the data source, tried in order.
const DATE_KEY_FORMATS: [&str; 2] = ["%m-%d-%Y", "%m/%d/%y"];

/// Human-readable label format (`Jan 01 2021`).
const DATE_LABEL_FORMAT: &str = "%b %d %Y";

/// Rounds half away from zero at the given decimal digit.
///
/// More than [`f64::DIGITS`] digits is beyond what the value carries; it is
/// returned unchanged.
#[must_use]
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    match i32::try_from(digits) {
        Ok(exponent) if digits <= f64::DIGITS => {
            let divider = 10_f64.powi(exponent);
            (value * divider).round() / divider
        }
        _ => value,
    }
}

#[must_use]
pub fn round_default(value: f64) -> f64 {
    round_to_digits(value, DEFAULT_ROUND_DIGITS)
}

/// Scales a count to `base` inhabitants and rounds to `digits`.
///
/// `population` must be positive; callers hold a validated
/// [`Population`](crate::core::Population).
#[must_use]
pub fn per_capita(value: f64, population: f64, base: f64, digits: u32) -> f64 {
    round_to_digits((value * base) / population, digits)
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    DATE_KEY_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(key.trim(), format).ok())
}

/// Reformats a source date key into a chart label.
///
/// Unparseable keys are passed through unchanged.
#[must_use]
pub fn format_date_label(key: &str) -> String {
    match parse_date_key(key) {
        Some(date) => date.format(DATE_LABEL_FORMAT).to_string(),
        None => {
            warn!(key, "unparseable date key, using it verbatim as label");
            key.to_owned()
        }
    }
}
