use chrono::NaiveDate;

/// Calendar date format accepted at the API boundary.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Surrounding whitespace is ignored; any time or timezone component is rejected.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Some(NaiveDate)` - Successfully parsed date
/// - `None` - The value is not a valid calendar date in the expected format
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !is_iso_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

/// `%Y-%m-%d` alone also accepts signed years and unpadded fields.
fn is_iso_date_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Returns `true` when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
