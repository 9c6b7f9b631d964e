//! Month names and storm date parsing.

use chrono::NaiveDate;

/// Three-letter month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short name for a one-based month number.
pub fn month_short_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "???",
    }
}

/// Parse a month given either as a number (`1`..`12`) or a short name (`Jan`).
pub fn parse_month(text: &str) -> Option<u32> {
    let text = text.trim();
    if let Ok(n) = text.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(text))
        .map(|i| i as u32 + 1)
}

/// Expand a two-digit year around `pivot`: below it is 20xx, otherwise 19xx.
pub fn expand_two_digit_year(year: u32, pivot: u32) -> i32 {
    if year < pivot {
        2000 + year as i32
    } else {
        1900 + year as i32
    }
}

/// Parse a storm `BEGIN_DATE` of the form `M/D/YY`.
///
/// A trailing time token (`1/5/96 0:00`) is ignored. Years written with
/// four digits are used as-is; two-digit years go through
/// [`expand_two_digit_year`].
pub fn parse_begin_date(text: &str, pivot: u32) -> Option<NaiveDate> {
    let date_part = text.split_whitespace().next()?;
    let mut parts = date_part.split('/');
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let year_text = parts.next()?.trim();
    if parts.next().is_some() {
        return None;
    }

    let raw_year: u32 = year_text.parse().ok()?;
    let year = if year_text.len() <= 2 {
        expand_two_digit_year(raw_year, pivot)
    } else {
        raw_year as i32
    };

    NaiveDate::from_ymd_opt(year, month, day)
}
