//! Monthly mean sea level records.

use super::calendar::{month_short_name, parse_month};
use super::columns::{csv_reader, field, line_of, parse_real, required_column, skip_row};
use crate::error::Result;
use chrono::NaiveDate;

const TABLE: &str = "sea level";

/// CSV column names.
mod column {
    /// Calendar year.
    pub(super) const YEAR: &str = "Year";
    /// Month number or short name.
    pub(super) const MONTH: &str = "Month";
    /// Monthly mean sea level.
    pub(super) const MONTHLY_MSL: &str = "Monthly_MSL";
    /// Linear trend value.
    pub(super) const LINEAR_TREND: &str = "Linear_Trend";
    /// Upper confidence bound.
    pub(super) const HIGH_CONF: &str = "High_Conf.";
    /// Lower confidence bound.
    pub(super) const LOW_CONF: &str = "Low_Conf.";
}

/// One month of station measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct SeaLevelRecord {
    /// Calendar year.
    pub year: i32,
    /// One-based month.
    pub month: u32,
    /// First day of the month.
    pub date: NaiveDate,
    /// Monthly mean sea level (NaN when the source text was malformed).
    pub monthly_mean: f64,
    /// Linear trend at this month.
    pub linear_trend: f64,
    /// Upper confidence bound.
    pub high_confidence: f64,
    /// Lower confidence bound.
    pub low_confidence: f64,
}

impl SeaLevelRecord {
    /// Short month name, e.g. `"Jan"`.
    pub fn month_name(&self) -> &'static str {
        month_short_name(self.month)
    }
}

/// Parse the sea level CSV.
///
/// Expected header: `Year, Month, Monthly_MSL, Linear_Trend, High_Conf., Low_Conf.`
///
/// Real-valued columns never fail: malformed text becomes NaN. A row whose
/// `Year` or `Month` does not parse (a blank trailing line, say) is logged
/// and left out, since it can never belong to a displayed year.
///
/// # Example CSV
/// ```text
/// Year, Month, Monthly_MSL, Linear_Trend, High_Conf., Low_Conf.
/// 1996,  1,   -0.112,  -0.098,  -0.071,  -0.125
/// ```
pub fn parse_sea_level_csv(text: &str) -> Result<Vec<SeaLevelRecord>> {
    let mut rdr = csv_reader(text);
    let headers = rdr.headers()?.clone();

    let year_idx = required_column(&headers, TABLE, column::YEAR)?;
    let month_idx = required_column(&headers, TABLE, column::MONTH)?;
    let msl_idx = required_column(&headers, TABLE, column::MONTHLY_MSL)?;
    let trend_idx = required_column(&headers, TABLE, column::LINEAR_TREND)?;
    let high_idx = required_column(&headers, TABLE, column::HIGH_CONF)?;
    let low_idx = required_column(&headers, TABLE, column::LOW_CONF)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let r = result?;
        let line = line_of(&r);

        let year_text = field(&r, year_idx);
        let Ok(year) = year_text.parse::<i32>() else {
            skip_row(TABLE, line, column::YEAR, year_text);
            continue;
        };

        let month_text = field(&r, month_idx);
        let Some(month) = parse_month(month_text) else {
            skip_row(TABLE, line, column::MONTH, month_text);
            continue;
        };

        let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) else {
            skip_row(TABLE, line, column::YEAR, year_text);
            continue;
        };

        records.push(SeaLevelRecord {
            year,
            month,
            date,
            monthly_mean: parse_real(field(&r, msl_idx)),
            linear_trend: parse_real(field(&r, trend_idx)),
            high_confidence: parse_real(field(&r, high_idx)),
            low_confidence: parse_real(field(&r, low_idx)),
        });
    }

    tracing::debug!("Parsed {} sea level records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TidelineError;

    const HEADER: &str = "Year, Month, Monthly_MSL, Linear_Trend, High_Conf., Low_Conf.\n";

    #[test]
    fn parses_padded_rows_in_source_order() {
        let csv = format!(
            "{HEADER}  1996 ,  2 , -0.050 , -0.060 , -0.030 , -0.090 \n1996,1,-0.1,-0.061,-0.04,-0.12\n"
        );
        let records = parse_sea_level_csv(&csv).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 1996);
        assert_eq!(records[0].month, 2);
        assert_eq!(records[0].month_name(), "Feb");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(1996, 2, 1).unwrap());
        assert_eq!(records[0].monthly_mean, -0.05);
        assert_eq!(records[0].high_confidence, -0.03);
        assert_eq!(records[1].month, 1);
        assert_eq!(records[1].low_confidence, -0.12);
    }

    #[test]
    fn malformed_reals_become_nan() {
        let csv = format!("{HEADER}2001,Mar,abc,,0.1,-0.1\n");
        let records = parse_sea_level_csv(&csv).unwrap();

        assert_eq!(records[0].month, 3);
        assert!(records[0].monthly_mean.is_nan());
        assert!(records[0].linear_trend.is_nan());
        assert_eq!(records[0].high_confidence, 0.1);
    }

    #[test]
    fn rows_with_bad_keys_are_skipped() {
        let csv = format!(
            "{HEADER}1996,1,-0.1,0,0,0\nnineteen,2,0,0,0,0\n  ,  ,,,,\n1996,Smarch,0,0,0,0\n1996,3,-0.3,0,0,0\n   \n"
        );
        let records = parse_sea_level_csv(&csv).unwrap();

        let months: Vec<u32> = records.iter().map(|r| r.month).collect();
        assert_eq!(months, vec![1, 3]);
        assert_eq!(records[1].monthly_mean, -0.3);
    }

    #[test]
    fn blank_trailing_line_is_ignored() {
        let csv = format!("{HEADER}1996,1,0,0,0,0\n2001,12,0,0,0,0\n   \n");
        let records = parse_sea_level_csv(&csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].year, 2001);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "Year,Month,Monthly_MSL,Linear_Trend,High_Conf.\n1996,1,0,0,0\n";
        assert!(matches!(
            parse_sea_level_csv(csv),
            Err(TidelineError::MissingColumn { column, .. }) if column == "Low_Conf."
        ));
    }
}
