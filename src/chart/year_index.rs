//! Year bounds, per-year slices and the vertical domain.

use crate::data::SeaLevelRecord;

/// Closed range of years covered by the sea level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    /// Earliest year.
    pub min: i32,
    /// Latest year.
    pub max: i32,
}

impl YearBounds {
    /// Clamp a year into the bounds.
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min, self.max)
    }
}

/// Vertical domain of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YDomain {
    /// Bottom of the chart.
    pub min: f64,
    /// Top of the chart.
    pub max: f64,
}

impl YDomain {
    /// Height of the domain.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Borrowed index over the sea level records.
#[derive(Debug, Clone, Copy)]
pub struct YearIndex<'a> {
    records: &'a [SeaLevelRecord],
    bounds: YearBounds,
}

impl<'a> YearIndex<'a> {
    /// Build the index. Returns `None` when there are no records.
    pub fn new(records: &'a [SeaLevelRecord]) -> Option<Self> {
        let min = records.iter().map(|r| r.year).min()?;
        let max = records.iter().map(|r| r.year).max()?;
        Some(Self {
            records,
            bounds: YearBounds { min, max },
        })
    }

    /// Rebuild an index whose bounds were computed by [`YearIndex::new`].
    pub(crate) fn with_bounds(records: &'a [SeaLevelRecord], bounds: YearBounds) -> Self {
        Self { records, bounds }
    }

    /// Year bounds.
    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Earliest year.
    pub fn min_year(&self) -> i32 {
        self.bounds.min
    }

    /// Latest year.
    pub fn max_year(&self) -> i32 {
        self.bounds.max
    }

    /// Records of one year, in source order.
    pub fn records_for_year(&self, year: i32) -> impl Iterator<Item = &'a SeaLevelRecord> + 'a {
        self.records.iter().filter(move |r| r.year == year)
    }

    /// Vertical domain over all years, padded on both ends by
    /// `padding_factor` times the data range. NaN values are skipped.
    pub fn y_domain(&self, padding_factor: f64) -> YDomain {
        let (min, max) = self
            .records
            .iter()
            .flat_map(|r| {
                [
                    r.monthly_mean,
                    r.linear_trend,
                    r.high_confidence,
                    r.low_confidence,
                ]
            })
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });

        if min > max {
            return YDomain { min: -1.0, max: 1.0 };
        }

        let range = max - min;
        let padding = if range > 0.0 {
            range * padding_factor
        } else {
            1.0
        };
        YDomain {
            min: min - padding,
            max: max + padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(year: i32, month: u32, mean: f64) -> SeaLevelRecord {
        SeaLevelRecord {
            year,
            month,
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            monthly_mean: mean,
            linear_trend: mean,
            high_confidence: mean,
            low_confidence: mean,
        }
    }

    #[test]
    fn bounds_span_all_records() {
        let records = vec![record(1998, 1, 0.0), record(1994, 5, 0.0), record(2001, 2, 0.0)];
        let index = YearIndex::new(&records).unwrap();

        assert_eq!(index.min_year(), 1994);
        assert_eq!(index.max_year(), 2001);
        assert!(YearIndex::new(&[]).is_none());
    }

    #[test]
    fn year_slice_keeps_source_order() {
        let records = vec![
            record(1996, 3, 0.3),
            record(1997, 1, 9.0),
            record(1996, 1, 0.1),
        ];
        let index = YearIndex::new(&records).unwrap();
        let months: Vec<u32> = index.records_for_year(1996).map(|r| r.month).collect();

        assert_eq!(months, vec![3, 1]);
        assert_eq!(index.records_for_year(2020).count(), 0);
    }

    #[test]
    fn y_domain_pads_full_range_and_skips_nan() {
        let mut high = record(1996, 1, 0.0);
        high.high_confidence = 1.0;
        let mut low = record(2000, 1, 0.0);
        low.low_confidence = -1.0;
        low.monthly_mean = f64::NAN;
        let records = vec![high, low];

        let domain = YearIndex::new(&records).unwrap().y_domain(0.10);
        assert!((domain.min - -1.2).abs() < 1e-12);
        assert!((domain.max - 1.2).abs() < 1e-12);
    }

    #[test]
    fn y_domain_handles_degenerate_data() {
        let flat = vec![record(1996, 1, 0.5)];
        let domain = YearIndex::new(&flat).unwrap().y_domain(0.10);
        assert_eq!(domain, YDomain { min: -0.5, max: 1.5 });

        let empty = vec![record(1996, 1, f64::NAN)];
        let domain = YearIndex::new(&empty).unwrap().y_domain(0.10);
        assert_eq!(domain, YDomain { min: -1.0, max: 1.0 });
    }
}
