//! Chart configuration constants.

/// Year shown when the chart first loads, independent of today's date.
pub const INITIAL_YEAR: i32 = 1996;

/// Two-digit storm years below this map to 20xx, the rest to 19xx.
pub const TWO_DIGIT_YEAR_PIVOT: u32 = 70;

/// Configuration for the sea level chart.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Year displayed after loading.
    pub initial_year: i32,
    /// Pivot used to expand two-digit storm years.
    pub year_pivot: u32,
    /// Padding factor for the vertical domain (0.1 = 10% on each end).
    pub y_padding_factor: f64,
    /// Distance of the first marker in a group below the top of the chart,
    /// as a fraction of the vertical span.
    pub marker_offset: f64,
    /// Step between consecutive markers in a group, as a fraction of the
    /// vertical span.
    pub marker_spacing: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            initial_year: INITIAL_YEAR,
            year_pivot: TWO_DIGIT_YEAR_PIVOT,
            y_padding_factor: 0.10,
            marker_offset: 0.08,
            marker_spacing: 0.07,
        }
    }
}

impl ChartConfig {
    /// Override the initial year.
    pub fn with_initial_year(mut self, year: i32) -> Self {
        self.initial_year = year;
        self
    }
}
