use serde::Serialize;

use crate::{CumulativeTable, GRADE_DOMAIN, StatsError, order_statistics};

/// Descriptive statistics of one group of grades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatSummary {
    /// Number of grades in the group.
    pub count: u64,
    /// The smallest grade.
    pub min: u8,
    /// The largest grade.
    pub max: u8,
    /// The median grade; the mean of the two central grades for even counts.
    pub median: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The population standard deviation (no Bessel correction).
    pub stdev: f64,
}

impl StatSummary {
    /// Summarizes the group described by `table`.
    ///
    /// Moments come from one pass over the per-value counts; min, max and
    /// median come from binary searches over the same table. The table is
    /// only read, so summarizing it again yields the same result.
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptyGroup`] if the table counts no grades.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gradestat_stats::{CumulativeTable, StatSummary};
    /// let table = CumulativeTable::accumulate(&[10, 20, 30, 40]).unwrap();
    /// let summary = StatSummary::from_table(&table).unwrap();
    /// assert_eq!(summary.median, 25.0);
    /// assert!((summary.stdev - 11.18).abs() < 0.01);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn from_table(table: &CumulativeTable) -> Result<Self, StatsError> {
        let (Some(min), Some(max), Some(median)) = (
            order_statistics::minimum(table),
            order_statistics::maximum(table),
            order_statistics::median(table),
        ) else {
            return Err(StatsError::EmptyGroup);
        };

        let array = table.as_array();
        let mut sum = 0_u64;
        let mut sum_sq = 0_u64;
        for value in 1..GRADE_DOMAIN {
            let count = array[value] - array[value - 1];
            let value = value as u64;
            sum += count * value;
            sum_sq += count * value * value;
        }

        let count = table.count();
        let n = count as f64;
        let mean = sum as f64 / n;
        // Rounding can push a zero variance slightly negative.
        let variance = (sum_sq as f64 / n - mean * mean).max(0.0);

        Ok(Self {
            count,
            min,
            max,
            median,
            mean,
            stdev: variance.sqrt(),
        })
    }

    /// Accumulates `grades` and summarizes them in one call.
    pub fn from_grades(grades: &[u8]) -> Result<Self, StatsError> {
        Self::from_table(&CumulativeTable::accumulate(grades)?)
    }
}
