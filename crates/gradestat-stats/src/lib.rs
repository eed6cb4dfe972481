//! Counting-sort statistics over bounded integer grades.
//!
//! Grades live in the closed interval `[0, 100]`. Instead of sorting, every
//! group of grades is folded into a [`CumulativeTable`]: a fixed 128-slot
//! prefix sum of per-value counts. Every statistic is then read back from that
//! table, and tables of disjoint groups merge by element-wise addition.
//!
//! # Modules
//!
//! - [`frequency`]: builds and merges cumulative count tables
//! - [`order_statistics`]: minimum, maximum and median by binary search over
//!   cumulative counts
//! - [`summary`]: the [`StatSummary`] of a table (min, max, median, mean,
//!   population standard deviation)
//!
//! # Examples
//!
//! ```
//! use gradestat_stats::{CumulativeTable, StatSummary};
//!
//! let north = CumulativeTable::accumulate(&[10, 20]).unwrap();
//! let south = CumulativeTable::accumulate(&[30, 40]).unwrap();
//! let both = north + south;
//!
//! let summary = StatSummary::from_table(&both).unwrap();
//! assert_eq!(summary.min, 10);
//! assert_eq!(summary.max, 40);
//! assert_eq!(summary.median, 25.0);
//! assert_eq!(summary.mean, 25.0);
//! assert!((summary.stdev - 125_f64.sqrt()).abs() < 1e-12);
//! ```

pub use self::{frequency::CumulativeTable, summary::StatSummary};

pub mod frequency;
pub mod order_statistics;
pub mod summary;

/// Largest valid grade.
pub const MAX_GRADE: u8 = 100;

/// Number of distinct grade values (`0..=MAX_GRADE`).
pub const GRADE_DOMAIN: usize = MAX_GRADE as usize + 1;

/// Length of a cumulative table.
///
/// Rounded up from [`GRADE_DOMAIN`] to a power of two so the order-statistic
/// search runs a fixed number of halving steps. Slots past [`MAX_GRADE`] are
/// padding and always hold the group total.
pub const TABLE_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("grade {value} at position {position} is outside 0..=100")]
    GradeOutOfRange { value: u8, position: usize },
    #[display("cannot summarize an empty group")]
    EmptyGroup,
}
