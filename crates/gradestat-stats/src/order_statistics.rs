//! Order statistics read from cumulative counts.
//!
//! A cumulative table answers "how many grades are `<= v`" for every `v`, so
//! the `k`-th smallest grade is the first slot whose count reaches `k`. Both
//! searches below find such slots without ever looking at the raw grades.

use crate::{CumulativeTable, GRADE_DOMAIN, TABLE_LEN};

const _: () = assert!(TABLE_LEN.is_power_of_two());

/// Returns the smallest index `i` with `table[i] >= value`, or [`TABLE_LEN`]
/// if every slot is below `value`.
///
/// The search is branchless: seven conditional advances by 64, 32, ..., 1
/// narrow the window to one slot, and a last comparison steps past it when
/// it is still too small. `table` must be non-decreasing.
///
/// # Examples
///
/// ```
/// use gradestat_stats::{CumulativeTable, order_statistics::lower_bound_128};
///
/// let table = CumulativeTable::accumulate(&[3, 3, 7]).unwrap();
/// assert_eq!(lower_bound_128(table.as_array(), 1), 3);
/// assert_eq!(lower_bound_128(table.as_array(), 3), 7);
/// assert_eq!(lower_bound_128(table.as_array(), 4), 128);
/// ```
#[must_use]
pub fn lower_bound_128(table: &[u64; TABLE_LEN], value: u64) -> usize {
    let mut first = 0;
    let mut step = TABLE_LEN / 2;
    while step > 0 {
        first += step * usize::from(table[first + step - 1] < value);
        step /= 2;
    }
    first + usize::from(table[first] < value)
}

/// Returns the smallest index `i` with `table[i] > value`, or `table.len()`
/// if there is none.
///
/// Works on any length; `table` must be non-decreasing.
#[must_use]
pub fn upper_bound(table: &[u64], value: u64) -> usize {
    let mut first = 0;
    let mut len = table.len();
    while len > 0 {
        let step = len / 2;
        let it = first + step;
        if value >= table[it] {
            first = it + 1;
            len -= step + 1;
        } else {
            len = step;
        }
    }
    first
}

/// Smallest grade of the group, or `None` if it is empty.
#[must_use]
pub fn minimum(table: &CumulativeTable) -> Option<u8> {
    if table.is_empty() {
        return None;
    }
    Some(to_grade(upper_bound(&table.as_array()[..GRADE_DOMAIN], 0)))
}

/// Largest grade of the group, or `None` if it is empty.
#[must_use]
pub fn maximum(table: &CumulativeTable) -> Option<u8> {
    if table.is_empty() {
        return None;
    }
    Some(to_grade(lower_bound_128(table.as_array(), table.count())))
}

/// Median grade of the group, or `None` if it is empty.
///
/// With an even count the two central order statistics are averaged; with an
/// odd count the single central one is returned.
///
/// # Examples
///
/// ```
/// use gradestat_stats::{CumulativeTable, order_statistics::median};
///
/// let even = CumulativeTable::accumulate(&[1, 1, 2, 2]).unwrap();
/// assert_eq!(median(&even), Some(1.5));
///
/// let odd = CumulativeTable::accumulate(&[1, 2, 2]).unwrap();
/// assert_eq!(median(&odd), Some(2.0));
/// ```
#[must_use]
pub fn median(table: &CumulativeTable) -> Option<f64> {
    let count = table.count();
    if count == 0 {
        return None;
    }
    let array = table.as_array();
    let half = count / 2;
    let median = if count % 2 == 0 {
        let lower = lower_bound_128(array, half);
        let upper = lower_bound_128(array, half + 1);
        (f64::from(to_grade(lower)) + f64::from(to_grade(upper))) / 2.0
    } else {
        f64::from(to_grade(lower_bound_128(array, (count - 1) / 2 + 1)))
    };
    Some(median)
}

// Only called with ranks in 1..=count, which always land on a grade slot.
fn to_grade(index: usize) -> u8 {
    debug_assert!(index < GRADE_DOMAIN, "rank resolved to padding slot {index}");
    u8::try_from(index).unwrap_or(u8::MAX)
}
