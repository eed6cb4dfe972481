use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use crate::{MAX_GRADE, StatsError, TABLE_LEN};

/// Prefix-summed frequency table of a group of grades.
///
/// After construction `table[v]` holds the number of grades `<= v`, so the
/// table is non-decreasing and its last slot is the group size. Slots above
/// [`MAX_GRADE`] never receive counts of their own and repeat the total.
///
/// Tables built from disjoint groups can be added together; the result is
/// the table of the combined group, without touching the raw grades again.
///
/// # Examples
///
/// ```
/// use gradestat_stats::CumulativeTable;
///
/// let table = CumulativeTable::accumulate(&[2, 0, 2, 5]).unwrap();
/// assert_eq!(table.count(), 4);
/// assert_eq!(table.frequency(2), 2);
/// assert_eq!(table.as_array()[1], 1);
/// assert_eq!(table.as_array()[4], 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativeTable([u64; TABLE_LEN]);

impl Default for CumulativeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CumulativeTable {
    /// Creates the table of an empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; TABLE_LEN])
    }

    /// Counts `grades` and prefix-sums the counts.
    ///
    /// Fails with [`StatsError::GradeOutOfRange`] on the first grade above
    /// [`MAX_GRADE`]; no partial table is returned in that case.
    pub fn accumulate(grades: &[u8]) -> Result<Self, StatsError> {
        let mut counts = [0_u64; TABLE_LEN];
        for (position, &value) in grades.iter().enumerate() {
            if value > MAX_GRADE {
                return Err(StatsError::GradeOutOfRange { value, position });
            }
            counts[usize::from(value)] += 1;
        }
        for i in 1..TABLE_LEN {
            counts[i] += counts[i - 1];
        }
        Ok(Self(counts))
    }

    /// Folds `other` into `self`.
    ///
    /// Both tables must describe disjoint groups for the result to be
    /// meaningful.
    pub fn merge(&mut self, other: &Self) {
        for (acc, count) in self.0.iter_mut().zip(other.0) {
            *acc += count;
        }
    }

    /// Number of grades in the group.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.0[TABLE_LEN - 1]
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of grades equal to `value`.
    ///
    /// Always zero above [`MAX_GRADE`].
    #[must_use]
    pub fn frequency(&self, value: u8) -> u64 {
        let value = usize::from(value).min(TABLE_LEN - 1);
        match value {
            0 => self.0[0],
            v => self.0[v] - self.0[v - 1],
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u64; TABLE_LEN] {
        &self.0
    }
}

impl AddAssign<&CumulativeTable> for CumulativeTable {
    fn add_assign(&mut self, rhs: &CumulativeTable) {
        self.merge(rhs);
    }
}

impl AddAssign for CumulativeTable {
    fn add_assign(&mut self, rhs: CumulativeTable) {
        self.merge(&rhs);
    }
}

impl Add for CumulativeTable {
    type Output = CumulativeTable;

    fn add(mut self, rhs: CumulativeTable) -> Self::Output {
        self.merge(&rhs);
        self
    }
}

impl Sum for CumulativeTable {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a CumulativeTable> for CumulativeTable {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Self>,
    {
        iter.fold(Self::new(), |mut acc, table| {
            acc.merge(table);
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::GRADE_DOMAIN;

    fn grades(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(0..=MAX_GRADE, 0..=max_len)
    }

    #[test]
    fn test_empty_group_is_all_zero() {
        let table = CumulativeTable::accumulate(&[]).unwrap();
        assert_eq!(table, CumulativeTable::new());
        assert!(table.is_empty());
    }

    #[test]
    fn test_prefix_sums() {
        let table = CumulativeTable::accumulate(&[0, 0, 3, 100]).unwrap();
        let array = table.as_array();
        assert_eq!(array[0], 2);
        assert_eq!(array[2], 2);
        assert_eq!(array[3], 3);
        assert_eq!(array[99], 3);
        assert_eq!(array[100], 4);
        assert_eq!(array[127], 4);
    }

    #[test]
    fn test_frequency_of_padding_is_zero() {
        let table = CumulativeTable::accumulate(&[100, 100]).unwrap();
        assert_eq!(table.frequency(100), 2);
        assert_eq!(table.frequency(101), 0);
        assert_eq!(table.frequency(u8::MAX), 0);
    }

    #[test]
    fn test_out_of_range_grade_is_rejected() {
        let err = CumulativeTable::accumulate(&[5, 100, 101, 7]).unwrap_err();
        assert_eq!(
            err,
            StatsError::GradeOutOfRange {
                value: 101,
                position: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "grade 101 at position 2 is outside 0..=100"
        );
    }

    #[test]
    fn test_sum_of_tables() {
        let tables = [
            CumulativeTable::accumulate(&[1, 2]).unwrap(),
            CumulativeTable::accumulate(&[3]).unwrap(),
            CumulativeTable::accumulate(&[]).unwrap(),
        ];
        let total: CumulativeTable = tables.iter().sum();
        assert_eq!(total, CumulativeTable::accumulate(&[1, 2, 3]).unwrap());
        assert_eq!(total, tables.into_iter().sum::<CumulativeTable>());
    }

    proptest! {
        #[test]
        fn frequencies_add_up_to_len(values in grades(300)) {
            let table = CumulativeTable::accumulate(&values).unwrap();
            let total: u64 = (0..=MAX_GRADE).map(|v| table.frequency(v)).sum();
            prop_assert_eq!(total, values.len() as u64);
        }

        #[test]
        fn table_is_non_decreasing_and_padded(values in grades(300)) {
            let table = CumulativeTable::accumulate(&values).unwrap();
            let array = table.as_array();
            prop_assert!(array.is_sorted());
            prop_assert_eq!(array[GRADE_DOMAIN - 1], values.len() as u64);
            prop_assert!(array[GRADE_DOMAIN..].iter().all(|&c| c == array[GRADE_DOMAIN - 1]));
            prop_assert_eq!(table.count(), values.len() as u64);
        }

        #[test]
        fn merge_equals_concatenation(left in grades(200), right in grades(200)) {
            let mut merged = CumulativeTable::accumulate(&left).unwrap();
            merged += CumulativeTable::accumulate(&right).unwrap();
            let concatenated = [left, right].concat();
            prop_assert_eq!(merged, CumulativeTable::accumulate(&concatenated).unwrap());
        }
    }
}
