use gradestat_stats::MAX_GRADE;

use crate::{DatasetError, Dimensions};

/// Immutable flat run of grades, partitioned by its [`Dimensions`].
///
/// Construction checks the length and the grade range once, so every city
/// slice handed to the statistics engine is non-empty and in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    dims: Dimensions,
    grades: Vec<u8>,
}

impl Dataset {
    pub fn new(dims: Dimensions, grades: Vec<u8>) -> Result<Self, DatasetError> {
        if grades.len() != dims.total_grades() {
            return Err(DatasetError::LengthMismatch {
                expected: dims.total_grades(),
                actual: grades.len(),
            });
        }
        if let Some((index, &value)) = grades.iter().enumerate().find(|(_, v)| **v > MAX_GRADE) {
            return Err(DatasetError::GradeOutOfRange { value, index });
        }
        Ok(Self { dims, grades })
    }

    #[must_use]
    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    #[must_use]
    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    /// Grades of one city.
    ///
    /// # Panics
    ///
    /// Panics if `region` or `city` is out of bounds.
    #[must_use]
    pub fn city(&self, region: usize, city: usize) -> &[u8] {
        assert!(city < self.dims.cities_per_region(), "city {city} out of bounds");
        &self.grades[self.dims.city_range(region, city)]
    }

    /// Iterates over the cities of `region`, in order.
    pub fn cities_of(&self, region: usize) -> impl Iterator<Item = &[u8]> + '_ {
        self.grades[self.dims.region_range(region)].chunks_exact(self.dims.grades_per_city())
    }
}
