use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;

use gradestat_stats::MAX_GRADE;

use crate::{Dataset, Dimensions};

/// Produces synthetic census datasets with uniformly distributed grades.
///
/// Generation is deterministic for a given seed, so a census can be
/// reproduced from its dimensions and seed alone.
///
/// # Example
///
/// ```
/// use gradestat_census::{Dimensions, GradeGenerator};
///
/// let dims = Dimensions::new(2, 2, 5).unwrap();
/// let first = GradeGenerator::with_seed(42).generate(dims);
/// let second = GradeGenerator::with_seed(42).generate(dims);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct GradeGenerator {
    rng: Pcg32,
}

impl Default for GradeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeGenerator {
    /// Creates a generator with a random seed.
    ///
    /// For reproducible datasets, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draws one grade in `0..=100`.
    pub fn next_grade(&mut self) -> u8 {
        self.rng.random_range(0..=MAX_GRADE)
    }

    /// Fills a whole dataset, region by region and city by city.
    pub fn generate(&mut self, dims: Dimensions) -> Dataset {
        let grades = (0..dims.total_grades()).map(|_| self.next_grade()).collect();
        tracing::debug!(
            regions = dims.regions(),
            cities_per_region = dims.cities_per_region(),
            grades_per_city = dims.grades_per_city(),
            "generated census dataset"
        );
        Dataset::new(dims, grades).expect("generated grades always match their dimensions")
    }
}
