//! Country → Region → City grade census.
//!
//! A [`Dataset`] is a flat run of grades cut into regions and cities by
//! [`Dimensions`]. [`aggregate`] walks it once, summarizing every city, every
//! region and the whole country, and picks the best city and region.
//!
//! ```
//! use gradestat_census::{Dimensions, GradeGenerator, RegionCriterion, aggregate};
//!
//! let dims = Dimensions::new(2, 3, 10).unwrap();
//! let dataset = GradeGenerator::with_seed(7).generate(dims);
//! let report = aggregate(&dataset, RegionCriterion::Median).unwrap();
//! assert_eq!(report.cities.len(), 6);
//! assert_eq!(report.regions.len(), 2);
//! assert_eq!(report.country.count, 60);
//! ```

pub use self::{
    aggregate::{BestCity, CensusReport, RegionCriterion, aggregate},
    dataset::Dataset,
    dimensions::Dimensions,
    generator::GradeGenerator,
};

pub mod aggregate;
pub mod dataset;
pub mod dimensions;
pub mod generator;

use gradestat_stats::StatsError;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DimensionError {
    #[display("number of regions must be positive")]
    NoRegions,
    #[display("number of cities per region must be positive")]
    NoCities,
    #[display("number of grades per city must be positive")]
    NoGrades,
    #[display("{regions} x {cities_per_region} x {grades_per_city} grades do not fit in memory")]
    TooLarge {
        regions: usize,
        cities_per_region: usize,
        grades_per_city: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("expected {expected} grades, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[display("grade {value} at index {index} is outside 0..=100")]
    GradeOutOfRange { value: u8, index: usize },
}

/// Failure while summarizing one group; the whole pass is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AggregateError {
    #[display("region {region}, city {city}: {source}")]
    City {
        region: usize,
        city: usize,
        source: StatsError,
    },
    #[display("region {region}: {source}")]
    Region { region: usize, source: StatsError },
    #[display("country: {source}")]
    Country { source: StatsError },
}
