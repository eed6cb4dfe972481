use std::ops::Range;

use serde::Serialize;

use crate::DimensionError;

/// Shape of a census: how many regions, cities per region and grades per
/// city.
///
/// All three are positive and their product fits in `usize`; both are
/// checked by [`Dimensions::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    regions: usize,
    cities_per_region: usize,
    grades_per_city: usize,
}

impl Dimensions {
    pub fn new(
        regions: usize,
        cities_per_region: usize,
        grades_per_city: usize,
    ) -> Result<Self, DimensionError> {
        if regions == 0 {
            return Err(DimensionError::NoRegions);
        }
        if cities_per_region == 0 {
            return Err(DimensionError::NoCities);
        }
        if grades_per_city == 0 {
            return Err(DimensionError::NoGrades);
        }
        let too_large = DimensionError::TooLarge {
            regions,
            cities_per_region,
            grades_per_city,
        };
        regions
            .checked_mul(cities_per_region)
            .and_then(|cities| cities.checked_mul(grades_per_city))
            .filter(|&len| isize::try_from(len).is_ok())
            .ok_or(too_large)?;
        Ok(Self {
            regions,
            cities_per_region,
            grades_per_city,
        })
    }

    #[must_use]
    pub const fn regions(&self) -> usize {
        self.regions
    }

    #[must_use]
    pub const fn cities_per_region(&self) -> usize {
        self.cities_per_region
    }

    #[must_use]
    pub const fn grades_per_city(&self) -> usize {
        self.grades_per_city
    }

    /// Total number of cities in the country.
    #[must_use]
    pub const fn cities(&self) -> usize {
        self.regions * self.cities_per_region
    }

    #[must_use]
    pub const fn grades_per_region(&self) -> usize {
        self.cities_per_region * self.grades_per_city
    }

    /// Total number of grades in the country.
    #[must_use]
    pub const fn total_grades(&self) -> usize {
        self.regions * self.grades_per_region()
    }

    /// Position of a city in row-major (region, then city) order.
    #[must_use]
    pub const fn city_index(&self, region: usize, city: usize) -> usize {
        region * self.cities_per_region + city
    }

    /// Range of the flat dataset holding the grades of one city.
    #[must_use]
    pub const fn city_range(&self, region: usize, city: usize) -> Range<usize> {
        let start = region * self.grades_per_region() + city * self.grades_per_city;
        start..start + self.grades_per_city
    }

    /// Range of the flat dataset holding the grades of one region.
    #[must_use]
    pub const fn region_range(&self, region: usize) -> Range<usize> {
        let start = region * self.grades_per_region();
        start..start + self.grades_per_region()
    }
}
