use gradestat_stats::{CumulativeTable, StatSummary};
use serde::Serialize;

use crate::{AggregateError, Dataset, Dimensions};

/// Statistic used to rank regions against each other.
///
/// Cities are always ranked by mean. Regions are ranked by median unless
/// asked otherwise.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum RegionCriterion {
    #[default]
    #[display("median")]
    Median,
    #[display("mean")]
    Mean,
}

impl RegionCriterion {
    fn score(self, summary: &StatSummary) -> f64 {
        match self {
            Self::Median => summary.median,
            Self::Mean => summary.mean,
        }
    }
}

/// Location of the best city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestCity {
    pub region: usize,
    pub city: usize,
}

/// Everything computed by one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CensusReport {
    pub dims: Dimensions,
    /// One summary per city, region-major.
    pub cities: Vec<StatSummary>,
    pub regions: Vec<StatSummary>,
    pub country: StatSummary,
    /// City with the highest mean; the first one wins ties.
    pub best_city: BestCity,
    /// Region with the highest [`RegionCriterion`] score; the first one wins ties.
    pub best_region: usize,
    pub region_criterion: RegionCriterion,
}

impl CensusReport {
    /// Summary of one city.
    ///
    /// # Panics
    ///
    /// Panics if `region` or `city` is out of bounds.
    #[must_use]
    pub fn city(&self, region: usize, city: usize) -> &StatSummary {
        assert!(city < self.dims.cities_per_region(), "city {city} out of bounds");
        &self.cities[self.dims.city_index(region, city)]
    }

    /// Summaries of the cities of one region, in order.
    #[must_use]
    pub fn cities_of(&self, region: usize) -> &[StatSummary] {
        let per_region = self.dims.cities_per_region();
        &self.cities[region * per_region..(region + 1) * per_region]
    }
}

/// Running "best so far" pick; only a strictly better score replaces it.
#[derive(Debug)]
struct Leader<K> {
    best: Option<(K, f64)>,
}

impl<K: Copy> Leader<K> {
    fn new() -> Self {
        Self { best: None }
    }

    fn offer(&mut self, key: K, score: f64) {
        let replace = match self.best {
            Some((_, best)) => best < score,
            None => true,
        };
        if replace {
            self.best = Some((key, score));
        }
    }

    fn winner(&self) -> Option<K> {
        self.best.map(|(key, _)| key)
    }
}

/// Summarizes every city, every region and the country in one pass.
///
/// Each city slice is counted once. Its table is then merged into its
/// region's table, and each region's table into the country's, so no grade
/// is read twice. Regions and cities are visited in index order.
///
/// # Errors
///
/// The first group that cannot be summarized aborts the pass. A [`Dataset`]
/// only holds in-range grades and non-empty cities, so this does not happen
/// for datasets built through [`Dataset::new`].
pub fn aggregate(
    dataset: &Dataset,
    region_criterion: RegionCriterion,
) -> Result<CensusReport, AggregateError> {
    let dims = dataset.dims();
    let mut cities = Vec::with_capacity(dims.cities());
    let mut regions = Vec::with_capacity(dims.regions());
    let mut best_city = Leader::new();
    let mut best_region = Leader::new();
    let mut country_table = CumulativeTable::new();

    for region in 0..dims.regions() {
        let mut region_table = CumulativeTable::new();

        for (city, grades) in dataset.cities_of(region).enumerate() {
            let city_error = |source| AggregateError::City {
                region,
                city,
                source,
            };
            let table = CumulativeTable::accumulate(grades).map_err(city_error)?;
            let summary = StatSummary::from_table(&table).map_err(city_error)?;
            best_city.offer(BestCity { region, city }, summary.mean);
            cities.push(summary);
            region_table += &table;
        }

        let summary = StatSummary::from_table(&region_table)
            .map_err(|source| AggregateError::Region { region, source })?;
        best_region.offer(region, region_criterion.score(&summary));
        regions.push(summary);
        country_table += &region_table;
    }

    let country = StatSummary::from_table(&country_table)
        .map_err(|source| AggregateError::Country { source })?;

    tracing::debug!(
        cities = cities.len(),
        regions = regions.len(),
        grades = country.count,
        "aggregated census"
    );

    Ok(CensusReport {
        dims,
        cities,
        regions,
        country,
        // Dimensions are positive, so both leaders saw at least one offer.
        best_city: best_city.winner().unwrap_or(BestCity { region: 0, city: 0 }),
        best_region: best_region.winner().unwrap_or(0),
        region_criterion,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::GradeGenerator;

    fn dataset(regions: usize, cities: usize, grades: &[u8]) -> Dataset {
        let dims = Dimensions::new(regions, cities, grades.len() / (regions * cities)).unwrap();
        Dataset::new(dims, grades.to_vec()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_single_city() {
        let report = aggregate(&dataset(1, 1, &[10, 20, 30, 40]), RegionCriterion::Median).unwrap();
        for summary in [report.city(0, 0), &report.regions[0], &report.country] {
            assert_eq!(summary.min, 10);
            assert_eq!(summary.max, 40);
            assert_close(summary.median, 25.0);
            assert_close(summary.mean, 25.0);
            assert_close(summary.stdev, 125_f64.sqrt());
        }
        assert_eq!(report.best_city, BestCity { region: 0, city: 0 });
        assert_eq!(report.best_region, 0);
    }

    #[test]
    fn test_tied_city_means_keep_first_city() {
        let report = aggregate(
            &dataset(1, 2, &[0, 0, 100, 100, 50, 50, 50, 50]),
            RegionCriterion::Median,
        )
        .unwrap();
        assert_close(report.city(0, 0).mean, 50.0);
        assert_close(report.city(0, 1).mean, 50.0);
        assert_eq!(report.best_city, BestCity { region: 0, city: 0 });
    }

    #[test]
    fn test_strictly_better_city_wins() {
        let report = aggregate(
            &dataset(2, 2, &[10, 10, 20, 20, 30, 31, 5, 5]),
            RegionCriterion::Median,
        )
        .unwrap();
        assert_eq!(report.best_city, BestCity { region: 1, city: 0 });
    }

    #[test]
    fn test_identical_regions_keep_first_region() {
        let grades = [1, 2, 3, 4, 1, 2, 3, 4];
        for criterion in [RegionCriterion::Median, RegionCriterion::Mean] {
            let report = aggregate(&dataset(2, 1, &grades), criterion).unwrap();
            assert_eq!(report.regions[0], report.regions[1]);
            assert_eq!(report.best_region, 0);
            assert_eq!(report.best_city, BestCity { region: 0, city: 0 });
        }
    }

    #[test]
    fn test_all_zero_grades_still_pick_first() {
        let report = aggregate(&dataset(3, 2, &[0; 12]), RegionCriterion::Median).unwrap();
        assert_eq!(report.best_city, BestCity { region: 0, city: 0 });
        assert_eq!(report.best_region, 0);
    }

    #[test]
    fn test_region_criterion_changes_the_winner() {
        // Region 0: median 10, mean 36.7. Region 1: median 30, mean 30.
        let grades = [0, 10, 100, 30, 30, 30];
        let by_median = aggregate(&dataset(2, 1, &grades), RegionCriterion::Median).unwrap();
        assert_close(by_median.regions[0].median, 10.0);
        assert_close(by_median.regions[0].mean, 110.0 / 3.0);
        assert_close(by_median.regions[1].median, 30.0);
        assert_eq!(by_median.best_region, 1);

        let by_mean = aggregate(&dataset(2, 1, &grades), RegionCriterion::Mean).unwrap();
        assert_eq!(by_mean.best_region, 0);
        assert_eq!(by_mean.region_criterion, RegionCriterion::Mean);
    }

    #[test]
    fn test_levels_are_merged_bottom_up() {
        let report = aggregate(
            &dataset(2, 2, &[0, 1, 2, 3, 4, 5, 6, 100]),
            RegionCriterion::Median,
        )
        .unwrap();
        assert_eq!(report.cities_of(1)[1].max, 100);
        assert_eq!(report.regions[0].count, 4);
        assert_eq!(report.regions[0].max, 3);
        assert_eq!(report.regions[1].min, 4);
        assert_eq!(report.country.count, 8);
        assert_eq!(report.country.min, 0);
        assert_eq!(report.country.max, 100);
        assert_close(report.country.median, 3.5);
    }

    #[test]
    fn test_region_criterion_parses_and_displays() {
        assert_eq!(
            "Median".parse::<RegionCriterion>().unwrap(),
            RegionCriterion::Median
        );
        assert_eq!("Mean".parse::<RegionCriterion>().unwrap(), RegionCriterion::Mean);
        assert_eq!("mean".parse::<RegionCriterion>().unwrap(), RegionCriterion::Mean);
        assert!("mode".parse::<RegionCriterion>().is_err());
        assert_eq!(RegionCriterion::Mean.to_string(), "mean");
        assert_eq!(RegionCriterion::default(), RegionCriterion::Median);
    }

    #[test]
    fn test_report_serializes() {
        let report = aggregate(&dataset(1, 2, &[1, 2, 3, 4]), RegionCriterion::Mean).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best_city"]["city"], 1);
        assert_eq!(json["region_criterion"], "mean");
        assert_eq!(json["dims"]["grades_per_city"], 2);
        assert_eq!(json["cities"].as_array().unwrap().len(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn levels_match_direct_summaries(
            seed in any::<u64>(),
            regions in 1_usize..4,
            cities in 1_usize..4,
            grades in 1_usize..20,
        ) {
            let dims = Dimensions::new(regions, cities, grades).unwrap();
            let dataset = GradeGenerator::with_seed(seed).generate(dims);
            let report = aggregate(&dataset, RegionCriterion::Median).unwrap();

            for region in 0..regions {
                let direct = StatSummary::from_grades(&dataset.grades()[dims.region_range(region)]).unwrap();
                prop_assert_eq!(report.regions[region], direct);
                for city in 0..cities {
                    let direct = StatSummary::from_grades(dataset.city(region, city)).unwrap();
                    prop_assert_eq!(*report.city(region, city), direct);
                }
            }
            prop_assert_eq!(report.country, StatSummary::from_grades(dataset.grades()).unwrap());

            let best = report.city(report.best_city.region, report.best_city.city).mean;
            prop_assert!(report.cities.iter().all(|c| c.mean <= best));
            let first_best = report.cities.iter().position(|c| c.mean == best).unwrap();
            prop_assert_eq!(
                first_best,
                dims.city_index(report.best_city.region, report.best_city.city)
            );
        }
    }
}
