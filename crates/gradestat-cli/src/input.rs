use std::io::{self, Read as _};

use anyhow::{Context as _, bail};
use gradestat_census::Dimensions;

/// Census shape and seed, from the command line or from stdin.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct CensusArg {
    /// Number of regions (read `REGIONS CITIES GRADES SEED` from stdin when omitted)
    regions: Option<usize>,
    /// Number of cities per region
    cities: Option<usize>,
    /// Number of grades per city
    grades: Option<usize>,
    /// Seed of the grade generator
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CensusInput {
    pub(crate) dims: Dimensions,
    pub(crate) seed: u64,
}

impl CensusArg {
    /// Uses the positional arguments if all four are given, otherwise reads
    /// them from stdin.
    pub(crate) fn resolve(&self) -> anyhow::Result<CensusInput> {
        match (self.regions, self.cities, self.grades, self.seed) {
            (Some(regions), Some(cities), Some(grades), Some(seed)) => {
                let dims = Dimensions::new(regions, cities, grades)
                    .context("Invalid census dimensions")?;
                Ok(CensusInput { dims, seed })
            }
            (None, None, None, None) => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read census parameters from stdin")?;
                parse_census_line(&text)
            }
            _ => bail!("Expected all of REGIONS CITIES GRADES SEED, or none of them"),
        }
    }
}

/// Parses `REGIONS CITIES GRADES SEED`, separated by any whitespace.
///
/// Anything after the fourth value is ignored.
pub(crate) fn parse_census_line(text: &str) -> anyhow::Result<CensusInput> {
    let mut fields = text.split_whitespace();
    let mut next = |name: &str| {
        fields
            .next()
            .with_context(|| format!("Missing {name} in census parameters"))
    };
    let regions = next("REGIONS")?;
    let cities = next("CITIES")?;
    let grades = next("GRADES")?;
    let seed = next("SEED")?;

    let dims = Dimensions::new(
        parse_count("REGIONS", regions)?,
        parse_count("CITIES", cities)?,
        parse_count("GRADES", grades)?,
    )
    .context("Invalid census dimensions")?;
    let seed = seed
        .parse()
        .with_context(|| format!("Invalid SEED: {seed:?}"))?;
    Ok(CensusInput { dims, seed })
}

fn parse_count(name: &str, value: &str) -> anyhow::Result<usize> {
    value
        .parse()
        .with_context(|| format!("Invalid {name}: {value:?} is not a non-negative integer"))
}
