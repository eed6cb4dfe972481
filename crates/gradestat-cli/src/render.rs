use std::{fmt, io, time::Duration};

use gradestat_census::{CensusReport, Dataset};
use gradestat_stats::StatSummary;

struct SummaryLine<'a>(&'a StatSummary);

impl fmt::Display for SummaryLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let StatSummary {
            min,
            max,
            median,
            mean,
            stdev,
            ..
        } = self.0;
        write!(
            f,
            "min: {min}, max: {max}, median: {median:.2}, mean: {mean:.2}, stdev: {stdev:.2}"
        )
    }
}

/// Writes the human-readable report: cities, regions, country, then winners.
pub(crate) fn write_report<W>(w: &mut W, report: &CensusReport) -> io::Result<()>
where
    W: io::Write,
{
    for region in 0..report.dims.regions() {
        for (city, summary) in report.cities_of(region).iter().enumerate() {
            writeln!(w, "Reg {region} - City {city}: {}", SummaryLine(summary))?;
        }
        writeln!(w)?;
    }

    for (region, summary) in report.regions.iter().enumerate() {
        writeln!(w, "Reg {region}: {}", SummaryLine(summary))?;
    }
    writeln!(w)?;

    writeln!(w, "Country: {}", SummaryLine(&report.country))?;
    writeln!(w)?;

    writeln!(w, "Best region: Region {}", report.best_region)?;
    writeln!(
        w,
        "Best city: Region {}, City {}",
        report.best_city.region, report.best_city.city
    )?;
    writeln!(w)
}

pub(crate) fn write_elapsed<W>(w: &mut W, elapsed: Duration) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        w,
        "Response time excluding I/O: {:.3}s",
        elapsed.as_secs_f64()
    )
}

/// Writes every grade, one city per line, under a header per region.
pub(crate) fn write_grades<W>(w: &mut W, dataset: &Dataset) -> io::Result<()>
where
    W: io::Write,
{
    for region in 0..dataset.dims().regions() {
        writeln!(w, "Region {region}")?;
        for grades in dataset.cities_of(region) {
            let line = grades
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(w, "{line}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}
