use std::{path::PathBuf, time::Instant};

use anyhow::Context as _;
use gradestat_census::{CensusReport, GradeGenerator, RegionCriterion, aggregate};
use serde::Serialize;

use crate::{input::CensusArg, render, util::Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    census: CensusArg,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: ReportFormat,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Statistic used to pick the best region (median or mean)
    #[arg(long, default_value = "median")]
    rank_regions_by: RegionCriterion,
    /// Print the generated grades before the report (text format only)
    #[arg(long, default_value_t = false)]
    show_grades: bool,
}

#[derive(Debug, Serialize)]
struct TimedReport<'a> {
    #[serde(flatten)]
    report: &'a CensusReport,
    elapsed_secs: f64,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        census,
        format,
        output,
        rank_regions_by,
        show_grades,
    } = arg;

    let input = census.resolve()?;
    let dataset = GradeGenerator::with_seed(input.seed).generate(input.dims);
    tracing::info!(grades = input.dims.total_grades(), seed = input.seed, "generated grades");

    let start = Instant::now();
    let report = aggregate(&dataset, *rank_regions_by).context("Failed to aggregate census")?;
    let elapsed = start.elapsed();
    tracing::info!(?elapsed, "aggregated census");

    let output = Output::from_output_path(output.clone())?;
    match format {
        ReportFormat::Text => output.write_text(|w| {
            if *show_grades {
                render::write_grades(w, &dataset)?;
            }
            render::write_report(w, &report)?;
            render::write_elapsed(w, elapsed)
        })?,
        ReportFormat::Json => {
            if *show_grades {
                tracing::warn!("--show-grades is ignored for JSON output");
            }
            output.write_json(&TimedReport {
                report: &report,
                elapsed_secs: elapsed.as_secs_f64(),
            })?;
        }
    }
    Ok(())
}
