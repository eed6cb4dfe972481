use std::{hint, time::Instant};

use anyhow::Context as _;
use gradestat_census::{GradeGenerator, RegionCriterion, aggregate};

use crate::{input::CensusArg, render, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct BenchArg {
    #[clap(flatten)]
    census: CensusArg,
}

pub(crate) fn run(arg: &BenchArg) -> anyhow::Result<()> {
    let input = arg.census.resolve()?;
    let dataset = GradeGenerator::with_seed(input.seed).generate(input.dims);

    let start = Instant::now();
    let report = aggregate(&dataset, RegionCriterion::default())
        .context("Failed to aggregate census")?;
    let elapsed = start.elapsed();
    let report = hint::black_box(report);
    tracing::debug!(best_region = report.best_region, "benchmark finished");

    Output::stdout().write_text(|w| render::write_elapsed(w, elapsed))
}
