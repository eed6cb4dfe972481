use std::path::PathBuf;

use gradestat_census::GradeGenerator;

use crate::{input::CensusArg, render, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DumpArg {
    #[clap(flatten)]
    census: CensusArg,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DumpArg) -> anyhow::Result<()> {
    let DumpArg { census, output } = arg;
    let input = census.resolve()?;
    let dataset = GradeGenerator::with_seed(input.seed).generate(input.dims);
    Output::from_output_path(output.clone())?.write_text(|w| render::write_grades(w, &dataset))
}
