use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use self::{bench::BenchArg, dump::DumpArg, report::ReportArg};

mod bench;
mod dump;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a census and print city, region and country statistics
    Report(#[clap(flatten)] ReportArg),
    /// Generate a census and print only the aggregation time
    Bench(#[clap(flatten)] BenchArg),
    /// Print the generated grades without computing statistics
    Dump(#[clap(flatten)] DumpArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Bench(arg) => bench::run(&arg)?,
        Mode::Dump(arg) => dump::run(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
