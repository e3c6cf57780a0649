use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use stems_core::convert_files;

/// Convert design metadata and netlist JSON into a stem hierarchy file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(value_name = "META_OR_NETLIST", help = "First JSON document (either role)")]
    first: PathBuf,

    #[arg(value_name = "META_OR_NETLIST", help = "Second JSON document (either role)")]
    second: PathBuf,

    #[arg(value_name = "OUTPUT", help = "Stem file to write (overwritten)")]
    output: PathBuf,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Log more detail to stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides"
    )]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(cli)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn execute(cli: Cli) -> Result<()> {
    let summary = convert_files(&cli.first, &cli.second, &cli.output).with_context(|| {
        format!(
            "failed to convert {} and {}",
            cli.first.display(),
            cli.second.display()
        )
    })?;
    log::debug!("{summary:?}");
    Ok(())
}
