use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use heightuf::connectivity::{run_connectivity, ConnectivityOptions};

/// heightuf - Dynamic connectivity with weighted quick-union by height
///
/// Reads a site count followed by pairs of sites. Pairs that are not yet
/// connected are merged and echoed; the final line reports the number of
/// components.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Input file (stdin if not specified)
    #[clap(short = 'i', long = "input")]
    input: Option<String>,

    /// Output file (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// List the members of every component after the count
    #[clap(short = 'g', long = "groups")]
    groups: bool,

    /// Quiet mode (errors only)
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let input: Box<dyn BufRead> = if let Some(ref path) = args.input {
        info!("Reading pairs from {path}");
        Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open input {path}"))?,
        ))
    } else {
        Box::new(BufReader::new(io::stdin()))
    };

    let mut output: Box<dyn Write> = if let Some(ref path) = args.output {
        Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output {path}"))?,
        ))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    let options = ConnectivityOptions {
        print_groups: args.groups,
    };
    run_connectivity(input, &mut output, options)?;
    output.flush()?;

    Ok(())
}
