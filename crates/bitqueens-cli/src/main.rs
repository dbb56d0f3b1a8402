//! `bitqueens` - count N-Queens solutions from the command line.
//!
//! Prints one `<width>-queen => <count>` line per width, in argument order.

mod console;
mod width;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};

use bitqueens_config::{ConfigError, CountWidth, KernelType, MaskWidth, SolverConfig};
use bitqueens_solver::Solver;

use crate::width::{parse_width, ParseWidthError};

/// Configuration file read when `--config` is not given.
const DEFAULT_CONFIG: &str = "bitqueens.toml";

#[derive(Debug, Parser)]
#[command(name = "bitqueens", version, about = "Count N-Queens solutions with bitmasks")]
struct Cli {
    /// Board widths to solve (decimal or 0x-prefixed hex)
    widths: Vec<String>,

    /// Solver configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search kernel
    #[arg(long, value_enum)]
    kernel: Option<KernelArg>,

    /// Column-mask integer type
    #[arg(long, value_enum)]
    mask_width: Option<MaskArg>,

    /// Solution-count integer type
    #[arg(long, value_enum)]
    count_width: Option<CountArg>,

    /// Print search statistics for each width on stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KernelArg {
    Recursive,
    Stacked,
}

impl From<KernelArg> for KernelType {
    fn from(arg: KernelArg) -> Self {
        match arg {
            KernelArg::Recursive => KernelType::Recursive,
            KernelArg::Stacked => KernelType::Stacked,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MaskArg {
    U8,
    U16,
    U32,
    U64,
    U128,
}

impl From<MaskArg> for MaskWidth {
    fn from(arg: MaskArg) -> Self {
        match arg {
            MaskArg::U8 => MaskWidth::U8,
            MaskArg::U16 => MaskWidth::U16,
            MaskArg::U32 => MaskWidth::U32,
            MaskArg::U64 => MaskWidth::U64,
            MaskArg::U128 => MaskWidth::U128,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CountArg {
    U64,
    U128,
}

impl From<CountArg> for CountWidth {
    fn from(arg: CountArg) -> Self {
        match arg {
            CountArg::U64 => CountWidth::U64,
            CountArg::U128 => CountWidth::U128,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    console::init(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            console::error(err);
            return ExitCode::from(2);
        }
    };

    let widths: Vec<Result<u32, ParseWidthError>> = if cli.widths.is_empty() {
        config.widths.iter().copied().map(Ok).collect()
    } else {
        cli.widths.iter().map(|entry| parse_width(entry)).collect()
    };

    let solver = Solver::new(config);
    let mut stdout = io::stdout().lock();
    let mut failed = false;

    for width in widths {
        let outcome = match width {
            Ok(width) => solver.solve(width).map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };

        match outcome {
            Ok(outcome) => {
                if writeln!(stdout, "{outcome}").is_err() {
                    return ExitCode::FAILURE;
                }
                if cli.stats {
                    let _ = stdout.flush();
                    console::stats(&outcome.statistics);
                }
            }
            Err(message) => {
                console::error(message);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Reads the configuration file and applies command-line overrides.
///
/// A missing default file yields the default configuration; an explicit
/// `--config` path must exist.
fn load_config(cli: &Cli) -> Result<SolverConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => SolverConfig::load(DEFAULT_CONFIG)?,
        None => SolverConfig::default(),
    };

    if let Some(kernel) = cli.kernel {
        config = config.with_kernel(kernel.into());
    }
    if let Some(mask_width) = cli.mask_width {
        config = config.with_mask_width(mask_width.into());
    }
    if let Some(count_width) = cli.count_width {
        config = config.with_count_width(count_width.into());
    }

    // Command-line widths replace the configured ones.
    if !cli.widths.is_empty() {
        config.widths.clear();
    }
    config.validate()?;

    Ok(config)
}
