//! tscat CLI entry point.
//!
//! Provides command-line tools for working with Qt Linguist `.ts` files:
//! - `tscat check` - Validate .ts file syntax
//! - `tscat coverage` - Report finished/unfinished counts
//! - `tscat lookup` - Render one message
//! - `tscat lint` - Report translation problems
//! - `tscat normalize` - Rewrite a file in canonical layout

mod commands;
mod output;

use std::io::{stderr, IsTerminal};
use std::process::exit;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_lint, run_lookup, run_normalize, CheckArgs, CoverageArgs,
    LintArgs, LookupArgs, NormalizeArgs,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
const LOG_ENV: &str = "TSCAT_LOG";

/// Qt Linguist translation catalog tools.
#[derive(Debug, Parser)]
#[command(name = "tscat")]
#[command(about = "Qt Linguist .ts translation catalog tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check .ts file syntax
    Check(CheckArgs),
    /// Report translation coverage per file
    Coverage(CoverageArgs),
    /// Translate one message from a .ts file
    Lookup(LookupArgs),
    /// Lint a .ts file, optionally against its source-language file
    Lint(LintArgs),
    /// Rewrite a .ts file in canonical layout
    Normalize(NormalizeArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the stderr log subscriber.
///
/// `TSCAT_LOG` takes precedence over `-v`.
/// Default filter directive for a `-v` count.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn setup_logging(verbose: u8, color_when: ColorWhen) {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    let ansi = match color_when {
        ColorWhen::Auto => stderr().is_terminal(),
        ColorWhen::Always => true,
        ColorWhen::Never => false,
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose, cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Lookup(args) => run_lookup(args),
        Commands::Lint(args) => run_lint(args),
        Commands::Normalize(args) => run_normalize(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
