//! Plural CLI entry point.
//!
//! Provides command-line tools for working with plural substitutions:
//! - `plural resolve` - Resolve request lines into substitution keys
//! - `plural shortcuts` - List the predefined shortcuts

mod commands;
mod output;

use std::process::exit;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{run_resolve, run_shortcuts, ResolveArgs, ShortcutsArgs};

/// Plural word-form tools.
#[derive(Debug, Parser)]
#[command(name = "plural")]
#[command(about = "Plural word-form substitution tools", long_about = None)]
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
    /// Resolve request lines into substitution keys
    Resolve(ResolveArgs),
    /// List the predefined shortcuts
    Shortcuts(ShortcutsArgs),
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

/// Install the logger. `RUST_LOG` takes precedence over `-v`.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

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
        Commands::Resolve(args) => run_resolve(args),
        Commands::Shortcuts(args) => run_shortcuts(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn key_conflicts_with_json() {
        let result = Cli::try_parse_from(["plural", "resolve", "2", "--key", "P0s", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn key_alone_is_accepted() {
        let cli = Cli::try_parse_from(["plural", "resolve", "2", "", "1", "--key", "P0s"]).unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.requests, ["2", "", "1"]);
                assert_eq!(args.key.as_deref(), Some("P0s"));
            }
            Commands::Shortcuts(_) => panic!("expected resolve command"),
        }
    }
}
