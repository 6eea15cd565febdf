//! Implementation of the `plural resolve` command.

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use plural::parser::{parse_request_list, parse_requests};
use plural::resolver::candidate_key;
use plural::{ResolveConfig, Resolver, Substitutions, VariantRequest, DEFAULT_SEPARATOR};

use crate::output::table::format_substitutions_table;
use crate::output::RequestDiagnostic;

/// Source name used in diagnostics for requests given as arguments.
const ARGUMENTS_SOURCE: &str = "<arguments>";

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Request lines, e.g. `2` or `0 "leaf|leaves"` (one request per argument)
    pub requests: Vec<String>,

    /// Read request lines from a file instead of arguments
    #[arg(short, long, conflicts_with = "requests")]
    pub file: Option<PathBuf>,

    /// Separator between the forms of a candidate string
    #[arg(long = "sep", default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Only show keys generated from candidate strings
    #[arg(long)]
    pub custom_only: bool,

    /// Print the value of a single key
    #[arg(long, conflicts_with = "json")]
    pub key: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<i32> {
    let resolver = match Resolver::new(ResolveConfig::with_separator(args.separator.clone())) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return Ok(exitcode::USAGE);
        }
    };

    // Each argument is one request, so its position is its index.
    let (source_name, content, parsed) = match &args.file {
        Some(path) => {
            let content = read_to_string(path)
                .into_diagnostic()
                .map_err(|e| miette!("Failed to read request file {:?}: {}", path, e))?;
            let parsed = parse_requests(&content);
            (path.display().to_string(), content, parsed)
        }
        None => (
            ARGUMENTS_SOURCE.to_string(),
            args.requests.join("\n"),
            parse_request_list(&args.requests),
        ),
    };

    let requests = match parsed {
        Ok(requests) => requests,
        Err(e) => {
            let diagnostic = RequestDiagnostic::from_parse_error(&source_name, &content, &e);
            return Err(diagnostic.into());
        }
    };
    log::info!("parsed {} requests from {}", requests.len(), source_name);

    let mut substitutions = resolver.resolve(&requests);
    if args.custom_only {
        substitutions = only_candidate_keys(substitutions, &requests, &args.separator);
    }

    if let Some(key) = &args.key {
        return Ok(print_key(&substitutions, key));
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&substitutions).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_substitutions_table(&substitutions));
    }

    Ok(exitcode::OK)
}

/// Keep only the keys that come from candidate strings.
fn only_candidate_keys(
    substitutions: Substitutions,
    requests: &[VariantRequest],
    separator: &str,
) -> Substitutions {
    let keys: HashSet<String> = requests
        .iter()
        .enumerate()
        .flat_map(|(index, request)| {
            request
                .candidates()
                .iter()
                .map(move |candidate| candidate_key(index, separator, candidate))
        })
        .collect();

    substitutions
        .into_iter()
        .filter(|(key, _)| keys.contains(key))
        .collect()
}

/// Print one value, or report that the key is missing.
fn print_key(substitutions: &Substitutions, key: &str) -> i32 {
    match substitutions.get(key) {
        Some(value) => {
            println!("{}", value);
            exitcode::OK
        }
        None => {
            eprintln!(
                "{} no substitution for key '{}'",
                "error:".red().bold(),
                key
            );
            exitcode::DATAERR
        }
    }
}
