//! Implementation of the `plural shortcuts` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use plural::{shortcut_listing, shortcuts, ShortcutEntry};

use crate::output::table::format_shortcuts_table;

/// Arguments for the shortcuts command.
#[derive(Debug, Args)]
pub struct ShortcutsArgs {
    /// Print one `[name: null, singular, plural]` line per shortcut
    #[arg(long, conflicts_with = "json")]
    pub plain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the shortcuts command.
pub fn run_shortcuts(args: ShortcutsArgs) -> Result<i32> {
    if args.json {
        let entries: Vec<&ShortcutEntry> = shortcuts().collect();
        let json_output = serde_json::to_string_pretty(&entries).into_diagnostic()?;
        println!("{}", json_output);
    } else if args.plain {
        println!("{}", shortcut_listing());
    } else {
        println!("{}", format_shortcuts_table(shortcuts()));
    }
    Ok(exitcode::OK)
}
