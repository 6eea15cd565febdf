//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use plural::{ShortcutEntry, Substitutions};

/// Format a substitution mapping as a two-column table.
pub fn format_substitutions_table(substitutions: &Substitutions) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Key", "Value"]);

    for (key, value) in substitutions {
        table.add_row(vec![key.as_str(), value.as_str()]);
    }

    table
}

/// Format shortcut entries with one column per form.
pub fn format_shortcuts_table<'a>(entries: impl IntoIterator<Item = &'a ShortcutEntry>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Shortcut", "Null", "Singular", "Plural"]);

    for entry in entries {
        table.add_row(vec![
            entry.name.as_str(),
            entry.forms.zero.as_str(),
            entry.forms.singular.as_str(),
            entry.forms.plural.as_str(),
        ]);
    }

    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
