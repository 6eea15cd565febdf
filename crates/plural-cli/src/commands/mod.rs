//! CLI command implementations.

mod resolve;
mod shortcuts;

pub use resolve::{run_resolve, ResolveArgs};
pub use shortcuts::{run_shortcuts, ShortcutsArgs};
