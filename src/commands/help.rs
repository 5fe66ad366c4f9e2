//! Context help (`?`).
//!
//! Rendered from the command table so the listing always matches what the
//! router accepts in the current mode.

use super::definitions::commands_for;
use crate::session::ModeKind;

/// Help lines for `mode`, one `  <usage>  <description>` line per command.
pub fn help_lines(mode: ModeKind) -> Vec<String> {
    let defs: Vec<_> = commands_for(mode).collect();
    let width = defs.iter().map(|d| d.usage.len()).max().unwrap_or(0);
    defs.iter()
        .map(|d| format!("  {:<width$}  {}", d.usage, d.description))
        .collect()
}
