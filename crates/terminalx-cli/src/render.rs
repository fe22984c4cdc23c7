//! Scrollback rendering for a text terminal.

use std::io::{self, Write};

use terminalx_core::{HistoryEntry, Output};

/// How entries are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// What a user would read on screen
    #[default]
    Text,
    /// One JSON object per entry (`{"id":..,"output":{"kind":..,"data":..}}`)
    Json,
}

/// Write one entry followed by a newline.
///
/// Text mode skips prompt lines when `echo_commands` is false, which is what
/// an interactive session wants since the user already sees what they typed.
pub fn write_entry<W: Write>(
    out: &mut W,
    entry: &HistoryEntry,
    format: Format,
    echo_commands: bool,
) -> io::Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer(&mut *out, entry)?;
            writeln!(out)
        }
        Format::Text => match &entry.output {
            Output::Command { .. } if !echo_commands => Ok(()),
            // An empty directory prints nothing
            Output::Listing(entries) if entries.is_empty() => Ok(()),
            output => writeln!(out, "{}", output.to_plain_text()),
        },
    }
}
