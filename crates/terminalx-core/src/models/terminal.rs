//! Terminal output types consumed by the rendering layer.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use super::DirEntry;

/// One row of the `help` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpEntry {
    pub command: String,
    pub description: String,
}

/// One row of the `ps` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub tty: String,
    pub time: String,
    pub cmd: String,
}

/// A renderable unit of terminal output.
///
/// Plain text variants carry the exact string to print. Structured variants
/// carry data and leave layout (grids, icons, colors) to the front end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Output {
    /// Welcome message shown at start and after `clear`
    Banner {
        title: String,
        hint: String,
        system_time: String,
    },
    /// Echo of a submitted line with its prompt
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Command table from `help`
    Help(Vec<HelpEntry>),
    /// Directory listing from `ls`
    Listing(Vec<DirEntry>),
    /// File content from `cat`, shown preformatted
    FileContent(String),
    /// Synthetic CPU reading in percent
    CpuUsage(f64),
    /// Synthetic memory reading
    MemoryUsage { used_mb: u32, total_mb: u32 },
    /// Mock process table from `ps`
    ProcessTable(Vec<ProcessInfo>),
}

impl Output {
    pub fn text(s: impl Into<String>) -> Self {
        Output::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Output::Error(s.into())
    }

    /// Check if this output reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Output::Error(_))
    }

    /// Plain-text rendering, as a text-only terminal would print it.
    pub fn to_plain_text(&self) -> String {
        match self {
            Output::Banner {
                title,
                hint,
                system_time,
            } => format!("{}\n{}\nSystem time: {}", title, hint, system_time),
            Output::Command { prompt, input } => format!("{} {}", prompt, input),
            Output::Text(text) | Output::Error(text) | Output::FileContent(text) => text.clone(),
            Output::Help(rows) => {
                let mut out = String::from("Available commands:");
                for row in rows {
                    out.push_str(&format!("\n{:<10}{}", row.command, row.description));
                }
                out
            }
            Output::Listing(entries) => entries
                .iter()
                .map(|e| {
                    if e.is_dir {
                        format!("{}/", e.name)
                    } else {
                        e.name.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("  "),
            Output::CpuUsage(percent) => format!("CPU Usage: {:.2}%", percent),
            Output::MemoryUsage { used_mb, total_mb } => {
                format!("Memory: {}MB / {}MB", used_mb, total_mb)
            }
            Output::ProcessTable(rows) => {
                let mut out = String::from("PID\tTTY\tTIME\t\tCMD");
                for row in rows {
                    out.push_str(&format!(
                        "\n{}\t{}\t{}\t{}",
                        row.pid, row.tty, row.time, row.cmd
                    ));
                }
                out
            }
        }
    }
}

/// A single scrollback entry with a unique ID.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique ID for efficient keying in rendered lists
    pub id: usize,
    pub output: Output,
}

// Global counter for generating unique IDs
static HISTORY_ENTRY_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl HistoryEntry {
    pub fn new(output: Output) -> Self {
        Self {
            id: HISTORY_ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
            output,
        }
    }
}

impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare output, not ID
        self.output == other.output
    }
}
