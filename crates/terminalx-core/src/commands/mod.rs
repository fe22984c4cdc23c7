//! Command parsing and execution.
//!
//! This module provides:
//! - `tokenize` for splitting a raw line into words
//! - `Command` enum for parsed terminal commands
//! - `execute` for running a raw line against an [`ExecContext`]
//!
//! # Architecture
//!
//! A line is split on runs of whitespace (no quoting or escaping), the first
//! word selects a [`Command`], and `execute_command` runs it against the
//! virtual file system. Every failure is returned as [`Output::Error`] text;
//! nothing here propagates an error to the caller.

mod execute;

pub use execute::{ExecContext, execute_command};

use std::fmt;

use crate::models::Output;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.md`).
///
/// Stored as typed; resolution against the current directory happens at
/// execution time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Clear,
    /// List a directory; `None` lists the current one
    Ls(Option<PathArg>),
    Cd(PathArg),
    Pwd,
    /// Entry name in the current directory; `None` when the operand is missing
    Mkdir(Option<String>),
    /// Entry name in the current directory; `None` when the operand is missing
    Rm(Option<String>),
    Cat(Option<PathArg>),
    Echo(String),
    Whoami,
    Date,
    Cpu,
    Memory,
    Ps,
    Unknown(String),
}

impl Command {
    /// Parse command from name and arguments.
    ///
    /// Names are case-sensitive. Extra arguments are ignored by commands that
    /// take at most one.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let first = args.first();
        match name {
            "help" => Self::Help,
            "clear" => Self::Clear,
            "ls" => Self::Ls(first.map(PathArg::new)),
            "cd" => Self::Cd(first.map(PathArg::new).unwrap_or_else(|| PathArg::new("~"))),
            "pwd" => Self::Pwd,
            "mkdir" => Self::Mkdir(first.cloned()),
            "rm" => Self::Rm(first.cloned()),
            "cat" => Self::Cat(first.map(PathArg::new)),
            "echo" => Self::Echo(args.join(" ")),
            "whoami" => Self::Whoami,
            "date" => Self::Date,
            "cpu" => Self::Cpu,
            "memory" => Self::Memory,
            "ps" => Self::Ps,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

/// Split a raw line on runs of whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Run one raw input line.
///
/// Returns `None` when nothing should be appended to the scrollback for the
/// command's output: a blank line, `clear`, or a successful `cd`, `mkdir` or
/// `rm`.
pub fn execute(line: &str, ctx: &mut ExecContext<'_>) -> Option<Output> {
    let tokens = tokenize(line);
    let (name, rest) = tokens.split_first()?;
    let args: Vec<String> = rest.iter().map(|s| s.to_string()).collect();

    tracing::debug!(command = *name, ?args, "dispatch");
    execute_command(Command::parse(name, &args), ctx)
}

// =============================================================================
// Tests
// =============================================================================
