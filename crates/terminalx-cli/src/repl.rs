//! Line-oriented session driver.
//!
//! Feeds lines into a [`TerminalSession`] and writes the entries each line
//! appends. Generic over reader and writer so tests can run it on buffers.

use std::io::{self, BufRead, Write};

use terminalx_core::TerminalSession;

use crate::render::{self, Format};

/// ANSI "erase screen, cursor home"
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct Repl<W: Write> {
    session: TerminalSession,
    out: W,
    format: Format,
    /// Interactive mode: print a prompt before reading, don't echo prompt
    /// lines, and clear the screen on `clear`
    interactive: bool,
}

impl<W: Write> Repl<W> {
    pub fn new(session: TerminalSession, out: W, format: Format, interactive: bool) -> Self {
        Self {
            session,
            out,
            format,
            interactive,
        }
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write every entry currently in the scrollback.
    pub fn write_history(&mut self) -> io::Result<()> {
        let echo = !self.interactive;
        for entry in self.session.history() {
            render::write_entry(&mut self.out, entry, self.format, echo)?;
        }
        self.out.flush()
    }

    /// Submit one line and write what it appended.
    ///
    /// Returns `true` if the line produced an error entry.
    pub fn run_line(&mut self, line: &str) -> io::Result<bool> {
        let first_id = self.session.history().first().map(|e| e.id);
        let appended = self.session.submit(line);
        let history = self.session.history();

        // `clear` replaces the scrollback, starting it with a fresh banner
        let cleared = history.first().map(|e| e.id) != first_id;
        if cleared && self.interactive && self.format == Format::Text {
            write!(self.out, "{}", CLEAR_SCREEN)?;
            return self.write_history().map(|()| false);
        }

        let start = history.len().saturating_sub(appended);
        let echo = !self.interactive;
        let mut failed = false;
        for entry in &history[start..] {
            failed |= entry.output.is_error();
            render::write_entry(&mut self.out, entry, self.format, echo)?;
        }
        self.out.flush()?;
        Ok(failed)
    }

    /// Run every line from `input` until end of input.
    ///
    /// Returns `true` if any line produced an error entry.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<bool> {
        let mut failed = false;
        let mut lines = input.lines();
        loop {
            if self.interactive {
                write!(self.out, "{} ", self.session.prompt())?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            failed |= self.run_line(&line?)?;
        }
        if self.interactive {
            writeln!(self.out)?;
        }
        Ok(failed)
    }
}
