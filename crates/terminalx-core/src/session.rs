//! Terminal session state.
//!
//! A [`TerminalSession`] owns everything one terminal needs between key
//! presses: the file system, the working directory, the scrollback and the
//! recall list used by the up/down keys. Front ends call [`submit`] for each
//! entered line and render [`history`].
//!
//! [`submit`]: TerminalSession::submit
//! [`history`]: TerminalSession::history

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::commands::{self, ExecContext};
use crate::config::{APP_NAME, BANNER_HINT, SessionConfig};
use crate::filesystem::VirtualFs;
use crate::models::{HistoryEntry, Output, VirtualPath};
use crate::sysinfo;

/// The welcome banner shown at start and after `clear`.
pub fn banner() -> Output {
    Output::Banner {
        title: format!("Welcome to {}", APP_NAME),
        hint: BANNER_HINT.to_string(),
        system_time: sysinfo::banner_time(),
    }
}

/// What the input control should show after a recall step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall {
    /// Replace the input with this earlier command
    Show(String),
    /// Empty the input (stepped past the newest entry)
    Clear,
    /// Leave the input as it is
    Unchanged,
}

/// State of one terminal session.
#[derive(Debug)]
pub struct TerminalSession {
    config: SessionConfig,
    fs: VirtualFs,
    cwd: VirtualPath,
    history: Vec<HistoryEntry>,
    /// Submitted lines, most recent first
    command_history: Vec<String>,
    /// Position in `command_history` while recalling
    history_index: Option<usize>,
    rng: StdRng,
}

impl TerminalSession {
    /// Creates a session over the seeded file system with default settings.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default(), VirtualFs::seeded())
    }

    /// Creates a session with the given identity and file system.
    ///
    /// Initializes:
    /// - History: the banner
    /// - Current path: `config.home`
    /// - Empty recall list
    pub fn with_config(config: SessionConfig, fs: VirtualFs) -> Self {
        Self::with_rng(config, fs, StdRng::from_entropy())
    }

    /// Like [`with_config`](Self::with_config) with a caller-supplied random
    /// source for `cpu` and `memory`.
    pub fn with_rng(config: SessionConfig, fs: VirtualFs, rng: StdRng) -> Self {
        if !fs.is_directory(&config.home) {
            tracing::warn!(home = %config.home, "home directory does not exist in file system");
        }
        Self {
            cwd: config.home.clone(),
            config,
            fs,
            history: vec![HistoryEntry::new(banner())],
            command_history: Vec::new(),
            history_index: None,
            rng,
        }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn cwd(&self) -> &VirtualPath {
        &self.cwd
    }

    /// Scrollback entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Submitted lines, most recent first.
    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    /// Gets the current prompt string for display.
    ///
    /// Format: `{user}@{host}:~/{cwd}$`
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:~/{}$",
            self.config.user,
            self.config.host,
            self.cwd.as_relative()
        )
    }

    /// Handle one entered line.
    ///
    /// The line is trimmed and run, then the prompt line (with the prompt as
    /// it was before the command) and the command's output are appended to
    /// the history. A blank line appends only the prompt line. Non-blank lines
    /// are added to the recall list.
    ///
    /// Returns the number of entries appended.
    pub fn submit(&mut self, raw: &str) -> usize {
        let line = raw.trim();
        let prompt = self.prompt();

        if line.is_empty() {
            self.history.push(HistoryEntry::new(Output::Command {
                prompt,
                input: String::new(),
            }));
            return 1;
        }

        let output = {
            let mut ctx = ExecContext {
                fs: &mut self.fs,
                cwd: &mut self.cwd,
                history: &mut self.history,
                config: &self.config,
                rng: &mut self.rng,
            };
            commands::execute(line, &mut ctx)
        };

        self.history.push(HistoryEntry::new(Output::Command {
            prompt,
            input: line.to_string(),
        }));
        let appended = match output {
            Some(output) => {
                self.history.push(HistoryEntry::new(output));
                2
            }
            None => 1,
        };

        self.add_to_command_history(line);
        appended
    }

    fn add_to_command_history(&mut self, cmd: &str) {
        if self.command_history.first().map(String::as_str) != Some(cmd) {
            self.command_history.insert(0, cmd.to_string());
            // Limit command history size
            self.command_history
                .truncate(self.config.max_command_history);
        }
        self.history_index = None;
    }

    /// Step toward older commands (ArrowUp). Clamped at the oldest entry.
    pub fn recall_up(&mut self) -> Recall {
        let next = self.history_index.map_or(0, |i| i + 1);
        if next >= self.command_history.len() {
            return Recall::Unchanged;
        }
        self.history_index = Some(next);
        Recall::Show(self.command_history[next].clone())
    }

    /// Step toward newer commands (ArrowDown). Stepping past the newest
    /// clears the input.
    pub fn recall_down(&mut self) -> Recall {
        match self.history_index {
            None => Recall::Unchanged,
            Some(0) => {
                self.history_index = None;
                Recall::Clear
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                Recall::Show(self.command_history[i - 1].clone())
            }
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> TerminalSession {
        TerminalSession::with_rng(
            SessionConfig::default(),
            VirtualFs::seeded(),
            StdRng::seed_from_u64(1),
        )
    }

    fn outputs(s: &TerminalSession) -> Vec<&Output> {
        s.history().iter().map(|e| &e.output).collect()
    }

    #[test]
    fn test_starts_with_banner_at_home() {
        let s = session();
        assert_eq!(s.history().len(), 1);
        assert!(matches!(s.history()[0].output, Output::Banner { ref title, .. } if title == "Welcome to TerminalX"));
        assert_eq!(s.cwd(), &VirtualPath::parse("home/user"));
        assert_eq!(s.prompt(), "user@nextjs:~/home/user$");
    }

    #[test]
    fn test_submit_appends_prompt_and_output() {
        let mut s = session();
        assert_eq!(s.submit("pwd"), 2);

        let out = outputs(&s);
        assert_eq!(
            out[1],
            &Output::Command {
                prompt: "user@nextjs:~/home/user$".to_string(),
                input: "pwd".to_string()
            }
        );
        assert_eq!(out[2], &Output::text("/home/user"));
    }

    #[test]
    fn test_submit_trims_input() {
        let mut s = session();
        s.submit("   echo hi   ");
        assert!(matches!(
            &s.history()[1].output,
            Output::Command { input, .. } if input == "echo hi"
        ));
        assert_eq!(s.command_history(), ["echo hi"]);
    }

    #[test]
    fn test_silent_commands_append_prompt_only() {
        let mut s = session();
        assert_eq!(s.submit("cd .."), 1);
        assert_eq!(s.submit("mkdir notes"), 1);
        assert_eq!(s.submit("rm notes"), 1);
        assert_eq!(s.history().len(), 4);
    }

    #[test]
    fn test_prompt_captured_before_cd() {
        let mut s = session();
        s.submit("cd ..");
        assert!(matches!(
            &s.history()[1].output,
            Output::Command { prompt, .. } if prompt == "user@nextjs:~/home/user$"
        ));
        assert_eq!(s.prompt(), "user@nextjs:~/home$");
    }

    #[test]
    fn test_blank_line() {
        let mut s = session();
        assert_eq!(s.submit("   "), 1);
        assert!(matches!(
            &s.history()[1].output,
            Output::Command { input, .. } if input.is_empty()
        ));
        assert!(s.command_history().is_empty());
    }

    #[test]
    fn test_clear_keeps_banner_and_clear_line() {
        let mut s = session();
        s.submit("ls");
        s.submit("echo hello");
        assert_eq!(s.submit("clear"), 1);

        let out = outputs(&s);
        assert_eq!(out.len(), 2);
        assert!(matches!(out[0], Output::Banner { .. }));
        assert!(matches!(out[1], Output::Command { input, .. } if input == "clear"));
    }

    #[test]
    fn test_errors_are_history_entries() {
        let mut s = session();
        assert_eq!(s.submit("nope"), 2);
        assert_eq!(
            s.history().last().map(|e| &e.output),
            Some(&Output::error("command not found: nope"))
        );
    }

    #[test]
    fn test_recall_list_dedups_head() {
        let mut s = session();
        s.submit("ls");
        s.submit("ls");
        s.submit("pwd");
        s.submit("ls");
        assert_eq!(s.command_history(), ["ls", "pwd", "ls"]);
    }

    #[test]
    fn test_recall_list_capped() {
        let config = SessionConfig {
            max_command_history: 2,
            ..SessionConfig::default()
        };
        let mut s = TerminalSession::with_config(config, VirtualFs::seeded());
        s.submit("echo 1");
        s.submit("echo 2");
        s.submit("echo 3");
        assert_eq!(s.command_history(), ["echo 3", "echo 2"]);
    }

    #[test]
    fn test_zero_cap_disables_recall() {
        let config = SessionConfig {
            max_command_history: 0,
            ..SessionConfig::default()
        };
        let mut s = TerminalSession::with_config(config, VirtualFs::seeded());
        assert_eq!(s.submit("echo 1"), 2);
        assert!(s.command_history().is_empty());
        assert_eq!(s.recall_up(), Recall::Unchanged);
        assert_eq!(s.recall_down(), Recall::Unchanged);
    }

    #[test]
    fn test_recall_navigation() {
        let mut s = session();
        assert_eq!(s.recall_up(), Recall::Unchanged);
        assert_eq!(s.recall_down(), Recall::Unchanged);

        s.submit("ls");
        s.submit("pwd");

        assert_eq!(s.recall_up(), Recall::Show("pwd".to_string()));
        assert_eq!(s.recall_up(), Recall::Show("ls".to_string()));
        // Clamped at the oldest entry
        assert_eq!(s.recall_up(), Recall::Unchanged);
        assert_eq!(s.recall_down(), Recall::Show("pwd".to_string()));
        assert_eq!(s.recall_down(), Recall::Clear);
        assert_eq!(s.recall_down(), Recall::Unchanged);
    }

    #[test]
    fn test_submit_resets_recall_index() {
        let mut s = session();
        s.submit("ls");
        s.submit("pwd");
        s.recall_up();
        s.recall_up();
        s.submit("whoami");
        assert_eq!(s.recall_up(), Recall::Show("whoami".to_string()));
    }

    #[test]
    fn test_ids_increase() {
        let mut s = session();
        s.submit("echo a");
        let ids: Vec<_> = s.history().iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
