//! Application configuration.
//!
//! Centralizes the constants used throughout the terminal: identity, banner
//! text, the static tables printed by `help` and `ps`, synthetic system
//! readings, and the seed file system.

use serde::{Deserialize, Serialize};

use crate::models::VirtualPath;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the banner.
pub const APP_NAME: &str = "TerminalX";

/// Hint line displayed under the banner title.
pub const BANNER_HINT: &str = "Type 'help' to see available commands.";

/// Default user name (`whoami`, prompt).
pub const DEFAULT_USER: &str = "user";

/// Default host name shown in the prompt.
pub const DEFAULT_HOST: &str = "nextjs";

/// Home directory, relative to root.
pub const HOME_PATH: &str = "home/user";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of recall entries kept for up/down navigation.
pub const MAX_COMMAND_HISTORY: usize = 100;

// =============================================================================
// Command Tables
// =============================================================================

/// Rows printed by `help`, in display order.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("help", "Shows this help message."),
    ("clear", "Clears the terminal screen."),
    ("ls", "Lists directory contents."),
    ("cd", "Changes the current directory."),
    ("pwd", "Prints the current working directory."),
    ("mkdir", "Creates a new directory."),
    ("rm", "Removes a file or empty directory."),
    ("cat", "Displays the content of a file."),
    ("echo", "Displays a line of text."),
    ("whoami", "Prints the current user."),
    ("date", "Displays the current date and time."),
    ("cpu", "Shows mock CPU usage."),
    ("memory", "Shows mock memory usage."),
    ("ps", "Shows mock process list."),
];

/// Mock process table for `ps`: (pid, tty, time, cmd).
pub const PROCESS_TABLE: &[(u32, &str, &str, &str)] = &[
    (1, "?", "00:00:01", "/sbin/init"),
    (1337, "pts/0", "00:00:00", "-bash"),
    (1350, "pts/0", "00:00:00", "ps"),
];

/// Synthetic system readings.
pub mod sysinfo {
    /// Lowest CPU percentage reported (inclusive).
    pub const CPU_MIN_PERCENT: f64 = 5.0;
    /// Upper CPU bound (exclusive).
    pub const CPU_MAX_PERCENT: f64 = 20.0;
    /// Lowest used memory in MB (inclusive).
    pub const MEMORY_MIN_MB: u32 = 2048;
    /// Upper used memory bound in MB (exclusive).
    pub const MEMORY_MAX_MB: u32 = 6144;
    /// Reported total memory in MB.
    pub const MEMORY_TOTAL_MB: u32 = 8192;
}

// =============================================================================
// Seed File System
// =============================================================================

/// Contents of the files present at session start.
pub mod seed {
    pub const README: &str = "## Welcome to my terminal!\n\nType help to see available commands.\n\nThis is a virtual file system. You can create files and directories, but nothing is saved permanently.";
    pub const PROJECT_PLAN: &str = "Milestone 1: Build the core terminal.\nMilestone 2: Add advanced features like autocomplete.";
    pub const SECRET: &str = "The secret is... there is no secret. 🤫";
    pub const IMAGE: &str = "This is a mock image file.";
    pub const SYSTEM_LOG: &str = "System boot successful. All services started.";
    pub const CONFIG_JSON: &str = "{ \"theme\": \"dark\", \"user\": \"user\" }";
}

// =============================================================================
// Session Configuration
// =============================================================================

/// Per-session identity and limits.
///
/// Front ends may load this from their own configuration files; every field
/// falls back to the constants above.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Reported by `whoami` and shown in the prompt.
    pub user: String,
    /// Shown in the prompt.
    pub host: String,
    /// Target of `cd` with no argument and of `~`; also the starting cwd.
    pub home: VirtualPath,
    /// Recall list capacity; `0` disables recall.
    pub max_command_history: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
            home: VirtualPath::parse(HOME_PATH),
            max_command_history: MAX_COMMAND_HISTORY,
        }
    }
}
