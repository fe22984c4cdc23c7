//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual file system and returns renderable output.

use rand::RngCore;

use crate::config::{HELP_ENTRIES, PROCESS_TABLE, SessionConfig};
use crate::error::VfsError;
use crate::filesystem::VirtualFs;
use crate::models::{HelpEntry, HistoryEntry, Node, Output, ProcessInfo, VirtualPath};
use crate::resolver::resolve;
use crate::session::banner;
use crate::sysinfo;

use super::{Command, PathArg};

/// Everything a command may read or change.
///
/// Borrowed from the owning session for the duration of one command.
pub struct ExecContext<'a> {
    pub fs: &'a mut VirtualFs,
    pub cwd: &'a mut VirtualPath,
    /// Scrollback, replaced wholesale by `clear`
    pub history: &'a mut Vec<HistoryEntry>,
    pub config: &'a SessionConfig,
    /// Source for `cpu` and `memory` readings
    pub rng: &'a mut dyn RngCore,
}

/// Execute a parsed command and return its output, if any.
///
/// `clear` and `cd` act on the context directly; every other command only
/// reads the context or mutates the file system through it.
pub fn execute_command(cmd: Command, ctx: &mut ExecContext<'_>) -> Option<Output> {
    match cmd {
        Command::Help => Some(Output::Help(
            HELP_ENTRIES
                .iter()
                .map(|(command, description)| HelpEntry {
                    command: command.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        )),
        Command::Clear => {
            *ctx.history = vec![HistoryEntry::new(banner())];
            None
        }
        Command::Ls(path) => Some(execute_ls(path, ctx)),
        Command::Cd(path) => execute_cd(path, ctx),
        Command::Pwd => Some(Output::text(ctx.cwd.display())),
        Command::Mkdir(name) => execute_mkdir(name, ctx),
        Command::Rm(name) => execute_rm(name, ctx),
        Command::Cat(path) => Some(execute_cat(path, ctx)),
        Command::Echo(text) => Some(Output::Text(text)),
        Command::Whoami => Some(Output::text(ctx.config.user.clone())),
        Command::Date => Some(Output::Text(sysinfo::current_time())),
        Command::Cpu => Some(Output::CpuUsage(sysinfo::cpu_usage(&mut *ctx.rng))),
        Command::Memory => {
            let (used_mb, total_mb) = sysinfo::memory_usage(&mut *ctx.rng);
            Some(Output::MemoryUsage { used_mb, total_mb })
        }
        Command::Ps => Some(Output::ProcessTable(
            PROCESS_TABLE
                .iter()
                .map(|&(pid, tty, time, cmd)| ProcessInfo {
                    pid,
                    tty: tty.to_string(),
                    time: time.to_string(),
                    cmd: cmd.to_string(),
                })
                .collect(),
        )),
        Command::Unknown(name) => Some(Output::error(format!("command not found: {}", name))),
    }
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, ctx: &ExecContext<'_>) -> Output {
    let (target, label) = match path {
        Some(arg) => (
            resolve(arg.as_str(), ctx.cwd, &ctx.config.home),
            arg.to_string(),
        ),
        None => (ctx.cwd.clone(), ctx.cwd.as_relative()),
    };

    match ctx.fs.list(&target) {
        Ok(entries) => Output::Listing(entries),
        Err(VfsError::NotADirectory(_)) => Output::error(format!(
            "ls: cannot access '{}': Not a directory",
            label
        )),
        Err(_) => Output::error(format!(
            "ls: cannot access '{}': No such file or directory",
            label
        )),
    }
}

/// Execute `cd` command.
fn execute_cd(path: PathArg, ctx: &mut ExecContext<'_>) -> Option<Output> {
    let target = resolve(path.as_str(), ctx.cwd, &ctx.config.home);

    match ctx.fs.lookup(&target) {
        Some(Node::Directory(_)) => {
            tracing::debug!(cwd = %target, "changed directory");
            *ctx.cwd = target;
            None
        }
        Some(Node::File(_)) => Some(Output::error(format!("cd: not a directory: {}", path))),
        None => Some(Output::error(format!(
            "cd: no such file or directory: {}",
            path
        ))),
    }
}

/// Execute `mkdir` command.
fn execute_mkdir(name: Option<String>, ctx: &mut ExecContext<'_>) -> Option<Output> {
    let Some(name) = name else {
        return Some(Output::error("mkdir: missing operand"));
    };

    match ctx.fs.insert_directory(ctx.cwd, &name) {
        Ok(()) => None,
        Err(VfsError::AlreadyExists(_)) => Some(Output::error(format!(
            "mkdir: cannot create directory '{}': File exists",
            name
        ))),
        Err(err) => {
            tracing::debug!(%err, "mkdir failed");
            Some(Output::error(format!(
                "mkdir: cannot create directory '{}': Permission denied",
                name
            )))
        }
    }
}

/// Execute `rm` command.
fn execute_rm(name: Option<String>, ctx: &mut ExecContext<'_>) -> Option<Output> {
    let Some(name) = name else {
        return Some(Output::error("rm: missing operand"));
    };

    match ctx.fs.remove(ctx.cwd, &name) {
        Ok(()) => None,
        Err(VfsError::NotFound(_)) => Some(Output::error(format!(
            "rm: cannot remove '{}': No such file or directory",
            name
        ))),
        Err(VfsError::NotEmpty(_)) => Some(Output::error(format!(
            "rm: cannot remove '{}': Directory not empty",
            name
        ))),
        Err(err) => {
            tracing::debug!(%err, "rm failed");
            Some(Output::error(format!(
                "rm: cannot remove '{}': Permission denied",
                name
            )))
        }
    }
}

/// Execute `cat` command.
fn execute_cat(path: Option<PathArg>, ctx: &ExecContext<'_>) -> Output {
    let Some(path) = path else {
        return Output::error("cat: missing operand");
    };

    let target = resolve(path.as_str(), ctx.cwd, &ctx.config.home);
    match ctx.fs.read_file(&target) {
        Ok(content) => Output::FileContent(content.to_string()),
        Err(VfsError::IsADirectory(_)) => Output::error(format!("cat: {}: Is a directory", path)),
        Err(_) => Output::error(format!("cat: {}: No such file or directory", path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed;
    use crate::models::DirEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Fixture {
        fs: VirtualFs,
        cwd: VirtualPath,
        history: Vec<HistoryEntry>,
        config: SessionConfig,
        rng: StdRng,
    }

    impl Fixture {
        fn new() -> Self {
            let config = SessionConfig::default();
            Self {
                fs: VirtualFs::seeded(),
                cwd: config.home.clone(),
                history: Vec::new(),
                config,
                rng: StdRng::seed_from_u64(42),
            }
        }

        fn run(&mut self, line: &str) -> Option<Output> {
            let mut ctx = ExecContext {
                fs: &mut self.fs,
                cwd: &mut self.cwd,
                history: &mut self.history,
                config: &self.config,
                rng: &mut self.rng,
            };
            crate::commands::execute(line, &mut ctx)
        }

        fn listing(&mut self) -> Vec<String> {
            match self.run("ls") {
                Some(Output::Listing(entries)) => entries.into_iter().map(|e| e.name).collect(),
                other => panic!("Expected Listing, got {:?}", other),
            }
        }
    }

    fn error(s: &str) -> Option<Output> {
        Some(Output::error(s))
    }

    #[test]
    fn test_blank_line() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(""), None);
        assert_eq!(fx.run("   \t "), None);
    }

    #[test]
    fn test_help_table() {
        let mut fx = Fixture::new();
        match fx.run("help") {
            Some(Output::Help(rows)) => {
                assert_eq!(rows.len(), HELP_ENTRIES.len());
                assert_eq!(rows[0].command, "help");
                assert_eq!(rows[0].description, "Shows this help message.");
            }
            other => panic!("Expected Help, got {:?}", other),
        }
    }

    #[test]
    fn test_pwd() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("pwd"), Some(Output::text("/home/user")));
    }

    #[test]
    fn test_ls_flags_directories() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("ls"),
            Some(Output::Listing(vec![
                DirEntry {
                    name: "README.md".to_string(),
                    is_dir: false
                },
                DirEntry {
                    name: "documents".to_string(),
                    is_dir: true
                },
                DirEntry {
                    name: "secret.txt".to_string(),
                    is_dir: false
                },
                DirEntry {
                    name: "image.jpg".to_string(),
                    is_dir: false
                },
            ]))
        );
    }

    #[test]
    fn test_ls_with_path() {
        let mut fx = Fixture::new();
        match fx.run("ls /") {
            Some(Output::Listing(entries)) => {
                let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
                assert_eq!(names, vec!["home", "system.log", "config.json"]);
            }
            other => panic!("Expected Listing, got {:?}", other),
        }
        assert_eq!(
            fx.run("ls nowhere"),
            error("ls: cannot access 'nowhere': No such file or directory")
        );
        assert_eq!(
            fx.run("ls secret.txt"),
            error("ls: cannot access 'secret.txt': Not a directory")
        );
    }

    #[test]
    fn test_ls_empty_directory() {
        let mut fx = Fixture::new();
        fx.run("mkdir empty");
        assert_eq!(fx.run("ls empty"), Some(Output::Listing(vec![])));
    }

    #[test]
    fn test_ls_through_file_is_missing() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("ls secret.txt/inner"),
            error("ls: cannot access 'secret.txt/inner': No such file or directory")
        );
    }

    #[test]
    fn test_ls_vanished_cwd() {
        let mut fx = Fixture::new();
        fx.cwd = VirtualPath::parse("home/user/gone");
        assert_eq!(
            fx.run("ls"),
            error("ls: cannot access 'home/user/gone': No such file or directory")
        );
    }

    #[test]
    fn test_cd() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("cd .."), None);
        assert_eq!(fx.cwd, VirtualPath::parse("home"));
        assert_eq!(fx.run("cd user"), None);
        assert_eq!(fx.cwd, VirtualPath::parse("home/user"));
        assert_eq!(fx.run("cd /"), None);
        assert!(fx.cwd.is_root());
        assert_eq!(fx.run("cd"), None);
        assert_eq!(fx.cwd, VirtualPath::parse("home/user"));
    }

    #[test]
    fn test_cd_errors_keep_cwd() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("cd secret.txt"), error("cd: not a directory: secret.txt"));
        assert_eq!(
            fx.run("cd missing"),
            error("cd: no such file or directory: missing")
        );
        assert_eq!(fx.cwd, VirtualPath::parse("home/user"));
    }

    #[test]
    fn test_cd_nested_and_back() {
        let mut fx = Fixture::new();
        fx.run("mkdir a");
        fx.run("cd a");
        fx.run("mkdir b");
        fx.run("cd b");
        assert_eq!(fx.cwd, VirtualPath::parse("home/user/a/b"));
        fx.run("cd ..");
        assert_eq!(fx.cwd, VirtualPath::parse("home/user/a"));
    }

    #[test]
    fn test_mkdir() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("mkdir"), error("mkdir: missing operand"));
        assert_eq!(fx.run("mkdir notes"), None);
        assert!(fx.listing().contains(&"notes".to_string()));
        assert_eq!(
            fx.run("mkdir notes"),
            error("mkdir: cannot create directory 'notes': File exists")
        );
        assert_eq!(
            fx.run("mkdir secret.txt"),
            error("mkdir: cannot create directory 'secret.txt': File exists")
        );
    }

    #[test]
    fn test_mkdir_invalid_name_is_denied() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("mkdir a/b"),
            error("mkdir: cannot create directory 'a/b': Permission denied")
        );
        assert_eq!(
            fx.run("mkdir .."),
            error("mkdir: cannot create directory '..': Permission denied")
        );
    }

    #[test]
    fn test_rm() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("rm"), error("rm: missing operand"));
        assert_eq!(
            fx.run("rm ghost"),
            error("rm: cannot remove 'ghost': No such file or directory")
        );
        assert_eq!(fx.run("rm image.jpg"), None);
        assert!(!fx.listing().contains(&"image.jpg".to_string()));
    }

    #[test]
    fn test_rm_non_empty_directory() {
        let mut fx = Fixture::new();
        let before = fx.fs.snapshot();
        assert_eq!(
            fx.run("rm documents"),
            error("rm: cannot remove 'documents': Directory not empty")
        );
        assert_eq!(*fx.fs.snapshot(), *before);
    }

    #[test]
    fn test_rm_dot_entries_not_found() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run("rm ."),
            error("rm: cannot remove '.': No such file or directory")
        );
        assert_eq!(
            fx.run("rm .."),
            error("rm: cannot remove '..': No such file or directory")
        );
    }

    #[test]
    fn test_cat() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("cat"), error("cat: missing operand"));
        assert_eq!(
            fx.run("cat secret.txt"),
            Some(Output::FileContent(seed::SECRET.to_string()))
        );
        assert_eq!(
            fx.run("cat documents/project-plan.txt"),
            Some(Output::FileContent(seed::PROJECT_PLAN.to_string()))
        );
        assert_eq!(
            fx.run("cat /system.log"),
            Some(Output::FileContent(seed::SYSTEM_LOG.to_string()))
        );
        assert_eq!(fx.run("cat documents"), error("cat: documents: Is a directory"));
        assert_eq!(fx.run("cat ."), error("cat: .: Is a directory"));
        assert_eq!(
            fx.run("cat nope"),
            error("cat: nope: No such file or directory")
        );
    }

    #[test]
    fn test_echo_and_whoami() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("echo  hello   world"), Some(Output::text("hello world")));
        assert_eq!(fx.run("echo"), Some(Output::text("")));
        assert_eq!(fx.run("whoami"), Some(Output::text("user")));
    }

    #[test]
    fn test_whoami_uses_config() {
        let mut fx = Fixture::new();
        fx.config.user = "alice".to_string();
        assert_eq!(fx.run("whoami"), Some(Output::text("alice")));
    }

    #[test]
    fn test_readings() {
        let mut fx = Fixture::new();
        match fx.run("cpu") {
            Some(Output::CpuUsage(p)) => assert!((5.0..20.0).contains(&p)),
            other => panic!("Expected CpuUsage, got {:?}", other),
        }
        match fx.run("memory") {
            Some(Output::MemoryUsage { used_mb, total_mb }) => {
                assert!((2048..6144).contains(&used_mb));
                assert_eq!(total_mb, 8192);
            }
            other => panic!("Expected MemoryUsage, got {:?}", other),
        }
        assert!(matches!(fx.run("date"), Some(Output::Text(ref t)) if !t.is_empty()));
    }

    #[test]
    fn test_ps() {
        let mut fx = Fixture::new();
        match fx.run("ps") {
            Some(Output::ProcessTable(rows)) => {
                let pids: Vec<_> = rows.iter().map(|r| r.pid).collect();
                assert_eq!(pids, vec![1, 1337, 1350]);
                assert_eq!(rows[0].cmd, "/sbin/init");
            }
            other => panic!("Expected ProcessTable, got {:?}", other),
        }
    }

    #[test]
    fn test_clear_resets_history() {
        let mut fx = Fixture::new();
        fx.history.push(HistoryEntry::new(Output::text("old")));
        fx.history.push(HistoryEntry::new(Output::text("older")));

        assert_eq!(fx.run("clear"), None);
        assert_eq!(fx.history.len(), 1);
        assert!(matches!(fx.history[0].output, Output::Banner { .. }));
    }

    #[test]
    fn test_unknown_command() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("sudo rm -rf /"), error("command not found: sudo"));
    }
}
