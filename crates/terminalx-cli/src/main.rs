use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use terminalx_cli::{CliConfig, Format, Repl};
use terminalx_core::TerminalSession;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "terminalx-cli")]
#[command(about = "A simulated terminal over an in-memory file system")]
#[command(version)]
struct Cli {
    /// TOML file with session identity and seed location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON file tree to start from instead of the built-in one
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Run a command line and exit (repeatable)
    #[arg(short = 'c', value_name = "LINE")]
    commands: Vec<String>,

    /// Print each scrollback entry as a JSON object
    #[arg(long)]
    json: bool,

    /// Don't print the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Log filter (error, warn, info, debug, trace); defaults to RUST_LOG or "warn"
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match run(cli) {
        Ok(true) => ExitCode::FAILURE,
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("terminalx-cli: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether any command produced an error entry.
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut settings = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }

    let fs = settings.file_system()?;
    let session = TerminalSession::with_config(settings.session, fs);

    let format = if cli.json { Format::Json } else { Format::Text };
    let scripted = !cli.commands.is_empty();
    let interactive = !scripted && io::stdin().is_terminal();
    tracing::info!(?format, interactive, "starting session");

    let mut repl = Repl::new(session, io::stdout().lock(), format, interactive);
    if !cli.no_banner {
        repl.write_history()?;
    }

    if scripted {
        let mut failed = false;
        for line in &cli.commands {
            failed |= repl.run_line(line)?;
        }
        return Ok(failed);
    }

    Ok(repl.run(io::stdin().lock())?)
}
