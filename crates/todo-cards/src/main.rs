//! CLI entry point for todo-cards.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod batch;
mod config;
mod tui;

/// To-do cards in the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "todo-cards",
    version,
    about = "todo-cards: validated to-do entries shown as sortable cards"
)]
struct Cli {
    /// Configuration file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append TUI logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the interactive terminal UI (default).
    Tui,

    /// Apply newline-separated commands to a fresh session.
    Batch {
        /// Read commands from this file instead of stdin.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Write the default configuration file.
    InitConfig {
        /// Destination (defaults to the user config path).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file without asking.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let Cli {
        config,
        log_file,
        cmd,
    } = Cli::parse();
    let cmd = cmd.unwrap_or(Command::Tui);

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    match cmd {
        Command::Tui => {
            let keybindings = config::load_keybindings(config.as_deref())?;
            tui::run(keybindings, log_file.as_deref())
        }
        Command::Batch { file } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            match file {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("failed to open batch file: {}", path.display()))?;
                    batch::run(BufReader::new(file), &mut out)
                }
                None => batch::run(io::stdin().lock(), &mut out),
            }
        }
        Command::InitConfig { output, force } => config::init_config(output.as_deref(), force),
    }
}

const fn should_install_tracing(cmd: &Command) -> bool {
    !matches!(cmd, Command::Tui)
}

/// `RUST_LOG` wins; `fallback` applies when it is unset or invalid.
pub(crate) fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn install_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tui() {
        let cli = Cli::parse_from(["todo-cards"]);
        assert!(cli.cmd.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_batch_command() {
        let cli = Cli::parse_from(["todo-cards", "batch", "--file", "tasks.txt", "--config", "alt.toml"]);

        match cli.cmd {
            Some(Command::Batch { file }) => assert_eq!(file, Some(PathBuf::from("tasks.txt"))),
            other => panic!("expected batch command, got {other:?}"),
        }
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn parse_init_config_command() {
        let cli = Cli::parse_from(["todo-cards", "init-config", "-o", "out.toml", "--force"]);

        match cli.cmd {
            Some(Command::InitConfig { output, force }) => {
                assert_eq!(output, Some(PathBuf::from("out.toml")));
                assert!(force);
            }
            other => panic!("expected init-config command, got {other:?}"),
        }
    }

    #[test]
    fn parse_tui_with_log_file() {
        let cli = Cli::parse_from(["todo-cards", "--log-file", "tui.log", "tui"]);
        assert!(matches!(cli.cmd, Some(Command::Tui)));
        assert_eq!(cli.log_file, Some(PathBuf::from("tui.log")));
    }

    #[test]
    fn skips_tracing_in_tui_mode() {
        assert!(!should_install_tracing(&Command::Tui));
    }

    #[test]
    fn installs_tracing_for_other_commands() {
        assert!(should_install_tracing(&Command::Batch { file: None }));
        assert!(should_install_tracing(&Command::InitConfig {
            output: None,
            force: false,
        }));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
