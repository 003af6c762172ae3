// Rust guideline compliant 2026-10-19

//! Pushgate CLI Application
//!
//! Command-line interface for the Pushgate push policy checks.

use clap::Parser;
use pushgate_cli::commands::{self, config::ConfigAction, GlobalOptions};
use pushgate_cli::{create_formatter, should_use_color, terminal::print_error};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "pushgate",
    version,
    about = "Pushgate: server-side checks for branch names and commit messages",
    long_about = "Pushgate validates pushed branch names and commit messages against a configurable policy. Install `pushgate-pre-receive` as a pre-receive hook, or use the check commands locally.",
    after_help = "Examples:\n  pushgate pre-receive < updates\n  pushgate check-branch feature/parser \"bad branch\"\n  pushgate check-message --file .git/COMMIT_EDITMSG\n  pushgate rules --json\n  pushgate config init --repo /srv/git/project.git\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Repository to operate on
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the pre-receive hook on ref updates from stdin
    PreReceive,

    /// Check branch names against the branch rules
    CheckBranch {
        /// Branch or ref names ('refs/heads/' is prepended when missing)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Check a commit message against the message rules
    CheckMessage {
        /// Message file ('-' for stdin, the default)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// List the active rules
    Rules,

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = GlobalOptions {
        config: cli.config,
        repo: cli.repo,
        json: cli.json,
        use_color: !cli.no_color && should_use_color(),
    };

    match dispatch(cli.command, &options) {
        Ok(code) => code,
        Err(error) => {
            if options.json {
                eprintln!("{}", create_formatter(true).format_error(&format!("{:#}", error)));
            } else {
                print_error(&format!("{:#}", error), options.use_color);
            }
            ExitCode::from(commands::exit_code_for(&error))
        }
    }
}

fn dispatch(command: Option<Commands>, options: &GlobalOptions) -> anyhow::Result<ExitCode> {
    let passed = match command {
        Some(Commands::PreReceive) => {
            let code = commands::pre_receive::execute(options);
            return Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)));
        }
        Some(Commands::CheckBranch { names }) => commands::check::branch(&names, options)?,
        Some(Commands::CheckMessage { file }) => {
            commands::check::message(file.as_deref(), options)?
        }
        Some(Commands::Rules) => {
            commands::rules::execute(options)?;
            true
        }
        Some(Commands::Config { action }) => {
            commands::config::execute(action, options)?;
            true
        }
        None => {
            println!("Use --help for usage information");
            true
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
