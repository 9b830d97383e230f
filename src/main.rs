use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_tracker::cli::{ErrorMode, Session};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::is_valid_amount;
use expense_tracker::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record income and expenses and see running totals",
    long_about = "Expense Tracker keeps an in-memory ledger of named income and \
                  expense transactions for the length of a session and reports \
                  total income, total expenses and the net balance."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Shell,

    /// Run a script of session commands in one session ("-" reads stdin)
    Run {
        /// Path to the script
        script: PathBuf,
        /// Report failing lines and carry on instead of stopping
        #[arg(long)]
        keep_going: bool,
    },

    /// Check whether an amount string would be accepted
    Validate {
        /// Raw amount, e.g. "12.50"
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Shell);

    // Pure check: no settings are read or written
    if let Commands::Validate { raw } = &command {
        if is_valid_amount(raw) {
            println!("valid");
            return Ok(());
        }
        println!("invalid");
        std::process::exit(1);
    }

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    if !paths.is_initialized() {
        settings
            .save(&paths)
            .context("Failed to write default settings")?;
    }

    match command {
        Commands::Shell => run_shell(paths, settings)?,
        Commands::Run { script, keep_going } => run_script(paths, settings, script, keep_going)?,
        Commands::Validate { .. } => {}
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Symbol position: {:?}", settings.symbol_position);
            println!("  Require name:    {}", settings.require_name);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Log filter:      {}", settings.log_filter);
        }
    }

    Ok(())
}

fn run_shell(paths: TrackerPaths, settings: Settings) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = io::stdout();

    let mut session = Session::new(paths, settings)?.with_colors(stdout.is_terminal());
    if interactive {
        println!("Expense Tracker - type 'help' for commands, 'quit' to leave.");
        session = session.with_prompt("> ");
    }

    session.run(
        stdin.lock(),
        &mut stdout.lock(),
        &mut io::stderr(),
        ErrorMode::Continue,
    )?;
    Ok(())
}

fn run_script(
    paths: TrackerPaths,
    settings: Settings,
    script: PathBuf,
    keep_going: bool,
) -> Result<()> {
    let mode = if keep_going {
        ErrorMode::Continue
    } else {
        ErrorMode::Stop
    };
    let mut session = Session::new(paths, settings)?;
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    let summary = if script.as_os_str() == "-" {
        session.run(io::stdin().lock(), &mut stdout, &mut stderr, mode)?
    } else {
        let file = File::open(&script)
            .with_context(|| format!("Failed to open script {}", script.display()))?;
        session.run(BufReader::new(file), &mut stdout, &mut stderr, mode)?
    };

    if summary.failed > 0 {
        anyhow::bail!("{} line(s) failed", summary.failed);
    }
    Ok(())
}
