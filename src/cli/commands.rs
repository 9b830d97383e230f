//! Session command definitions
//!
//! Each line typed into a session is split with shell quoting rules and
//! parsed into a [`SessionCommand`] by clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Direction;

/// Commands available inside a session
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Record a transaction (income unless a direction or --expense is given)
    Add {
        /// Display name
        name: String,
        /// Amount as a plain decimal, e.g. "12.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// income|in|+ or expense|out|-
        #[arg(conflicts_with_all = ["expense", "income"])]
        direction: Option<Direction>,
        /// Record as an expense
        #[arg(short, long, conflicts_with = "income")]
        expense: bool,
        /// Record as income (the default)
        #[arg(short, long)]
        income: bool,
    },
    /// Record an income transaction
    Income {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Record an expense transaction
    Expense {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List transactions in the order they were recorded
    #[command(alias = "ls")]
    List,
    /// Show total balance, income and expenses
    Totals,
    /// Check whether an amount would be accepted
    Validate {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Write a snapshot of the ledger (csv, json or yaml)
    Export {
        /// Output format
        format: String,
        /// Output file; defaults to a timestamped file in the export directory
        path: Option<PathBuf>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Clear every transaction from this session
    Reset,
    /// Show the most recent audit log entries
    History {
        /// Number of entries to show
        #[arg(default_value_t = 10)]
        count: usize,
    },
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

impl SessionCommand {
    /// Direction for `add`: the explicit argument, else the flags
    pub fn add_direction(direction: Option<Direction>, expense: bool) -> Direction {
        match direction {
            Some(direction) => direction,
            None if expense => Direction::Expense,
            None => Direction::Income,
        }
    }
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "expenses", disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Result of parsing one input line
#[derive(Debug)]
pub enum ParsedLine {
    /// Blank line or comment
    Empty,
    /// A command to execute
    Command(SessionCommand),
    /// Help text requested with `help` or `--help`
    Help(String),
}

/// Split and parse a session line
///
/// Lines starting with `#` are comments.
pub fn parse_line(line: &str) -> TrackerResult<ParsedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ParsedLine::Empty);
    }

    let tokens = shell_words::split(trimmed)
        .map_err(|e| TrackerError::Command(format!("Could not split line: {}", e)))?;

    match SessionLine::try_parse_from(tokens) {
        Ok(parsed) => Ok(ParsedLine::Command(parsed.command)),
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp
            | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Ok(ParsedLine::Help(e.render().to_string()))
            }
            _ => Err(TrackerError::Command(e.render().to_string().trim_end().to_string())),
        },
    }
}
