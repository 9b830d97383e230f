//! Interactive and scripted ledger sessions
//!
//! A session owns one [`LedgerService`] for its whole lifetime. Lines are read
//! from any `BufRead`, parsed into commands and executed against the ledger.
//! Nothing outlives the session except the audit log and explicit exports.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::audit::{self, AuditLogger};
use crate::config::{Settings, TrackerPaths};
use crate::display::{format_totals, format_transaction_row, format_transaction_table};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_to_file, ExportFormat};
use crate::ledger::is_valid_amount;
use crate::models::Direction;
use crate::services::LedgerService;

use super::commands::{parse_line, ParsedLine, SessionCommand};

/// Whether the loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    /// Blank or comment line; nothing ran
    Skipped,
    Exit,
}

/// How a session reacts to a failing line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    /// Report the error and read the next line
    Continue,
    /// Stop at the first failing line and return its error
    Stop,
}

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub executed: usize,
    pub failed: usize,
}

/// One ledger session
pub struct Session {
    service: LedgerService,
    settings: Settings,
    paths: TrackerPaths,
    colored: bool,
    prompt: Option<String>,
}

impl Session {
    /// Start a session with an empty ledger
    ///
    /// Attaches the audit log when the settings enable it.
    pub fn new(paths: TrackerPaths, settings: Settings) -> TrackerResult<Self> {
        let service = LedgerService::with_options(settings.ledger_options());
        if settings.audit_enabled {
            audit::attach(AuditLogger::new(paths.audit_log()), &service)?;
        }
        info!(audit = settings.audit_enabled, "session started");

        Ok(Self {
            service,
            settings,
            paths,
            colored: false,
            prompt: None,
        })
    }

    /// Enable ANSI colors in totals output
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Print a prompt before reading each line
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// The ledger service backing this session
    pub fn service(&self) -> &LedgerService {
        &self.service
    }

    /// Read and execute lines until end of input or `quit`
    ///
    /// Command output goes to `out`, error messages to `err`.
    pub fn run<R, W, E>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
        mode: ErrorMode,
    ) -> TrackerResult<SessionSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = SessionSummary::default();
        let mut lines = input.lines().enumerate();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(out, "{}", prompt)?;
                out.flush()?;
            }

            let Some((index, line)) = lines.next() else {
                break;
            };
            let line = line?;
            let line_no = index + 1;

            match self.handle_line(&line, out) {
                Ok(LoopControl::Skipped) => {}
                Ok(LoopControl::Continue) => summary.executed += 1,
                Ok(LoopControl::Exit) => {
                    summary.executed += 1;
                    break;
                }
                Err(e) => {
                    summary.failed += 1;
                    if e.is_validation() {
                        debug!(line = line_no, error = %e, "rejected input");
                    } else {
                        warn!(line = line_no, error = %e, "command failed");
                    }
                    match mode {
                        ErrorMode::Continue => writeln!(err, "Error: {}", e)?,
                        ErrorMode::Stop => {
                            return Err(TrackerError::Command(format!("line {}: {}", line_no, e)))
                        }
                    }
                }
            }
        }

        debug!(
            executed = summary.executed,
            failed = summary.failed,
            "session finished"
        );
        Ok(summary)
    }

    /// Parse and execute a single line
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> TrackerResult<LoopControl> {
        match parse_line(line)? {
            ParsedLine::Empty => Ok(LoopControl::Skipped),
            ParsedLine::Help(text) => {
                write!(out, "{}", text)?;
                Ok(LoopControl::Continue)
            }
            ParsedLine::Command(cmd) => self.execute(cmd, out),
        }
    }

    /// Execute a parsed command
    pub fn execute<W: Write>(
        &mut self,
        cmd: SessionCommand,
        out: &mut W,
    ) -> TrackerResult<LoopControl> {
        match cmd {
            SessionCommand::Add {
                name,
                amount,
                direction,
                expense,
                income: _,
            } => self.add(
                &name,
                &amount,
                SessionCommand::add_direction(direction, expense),
                out,
            )?,
            SessionCommand::Income { name, amount } => {
                self.add(&name, &amount, Direction::Income, out)?
            }
            SessionCommand::Expense { name, amount } => {
                self.add(&name, &amount, Direction::Expense, out)?
            }
            SessionCommand::List => {
                let transactions = self.service.list()?;
                write!(out, "{}", format_transaction_table(&transactions, &self.settings))?;
            }
            SessionCommand::Totals => {
                let totals = self.service.totals()?;
                write!(out, "{}", format_totals(&totals, &self.settings, self.colored))?;
            }
            SessionCommand::Validate { raw } => {
                let verdict = if is_valid_amount(&raw) {
                    "valid"
                } else {
                    "invalid"
                };
                writeln!(out, "{}", verdict)?;
            }
            SessionCommand::Export {
                format,
                path,
                pretty,
            } => {
                let format: ExportFormat = format.parse()?;
                let path = path.unwrap_or_else(|| self.default_export_path(format));
                let snapshot = self.service.snapshot()?;
                export_to_file(&snapshot, format, &path, pretty)?;
                writeln!(
                    out,
                    "Exported {} transactions to {}",
                    snapshot.transactions.len(),
                    path.display()
                )?;
            }
            SessionCommand::Reset => {
                self.service.reset()?;
                writeln!(out, "Ledger cleared.")?;
            }
            SessionCommand::History { count } => {
                let entries = AuditLogger::new(self.paths.audit_log()).read_recent(count)?;
                if entries.is_empty() {
                    writeln!(out, "No audit entries.")?;
                }
                for entry in entries {
                    writeln!(out, "{}", entry.format_human_readable())?;
                }
            }
            SessionCommand::Quit => return Ok(LoopControl::Exit),
        }

        Ok(LoopControl::Continue)
    }

    fn add<W: Write>(
        &self,
        name: &str,
        raw_amount: &str,
        direction: Direction,
        out: &mut W,
    ) -> TrackerResult<()> {
        let recorded = self.service.add_raw(name, raw_amount, direction)?;

        writeln!(
            out,
            "Added {}",
            format_transaction_row(&recorded.transaction, &self.settings)
        )?;
        write!(
            out,
            "{}",
            format_totals(&recorded.totals, &self.settings, self.colored)
        )?;
        Ok(())
    }

    fn default_export_path(&self, format: ExportFormat) -> PathBuf {
        self.paths.export_dir().join(format!(
            "ledger-{}.{}",
            Utc::now().format("%Y%m%d-%H%M%S"),
            format
        ))
    }
}
