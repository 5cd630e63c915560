//! Command-line front end for `standout-display`.
//!
//! Reads CSV, JSON or NDJSON, feeds the first records into a
//! [`TableDisplay`] and prints either the width-budgeted rendering or the
//! full dump.
//!
//! ```text
//! $ standout-display -n 2 events.ndjson
//! event | jets  | 
//! 0     | 41.5  | 
//!       | 17.25 | 
//! 1     |       | 
//! ```

pub mod input;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use standout_display::{DisplayConfig, TableDisplay};
use tracing::{debug, info};

use input::{read_csv, read_json, read_ndjson, Dataset, InputFormat};

/// Show CSV or JSON data as a console table
#[derive(Parser, Debug, Clone)]
#[command(name = "standout-display")]
#[command(version)]
#[command(about = "Show CSV or JSON data as a width-aware console table")]
pub struct Cli {
    /// Input file; reads stdin when absent or "-"
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Input format (inferred from the file extension by default)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Number of records to show
    #[arg(short = 'n', long, default_value_t = 5)]
    pub rows: usize,

    /// Columns to show, in order (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Printed-width budget; trailing columns beyond it are dropped
    #[arg(short = 'w', long)]
    pub max_width: Option<usize>,

    /// Use the terminal width as the budget
    #[arg(long, conflicts_with = "max_width")]
    pub fit_terminal: bool,

    /// Print every cell, without shortening or width budget
    #[arg(long)]
    pub full: bool,

    /// YAML layout configuration
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter matching the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    fn input_format(&self) -> InputFormat {
        self.format.unwrap_or_else(|| match self.file.as_deref() {
            Some(path) => InputFormat::from_path(path),
            None => InputFormat::Csv,
        })
    }

    /// Layout configuration: the config file, then flags on top.
    pub fn display_config(&self) -> Result<DisplayConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                DisplayConfig::from_yaml(&text)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => DisplayConfig::default(),
        };

        if let Some(max_width) = self.max_width {
            config.max_width = max_width;
        } else if self.fit_terminal {
            match terminal_size::terminal_size() {
                Some((terminal_size::Width(width), _)) => config.max_width = width as usize,
                None => debug!("no terminal attached, keeping width budget"),
            }
        }
        Ok(config)
    }

    /// Read the input selected by the arguments.
    pub fn read_dataset(&self) -> Result<Dataset> {
        let format = self.input_format();
        let dataset = match self.file.as_deref() {
            None | Some("-") => read_input(io::stdin().lock(), format, self.rows)?,
            Some(path) => {
                let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
                read_input(BufReader::new(file), format, self.rows)?
            }
        };

        if self.columns.is_empty() {
            Ok(dataset)
        } else {
            dataset.select(&self.columns)
        }
    }
}

fn read_input<R: io::BufRead>(reader: R, format: InputFormat, limit: usize) -> Result<Dataset> {
    match format {
        InputFormat::Csv => read_csv(reader, limit),
        InputFormat::Json => read_json(reader, limit),
        InputFormat::Ndjson => read_ndjson(reader, limit),
    }
}

/// Build a table from a dataset, feeding records until the row budget is met.
pub fn build_table(dataset: Dataset, rows: usize, config: DisplayConfig) -> Result<TableDisplay> {
    let mut table = TableDisplay::with_config(dataset.columns, dataset.types, rows, config)?;
    for record in dataset.records {
        if !table.has_next() {
            break;
        }
        for value in record {
            table.add_value(value);
        }
    }
    info!(records = table.records(), "built table");
    Ok(table)
}

/// Run the command, writing the table to `out`.
pub fn run<W: Write>(cli: &Cli, mut out: W) -> Result<()> {
    let config = cli.display_config()?;
    let dataset = cli.read_dataset()?;
    if dataset.columns.is_empty() {
        debug!("input has no columns, nothing to display");
        return Ok(());
    }
    let table = build_table(dataset, cli.rows, config)?;

    if cli.full {
        out.write_all(table.serialize().as_bytes()).context("failed to write output")?;
        out.flush().context("failed to write output")?;
    } else {
        table.render_to(out).context("failed to write output")?;
    }
    Ok(())
}
