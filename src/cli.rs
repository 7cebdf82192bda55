use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use clogview::clipboard::copy_to_clipboard;
use clogview::command::{parse_command, CommandExecutor};
use clogview::config::ViewerConfig;
use clogview::host::HeadlessHost;
use clogview::log::load_records;

/// clogview - select, filter and copy structured log records
#[derive(Parser, Debug)]
#[command(name = "clv")]
#[command(version)]
#[command(about = "Select, filter and copy structured log records")]
#[command(long_about = "clogview (clv) loads log records from a JSON-lines file and runs
viewer commands against them: picking and box-selecting rows, turning the
selection into filters, copying and deleting records.

Quick start:
  1. Run 'clv --init' to generate a config file
  2. Run 'clv records.jsonl -c \"search file\" -c \"select\" -c \"copy message\"'

Commands:
  pick <index|none> [extend] [range] [keep]
  pick-row <y> [extend] [range] [keep]
  select <select|deselect|invert|toggle>
  box <top> <bottom> [set|add|sub|xor|and]
  filter <function|file|line|type>
  copy [visible|message|path|basename]
  delete
  search <text>
  severity <name> <on|off>
  level <n|off>
  category <type|function|file> <on|off>")]
pub struct Cli {
    /// Path to config file (defaults to .clogview.toml)
    #[arg(long, default_value = ".clogview.toml")]
    pub config: String,

    /// Write a default .clogview.toml config file
    #[arg(long)]
    pub init: bool,

    /// Diagnostic log level (overridden by RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Viewer command to run, in order (repeatable)
    #[arg(short = 'c', long = "command")]
    pub commands: Vec<String>,

    /// Put the final copied text on the system clipboard
    #[arg(long)]
    pub copy_to_system: bool,

    /// JSON-lines file of log records
    #[arg(required_unless_present = "init")]
    pub records: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_string(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Initialize tracing, writing to stderr so it never mixes with printed rows
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_string()));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}

/// Initialize a new config file with default values
pub fn init_config(config_path: &str) -> anyhow::Result<()> {
    if Path::new(config_path).exists() {
        println!("Config file '{}' already exists.", config_path);
        return Ok(());
    }

    ViewerConfig::default()
        .save(config_path)
        .with_context(|| format!("Failed to write config to '{}'", config_path))?;

    // Append commented-out optional settings
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(config_path)
        .with_context(|| format!("Failed to append to '{}'", config_path))?;
    writeln!(file, "\n# Hide records more verbose than this level")?;
    writeln!(file, "# level_filter = 1")?;
    writeln!(file, "\n# Prefix rows with the record time")?;
    writeln!(file, "# show_timestamp = true")?;
    writeln!(file, "\n# Initial message search")?;
    writeln!(file, "# [search]")?;
    writeln!(file, "# pattern = \"*.blend\"")?;
    writeln!(file, "# use_glob = true")?;

    println!("Created {}", config_path);
    Ok(())
}

/// Load records, run the commands, and print the resulting view
pub fn run(cli: &Cli, records_path: &Path) -> anyhow::Result<()> {
    let config = if Path::new(&cli.config).exists() {
        ViewerConfig::from_file(&cli.config)?
    } else {
        debug!(path = %cli.config, "no config file, using defaults");
        ViewerConfig::default()
    };

    let mut store = load_records(records_path)?;
    info!(records = store.len(), path = %records_path.display(), "loaded records");

    let mut view = config.initial_view();
    let format = config.record_format();
    let mut host = HeadlessHost::new();

    for input in &cli.commands {
        host.layout(&view.filters, &store);
        let outcome = CommandExecutor::new(&mut view, &mut store, &mut host, format)
            .execute(parse_command(input));
        info!(command = %input, ?outcome, "ran command");

        for notice in host.notices.drain(..) {
            eprintln!("{}", notice);
        }
    }

    if cli.copy_to_system {
        if let Some(text) = &host.clipboard {
            copy_to_clipboard(text)?;
        }
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(view.render(&store, format).as_bytes())?;
    if !cli.copy_to_system {
        if let Some(text) = &host.clipboard {
            writeln!(stdout, "--- clipboard ---")?;
            stdout.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}
