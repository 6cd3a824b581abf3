//! stderr logging for the `lsp` binary. The library itself only emits
//! records through the `log` facade.

use std::io::{self, Write};

use clap::{Args, ValueEnum};
use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::{LevelFilter, Record};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// `INFO  message`
    #[default]
    Compact,
    /// `INFO  [module] message`
    Pretty,
}

#[derive(Clone, Debug, Args)]
pub struct LogOptions {
    /// Log level (off, error, warn, info, debug, trace); `RUST_LOG` takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LevelFilter,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Prefix log lines with a millisecond timestamp
    #[arg(long, global = true)]
    pub log_timestamp: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_format: LogFormat::Compact,
            log_timestamp: false,
        }
    }
}

impl LogOptions {
    fn write(&self, buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
        if self.log_timestamp {
            write!(buf, "{} ", buf.timestamp_millis())?;
        }
        write!(buf, "{:<5} ", record.level())?;
        if self.log_format == LogFormat::Pretty {
            write!(buf, "[{}] ", short_target(record.target()))?;
        }
        writeln!(buf, "{}", record.args())
    }
}

/// Installs the global logger. Fails if a logger is already installed.
pub fn init_logger(options: &LogOptions) -> io::Result<()> {
    let options = options.clone();
    Builder::new()
        .filter_level(options.log_level)
        .parse_default_env()
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf, record| options.write(buf, record))
        .try_init()
        .map_err(io::Error::other)
}

/// `lsp_heuristics::best_first` -> `best_first`
pub(crate) fn short_target(target: &str) -> &str {
    target.strip_prefix("lsp_heuristics::").unwrap_or(target)
}
