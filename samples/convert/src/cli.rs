use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::ValueHint;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,objweld=info,objweld_convert=info",
        env = "OBJWELD_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
    /// Mesh description to convert; prompted for if omitted
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,
    /// Destination of the welded mesh (`-` for stdout); prompted for if omitted
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Whether output should go to stdout rather than a file.
    pub fn is_stdout(path: &std::path::Path) -> bool {
        path.as_os_str() == "-"
    }
}

/// Ask for a path on `out`, reading the answer from one line of `input`.
pub fn prompt_path(
    label: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<PathBuf> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no answer to prompt {:?}", label.trim_end()),
        ));
    }
    let answer = answer.trim_end_matches(['\r', '\n']);
    if answer.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("empty answer to prompt {:?}", label.trim_end()),
        ));
    }
    Ok(PathBuf::from(answer))
}

/// Set up log output on stderr, leaving stdout for welded mesh text
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
