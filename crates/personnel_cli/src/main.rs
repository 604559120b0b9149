//! Interactive personnel record entry point.
//!
//! # Responsibility
//! - Parse flags and optionally start file logging.
//! - Run one enter/sort/search session over stdin/stdout.

use clap::Parser;
use personnel_core::{default_log_level, init_logging, run_session, ConsoleDataIo, SessionConfig};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "personnel", version, about = "Enter personnel records, then sort and search them")]
struct Cli {
    /// Number of records to enter.
    #[arg(long, default_value_t = SessionConfig::default().record_count)]
    count: usize,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for log files; logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("personnel: {err}");
            return ExitCode::FAILURE;
        }
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut io = ConsoleDataIo::new(stdin.lock(), stdout.lock());
    let config = SessionConfig {
        record_count: cli.count,
    };

    match run_session(&mut io, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=session module=cli status=error error={err}");
            eprintln!("personnel: {err}");
            ExitCode::FAILURE
        }
    }
}
