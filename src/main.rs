use std::env;
use std::process::ExitCode;

use log::{LevelFilter, Metadata, Record};
use proc_schedule::config::SimulationConfig;
use proc_schedule::input::load_processes;
use proc_schedule::report::render_outcome;
use proc_schedule::{Result, SimulationError};

const LOG_ENV: &str = "PROC_SCHEDULE_LOG";

/// Minimal stderr sink for the `log` facade.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn run(args: &[String]) -> Result<()> {
    let [_, path] = args else {
        return Err(SimulationError::InvalidArguments(
            "usage: proc-schedule <process-file.csv>".to_string(),
        ));
    };

    let processes = load_processes(path)?;
    log::info!("loaded {} processes from {path}", processes.len());

    for outcome in SimulationConfig::default().run(&processes)? {
        print!("{}", render_outcome(&outcome));
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
