use std::env;
use std::string::String;

use log::{self, LevelFilter, Metadata, Record};

const LOG_ENV: &str = "SEABATTLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// `seabattle WARN  placement: ...`. Targets inside this crate drop the crate
/// prefix; foreign targets are kept whole.
fn format_record(record: &Record) -> String {
    let target = record.target();
    let module = match target.strip_prefix("seabattle") {
        Some("") => "main",
        Some(rest) => rest.strip_prefix("::").unwrap_or(target),
        None => target,
    };
    format!("seabattle {:<5} {}: {}", record.level(), module, record.args())
}

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid. Output goes to
/// stderr so stdout stays free for game output.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    init_logging_with(level);
}

/// Initialize logging at a fixed level. Later calls are ignored.
pub fn init_logging_with(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn line(target: &str, level: Level) -> String {
        format_record(
            &Record::builder()
                .args(format_args!("fleet placed"))
                .level(level)
                .target(target)
                .build(),
        )
    }

    #[test]
    fn test_crate_targets_lose_their_prefix() {
        assert_eq!(
            line("seabattle::placement", Level::Warn),
            "seabattle WARN  placement: fleet placed"
        );
        assert_eq!(line("seabattle", Level::Info), "seabattle INFO  main: fleet placed");
        assert_eq!(line("sim", Level::Error), "seabattle ERROR sim: fleet placed");
    }
}
