use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, Level, LevelFilter};
use std::str::FromStr;
use std::sync::Once;

const RUST_LOG_ENV: &str = "RUST_LOG";

/// Dependencies that log every request at debug level, capped so that a
/// debug run stays readable while thousands of transfers are in flight.
const NOISY_DEPENDENCIES: [&str; 4] = ["jsonrpsee", "jsonrpsee_core", "jsonrpsee_client_transport", "hyper"];

fn color_from_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

fn dependency_level(level: LevelFilter) -> LevelFilter {
    level.min(LevelFilter::Info)
}

fn init_logging_with_level(level: LevelFilter) {
    let dispatch = NOISY_DEPENDENCIES.iter().fold(
        fern::Dispatch::new()
            .format(|out, message, record| {
                let time = Local::now().format("%H:%M:%S%.3f");
                let color = color_from_level(record.level());
                out.finish(format_args!("{time} {color} > {message}"));
            })
            .level(level),
        |dispatch, module| dispatch.level_for(*module, dependency_level(level)),
    );

    if let Err(e) = dispatch.chain(std::io::stdout()).apply() {
        eprintln!("💥 Failed to initialize logging with level `{level}`: {e}");
        return;
    }

    debug!("🪵 Logging initialized with level: {level}");
}

/// # Panics
/// Panics if `log_level` is not a valid level filter.
fn parse_log_level(log_level: &str) -> LevelFilter {
    LevelFilter::from_str(log_level).unwrap_or_else(|_| {
        panic!("Invalid log level set with `{RUST_LOG_ENV}`, got: {log_level}")
    })
}

static INIT: Once = Once::new();

/// Installs the logger once, at the level from `RUST_LOG` or `info`.
///
/// # Panics
/// Panics if `RUST_LOG` holds something other than a level.
pub fn init_logging() {
    INIT.call_once(|| {
        let level = std::env::var(RUST_LOG_ENV)
            .map(|value| parse_log_level(&value))
            .unwrap_or(LevelFilter::Info);
        init_logging_with_level(level);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Invalid log level")]
    fn invalid_log_level() {
        parse_log_level("foobar");
    }

    #[test]
    fn parses_any_case() {
        assert_eq!(parse_log_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_log_level("off"), LevelFilter::Off);
    }

    #[test]
    fn dependencies_never_go_below_info() {
        assert_eq!(dependency_level(LevelFilter::Trace), LevelFilter::Info);
        assert_eq!(dependency_level(LevelFilter::Warn), LevelFilter::Warn);
    }

    #[test]
    fn test_color_from_level() {
        assert_eq!(
            color_from_level(Level::Error).to_string(),
            "ERROR".red().to_string()
        );
        assert_eq!(
            color_from_level(Level::Warn).to_string(),
            "WARN".yellow().to_string()
        );
        assert_eq!(
            color_from_level(Level::Info).to_string(),
            "INFO".green().to_string()
        );
        assert_eq!(
            color_from_level(Level::Trace).to_string(),
            "TRACE".white().to_string()
        );
    }
}
