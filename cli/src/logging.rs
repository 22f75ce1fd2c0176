//! Logger setup for the command line tool.

use std::str::FromStr;

use clap::ValueEnum;
use log::LevelFilter;

/// Logging level accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Resolve the level: explicit flag, then `RUST_LOG`, then `warn`.
pub fn resolve_level(
    level: Option<LogLevel>,
    env_level: Option<&str>,
) -> LevelFilter {
    match level {
        Some(level) => level.into(),
        None => env_level
            .and_then(|value| LevelFilter::from_str(value.trim()).ok())
            .unwrap_or(LevelFilter::Warn),
    }
}

/// Install the stderr logger. Later calls are ignored.
pub fn init_log(level: Option<LogLevel>) {
    let env_level = std::env::var("RUST_LOG").ok();
    let filter = resolve_level(level, env_level.as_deref());

    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(
            resolve_level(Some(LogLevel::Trace), Some("error")),
            LevelFilter::Trace
        );
    }

    #[test]
    fn environment_used_when_flag_absent() {
        assert_eq!(resolve_level(None, Some("debug")), LevelFilter::Debug);
        assert_eq!(resolve_level(None, Some("INFO ")), LevelFilter::Info);
    }

    #[test]
    fn defaults_to_warn() {
        assert_eq!(resolve_level(None, None), LevelFilter::Warn);
        assert_eq!(resolve_level(None, Some("chatty")), LevelFilter::Warn);
    }
}
