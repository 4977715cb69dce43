//! Logging setup for the console binary.
//!
//! Everything goes to stderr; stdout belongs to the console UI. The level
//! comes from `[app] log_level` (or `TUBE_TUTOR_LOG_LEVEL`). `RUST_LOG` is
//! only consulted when that level is not a plain level name, and may carry
//! full directives such as `tube_tutor::guide=debug`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber. Call once, before the console starts.
pub fn init(level: &str) -> Result<(), AppError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

/// Strict level-name parse (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.trim().is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}

fn build_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, AppError> {
    let level_err = match parse_level(level) {
        Ok(lvl) => return Ok(EnvFilter::new(lvl.to_string())),
        Err(e) => e,
    };

    let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) else {
        return Err(level_err);
    };
    EnvFilter::try_new(directives).map_err(|e| {
        AppError::Logger(format!("{level_err}; RUST_LOG '{directives}' is invalid too: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() {
        for l in ["error", "warn", "info", "debug", "trace", "off", " info "] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn configured_level_beats_rust_log() {
        let filter = build_filter("debug", Some("warn")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn rust_log_used_when_level_is_not_a_name() {
        let filter = build_filter("verbose", Some("warn")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn bad_level_without_rust_log_errors() {
        let err = build_filter("verbose", None).unwrap_err();
        assert!(err.to_string().contains("verbose"));
        assert!(build_filter("verbose", Some("  ")).is_err());
    }

    #[test]
    fn init_succeeds_or_already_init() {
        // Another test in the same process may have installed a subscriber first.
        match init("info") {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
