//! Tracing/logging initialization.
//!
//! The filter comes from `RUST_LOG` and the output format from
//! `REGISTRAR_LOG_FORMAT` (`json`, the default, or `pretty`).

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "REGISTRAR_LOG_FORMAT";

/// Log line format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, for collectors.
    #[default]
    Json,
    /// Human-readable multi-line output, for terminals.
    Pretty,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to JSON.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }

    fn from_env() -> Self {
        std::env::var(LOG_FORMAT_VAR)
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_format(LogFormat::from_env());
}

/// Initialize tracing/logging with an explicit output format.
pub fn init_with_format(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // try_init fails only when a global subscriber is already installed.
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(" TEXT "), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Json);
    }

    #[test]
    fn init_is_idempotent() {
        init_with_format(LogFormat::Pretty);
        init_with_format(LogFormat::Json);
    }
}
