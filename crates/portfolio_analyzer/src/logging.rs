use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a log level.
///
/// The core library is held at `warn` so a verbose level only affects the
/// application's own events.
#[must_use]
pub fn default_filter(level: &str) -> String {
    format!("portfolio_analyzer={level},portfolio_analyzer_core=warn")
}

/// Writer for log events: stderr, or `log_file` opened for appending with any
/// missing parent directories created.
pub fn log_writer(log_file: Option<&Path>) -> std::io::Result<BoxMakeWriter> {
    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(std::io::stderr)),
    }
}

/// Initialize logging.
///
/// Events go to stderr so stdout carries only the report, or are appended to
/// `log_file` when one is given. The level can be controlled via the `level`
/// parameter or the `RUST_LOG` environment variable, which takes precedence.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> color_eyre::Result<()> {
    let writer = log_writer(log_file).wrap_err("Failed to open log file")?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    match log_file {
        Some(path) => tracing::debug!("Logging initialized (log_path={})", path.display()),
        None => tracing::debug!("Logging initialized (stderr)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter("debug"),
            "portfolio_analyzer=debug,portfolio_analyzer_core=warn"
        );
    }

    #[test]
    fn test_default_filter_parses() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(EnvFilter::try_new(default_filter(level)).is_ok());
        }
    }

    #[test]
    fn test_log_file_creates_parents_and_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("runs").join("analyzer.log");

        let writer = log_writer(Some(&path)).unwrap();
        writer.make_writer().write_all(b"first\n").unwrap();
        assert!(path.exists());

        let writer = log_writer(Some(&path)).unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_log_file_under_a_file_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(log_writer(Some(&blocker.join("analyzer.log"))).is_err());
    }
}
