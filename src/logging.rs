use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    /// Append to a file
    File(&'a Path),
    /// Write to stderr
    Stderr,
    /// No subscriber; the terminal belongs to the TUI
    Off,
}

impl<'a> LogSink<'a> {
    /// A log file always wins. Without one, headless commands log to stderr
    /// and the TUI logs nowhere.
    pub fn choose(log_file: Option<&'a Path>, headless: bool) -> Self {
        match log_file {
            Some(path) => LogSink::File(path),
            None if headless => LogSink::Stderr,
            None => LogSink::Off,
        }
    }
}

/// Install the global tracing subscriber. Level defaults to `info` and can
/// be changed with `RUST_LOG`.
pub fn init_logging(sink: LogSink<'_>) -> std::io::Result<()> {
    let filter = || EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    match sink {
        LogSink::Off => {}
        LogSink::Stderr => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .without_time()
                        .with_ansi(false),
                )
                .with(filter())
                .init();
        }
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .with(filter())
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_beats_headless_default() {
        let path = Path::new("/tmp/tl.log");
        assert_eq!(LogSink::choose(Some(path), false), LogSink::File(path));
        assert_eq!(LogSink::choose(Some(path), true), LogSink::File(path));
    }

    #[test]
    fn tui_without_log_file_stays_silent() {
        assert_eq!(LogSink::choose(None, false), LogSink::Off);
        assert_eq!(LogSink::choose(None, true), LogSink::Stderr);
    }
}
