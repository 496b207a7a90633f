//! Mishpacha binary entrypoint kept minimal. The render command lives in `args`.

use std::fmt;
use std::io::Write;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use mishpacha::args::{self, Args};
use mishpacha::session::FATAL_ALERT;

struct MishpachaTimer;

impl tracing_subscriber::fmt::time::FormatTime for MishpachaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `~/.config/mishpacha/logs/mishpacha.log`.
///
/// Details:
/// - `RUST_LOG` wins over `level`; a log file that cannot be opened falls back to stderr.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = mishpacha::paths::logs_dir().join("mishpacha.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(MishpachaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(MishpachaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args));

    tracing::info!(page = %args.page.display(), "Mishpacha starting");
    let code = match args::run(&args).await {
        Ok(Some(html)) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(html.as_bytes()) {
                tracing::error!(error = %e, "failed to write page to stdout");
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Render failed");
            eprintln!("{FATAL_ALERT}\n{err}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("Mishpacha exited");
    code
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn mishpacha_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::MishpachaTimer;
        let _ = t.format_time(&mut writer);
        assert!(buf.contains("-T "));
    }
}
