use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR_NAME: &str = ".dharma-words";
const LOG_FILE_NAME: &str = "dharma.log";
const MAX_LOG_FILES: usize = 14; // keep roughly two weeks of daily logs

/// Setup file-based logging to ~/.dharma-words/dharma.log
///
/// # Errors
/// Returns an error if the log directory cannot be created or logging fails to initialize.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = dirs_next::home_dir()
        .ok_or("Cannot find home directory")?
        .join(LOG_DIR_NAME);

    std::fs::create_dir_all(&log_dir)?;

    // Prune before the subscriber exists so failures go to stderr.
    cleanup_old_logs(&log_dir, MAX_LOG_FILES);

    let file_appender = rolling::daily(&log_dir, LOG_FILE_NAME);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(file_appender))
        .with(
            EnvFilter::from_default_env()
                .add_directive("dharma_words=debug".parse()?)
                .add_directive("dharma_words_lib=debug".parse()?),
        )
        .try_init()?;

    tracing::info!(
        "Logging initialized to {:?}/{} (daily rotation)",
        log_dir,
        LOG_FILE_NAME
    );

    Ok(())
}

/// Rotated log files in `log_dir`, newest first
fn rotated_logs(log_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut logs: Vec<_> = fs::read_dir(log_dir)?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_file()))
        .filter(|entry| entry.file_name().to_string_lossy().contains(LOG_FILE_NAME))
        .map(|entry| {
            let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
            (entry.path(), modified)
        })
        .collect();

    logs.sort_by(|a, b| match (a.1, b.1) {
        (Some(a_time), Some(b_time)) => b_time.cmp(&a_time),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    Ok(logs.into_iter().map(|(path, _)| path).collect())
}

fn cleanup_old_logs(log_dir: &Path, max_files: usize) {
    let logs = match rotated_logs(log_dir) {
        Ok(logs) => logs,
        Err(err) => {
            eprintln!("log retention: failed to read log dir {log_dir:?}: {err}");
            return;
        }
    };

    for path in logs.into_iter().skip(max_files) {
        if let Err(err) = fs::remove_file(&path) {
            eprintln!("log retention: failed to remove {path:?}: {err:?}");
        }
    }
}
