use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

use crate::app_dirs::AppDirs;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Installs a JSON file subscriber. The terminal belongs to the UI, so nothing goes to stdout.
///
/// Fails when the log file cannot be opened; a second call after success is a no-op.
pub fn init_tracing(enabled: bool) -> io::Result<()> {
    if !enabled || TRACING_INIT.get().is_some() {
        return Ok(());
    }

    let file = open_log_file(&AppDirs::log_path())?;
    TRACING_INIT.get_or_init(|| {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_max_level(tracing::Level::DEBUG)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
