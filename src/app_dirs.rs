use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

const APP_NAME: &str = "arrowrush";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        if let Some(pd) = ProjectDirs::from("", "", APP_NAME) {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("arrowrush_config.json")
        }
    }

    /// `ARROWRUSH_TRACE_LOG` wins; otherwise a file under the temp dir.
    pub fn log_path() -> PathBuf {
        env::var("ARROWRUSH_TRACE_LOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir().join("arrowrush_trace.jsonl"))
    }
}
