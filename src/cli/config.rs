//! Resolution of CLI settings that may come from the environment.

use std::path::{Path, PathBuf};

/// Environment variable naming the default flowchart document.
pub const FILE_ENV_VAR: &str = "FLOWG_FILE";

/// Document used when neither an argument nor the environment names one.
pub const DEFAULT_FILE: &str = "flowchart.json";

/// Resolve the document path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. FLOWG_FILE environment variable
/// 3. flowchart.json in the current directory
pub fn resolve_document_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    match std::env::var(FILE_ENV_VAR) {
        Ok(env_path) if !env_path.is_empty() => PathBuf::from(env_path),
        _ => PathBuf::from(DEFAULT_FILE),
    }
}
