//! Command implementations for kubecfg-cli

pub mod context;
pub mod credentials;
pub mod merge;
pub mod resolve;
pub mod view;

pub use context::{run_current_context, run_get_contexts, run_use_context};
pub use credentials::run_set_credentials;
pub use merge::run_merge;
pub use resolve::{run_cluster, run_token};
pub use view::run_view;

use std::path::{Path, PathBuf};

use kubecfg_fs::{load, load_merged};
use kubecfg_model::Config;

use crate::error::{CliError, Result};

/// Load and merge every file of the path list.
fn load_documents(paths: &[PathBuf]) -> Result<Config> {
    Ok(load_merged(paths.iter().cloned())?)
}

/// The file edits are written to: the first entry of the path list.
fn target_path(paths: &[PathBuf]) -> Result<&Path> {
    paths
        .first()
        .map(PathBuf::as_path)
        .ok_or_else(|| CliError::user("No kubeconfig path available. Pass --kubeconfig."))
}

/// Load the edit target, treating a missing file as an empty document.
fn load_target(path: &Path) -> Result<Config> {
    if path.is_file() {
        Ok(load(path)?)
    } else {
        Ok(Config::default())
    }
}
