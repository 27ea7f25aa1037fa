//! Discovery of kubeconfig files from a `KUBECONFIG`-style path list

use std::env;
use std::path::PathBuf;

/// `~/.kube/config`, when a home directory is known.
pub fn default_kubeconfig_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kube").join("config"))
}

/// Split a path list into the files to load, in precedence order.
///
/// The list uses the platform path separator (`:` on Unix, `;` on Windows).
/// Empty segments and repeated paths are dropped, keeping the first
/// occurrence. When `list` is `None` or yields no paths, the default
/// `~/.kube/config` is used.
pub fn kubeconfig_paths(list: Option<&str>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();
    if let Some(list) = list {
        for path in env::split_paths(list) {
            if path.as_os_str().is_empty() || paths.contains(&path) {
                continue;
            }
            paths.push(path);
        }
    }

    if paths.is_empty() {
        tracing::debug!("No kubeconfig paths given, falling back to default");
        paths.extend(default_kubeconfig_path());
    }
    paths
}
