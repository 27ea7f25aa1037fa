//! Loading a chain of kubeconfig files into one document

use std::path::PathBuf;

use kubecfg_core::merge_all;
use kubecfg_model::Config;

use crate::{Result, store};

/// Load every existing file in `paths` and merge them in order.
///
/// Missing files are skipped. Parse and read errors on files that do exist
/// are returned unchanged. Earlier files take precedence: their current
/// context wins and their entries shadow same-named entries from later
/// files. With no existing file, the result is an empty document.
pub fn load_merged<I, P>(paths: I) -> Result<Config>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut configs = Vec::new();
    for path in paths {
        let path = path.into();
        if !path.is_file() {
            tracing::debug!(?path, "Kubeconfig not found, skipping");
            continue;
        }
        configs.push(store::load(&path)?);
    }

    tracing::debug!(files = configs.len(), "Merging kubeconfig files");
    Ok(merge_all(configs).unwrap_or_default())
}
