//! Merge command

use std::path::Path;

use colored::Colorize;
use kubecfg_core::merge;
use kubecfg_fs::{load, save, to_yaml};

use crate::error::Result;

/// Run the merge command
pub fn run_merge(overlay: &Path, base: &Path, output: Option<&Path>) -> Result<()> {
    let overlay = load(overlay)?;
    let base = load(base)?;
    let merged = merge(Some(&overlay), base);

    match output {
        Some(path) => {
            save(path, &merged)?;
            println!(
                "{} Wrote merged kubeconfig to {}",
                "✓".green(),
                path.display()
            );
        }
        None => print!("{}", to_yaml(&merged)?),
    }
    Ok(())
}
