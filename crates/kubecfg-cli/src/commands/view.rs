//! View command

use std::path::PathBuf;

use kubecfg_core::minify;
use kubecfg_fs::to_yaml;

use super::load_documents;
use crate::error::{CliError, Result};

/// Run the view command
pub fn run_view(paths: &[PathBuf], minified: bool) -> Result<()> {
    let config = load_documents(paths)?;
    let config = if minified {
        minify(&config).ok_or_else(|| CliError::user("No current context to minify around"))?
    } else {
        config
    };
    print!("{}", to_yaml(&config)?);
    Ok(())
}
