//! Credential editing command

use std::path::PathBuf;

use colored::Colorize;
use kubecfg_core::{find_auth_info, upsert_auth_info};
use kubecfg_fs::save;
use kubecfg_model::{AuthInfo, Config};

use super::{load_target, target_path};
use crate::error::Result;

/// Set the token of user `name`, keeping its other credential fields.
pub fn with_token(config: Config, name: &str, token: &str) -> Result<Config> {
    let existing = find_auth_info(&config, name).map(|named| named.user.clone());
    let auth_info = AuthInfo {
        token: Some(token.to_string()),
        ..existing.unwrap_or_default()
    };
    Ok(upsert_auth_info(config, name, auth_info)?)
}

/// Run the set-credentials command
pub fn run_set_credentials(paths: &[PathBuf], name: &str, token: &str) -> Result<()> {
    let target = target_path(paths)?;
    let document = with_token(load_target(target)?, name, token)?;
    save(target, &document)?;

    println!("{} User \"{}\" set.", "✓".green(), name);
    Ok(())
}
