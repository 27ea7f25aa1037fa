//! Commands that follow a context to its cluster or user

use std::path::PathBuf;

use kubecfg_core::{ResolvedContext, resolve_cluster, resolve_context, resolve_current, resolve_user_token};
use kubecfg_model::Config;

use super::load_documents;
use crate::error::{CliError, Result};

/// The named context, or the current one when no name is given.
fn select_context<'a>(config: &'a Config, name: Option<&str>) -> Result<ResolvedContext<'a>> {
    match name {
        Some(name) => resolve_context(config, name)
            .ok_or_else(|| CliError::user(format!("Context '{}' not found", name))),
        None => resolve_current(config)
            .ok_or_else(|| CliError::user("No current context. Pass --context.")),
    }
}

/// Server URL of the cluster the selected context points at
pub fn cluster_server(config: &Config, context: Option<&str>) -> Result<String> {
    let selected = select_context(config, context)?;
    let cluster = resolve_cluster(config, Some(selected.context)).ok_or_else(|| {
        CliError::user(format!(
            "Context '{}' references unknown cluster '{}'",
            selected.name, selected.context.cluster
        ))
    })?;
    cluster
        .server
        .clone()
        .ok_or_else(|| CliError::user(format!("Cluster '{}' has no server", selected.context.cluster)))
}

/// Bearer token of the user the selected context points at
pub fn user_token(config: &Config, context: Option<&str>) -> Result<String> {
    let selected = select_context(config, context)?;
    resolve_user_token(config, Some(selected.context))
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::user(format!(
                "No token for user '{}' of context '{}'",
                selected.context.user, selected.name
            ))
        })
}

/// Run the cluster command
pub fn run_cluster(paths: &[PathBuf], context: Option<&str>) -> Result<()> {
    let config = load_documents(paths)?;
    println!("{}", cluster_server(&config, context)?);
    Ok(())
}

/// Run the token command
pub fn run_token(paths: &[PathBuf], context: Option<&str>) -> Result<()> {
    let config = load_documents(paths)?;
    println!("{}", user_token(&config, context)?);
    Ok(())
}
