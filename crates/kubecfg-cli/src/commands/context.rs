//! Current-context and context listing commands

use std::path::PathBuf;

use colored::Colorize;
use kubecfg_core::{resolve_current_context, use_context};
use kubecfg_fs::save;
use kubecfg_model::{Config, ConfigBuilder};
use serde::Serialize;

use super::{load_documents, load_target, target_path};
use crate::error::{CliError, Result};

/// One line of `get-contexts` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextRow {
    pub current: bool,
    pub name: String,
    pub cluster: String,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Describe every context in order.
///
/// Only the entry the current context actually resolves to is marked, so a
/// shadowed duplicate of the current name is not.
pub fn context_rows(config: &Config) -> Vec<ContextRow> {
    let current = resolve_current_context(config);
    config
        .contexts
        .iter()
        .flatten()
        .map(|named| ContextRow {
            current: current.is_some_and(|c| std::ptr::eq(c, named)),
            name: named.name.clone(),
            cluster: named.context.cluster.clone(),
            user: named.context.user.clone(),
            namespace: named.context.namespace.clone(),
        })
        .collect()
}

/// Print the current context name
pub fn run_current_context(paths: &[PathBuf]) -> Result<()> {
    let config = load_documents(paths)?;
    let name = config
        .current_context_name()
        .ok_or_else(|| CliError::user("current-context is not set"))?;
    println!("{}", name);
    Ok(())
}

/// Run the get-contexts command
pub fn run_get_contexts(paths: &[PathBuf], json: bool) -> Result<()> {
    let config = load_documents(paths)?;
    let rows = context_rows(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No contexts found.".dimmed());
        return Ok(());
    }

    println!(
        "{:<8} {:<24} {:<24} {:<24} {}",
        "CURRENT".bold(),
        "NAME".bold(),
        "CLUSTER".bold(),
        "AUTHINFO".bold(),
        "NAMESPACE".bold()
    );
    for row in rows {
        let marker = if row.current { "*" } else { "" };
        println!(
            "{:<8} {:<24} {:<24} {:<24} {}",
            marker.green(),
            row.name,
            row.cluster,
            row.user,
            row.namespace.unwrap_or_default()
        );
    }
    Ok(())
}

/// Run the use-context command
pub fn run_use_context(paths: &[PathBuf], name: &str) -> Result<()> {
    // The context may live in any file of the list; only the first is written
    use_context(load_documents(paths)?, name)?;

    let target = target_path(paths)?;
    let document = ConfigBuilder::from_config(load_target(target)?)
        .with_current_context(name)
        .build();
    save(target, &document)?;

    println!("{} Switched to context \"{}\".", "✓".green(), name);
    Ok(())
}
