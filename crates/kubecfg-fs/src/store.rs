//! Kubeconfig (de)serialization to strings and files

use std::path::Path;

use kubecfg_model::Config;

use crate::{Error, Result, io};

/// Parse a kubeconfig document from YAML text.
///
/// Empty or whitespace-only input is an empty document.
pub fn parse_str(content: &str) -> Result<Config> {
    parse(content, None)
}

/// Load and parse the kubeconfig at `path`.
pub fn load(path: &Path) -> Result<Config> {
    let content = io::read_text(path)?;
    tracing::debug!(?path, "Loading kubeconfig");
    parse(&content, Some(path))
}

fn parse(content: &str, path: Option<&Path>) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content).map_err(|e| Error::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })
}

/// Render `config` as kubeconfig YAML.
pub fn to_yaml(config: &Config) -> Result<String> {
    serde_yaml::to_string(config).map_err(|e| Error::Serialize {
        message: e.to_string(),
    })
}

/// Write `config` to `path` atomically.
pub fn save(path: &Path, config: &Config) -> Result<()> {
    let content = to_yaml(config)?;
    tracing::debug!(?path, "Writing kubeconfig");
    io::write_atomic(path, content.as_bytes())
}
