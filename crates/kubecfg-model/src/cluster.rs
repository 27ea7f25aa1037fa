//! Cluster connection entries

use serde::{Deserialize, Serialize};

use crate::NamedExtension;

/// A cluster entry keyed by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedCluster {
    pub name: String,

    #[serde(default)]
    pub cluster: Cluster,
}

impl NamedCluster {
    pub fn new(name: impl Into<String>, cluster: Cluster) -> Self {
        Self {
            name: name.into(),
            cluster,
        }
    }
}

/// Connection details for an API server endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cluster {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_server_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure_skip_tls_verify: Option<bool>,

    /// Path to a CA bundle on disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority: Option<String>,

    /// Base64-encoded CA bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_compression: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<NamedExtension>>,
}

impl Cluster {
    /// A cluster record pointing at `server` with nothing else set.
    pub fn with_server(server: impl Into<String>) -> Self {
        Self {
            server: Some(server.into()),
            ..Default::default()
        }
    }
}
