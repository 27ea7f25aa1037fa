//! The top-level kubeconfig document

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ConfigBuilder, NamedAuthInfo, NamedCluster, NamedContext};

/// A parsed kubeconfig document.
///
/// Every sequence is optional so that a missing key and an empty list stay
/// distinguishable. Duplicate names are allowed; lookups take the first match
/// in sequence order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "apiVersion", default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<NamedCluster>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<NamedContext>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<NamedAuthInfo>>,

    /// Name of the active context. An empty string means "unset".
    #[serde(
        rename = "current-context",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<NamedExtension>>,
}

impl Config {
    /// Start building a new, empty document.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// The current-context name, or `None` when it is absent or empty.
    pub fn current_context_name(&self) -> Option<&str> {
        self.current_context
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// True when the document carries no clusters, contexts, users,
    /// extensions, preferences or current context.
    pub fn is_empty(&self) -> bool {
        is_empty_seq(&self.clusters)
            && is_empty_seq(&self.contexts)
            && is_empty_seq(&self.users)
            && is_empty_seq(&self.extensions)
            && self.preferences.is_none()
            && self.current_context_name().is_none()
    }
}

fn is_empty_seq<T>(seq: &Option<Vec<T>>) -> bool {
    seq.as_ref().is_none_or(|entries| entries.is_empty())
}

/// Free-form client preferences.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<NamedExtension>>,
}

/// A named, opaque extension payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedExtension {
    pub name: String,

    #[serde(default)]
    pub extension: Value,
}

impl NamedExtension {
    pub fn new(name: impl Into<String>, extension: Value) -> Self {
        Self {
            name: name.into(),
            extension,
        }
    }
}
