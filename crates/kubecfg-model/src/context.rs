//! Context entries binding a cluster to a user

use serde::{Deserialize, Serialize};

use crate::NamedExtension;

/// A context entry keyed by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedContext {
    pub name: String,

    #[serde(default)]
    pub context: Context,
}

impl NamedContext {
    pub fn new(name: impl Into<String>, context: Context) -> Self {
        Self {
            name: name.into(),
            context,
        }
    }
}

/// A binding of a cluster name and a user name, plus an optional namespace.
///
/// `cluster` and `user` are references into the owning document's
/// `clusters` and `users` sequences. They may dangle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub cluster: String,

    #[serde(default)]
    pub user: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<NamedExtension>>,
}

impl Context {
    pub fn new(cluster: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            user: user.into(),
            ..Default::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}
