//! Rebuilding documents without touching shared instances

use crate::{Config, NamedAuthInfo, NamedCluster, NamedContext, NamedExtension, Preferences};

/// Builder for [`Config`].
///
/// Seeded either empty or from an existing document taken by value. The
/// `add_all_to_*` methods append in iteration order and never deduplicate.
/// They always leave the target sequence present, even when given no
/// entries, so a caller that skips absent sources keeps absent sequences
/// absent.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder for an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with every field of `config`.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.config.api_version = Some(api_version.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.config.kind = Some(kind.into());
        self
    }

    pub fn add_to_clusters(self, cluster: NamedCluster) -> Self {
        self.add_all_to_clusters([cluster])
    }

    pub fn add_all_to_clusters(mut self, clusters: impl IntoIterator<Item = NamedCluster>) -> Self {
        append(&mut self.config.clusters, clusters);
        self
    }

    pub fn add_to_contexts(self, context: NamedContext) -> Self {
        self.add_all_to_contexts([context])
    }

    pub fn add_all_to_contexts(mut self, contexts: impl IntoIterator<Item = NamedContext>) -> Self {
        append(&mut self.config.contexts, contexts);
        self
    }

    pub fn add_to_users(self, user: NamedAuthInfo) -> Self {
        self.add_all_to_users([user])
    }

    pub fn add_all_to_users(mut self, users: impl IntoIterator<Item = NamedAuthInfo>) -> Self {
        append(&mut self.config.users, users);
        self
    }

    pub fn add_to_extensions(self, extension: NamedExtension) -> Self {
        self.add_all_to_extensions([extension])
    }

    pub fn add_all_to_extensions(
        mut self,
        extensions: impl IntoIterator<Item = NamedExtension>,
    ) -> Self {
        append(&mut self.config.extensions, extensions);
        self
    }

    /// Replace the user sequence wholesale.
    pub fn with_users(mut self, users: Option<Vec<NamedAuthInfo>>) -> Self {
        self.config.users = users;
        self
    }

    /// Append extensions onto the preferences block, creating it if needed.
    pub fn add_all_to_preference_extensions(
        mut self,
        extensions: impl IntoIterator<Item = NamedExtension>,
    ) -> Self {
        let preferences = self.config.preferences.get_or_insert_with(Preferences::default);
        append(&mut preferences.extensions, extensions);
        self
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.config.preferences = Some(preferences);
        self
    }

    /// True when a non-empty current context is already set.
    pub fn has_current_context(&self) -> bool {
        self.config.current_context_name().is_some()
    }

    pub fn with_current_context(mut self, name: impl Into<String>) -> Self {
        self.config.current_context = Some(name.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl From<Config> for ConfigBuilder {
    fn from(config: Config) -> Self {
        Self::from_config(config)
    }
}

fn append<T>(target: &mut Option<Vec<T>>, entries: impl IntoIterator<Item = T>) {
    target.get_or_insert_with(Vec::new).extend(entries);
}
