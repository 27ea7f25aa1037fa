//! Combining two documents into a new one
//!
//! `merge(overlay, base)` starts from every field of `base` and appends the
//! overlay's clusters, contexts, users and extensions after the base's own
//! entries. Nothing is replaced or deduplicated, so under first-match lookup
//! the base's entries shadow same-named overlay entries.
//!
//! The current context is the exception to "overlay on top": the base keeps
//! its current context whenever it has one, and the overlay's value only fills
//! the gap when the base's is absent or empty.

use kubecfg_model::{Config, ConfigBuilder};

/// Merge `overlay` onto `base`, producing a new document.
///
/// With no overlay, `base` is returned as-is.
pub fn merge(overlay: Option<&Config>, base: Config) -> Config {
    let Some(overlay) = overlay else {
        return base;
    };

    let mut builder = ConfigBuilder::from_config(base);
    if let Some(clusters) = &overlay.clusters {
        builder = builder.add_all_to_clusters(clusters.iter().cloned());
    }
    if let Some(contexts) = &overlay.contexts {
        builder = builder.add_all_to_contexts(contexts.iter().cloned());
    }
    if let Some(users) = &overlay.users {
        builder = builder.add_all_to_users(users.iter().cloned());
    }
    if let Some(extensions) = &overlay.extensions {
        builder = builder.add_all_to_extensions(extensions.iter().cloned());
    }

    if !builder.has_current_context() {
        if let Some(name) = overlay.current_context_name() {
            tracing::debug!(name, "Taking current context from overlay");
            builder = builder.with_current_context(name);
        }
    }

    let merged = merge_preferences(overlay, builder.build());
    tracing::debug!(
        clusters = merged.clusters.as_ref().map_or(0, Vec::len),
        contexts = merged.contexts.as_ref().map_or(0, Vec::len),
        users = merged.users.as_ref().map_or(0, Vec::len),
        "Merged kubeconfig"
    );
    merged
}

/// Append the overlay's top-level extensions onto `merged`'s preference
/// extensions.
///
/// Runs only when the overlay carries a preferences block. The overlay's
/// own preference extensions are not consulted. An overlay whose top-level
/// extension list is absent contributes nothing. The merged document's other
/// preference fields are kept.
pub fn merge_preferences(overlay: &Config, merged: Config) -> Config {
    if overlay.preferences.is_none() {
        return merged;
    }
    let Some(extensions) = &overlay.extensions else {
        tracing::debug!("Overlay has preferences but no extensions; nothing to merge");
        return merged;
    };

    ConfigBuilder::from_config(merged)
        .add_all_to_preference_extensions(extensions.iter().cloned())
        .build()
}

/// Fold an ordered list of documents into one.
///
/// Each document is merged as the overlay onto everything before it, so the
/// first document with a current context decides it and earlier entries
/// shadow later ones. Returns `None` for an empty list.
pub fn merge_all(configs: impl IntoIterator<Item = Config>) -> Option<Config> {
    configs
        .into_iter()
        .reduce(|base, overlay| merge(Some(&overlay), base))
}
