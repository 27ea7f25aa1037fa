//! Resolution of the configuration in effect
//!
//! Each resolution chains lookups by name: current-context name -> context ->
//! cluster or user -> token. A missing hop anywhere along the chain turns into
//! `None` at the top. A context that names a cluster or user the document
//! does not contain is a valid state, not an error.

use kubecfg_model::{AuthInfo, Cluster, Config, Context, NamedContext};

use crate::lookup::{find_auth_info, find_cluster, find_context};

/// The context selected by the document's `current-context`, if any.
pub fn resolve_current_context(config: &Config) -> Option<&NamedContext> {
    let Some(name) = config.current_context_name() else {
        tracing::trace!("No current context set");
        return None;
    };
    let found = find_context(config, name);
    if found.is_none() {
        tracing::trace!(name, "Current context does not match any context entry");
    }
    found
}

/// The cluster record `context` points at.
pub fn resolve_cluster<'a>(config: &'a Config, context: Option<&Context>) -> Option<&'a Cluster> {
    let context = context?;
    let found = find_cluster(config, &context.cluster);
    if found.is_none() {
        tracing::trace!(cluster = %context.cluster, "Context references an unknown cluster");
    }
    found
}

/// The credential record `context` points at.
pub fn resolve_user_auth_info<'a>(
    config: &'a Config,
    context: Option<&Context>,
) -> Option<&'a AuthInfo> {
    let context = context?;
    let found = find_auth_info(config, &context.user).map(|named| &named.user);
    if found.is_none() {
        tracing::trace!(user = %context.user, "Context references an unknown user");
    }
    found
}

/// The bearer token of the user `context` points at.
pub fn resolve_user_token<'a>(config: &'a Config, context: Option<&Context>) -> Option<&'a str> {
    resolve_user_auth_info(config, context)?.token.as_deref()
}

/// A context together with everything reachable from it.
///
/// `cluster` and `auth_info` are `None` when the context's references dangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedContext<'a> {
    pub name: &'a str,
    pub context: &'a Context,
    pub cluster: Option<&'a Cluster>,
    pub auth_info: Option<&'a AuthInfo>,
}

impl<'a> ResolvedContext<'a> {
    fn from_named(config: &'a Config, named: &'a NamedContext) -> Self {
        Self {
            name: &named.name,
            context: &named.context,
            cluster: resolve_cluster(config, Some(&named.context)),
            auth_info: resolve_user_auth_info(config, Some(&named.context)),
        }
    }

    pub fn server(&self) -> Option<&'a str> {
        self.cluster?.server.as_deref()
    }

    pub fn token(&self) -> Option<&'a str> {
        self.auth_info?.token.as_deref()
    }

    pub fn namespace(&self) -> Option<&'a str> {
        self.context.namespace.as_deref()
    }
}

/// Resolve the context called `name` and everything it references.
pub fn resolve_context<'a>(config: &'a Config, name: &str) -> Option<ResolvedContext<'a>> {
    find_context(config, name).map(|named| ResolvedContext::from_named(config, named))
}

/// Resolve the current context and everything it references.
pub fn resolve_current(config: &Config) -> Option<ResolvedContext<'_>> {
    resolve_current_context(config).map(|named| ResolvedContext::from_named(config, named))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubecfg_test_utils::fixtures::{context, single_context};

    #[test]
    fn current_context_follows_the_selector() {
        let config = single_context();

        let current = resolve_current_context(&config).unwrap();
        assert_eq!(current.name, "dev");
    }

    #[test]
    fn absent_context_resolves_to_nothing() {
        let config = single_context();

        assert!(resolve_cluster(&config, None).is_none());
        assert!(resolve_user_auth_info(&config, None).is_none());
        assert!(resolve_user_token(&config, None).is_none());
    }

    #[test]
    fn dangling_references_resolve_to_nothing() {
        let config = Config::builder()
            .add_to_contexts(context("orphan", "missing-cluster", "missing-user"))
            .with_current_context("orphan")
            .build();

        let resolved = resolve_current(&config).unwrap();
        assert_eq!(resolved.name, "orphan");
        assert!(resolved.cluster.is_none());
        assert!(resolved.auth_info.is_none());
        assert!(resolved.server().is_none());
        assert!(resolved.token().is_none());
    }

    #[test]
    fn resolved_context_exposes_namespace() {
        let config = Config::builder()
            .add_to_contexts(kubecfg_model::NamedContext::new(
                "ns",
                Context::new("c", "u").with_namespace("apps"),
            ))
            .build();

        let resolved = resolve_context(&config, "ns").unwrap();
        assert_eq!(resolved.namespace(), Some("apps"));
    }
}
