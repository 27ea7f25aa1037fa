//! Rebuilding documents from existing ones
//!
//! Rebuilds take the document by value (or read it by reference) and return
//! a new one, so a caller that still shares the original never sees it change.

use kubecfg_model::{AuthInfo, Config, ConfigBuilder, NamedAuthInfo, NamedCluster, NamedContext};

use crate::lookup::{find_context, has_auth_info_named, index_of_auth_info_named};
use crate::resolve::resolve_current;
use crate::{Error, Result};

/// Select `name` as the current context.
///
/// Fails with [`Error::ContextNotFound`] when no context has that name.
pub fn use_context(config: Config, name: &str) -> Result<Config> {
    if find_context(&config, name).is_none() {
        return Err(Error::ContextNotFound {
            name: name.to_string(),
        });
    }
    tracing::debug!(name, "Switching current context");
    Ok(ConfigBuilder::from_config(config)
        .with_current_context(name)
        .build())
}

/// Replace the first user called `name` with `auth_info`, or append a new
/// user entry when none exists.
///
/// Later users sharing the name are left in place.
pub fn upsert_auth_info(config: Config, name: &str, auth_info: AuthInfo) -> Result<Config> {
    if name.is_empty() {
        return Err(Error::EmptyName { kind: "user" });
    }
    let entry = NamedAuthInfo::new(name, auth_info);

    if !has_auth_info_named(&config, name) {
        tracing::debug!(name, "Appending new user");
        return Ok(ConfigBuilder::from_config(config).add_to_users(entry).build());
    }

    let index = index_of_auth_info_named(&config, name)?;
    let mut users = config.users.clone().unwrap_or_default();
    match index {
        Some(index) => users[index] = entry,
        None => users.push(entry),
    }
    tracing::debug!(name, ?index, "Replacing user");
    Ok(ConfigBuilder::from_config(config)
        .with_users(Some(users))
        .build())
}

/// A document holding only the current context and the cluster and user it
/// references, or `None` when no current context resolves.
///
/// Dangling references are left dangling; the minified document simply lacks
/// the missing entry.
pub fn minify(config: &Config) -> Option<Config> {
    let resolved = resolve_current(config)?;

    let mut builder = Config::builder()
        .add_to_contexts(NamedContext::new(resolved.name, resolved.context.clone()))
        .with_current_context(resolved.name);
    if let Some(cluster) = resolved.cluster {
        builder = builder.add_to_clusters(NamedCluster::new(
            resolved.context.cluster.as_str(),
            cluster.clone(),
        ));
    }
    if let Some(auth_info) = resolved.auth_info {
        builder = builder.add_to_users(NamedAuthInfo::new(
            resolved.context.user.as_str(),
            auth_info.clone(),
        ));
    }

    Some(Config {
        api_version: config.api_version.clone(),
        kind: config.kind.clone(),
        preferences: config.preferences.clone(),
        ..builder.build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubecfg_test_utils::fixtures::{single_context, three_users, user};
    use pretty_assertions::assert_eq;

    fn tokens(config: &Config) -> Vec<(&str, Option<&str>)> {
        config
            .users
            .iter()
            .flatten()
            .map(|u| (u.name.as_str(), u.user.token.as_deref()))
            .collect()
    }

    #[test]
    fn use_context_switches_to_existing_context() {
        let config = Config::builder()
            .add_all_to_contexts(single_context().contexts.unwrap())
            .add_to_contexts(kubecfg_test_utils::fixtures::context("prod", "c", "u"))
            .with_current_context("dev")
            .build();

        let switched = use_context(config, "prod").unwrap();
        assert_eq!(switched.current_context_name(), Some("prod"));
    }

    #[test]
    fn use_context_rejects_unknown_context() {
        let err = use_context(single_context(), "nope").unwrap_err();
        assert!(matches!(err, Error::ContextNotFound { ref name } if name == "nope"));
    }

    #[test]
    fn upsert_replaces_in_position() {
        let config = upsert_auth_info(three_users(), "b", AuthInfo::with_token("new")).unwrap();

        assert_eq!(
            tokens(&config),
            vec![("a", Some("ta")), ("b", Some("new")), ("c", Some("tc"))]
        );
    }

    #[test]
    fn upsert_only_replaces_first_duplicate() {
        let config = Config::builder()
            .add_all_to_users([user("dup", "one"), user("dup", "two")])
            .build();

        let config = upsert_auth_info(config, "dup", AuthInfo::with_token("new")).unwrap();
        assert_eq!(
            tokens(&config),
            vec![("dup", Some("new")), ("dup", Some("two"))]
        );
    }

    #[test]
    fn upsert_appends_when_absent() {
        let config = upsert_auth_info(Config::default(), "fresh", AuthInfo::with_token("t")).unwrap();

        assert_eq!(tokens(&config), vec![("fresh", Some("t"))]);
    }

    #[test]
    fn minify_keeps_only_what_the_current_context_reaches() {
        let config = Config::builder()
            .add_all_to_clusters(single_context().clusters.unwrap())
            .add_to_clusters(kubecfg_test_utils::fixtures::cluster("other", "https://o"))
            .add_all_to_users([user("u1", "tok123"), user("other", "t")])
            .add_all_to_contexts(single_context().contexts.unwrap())
            .add_to_contexts(kubecfg_test_utils::fixtures::context("other", "other", "other"))
            .with_current_context("dev")
            .build();

        let minified = minify(&config).unwrap();
        assert_eq!(minified.clusters.as_ref().unwrap().len(), 1);
        assert_eq!(minified.clusters.as_ref().unwrap()[0].name, "c1");
        assert_eq!(tokens(&minified), vec![("u1", Some("tok123"))]);
        assert_eq!(minified.contexts.as_ref().unwrap().len(), 1);
        assert_eq!(minified.current_context_name(), Some("dev"));
    }

    #[test]
    fn minify_without_current_context_is_none() {
        assert!(minify(&three_users()).is_none());
    }

    #[test]
    fn minify_drops_dangling_user() {
        let config = Config {
            users: None,
            ..single_context()
        };

        let minified = minify(&config).unwrap();
        assert!(minified.users.is_none());
        assert!(minified.clusters.is_some());
    }

    #[test]
    fn upsert_rejects_empty_name() {
        let err = upsert_auth_info(three_users(), "", AuthInfo::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyName { kind: "user" }));
    }
}
