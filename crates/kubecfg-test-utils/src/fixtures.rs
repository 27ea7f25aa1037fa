//! In-memory kubeconfig fixtures.

use kubecfg_model::{
    AuthInfo, Cluster, Config, Context, NamedAuthInfo, NamedCluster, NamedContext, NamedExtension,
};
use serde_json::json;

pub fn cluster(name: &str, server: &str) -> NamedCluster {
    NamedCluster::new(name, Cluster::with_server(server))
}

pub fn context(name: &str, cluster: &str, user: &str) -> NamedContext {
    NamedContext::new(name, Context::new(cluster, user))
}

pub fn user(name: &str, token: &str) -> NamedAuthInfo {
    NamedAuthInfo::new(name, AuthInfo::with_token(token))
}

/// A user entry with no credential material at all.
pub fn bare_user(name: &str) -> NamedAuthInfo {
    NamedAuthInfo::new(name, AuthInfo::default())
}

pub fn extension(name: &str) -> NamedExtension {
    NamedExtension::new(name, json!({ "source": name }))
}

/// One cluster, one user and one context wired together:
///
/// - context `dev` -> cluster `c1` (`https://x`), user `u1` (token `tok123`)
/// - current context `dev`
pub fn single_context() -> Config {
    Config::builder()
        .api_version("v1")
        .kind("Config")
        .add_to_clusters(cluster("c1", "https://x"))
        .add_to_users(user("u1", "tok123"))
        .add_to_contexts(context("dev", "c1", "u1"))
        .with_current_context("dev")
        .build()
}

/// Users `a`, `b`, `c` in that order with tokens `ta`, `tb`, `tc`.
pub fn three_users() -> Config {
    Config::builder()
        .add_all_to_users([user("a", "ta"), user("b", "tb"), user("c", "tc")])
        .build()
}
