//! End-to-end tests over the fixture kubeconfigs
//!
//! These exercise the complete flow: file loading -> merge -> resolution ->
//! rebuild -> save.

use std::path::PathBuf;

use kubecfg_core::{
    find_auth_info, find_cluster, index_of_auth_info_named, merge, minify, resolve_cluster,
    resolve_current, resolve_current_context, resolve_user_token, upsert_auth_info, use_context,
};
use kubecfg_fs::{load, load_merged, save};
use kubecfg_model::{AuthInfo, Config};
use kubecfg_test_utils::TestKubeconfigDir;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/kubeconfigs")
        .join(name)
}

fn names<T>(entries: &Option<Vec<T>>, name_of: fn(&T) -> &str) -> Vec<&str> {
    entries.iter().flatten().map(name_of).collect()
}

#[test]
fn test_merge_fixture_files() {
    let overlay = load(&fixture("overlay.yaml")).unwrap();
    let base = load(&fixture("base.yaml")).unwrap();

    let merged = merge(Some(&overlay), base);

    assert_eq!(merged.current_context_name(), Some("base-ctx"));
    assert_eq!(
        names(&merged.clusters, |c| c.name.as_str()),
        vec!["shared", "staging", "shared", "overlay-cluster"]
    );
    assert_eq!(
        names(&merged.users, |u| u.name.as_str()),
        vec!["base-user", "exec-user", "base-user"]
    );
    assert_eq!(
        names(&merged.extensions, |e| e.name.as_str()),
        vec!["overlay-ext"]
    );

    let preferences = merged.preferences.as_ref().unwrap();
    assert_eq!(preferences.colors, Some(true));
    assert_eq!(
        names(&preferences.extensions, |e| e.name.as_str()),
        vec!["base-pref", "overlay-ext"]
    );

    // Base entries shadow same-named overlay entries
    assert_eq!(
        find_cluster(&merged, "shared").unwrap().server.as_deref(),
        Some("https://base.example.com:6443")
    );
    assert_eq!(
        find_auth_info(&merged, "base-user").unwrap().user.token.as_deref(),
        Some("base-token")
    );
}

#[test]
fn test_load_merged_matches_in_memory_merge() {
    let from_files = load_merged([fixture("base.yaml"), fixture("overlay.yaml")]).unwrap();

    let overlay = load(&fixture("overlay.yaml")).unwrap();
    let base = load(&fixture("base.yaml")).unwrap();
    assert_eq!(from_files, merge(Some(&overlay), base));
}

#[test]
fn test_resolution_through_merged_document() {
    let merged = load_merged([fixture("base.yaml"), fixture("overlay.yaml")]).unwrap();
    let current = resolve_current_context(&merged).map(|named| &named.context);

    assert_eq!(
        resolve_cluster(&merged, current).unwrap().server.as_deref(),
        Some("https://base.example.com:6443")
    );
    assert_eq!(resolve_user_token(&merged, current), Some("base-token"));

    // Switching to the overlay's context reaches the exec-plugin user
    let switched = use_context(merged, "overlay-ctx").unwrap();
    let resolved = resolve_current(&switched).unwrap();
    assert_eq!(resolved.server(), Some("https://overlay-only.example.com"));
    assert_eq!(resolved.token(), None);
    assert_eq!(
        resolved.auth_info.unwrap().exec.as_ref().unwrap().command,
        "cloud-auth"
    );
}

#[test]
fn test_dangling_fixture_resolves_to_not_found() {
    let config = load(&fixture("dangling.yaml")).unwrap();
    let current = resolve_current_context(&config).map(|named| &named.context);

    assert!(current.is_some());
    assert!(resolve_cluster(&config, current).is_none());
    assert!(resolve_user_token(&config, current).is_none());
    assert!(index_of_auth_info_named(&config, "missing-user").is_err());

    let minified = minify(&config).unwrap();
    assert!(minified.clusters.is_none());
    assert!(minified.users.is_none());
}

#[test]
fn test_rebuild_and_save_round_trip() {
    let dir = TestKubeconfigDir::new();
    let path = dir.path("config");
    let base = load(&fixture("base.yaml")).unwrap();

    let rotated = upsert_auth_info(base, "base-user", AuthInfo::with_token("rotated")).unwrap();
    save(&path, &rotated).unwrap();

    let reloaded: Config = load(&path).unwrap();
    assert_eq!(reloaded, rotated);
    let current = resolve_current_context(&reloaded).map(|named| &named.context);
    assert_eq!(resolve_user_token(&reloaded, current), Some("rotated"));
}
