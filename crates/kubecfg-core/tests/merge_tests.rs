//! Integration tests for merging documents

use kubecfg_core::{find_context, merge, merge_all};
use kubecfg_model::Config;
use kubecfg_test_utils::fixtures::{cluster, context, single_context, user};
use pretty_assertions::assert_eq;

fn cluster_names(config: &Config) -> Vec<&str> {
    config
        .clusters
        .iter()
        .flatten()
        .map(|c| c.name.as_str())
        .collect()
}

#[test]
fn test_merge_appends_overlay_after_base() {
    let overlay = Config::builder()
        .add_all_to_clusters([cluster("A", "https://a"), cluster("B", "https://b")])
        .build();
    let base = Config::builder().add_to_clusters(cluster("C", "https://c")).build();

    let merged = merge(Some(&overlay), base);
    assert_eq!(cluster_names(&merged), vec!["C", "A", "B"]);
}

#[test]
fn test_merge_appends_every_sequence() {
    let overlay = Config::builder()
        .add_to_contexts(context("overlay-ctx", "A", "ua"))
        .add_to_users(user("ua", "ta"))
        .build();
    let base = single_context();

    let merged = merge(Some(&overlay), base);
    let contexts: Vec<_> = merged
        .contexts
        .iter()
        .flatten()
        .map(|c| c.name.as_str())
        .collect();
    let users: Vec<_> = merged
        .users
        .iter()
        .flatten()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(contexts, vec!["dev", "overlay-ctx"]);
    assert_eq!(users, vec!["u1", "ua"]);
}

#[test]
fn test_merge_keeps_duplicates_and_base_shadows_overlay() {
    let overlay = Config::builder()
        .add_to_contexts(context("dev", "overlay-cluster", "u"))
        .build();
    let base = Config::builder()
        .add_to_contexts(context("dev", "base-cluster", "u"))
        .build();

    let merged = merge(Some(&overlay), base);
    assert_eq!(merged.contexts.as_ref().unwrap().len(), 2);
    assert_eq!(
        find_context(&merged, "dev").unwrap().context.cluster,
        "base-cluster"
    );
}

#[test]
fn test_merge_base_current_context_wins() {
    let overlay = Config::builder().with_current_context("overlay-ctx").build();
    let base = Config::builder().with_current_context("base-ctx").build();

    let merged = merge(Some(&overlay), base);
    assert_eq!(merged.current_context.as_deref(), Some("base-ctx"));
}

#[test]
fn test_merge_overlay_fills_missing_current_context() {
    let overlay = Config::builder().with_current_context("overlay-ctx").build();

    let merged = merge(Some(&overlay), Config::default());
    assert_eq!(merged.current_context.as_deref(), Some("overlay-ctx"));

    let empty_base = Config::builder().with_current_context("").build();
    let merged = merge(Some(&overlay), empty_base);
    assert_eq!(merged.current_context.as_deref(), Some("overlay-ctx"));
}

#[test]
fn test_merge_empty_overlay_current_context_leaves_base_alone() {
    let overlay = Config::builder().with_current_context("").build();
    let base = Config::builder().with_current_context("").build();

    let merged = merge(Some(&overlay), base);
    assert_eq!(merged.current_context.as_deref(), Some(""));
    assert_eq!(merged.current_context_name(), None);
}

#[test]
fn test_merge_without_overlay_is_identity() {
    let base = single_context();

    let merged = merge(None, base.clone());
    assert_eq!(merged, base);
}

#[test]
fn test_merge_leaves_overlay_untouched() {
    let overlay = single_context();
    let snapshot = overlay.clone();

    let _ = merge(Some(&overlay), Config::default());
    assert_eq!(overlay, snapshot);
}

#[test]
fn test_merge_keeps_base_header_fields() {
    let overlay = Config::builder().api_version("v2").kind("Other").build();
    let base = Config::builder().api_version("v1").kind("Config").build();

    let merged = merge(Some(&overlay), base);
    assert_eq!(merged.api_version.as_deref(), Some("v1"));
    assert_eq!(merged.kind.as_deref(), Some("Config"));
}

#[test]
fn test_merge_all_chains_in_order() {
    let first = Config::builder()
        .add_to_clusters(cluster("one", "https://1"))
        .build();
    let second = Config::builder()
        .add_to_clusters(cluster("two", "https://2"))
        .with_current_context("second")
        .build();
    let third = Config::builder()
        .add_to_clusters(cluster("three", "https://3"))
        .with_current_context("third")
        .build();

    let merged = merge_all([first, second, third]).unwrap();
    assert_eq!(cluster_names(&merged), vec!["one", "two", "three"]);
    assert_eq!(merged.current_context_name(), Some("second"));
}
