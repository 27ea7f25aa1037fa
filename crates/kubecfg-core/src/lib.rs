//! Lookup, resolution and merge over kubeconfig documents
//!
//! This crate answers two questions about already-parsed
//! [`Config`](kubecfg_model::Config) documents:
//!
//! - **Which cluster, user and credential apply right now?** The
//!   [`lookup`] layer searches entries by name with first-match semantics and
//!   the [`resolve`] layer chains those searches from the current context.
//! - **How do two documents combine?** The [`merge`] layer appends an
//!   overlay's entries onto a base while the base keeps its current context.
//!
//! Every operation is a pure function. Nothing here reads files or touches
//! the network, and no operation changes a document the caller still holds:
//! rebuilds take documents by value and return new ones.
//!
//! # Architecture
//!
//! ```text
//!          kubecfg-cli
//!               |
//!          kubecfg-fs
//!               |
//!          kubecfg-core   (lookup <- resolve, lookup <- merge, rebuild)
//!               |
//!          kubecfg-model
//! ```
//!
//! # Example
//!
//! ```
//! use kubecfg_core::{merge, resolve_current};
//! use kubecfg_model::{AuthInfo, Cluster, Config, Context, NamedAuthInfo, NamedCluster, NamedContext};
//!
//! let base = Config::builder()
//!     .add_to_contexts(NamedContext::new("dev", Context::new("c1", "u1")))
//!     .with_current_context("dev")
//!     .build();
//! let overlay = Config::builder()
//!     .add_to_clusters(NamedCluster::new("c1", Cluster::with_server("https://x")))
//!     .add_to_users(NamedAuthInfo::new("u1", AuthInfo::with_token("tok123")))
//!     .build();
//!
//! let merged = merge(Some(&overlay), base);
//! let resolved = resolve_current(&merged).unwrap();
//! assert_eq!(resolved.server(), Some("https://x"));
//! assert_eq!(resolved.token(), Some("tok123"));
//! ```

pub mod error;
pub mod lookup;
pub mod merge;
pub mod rebuild;
pub mod resolve;

pub use error::{Error, Result};
pub use lookup::{
    find_auth_info, find_cluster, find_context, has_auth_info_named, index_of_auth_info_named,
};
pub use merge::{merge, merge_all, merge_preferences};
pub use rebuild::{minify, upsert_auth_info, use_context};
pub use resolve::{
    ResolvedContext, resolve_cluster, resolve_context, resolve_current, resolve_current_context,
    resolve_user_auth_info, resolve_user_token,
};
