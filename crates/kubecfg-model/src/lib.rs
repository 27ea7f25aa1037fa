//! Kubeconfig document types.
//!
//! This crate defines the plain-data shape of a kubeconfig file: named
//! clusters, named users, named contexts binding the two, a current-context
//! selector and free-form extensions. Field names follow the YAML spelling
//! used by `kubectl`, so documents round-trip through any serde format.
//!
//! Relationships between entries are by name only. A [`Context`] refers to
//! its cluster and user through plain strings that are resolved at query
//! time by `kubecfg-core`; nothing here validates them.
//!
//! Mutation happens by rebuilding through [`ConfigBuilder`], which takes an
//! existing [`Config`] by value and hands back a new one.

pub mod auth;
pub mod builder;
pub mod cluster;
pub mod config;
pub mod context;

pub use auth::{AuthInfo, AuthProviderConfig, ExecConfig, ExecEnvVar, NamedAuthInfo};
pub use builder::ConfigBuilder;
pub use cluster::{Cluster, NamedCluster};
pub use config::{Config, NamedExtension, Preferences};
pub use context::{Context, NamedContext};
