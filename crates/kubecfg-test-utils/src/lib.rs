//! Shared test utilities for the kubecfg workspace.
//!
//! This crate provides standardised kubeconfig fixtures so crate test suites
//! do not each hand-roll the same documents. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`fixtures`] — in-memory document builders
//! - [`files`] — [`TestKubeconfigDir`] for tests that need real files

pub mod files;
pub mod fixtures;

pub use files::TestKubeconfigDir;
