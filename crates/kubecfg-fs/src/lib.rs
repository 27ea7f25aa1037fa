//! Kubeconfig file handling for kubecfg
//!
//! Parses kubeconfig YAML into [`Config`](kubecfg_model::Config) documents,
//! writes them back atomically, and discovers the files a `KUBECONFIG`-style
//! path list refers to. Errors from parsing and I/O are surfaced unchanged;
//! the pure resolution and merge logic lives in `kubecfg-core`.

pub mod error;
pub mod io;
pub mod loader;
pub mod paths;
pub mod store;

pub use error::{Error, Result};
pub use loader::load_merged;
pub use paths::{default_kubeconfig_path, kubeconfig_paths};
pub use store::{load, parse_str, save, to_yaml};
