//! Name-indexed search over clusters, contexts and users
//!
//! All searches scan in sequence order and return the first entry whose name
//! matches exactly (case-sensitive). Later entries with the same name are
//! shadowed, never merged or reported. An empty name, an absent sequence, or
//! no match all yield `None`.

use kubecfg_model::{Cluster, Config, NamedAuthInfo, NamedCluster, NamedContext};

use crate::{Error, Result};

/// Entries that can be found by name.
trait Named {
    fn name(&self) -> &str;
}

impl Named for NamedCluster {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for NamedContext {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for NamedAuthInfo {
    fn name(&self) -> &str {
        &self.name
    }
}

fn first_named<'a, T: Named>(entries: Option<&'a [T]>, name: &str) -> Option<&'a T> {
    if name.is_empty() {
        return None;
    }
    entries?.iter().find(|entry| entry.name() == name)
}

/// Find the first context called `name`.
pub fn find_context<'a>(config: &'a Config, name: &str) -> Option<&'a NamedContext> {
    first_named(config.contexts.as_deref(), name)
}

/// Find the first user called `name`.
pub fn find_auth_info<'a>(config: &'a Config, name: &str) -> Option<&'a NamedAuthInfo> {
    first_named(config.users.as_deref(), name)
}

/// Find the first cluster called `name`, unwrapped to its connection record.
pub fn find_cluster<'a>(config: &'a Config, name: &str) -> Option<&'a Cluster> {
    first_named(config.clusters.as_deref(), name).map(|named| &named.cluster)
}

/// True iff [`find_auth_info`] would find a user called `name`.
pub fn has_auth_info_named(config: &Config, name: &str) -> bool {
    if name.is_empty() || config.users.is_none() {
        return false;
    }
    find_auth_info(config, name).is_some()
}

/// Zero-based position of the first user called `name`, or `None` when no
/// user has that name.
///
/// Meant for replacing a user entry in a rebuilt document. The caller is
/// expected to have checked [`has_auth_info_named`] first; a document with no
/// user sequence at all is rejected with [`Error::MissingUsers`].
///
/// Unlike the `find_*` searches there is no empty-name guard: a user named
/// `""` is found here even though [`has_auth_info_named`] reports it absent.
pub fn index_of_auth_info_named(config: &Config, name: &str) -> Result<Option<usize>> {
    let users = config.users.as_deref().ok_or(Error::MissingUsers)?;
    Ok(users.iter().position(|user| user.name == name))
}
