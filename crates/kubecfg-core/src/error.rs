//! Error types for kubecfg-core

/// Result type for kubecfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kubecfg-core operations
///
/// Lookups and resolutions never produce these; a missing entry is an
/// `Option::None`. Errors are reserved for broken caller preconditions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A positional user lookup was attempted on a document with no user
    /// sequence. Check with `has_auth_info_named` first.
    #[error("Configuration has no users to index into")]
    MissingUsers,

    /// A rebuild referenced a context that the document does not contain
    #[error("Context not found: {name}")]
    ContextNotFound { name: String },

    /// An entry name was required but empty
    #[error("Empty {kind} name")]
    EmptyName { kind: &'static str },
}
