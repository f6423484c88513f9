use std::path::PathBuf;

/// Per-argument failures raised while resolving a user-supplied file token.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// A `~user` token named an account that does not exist on this host.
    #[error("user {user:?} not found while expanding {token:?}")]
    UnknownUser { user: String, token: String },

    /// The wildcard-expansion helper process could not be started.
    #[error("failed to launch wildcard expansion shell: {source}")]
    WildcardSpawn {
        #[source]
        source: std::io::Error,
    },

    /// The wildcard-expansion helper process exited with a failure status.
    #[error("wildcard expansion for {pattern:?} exited with status {status}")]
    WildcardExit { pattern: String, status: i32 },

    /// A path produced during resolution was not valid UTF-8.
    #[error("path {0:?} is not valid UTF-8")]
    NotUtf8(PathBuf),
}
