//! Crate error taxonomy.
//!
//! The first four variants are prompt-level failures the orchestrator
//! recovers from by re-prompting; the rest surface store problems. The game
//! core has no error paths at all.

use thiserror::Error;

/// Everything that can fail outside the game core.
#[derive(Error, Debug)]
pub enum Error {
    /// Signup attempted with a name that is already registered.
    #[error("username `{0}` is already taken")]
    DuplicateUsername(String),

    /// Login attempted with a name that is not registered.
    #[error("unknown username `{0}`")]
    UnknownUsername(String),

    /// Login attempted with the wrong password.
    #[error("incorrect password")]
    WrongPassword,

    /// A second login attempted to reuse an identity already seated this
    /// session.
    #[error("`{0}` is already logged in this session")]
    UsernameAlreadyActive(String),

    /// A stored credential field failed to decode.
    #[error("store record for `{0}` is malformed")]
    MalformedRecord(String),

    /// The store file exists but is not a valid document.
    #[error("store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Reading or writing the store file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
