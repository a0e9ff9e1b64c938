//! Persisted record types and the operations on the in-memory document.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A registered user: username plus salted password digest, hex-encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    /// Per-user salt, hex.
    pub salt: String,
    /// Iterated SHA-256 digest of salt + password, hex.
    pub password: String,
}

/// One finished game's persisted score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub username: String,
    pub score: u32,
}

/// The root of the store file.
///
/// Both collections default to empty so a missing file and an empty file
/// read the same.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub scores: Vec<ScoreRecord>,
}

impl Document {
    /// Look up a user by username.
    #[must_use]
    pub fn user(&self, username: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Add a user record.
    ///
    /// Usernames are unique; inserting an existing name fails with
    /// [`Error::DuplicateUsername`].
    pub fn insert_user(&mut self, username: &str, salt: String, password: String) -> Result<()> {
        if self.user(username).is_some() {
            return Err(Error::DuplicateUsername(username.to_string()));
        }
        self.users.push(UserRecord {
            username: username.to_string(),
            salt,
            password,
        });
        Ok(())
    }

    /// Record a final score for a registered user.
    pub fn record_score(&mut self, username: &str, score: u32) -> Result<()> {
        if self.user(username).is_none() {
            return Err(Error::UnknownUsername(username.to_string()));
        }
        self.scores.push(ScoreRecord {
            username: username.to_string(),
            score,
        });
        Ok(())
    }

    /// The top `n` scores, highest first.
    ///
    /// Equal scores keep their recording order.
    #[must_use]
    pub fn top_scores(&self, n: usize) -> Vec<ScoreRecord> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(n);
        ranked
    }
}
