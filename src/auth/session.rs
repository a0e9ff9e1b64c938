//! Signup, login, and the per-session roster of active players.

use log::{debug, info};
use rustc_hash::FxHashSet;

use super::password::{
    decode_hex, encode_hex, generate_salt, hash_password, verify_password, DIGEST_LEN, SALT_LEN,
};
use crate::core::Player;
use crate::error::{Error, Result};
use crate::store::Store;

/// Usernames already seated in this session.
///
/// Constructed fresh per session so nothing leaks between games; a username
/// may hold at most one seat.
#[derive(Debug, Default)]
pub struct SessionRoster {
    active: FxHashSet<String>,
}

impl SessionRoster {
    /// Empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a username already holds a seat.
    #[must_use]
    pub fn is_active(&self, username: &str) -> bool {
        self.active.contains(username)
    }

    /// Claim a seat for a username.
    pub fn claim(&mut self, username: &str) -> Result<()> {
        if !self.active.insert(username.to_string()) {
            return Err(Error::UsernameAlreadyActive(username.to_string()));
        }
        Ok(())
    }
}

/// Register a new user with a freshly salted password digest.
pub fn register(store: &Store, username: &str, password: &str) -> Result<()> {
    let salt = generate_salt();
    let digest = hash_password(password, &salt);
    store.transaction(|doc| doc.insert_user(username, encode_hex(&salt), encode_hex(&digest)))?;
    info!("registered user `{username}`");
    Ok(())
}

/// Authenticate a player for this session.
///
/// The roster is consulted first: a username that already holds a seat is
/// rejected without any store I/O. Then the credential record is checked
/// ([`Error::UnknownUsername`], [`Error::WrongPassword`]); on success the
/// username is claimed and a fresh zero-score [`Player`] is returned.
pub fn login(
    store: &Store,
    roster: &mut SessionRoster,
    username: &str,
    password: &str,
) -> Result<Player> {
    if roster.is_active(username) {
        return Err(Error::UsernameAlreadyActive(username.to_string()));
    }

    let credentials = store.read(|doc| {
        doc.user(username)
            .map(|user| (user.salt.clone(), user.password.clone()))
    })?;
    let (salt_hex, digest_hex) =
        credentials.ok_or_else(|| Error::UnknownUsername(username.to_string()))?;

    let salt: [u8; SALT_LEN] = decode_hex(&salt_hex, username)?;
    let expected: [u8; DIGEST_LEN] = decode_hex(&digest_hex, username)?;
    if !verify_password(password, &salt, &expected) {
        return Err(Error::WrongPassword);
    }

    roster.claim(username)?;
    debug!("`{username}` logged in");
    Ok(Player::new(username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_claims_once() {
        let mut roster = SessionRoster::new();
        assert!(!roster.is_active("ada"));

        roster.claim("ada").unwrap();
        assert!(roster.is_active("ada"));

        let err = roster.claim("ada").unwrap_err();
        assert!(matches!(err, Error::UsernameAlreadyActive(name) if name == "ada"));
    }

    #[test]
    fn test_roster_is_per_instance() {
        let mut first = SessionRoster::new();
        first.claim("ada").unwrap();

        let second = SessionRoster::new();
        assert!(!second.is_active("ada"));
    }
}
