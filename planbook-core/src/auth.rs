//! User accounts and password verification.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

const SALT_LEN: usize = 16;

/// Hashing scheme for stored passwords.
pub trait PasswordEncoder {
    fn encode(&self, raw: &str) -> String;
    fn matches(&self, raw: &str, encoded: &str) -> bool;
}

/// Salted SHA-256: a random 16-byte salt hashed together with the password,
/// stored as base64(salt ‖ hash).
#[derive(Debug, Default)]
pub struct SaltedSha256;

impl PasswordEncoder for SaltedSha256 {
    fn encode(&self, raw: &str) -> String {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);

        let hash = sha256(&salt, raw);

        let mut combined = Vec::with_capacity(SALT_LEN + hash.len());
        combined.extend_from_slice(&salt);
        combined.extend_from_slice(&hash);
        BASE64.encode(combined)
    }

    fn matches(&self, raw: &str, encoded: &str) -> bool {
        let Ok(combined) = BASE64.decode(encoded) else {
            return false;
        };
        if combined.len() <= SALT_LEN {
            return false;
        }
        let (salt, stored) = combined.split_at(SALT_LEN);
        sha256(salt, raw).as_slice() == stored
    }
}

fn sha256(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub hashed_password: String,
}

/// All registered users, keyed by username.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    pub fn register(
        &mut self,
        username: &str,
        raw_password: &str,
        encoder: &dyn PasswordEncoder,
    ) -> Result<&User> {
        if username.trim().is_empty() {
            return Err(Error::validation("username", "must not be empty"));
        }
        if self.users.contains_key(username) {
            return Err(Error::Auth(format!(
                "username '{username}' is already taken"
            )));
        }

        let user = User {
            username: username.to_string(),
            hashed_password: encoder.encode(raw_password),
        };
        Ok(self.users.entry(username.to_string()).or_insert(user))
    }

    pub fn login(
        &self,
        username: &str,
        raw_password: &str,
        encoder: &dyn PasswordEncoder,
    ) -> Result<&User> {
        let user = self
            .users
            .get(username)
            .ok_or_else(|| Error::Auth(format!("unknown username '{username}'")))?;

        if !encoder.matches(raw_password, &user.hashed_password) {
            return Err(Error::Auth("wrong password".to_string()));
        }
        Ok(user)
    }

    pub fn find(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_login() {
        let mut users = UserDirectory::default();
        users.register("michel", "s3cret", &SaltedSha256).unwrap();

        let user = users.login("michel", "s3cret", &SaltedSha256).unwrap();
        assert_eq!(user.username, "michel");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let mut users = UserDirectory::default();
        users.register("michel", "s3cret", &SaltedSha256).unwrap();

        assert!(matches!(
            users.login("michel", "nope", &SaltedSha256),
            Err(Error::Auth(_))
        ));
    }

    #[test]
    fn unknown_username_is_rejected() {
        let users = UserDirectory::default();
        assert!(matches!(
            users.login("ghost", "pw", &SaltedSha256),
            Err(Error::Auth(_))
        ));
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let mut users = UserDirectory::default();
        users.register("michel", "one", &SaltedSha256).unwrap();
        assert!(matches!(
            users.register("michel", "two", &SaltedSha256),
            Err(Error::Auth(_))
        ));
    }

    #[test]
    fn blank_username_is_rejected() {
        let mut users = UserDirectory::default();
        assert!(users.register("  ", "pw", &SaltedSha256).is_err());
    }

    #[test]
    fn encoding_is_salted() {
        let encoder = SaltedSha256;
        let a = encoder.encode("same password");
        let b = encoder.encode("same password");

        assert_ne!(a, b, "Each encoding should use a fresh salt");
        assert!(encoder.matches("same password", &a));
        assert!(encoder.matches("same password", &b));
    }

    #[test]
    fn matches_rejects_garbage_hashes() {
        let encoder = SaltedSha256;
        assert!(!encoder.matches("pw", "not base64 at all!!"));
        assert!(!encoder.matches("pw", ""));
    }

    #[test]
    fn stored_hash_is_not_the_raw_password() {
        let encoder = SaltedSha256;
        let encoded = encoder.encode("hunter2");
        assert!(!encoded.contains("hunter2"));
    }
}
