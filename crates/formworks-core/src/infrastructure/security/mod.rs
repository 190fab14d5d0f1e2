//! Password hashing
//!
//! Salted SHA-256 digests stored as `salt$digest`, both halves hex-encoded.

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::ports::outbound::PasswordHasher;

const SALT_LENGTH: usize = 16;

/// Salted SHA-256 password hasher
#[derive(Default)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    fn digest(salt: &[u8], password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_LENGTH];
        rand::thread_rng().fill_bytes(&mut salt);
        format!("{}${}", hex::encode(salt), Self::digest(&salt, password))
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let Some((salt_hex, digest)) = stored.split_once('$') else {
            return false;
        };
        let Ok(salt) = hex::decode(salt_hex) else {
            return false;
        };
        Self::digest(&salt, password) == digest
    }
}
