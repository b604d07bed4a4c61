//! Static session tokens.
//!
//! Tokens come from configuration and are held only as SHA-256 digests.

use sha2::{Digest, Sha256};
use std::collections::HashMap;

use super::config::SessionToken;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    users_by_digest: HashMap<String, String>,
}

impl SessionStore {
    pub fn new(tokens: &[SessionToken]) -> Self {
        let users_by_digest = tokens
            .iter()
            .map(|t| (digest(&t.token), t.user_id.clone()))
            .collect();
        Self { users_by_digest }
    }

    pub fn is_empty(&self) -> bool {
        self.users_by_digest.is_empty()
    }

    /// User owning `token`, if any.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        if token.is_empty() {
            return None;
        }
        self.users_by_digest.get(&digest(token)).map(String::as_str)
    }
}

fn digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
