use std::fmt;

use sha2::{Digest, Sha256};

/// Identity of an external caller (an account, a session key, a test signer).
///
/// The game never trusts an identity passed as an ordinary argument; actors
/// reach the engine only through [`CallerContext`](crate::engine::CallerContext).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable 64-bit key: the first eight bytes (big-endian) of SHA-256 over the identity.
    pub fn key(&self) -> u64 {
        let digest = Sha256::digest(self.0.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(bytes)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ActorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_stable_and_distinct() {
        let alice = ActorId::from("alice");
        assert_eq!(alice.key(), ActorId::new("alice").key());
        assert_ne!(alice.key(), ActorId::from("bob").key());
    }

    #[test]
    fn key_matches_sha256_prefix() {
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(ActorId::from("abc").key(), 0xba7816bf8f01cfea);
        assert_eq!(hex::encode(ActorId::from("abc").key().to_be_bytes()), "ba7816bf8f01cfea");
    }
}
