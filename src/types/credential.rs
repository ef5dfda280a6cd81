//! Provider credentials.

use std::fmt;

use serde::Deserialize;
use sha2::{Digest, Sha256};

/// An opaque API secret for one provider.
///
/// Held in memory only. `Debug` never prints the secret.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

/// SHA-256 digest of a credential, used as a cache key so the secret
/// itself is not duplicated into long-lived structures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CredentialFingerprint([u8; 32]);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into().trim().to_string())
    }

    /// A credential with no secret.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw secret, for building request headers or query strings.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn fingerprint(&self) -> CredentialFingerprint {
        CredentialFingerprint(Sha256::digest(self.0.as_bytes()).into())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}
