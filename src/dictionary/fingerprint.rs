//! Source fingerprints for cache invalidation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::NormalizationConfig;

const DOMAIN: &[u8] = b"word-ladder:source:v1";

/// SHA-256 digest identifying a word list and the settings it was read with.
///
/// Two word lists share a fingerprint only if their raw bytes and their
/// [`NormalizationConfig`] are identical, since either one changes the
/// resulting signature graph.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Wrap a raw digest.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Digest of raw word-list bytes under the given settings.
    ///
    /// Layout: `DOMAIN || settings tag || len(source) as u64 LE || source`.
    pub fn of_source(source: &[u8], config: &NormalizationConfig) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN);
        hasher.update(config.tag());
        hasher.update((source.len() as u64).to_le_bytes());
        hasher.update(source);
        Self(hasher.finalize().into())
    }

    /// Full lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short form, like a git abbreviated hash
        for b in &self.0[..6] {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
