//! Stable fingerprints for generated workspaces.

use std::path::Path;

use sha2::{Digest, Sha256};

/// Hex length of a shortened fingerprint.
const SHORT_LEN: usize = 16;

/// Accumulates components into a stable SHA256-backed fingerprint.
///
/// Each component is length-framed before hashing, so two adjacent
/// components never collide with a single concatenated one.
#[derive(Default)]
pub struct Fingerprint {
    hasher: Sha256,
}

impl Fingerprint {
    pub fn new() -> Self {
        Fingerprint {
            hasher: Sha256::new(),
        }
    }

    /// Fold a string component into the fingerprint.
    pub fn push(&mut self, component: &str) -> &mut Self {
        self.hasher.update((component.len() as u64).to_le_bytes());
        self.hasher.update(component.as_bytes());
        self
    }

    /// Fold a path component into the fingerprint.
    pub fn push_path(&mut self, path: &Path) -> &mut Self {
        self.push(&path.display().to_string())
    }

    /// The full fingerprint as lowercase hex.
    pub fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }

    /// A shortened fingerprint, long enough to tell workspaces apart.
    pub fn finish_short(self) -> String {
        let mut full = self.finish();
        full.truncate(SHORT_LEN);
        full
    }
}
