//! Letter signatures: the vertices of the ladder graph.
//!
//! A [`Signature`] is a word's letters sorted ascending. Anagrams share a
//! signature, so "insert or delete one letter, then rearrange" is exactly
//! "move to a signature one letter longer or shorter".

mod index;

pub use self::index::SignatureIndex;

/// Largest number of signatures an index can hold; ids are `u32`.
pub const MAX_SIGNATURES: usize = u32::MAX as usize;

use serde::{Deserialize, Serialize};

/// Dense handle of a signature inside a [`SignatureIndex`].
///
/// Ids follow ascending signature order, so identical word lists always
/// produce identical ids.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureId(u32);

impl SignatureId {
    /// Create an id from a raw position.
    ///
    /// `index` is a position in a [`SignatureIndex`], which never holds more
    /// than [`MAX_SIGNATURES`] entries.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index < MAX_SIGNATURES);
        Self(index as u32)
    }

    /// Position of this id in the index's tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SignatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Canonical sorted-letter form of a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    /// Compute the signature of a word.
    pub fn of(word: &str) -> Self {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    /// The sorted letters.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Check for the empty signature.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All distinct signatures obtained by deleting one letter occurrence.
    ///
    /// Removing a letter from a sorted sequence leaves it sorted, so every
    /// result is already canonical. Runs of the same letter produce a single
    /// deletion. A one-letter signature yields nothing; the empty signature
    /// is never a vertex.
    pub fn deletions(&self) -> Vec<Signature> {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 1 {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(chars.len());
        for i in 0..chars.len() {
            if i > 0 && chars[i] == chars[i - 1] {
                continue;
            }
            let shorter: String = chars[..i].iter().chain(&chars[i + 1..]).collect();
            out.push(Signature(shorter));
        }
        out
    }

    /// Check whether `shorter` is `self` with exactly one letter removed.
    pub fn is_single_deletion_of(&self, shorter: &Signature) -> bool {
        is_single_deletion(&self.0, &shorter.0)
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Multiset difference test on two sorted letter sequences.
///
/// True iff `longer` has exactly one more letter than `shorter` and removing
/// one occurrence from `longer` yields `shorter`. Both inputs must be sorted.
pub fn is_single_deletion(longer: &str, shorter: &str) -> bool {
    let mut long = longer.chars().peekable();
    let mut short = shorter.chars().peekable();
    let mut skipped = false;

    loop {
        match (long.peek(), short.peek()) {
            (Some(a), Some(b)) if a == b => {
                long.next();
                short.next();
            }
            (Some(_), _) => {
                if skipped {
                    return false;
                }
                skipped = true;
                long.next();
            }
            (None, Some(_)) => return false,
            (None, None) => return skipped,
        }
    }
}
