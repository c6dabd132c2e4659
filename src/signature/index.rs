//! Signature -> words grouping.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use tracing::warn;

use super::{Signature, SignatureId, MAX_SIGNATURES};

/// Groups dictionary words by their letter signature.
///
/// Signatures are stored in ascending order and addressed by
/// [`SignatureId`]. Each signature owns a non-empty, ordered set of words,
/// so the representative word of a signature (its lexicographically smallest
/// word) is deterministic.
///
/// Words are expected to be normalized already; see
/// [`NormalizationConfig`](crate::dictionary::NormalizationConfig) for the
/// case-folding policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureIndex {
    signatures: Vec<Signature>,
    words: Vec<BTreeSet<String>>,
}

impl SignatureIndex {
    /// Build the index in a single pass over the words.
    ///
    /// Empty words are ignored. Signatures beyond [`MAX_SIGNATURES`] (in
    /// ascending order) are dropped with a warning.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words_capped(words, MAX_SIGNATURES)
    }

    fn from_words_capped<I, S>(words: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: FxHashMap<Signature, BTreeSet<String>> = FxHashMap::default();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            groups
                .entry(Signature::of(word))
                .or_default()
                .insert(word.to_string());
        }

        let mut entries: Vec<(Signature, BTreeSet<String>)> = groups.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        if entries.len() > cap {
            let dropped: usize = entries[cap..].iter().map(|(_, w)| w.len()).sum();
            warn!(
                signatures = entries.len(),
                cap,
                dropped_words = dropped,
                "too many signatures; dropping the last in sort order"
            );
            entries.truncate(cap);
        }
        let (signatures, words) = entries.into_iter().unzip();

        Self { signatures, words }
    }

    /// Number of distinct signatures.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Check whether the index holds no signatures.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Total number of words across all signatures.
    pub fn word_count(&self) -> usize {
        self.words.iter().map(BTreeSet::len).sum()
    }

    /// Look up the id of a signature.
    pub fn id_of(&self, signature: &Signature) -> Option<SignatureId> {
        self.signatures
            .binary_search(signature)
            .ok()
            .map(SignatureId::new)
    }

    /// Look up the id of a word's signature, if the word itself is indexed.
    pub fn id_of_word(&self, word: &str) -> Option<SignatureId> {
        let id = self.id_of(&Signature::of(word))?;
        self.words[id.index()].contains(word).then_some(id)
    }

    /// Check whether the exact word is indexed.
    pub fn contains_word(&self, word: &str) -> bool {
        self.id_of_word(word).is_some()
    }

    /// Signature for an id.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this index.
    pub fn signature(&self, id: SignatureId) -> &Signature {
        &self.signatures[id.index()]
    }

    /// Words sharing the signature `id`.
    pub fn words(&self, id: SignatureId) -> &BTreeSet<String> {
        &self.words[id.index()]
    }

    /// Lexicographically smallest word of a signature.
    pub fn representative(&self, id: SignatureId) -> &str {
        // Sets are non-empty by construction
        self.words[id.index()]
            .iter()
            .next()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Iterate over `(id, signature)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (SignatureId, &Signature)> {
        self.signatures
            .iter()
            .enumerate()
            .map(|(i, s)| (SignatureId::new(i), s))
    }

    /// Iterate over all ids.
    pub fn ids(&self) -> impl Iterator<Item = SignatureId> {
        (0..self.signatures.len()).map(SignatureId::new)
    }

    /// Bucket signature ids by letter count.
    pub fn ids_by_length(&self) -> BTreeMap<usize, Vec<SignatureId>> {
        let mut buckets: BTreeMap<usize, Vec<SignatureId>> = BTreeMap::new();
        for (id, signature) in self.iter() {
            buckets.entry(signature.len()).or_default().push(id);
        }
        buckets
    }

    /// Check the structural invariants of an index restored from storage.
    ///
    /// Signatures must be strictly ascending, every signature must own at
    /// least one word, and every word must have the signature it is filed
    /// under.
    pub fn is_consistent(&self) -> bool {
        self.signatures.len() == self.words.len()
            && self.signatures.len() <= MAX_SIGNATURES
            && self.signatures.windows(2).all(|w| w[0] < w[1])
            && self
                .signatures
                .iter()
                .zip(&self.words)
                .all(|(sig, words)| {
                    !sig.is_empty()
                        && !words.is_empty()
                        && words.iter().all(|w| &Signature::of(w) == sig)
                })
    }
}
