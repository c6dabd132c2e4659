//! Word list loading and normalization.
//!
//! A word list is a newline-delimited UTF-8 text source, one word per line.
//! Every word passes through a [`NormalizationConfig`] before it reaches the
//! signature index, so the case-folding and alphabet policy is decided in
//! exactly one place and applied identically to dictionary words and query
//! words.
//!
//! # Policy
//!
//! - Surrounding whitespace is trimmed and blank lines are ignored.
//! - The accepted alphabet is ASCII letters.
//! - [`CaseFolding::Lowercase`] (the default) lowercases every word, so
//!   `Lead` and `lead` are the same word. [`CaseFolding::Preserve`] keeps
//!   case, making `A` and `a` distinct letters.
//! - Words with characters outside the alphabet are dropped under
//!   [`InvalidWordPolicy::Skip`] (the default) or fail the load under
//!   [`InvalidWordPolicy::Reject`].
//!
//! # Example
//!
//! ```rust,ignore
//! use word_ladder::dictionary::{NormalizationConfig, WordList};
//!
//! let words = WordList::from_reader("lead\nlad\nload\n".as_bytes(), &NormalizationConfig::default())?;
//! assert_eq!(words.len(), 3);
//! ```

mod fingerprint;

pub use self::fingerprint::Fingerprint;

use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How letter case is treated when loading and querying words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum CaseFolding {
    /// Lowercase every word before indexing.
    #[default]
    Lowercase,
    /// Keep words exactly as written.
    Preserve,
}

/// What to do with a word containing characters outside the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum InvalidWordPolicy {
    /// Drop the word and keep loading.
    #[default]
    Skip,
    /// Abort the load with [`WordListError::InvalidWord`].
    Reject,
}

impl std::fmt::Display for CaseFolding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lowercase => write!(f, "lowercase"),
            Self::Preserve => write!(f, "preserve"),
        }
    }
}

impl std::fmt::Display for InvalidWordPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Normalization settings shared by the word list and every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Case handling
    pub case_folding: CaseFolding,
    /// Handling of words outside the alphabet
    pub invalid_words: InvalidWordPolicy,
}

impl NormalizationConfig {
    /// Create a configuration from its two policies.
    pub fn new(case_folding: CaseFolding, invalid_words: InvalidWordPolicy) -> Self {
        Self {
            case_folding,
            invalid_words,
        }
    }

    /// Normalize a single word.
    ///
    /// Returns `None` if the word is empty after trimming or contains a
    /// character outside the ASCII alphabet.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let word = raw.trim();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(match self.case_folding {
            CaseFolding::Lowercase => word.to_ascii_lowercase(),
            CaseFolding::Preserve => word.to_string(),
        })
    }

    /// Stable byte tag mixed into the source fingerprint.
    pub(crate) fn tag(&self) -> [u8; 2] {
        let case = match self.case_folding {
            CaseFolding::Lowercase => b'l',
            CaseFolding::Preserve => b'p',
        };
        let invalid = match self.invalid_words {
            InvalidWordPolicy::Skip => b's',
            InvalidWordPolicy::Reject => b'r',
        };
        [case, invalid]
    }
}

/// Errors raised while loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// The word list could not be read
    #[error("I/O error reading word list")]
    Io(#[from] std::io::Error),
    /// A word was rejected under [`InvalidWordPolicy::Reject`]
    #[error("invalid word {word:?} on line {line}")]
    InvalidWord {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        word: String,
    },
}

/// A loaded, normalized, deduplicated word list.
#[derive(Debug, Clone)]
pub struct WordList {
    words: BTreeSet<String>,
    config: NormalizationConfig,
    fingerprint: Fingerprint,
    skipped: usize,
}

impl WordList {
    /// Load a word list from a file.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        config: &NormalizationConfig,
    ) -> Result<Self, WordListError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading word list");
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes, config)
    }

    /// Load a word list from any reader.
    pub fn from_reader<R: Read>(
        mut reader: R,
        config: &NormalizationConfig,
    ) -> Result<Self, WordListError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes, config)
    }

    /// Build a word list from in-memory words, e.g. in tests.
    ///
    /// The fingerprint is computed over the words joined by newlines, so it
    /// matches loading the same words from a file.
    pub fn from_words<I, S>(words: I, config: &NormalizationConfig) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for word in words {
            text.push_str(word.as_ref());
            text.push('\n');
        }
        Self::from_bytes(text.as_bytes(), config)
    }

    fn from_bytes(bytes: &[u8], config: &NormalizationConfig) -> Result<Self, WordListError> {
        let fingerprint = Fingerprint::of_source(bytes, config);
        let text = std::str::from_utf8(bytes).map_err(|e| {
            WordListError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        let mut words = BTreeSet::new();
        let mut skipped = 0;

        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match config.normalize(line) {
                Some(word) => {
                    words.insert(word);
                }
                None => match config.invalid_words {
                    InvalidWordPolicy::Skip => skipped += 1,
                    InvalidWordPolicy::Reject => {
                        return Err(WordListError::InvalidWord {
                            line: i + 1,
                            word: line.trim().to_string(),
                        });
                    }
                },
            }
        }

        if skipped > 0 {
            warn!(skipped, "skipped words with characters outside the alphabet");
        }
        debug!(words = words.len(), %fingerprint, "word list loaded");

        Ok(Self {
            words,
            config: *config,
            fingerprint,
            skipped,
        })
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a normalized word is present.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over the words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Normalization settings the list was loaded with.
    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    /// Fingerprint of the raw source and settings.
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Number of lines dropped under [`InvalidWordPolicy::Skip`].
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
