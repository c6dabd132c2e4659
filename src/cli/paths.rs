//! Default paths and persistent configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::args::SourceArgs;
use crate::dictionary::{CaseFolding, InvalidWordPolicy, NormalizationConfig};

/// Word list used when none is configured
pub const DEFAULT_WORD_LIST: &str = "wordList.txt";

/// Output file used when none is configured
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// File name of the graph cache inside the config directory
pub const CACHE_FILE_NAME: &str = "ladder-cache.bin.gz";

/// Get the configuration directory for word-ladder
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("word-ladder"))
}

/// Get the default graph cache path
pub fn default_cache_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join(CACHE_FILE_NAME))
}

/// Get the default config file path
fn default_config_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom_path {
        validate_config_path(&path)?;
        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(path)
    } else {
        default_config_path()
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default word list path
    pub word_list: Option<PathBuf>,
    /// Default cache path (`None` uses the config directory)
    pub cache_path: Option<PathBuf>,
    /// Default output path
    pub output_path: Option<PathBuf>,
    /// Default case folding
    pub case_folding: Option<CaseFolding>,
    /// Default handling of invalid words
    pub invalid_words: Option<InvalidWordPolicy>,
    /// Whether the graph cache is used
    pub use_cache: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from custom path
    pub fn load_from(custom_path: Option<PathBuf>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        Self::read(&path)
    }

    /// Read configuration from an exact path; a missing file yields defaults
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<PathBuf>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        self.write(&path)
    }

    /// Write configuration to an exact path
    pub fn write(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, source: &SourceArgs, output: Option<PathBuf>) -> Self {
        Self {
            word_list: source.words.clone().or_else(|| self.word_list.clone()),
            cache_path: source.cache.clone().or_else(|| self.cache_path.clone()),
            output_path: output.or_else(|| self.output_path.clone()),
            case_folding: source
                .case_sensitive
                .then_some(CaseFolding::Preserve)
                .or(self.case_folding),
            invalid_words: source
                .strict
                .then_some(InvalidWordPolicy::Reject)
                .or(self.invalid_words),
            use_cache: if source.no_cache {
                Some(false)
            } else {
                self.use_cache
            },
        }
    }

    /// Word list path, falling back to [`DEFAULT_WORD_LIST`]
    pub fn word_list_path(&self) -> PathBuf {
        self.word_list
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORD_LIST))
    }

    /// Output path, falling back to [`DEFAULT_OUTPUT`]
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Cache path, falling back to [`default_cache_path`]
    pub fn cache_path(&self) -> Result<PathBuf> {
        match &self.cache_path {
            Some(path) => Ok(path.clone()),
            None => default_cache_path(),
        }
    }

    /// Whether the cache should be used
    pub fn cache_enabled(&self) -> bool {
        self.use_cache.unwrap_or(true)
    }

    /// Normalization settings for loading and querying
    pub fn normalization(&self) -> NormalizationConfig {
        NormalizationConfig::new(
            self.case_folding.unwrap_or_default(),
            self.invalid_words.unwrap_or_default(),
        )
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            cache_path: None,
            output_path: None,
            case_folding: Some(CaseFolding::Lowercase),
            invalid_words: Some(InvalidWordPolicy::Skip),
            use_cache: Some(true),
        }
    }
}
