// OrgueBot Engine: Configuration
// Scoring weights, dialogue cadence and the store location, read from a TOML
// file. Every field has a serde default, so an empty or partial file is a
// valid configuration.

use crate::atoms::constants::*;
use crate::atoms::error::{EngineError, EngineResult};
use crate::atoms::types::Topic;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Persisted store file.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// A topic must score strictly above this to be selected.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_context_bonus")]
    pub context_bonus: f64,
    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: f64,
    #[serde(default = "default_similarity_weight")]
    pub similarity_weight: f64,
    #[serde(default = "default_milestone_interval")]
    pub milestone_interval: u32,
    #[serde(default = "default_suggestion_interval")]
    pub suggestion_interval: usize,
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
    /// Per-topic keyword list overrides, keyed by topic identifier.
    #[serde(default)]
    pub keywords: BTreeMap<String, Vec<String>>,
}

fn default_store_path() -> PathBuf { PathBuf::from(DEFAULT_STORE_FILE) }
fn default_threshold() -> f64 { CLASSIFICATION_THRESHOLD }
fn default_context_bonus() -> f64 { CONTEXT_BONUS }
fn default_keyword_weight() -> f64 { KEYWORD_HIT_WEIGHT }
fn default_similarity_weight() -> f64 { SIMILARITY_WEIGHT }
fn default_milestone_interval() -> u32 { MILESTONE_INTERVAL }
fn default_suggestion_interval() -> usize { SUGGESTION_INTERVAL }
fn default_suggestion_count() -> usize { SUGGESTION_COUNT }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            threshold: default_threshold(),
            context_bonus: default_context_bonus(),
            keyword_weight: default_keyword_weight(),
            similarity_weight: default_similarity_weight(),
            milestone_interval: default_milestone_interval(),
            suggestion_interval: default_suggestion_interval(),
            suggestion_count: default_suggestion_count(),
            keywords: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(text: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        info!("[config] Loaded {:?}", path);
        Ok(config)
    }

    /// Like [`EngineConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> EngineResult<Self> {
        if !path.exists() {
            info!("[config] {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("threshold", self.threshold),
            ("context_bonus", self.context_bonus),
            ("keyword_weight", self.keyword_weight),
            ("similarity_weight", self.similarity_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Config(format!("{name} must be a non-negative number")));
            }
        }
        if self.milestone_interval == 0 {
            return Err(EngineError::Config("milestone_interval must be at least 1".into()));
        }
        if self.suggestion_interval == 0 {
            return Err(EngineError::Config("suggestion_interval must be at least 1".into()));
        }
        for id in self.keywords.keys() {
            id.parse::<Topic>().map_err(EngineError::Config)?;
        }
        Ok(())
    }

    /// Keyword overrides resolved to topics. Call after `validate`.
    pub fn keyword_overrides(&self) -> Vec<(Topic, Vec<String>)> {
        self.keywords
            .iter()
            .filter_map(|(id, words)| id.parse::<Topic>().ok().map(|t| (t, words.clone())))
            .collect()
    }
}
