use anyhow::{Context, Result, bail};
use receipts_core::DEFAULT_CATEGORIES;
use receipts_ingest::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::state::receipts_home;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub llm: LlmSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSection {
    pub model: String,
    pub base_url: String,
    /// Sampling seed sent with every request; omit for none.
    pub seed: Option<i64>,
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Categories the model is asked to choose from.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub chart_path: PathBuf,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            model: "gpt-4.1-mini".to_string(),
            base_url: "https://api.openai.com".to_string(),
            seed: Some(43),
            timeout_secs: 120,
            api_key_env: "OPENAI_API_KEY".to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            chart_path: PathBuf::from("expenses_by_category.svg"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(receipts_home()?.join("config.toml"))
}

/// Load `explicit` if given (must exist), otherwise `~/.receipts/config.toml`
/// if present, otherwise defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

impl Config {
    /// Build the extractor config, reading the API key through `lookup`
    /// (the process environment in `main`).
    pub fn extractor_config(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ExtractorConfig> {
        let var = &self.llm.api_key_env;
        let api_key = match lookup(var) {
            Some(k) if !k.trim().is_empty() => k.trim().to_string(),
            _ => bail!("{var} is not set; export it or add it to .env"),
        };

        Ok(ExtractorConfig {
            api_key,
            model: self.llm.model.clone(),
            base_url: self.llm.base_url.clone(),
            seed: self.llm.seed,
            timeout: Duration::from_secs(self.llm.timeout_secs),
            categories: self.llm.categories.clone(),
        })
    }
}
