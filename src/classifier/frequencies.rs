//! Token frequency tables.
//!
//! A [`FrequencyTable`] records, for every training language, how many
//! samples it had and how often each token occurred. The built-in table is
//! computed on first use from the sample corpus embedded in the crate; other
//! tables can be built from a samples directory or loaded from JSON.

use super::samples::SAMPLES;
use crate::error::{Result, SniffError};
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN: OnceLock<FrequencyTable> = OnceLock::new();

/// Per-language token and sample counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Number of samples per language.
    pub languages: BTreeMap<String, u64>,
    /// Sum of `languages`.
    pub languages_total: u64,
    /// Token counts per language.
    pub tokens: BTreeMap<String, BTreeMap<String, u64>>,
    /// Number of tokens seen per language.
    pub language_tokens: BTreeMap<String, u64>,
    /// Sum of `language_tokens`.
    pub tokens_total: u64,
}

impl FrequencyTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table trained on the embedded sample corpus.
    pub fn builtin() -> &'static FrequencyTable {
        BUILTIN.get_or_init(|| {
            let mut table = FrequencyTable::new();
            for sample in SAMPLES {
                log::trace!("training on {}/{}", sample.language, sample.filename);
                table.add_sample(sample.language, sample.content.as_bytes());
            }
            log::debug!(
                "built-in frequency table: {} languages, {} samples, {} tokens",
                table.languages.len(),
                table.languages_total,
                table.tokens_total
            );
            table
        })
    }

    /// Record one training sample.
    pub fn add_sample(&mut self, language: &str, content: &[u8]) {
        *self.languages.entry(language.to_string()).or_insert(0) += 1;
        self.languages_total += 1;

        let counts = self.tokens.entry(language.to_string()).or_default();
        let tokens = tokenize(content);
        for token in &tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }

        let seen = tokens.len() as u64;
        *self.language_tokens.entry(language.to_string()).or_insert(0) += seen;
        self.tokens_total += seen;
    }

    /// Train on a directory laid out as `<root>/<Language>/<sample files>`.
    ///
    /// Hidden files and sub-directories of language directories are skipped.
    pub fn from_samples_dir(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(SniffError::io(
                root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            ));
        }

        let pattern = format!("{}/*/*", glob::Pattern::escape(&root.to_string_lossy()));
        let paths = glob::glob(&pattern).map_err(|e| SniffError::Glob {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;

        let mut table = FrequencyTable::new();
        for entry in paths {
            let path = entry.map_err(|e| SniffError::Glob {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            if !path.is_file() || crate::files::is_dot_file(&path.to_string_lossy()) {
                continue;
            }

            let Some(language) = path
                .parent()
                .and_then(|dir| dir.file_name())
                .and_then(|name| name.to_str())
            else {
                continue;
            };

            let content = std::fs::read(&path).map_err(|e| SniffError::io(&path, e))?;
            table.add_sample(language, &content);
        }

        Ok(table)
    }

    /// Load a table from JSON and check its totals.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| SniffError::io(path, e))?;
        let table: FrequencyTable = serde_json::from_str(&json)?;
        table.validate()?;
        Ok(table)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every total equals the sum of its parts.
    pub fn validate(&self) -> Result<()> {
        let samples: u64 = self.languages.values().sum();
        if samples != self.languages_total {
            return Err(SniffError::InvalidFrequencies {
                message: format!(
                    "languages_total is {} but samples add up to {}",
                    self.languages_total, samples
                ),
            });
        }

        for (language, counts) in &self.tokens {
            let seen: u64 = counts.values().sum();
            let recorded = self.language_tokens.get(language).copied().unwrap_or(0);
            if seen != recorded {
                return Err(SniffError::InvalidFrequencies {
                    message: format!(
                        "language_tokens[{}] is {} but token counts add up to {}",
                        language, recorded, seen
                    ),
                });
            }
            if !self.languages.contains_key(language) {
                return Err(SniffError::InvalidFrequencies {
                    message: format!("tokens recorded for '{}' which has no samples", language),
                });
            }
        }

        let tokens: u64 = self.language_tokens.values().sum();
        if tokens != self.tokens_total {
            return Err(SniffError::InvalidFrequencies {
                message: format!(
                    "tokens_total is {} but language_tokens add up to {}",
                    self.tokens_total, tokens
                ),
            });
        }

        Ok(())
    }

    /// Trained language names, sorted.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}
