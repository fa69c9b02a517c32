//! Lookup tables and detection entry points.
//!
//! A [`Registry`] is built once from a [`Catalog`] and is read-only
//! afterwards. It owns every table the strategies consult (extension,
//! filename, interpreter and alias maps, compiled heuristics) together with
//! the statistical classifier used as a fallback.

use crate::catalog::{Catalog, LanguageType};
use crate::classifier::{self, Classifier, NaiveBayes, ScoreMap};
use crate::error::Result;
use crate::heuristics::Heuristics;
use crate::strategy::extension::extension_of;
use crate::strategy::{Detection, Strategy};
use crate::OTHER_LANGUAGE;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Languages whose files are treated as project configuration.
const CONFIGURATION_LANGUAGES: &[&str] = &["XML", "JSON", "TOML", "YAML", "INI", "SQL"];

#[derive(Debug, Clone)]
struct LanguageInfo {
    kind: LanguageType,
    auxiliary: bool,
    extensions: Vec<String>,
}

/// Result of the full detection cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guess<'a> {
    /// Detected language, or [`OTHER_LANGUAGE`].
    pub language: &'a str,
    /// Strategy that produced the answer; `None` when nothing matched.
    pub strategy: Option<Strategy>,
    /// True when a cheap strategy matched exactly one language.
    pub safe: bool,
}

/// Read-only detection tables plus the fallback classifier.
pub struct Registry {
    languages: BTreeMap<String, LanguageInfo>,
    by_extension: HashMap<String, Vec<String>>,
    by_filename: HashMap<String, Vec<String>>,
    by_interpreter: HashMap<String, Vec<String>>,
    by_alias: HashMap<String, String>,
    heuristics: Vec<Heuristics>,
    heuristics_by_extension: HashMap<String, usize>,
    classifier: Box<dyn Classifier>,
}

impl Registry {
    /// Registry over the built-in catalog and frequency table.
    ///
    /// Built on first use and shared afterwards.
    ///
    /// # Panics
    ///
    /// If the embedded catalog fails validation, which the unit tests rule
    /// out.
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| {
            Self::from_catalog(Catalog::builtin()).expect("embedded catalog is valid")
        })
    }

    /// Validate `catalog` and build a registry from it.
    ///
    /// The classifier is [`NaiveBayes`] over the built-in frequency table;
    /// use [`Registry::from_catalog_with`] to supply another one.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        Self::from_catalog_with(catalog, NaiveBayes::builtin())
    }

    /// Validate `catalog` and build a registry that falls back to
    /// `classifier`.
    pub fn from_catalog_with(
        catalog: Catalog,
        classifier: impl Classifier + 'static,
    ) -> Result<Self> {
        catalog.validate()?;

        let mut heuristics = Vec::with_capacity(catalog.disambiguations.len());
        let mut heuristics_by_extension = HashMap::new();
        for block in &catalog.disambiguations {
            let label = block.extensions.join(",");
            let compiled = Heuristics::compile(&label, &block.rules, &catalog.named_patterns)?;
            for ext in &block.extensions {
                heuristics_by_extension.insert(ext.to_lowercase(), heuristics.len());
            }
            heuristics.push(compiled);
        }

        let mut registry = Self::assemble(catalog, Box::new(classifier));
        registry.heuristics = heuristics;
        registry.heuristics_by_extension = heuristics_by_extension;
        Ok(registry)
    }

    /// Lookup tables of `catalog`, without heuristics.
    fn assemble(catalog: Catalog, classifier: Box<dyn Classifier>) -> Self {
        let mut entries = catalog.languages;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut languages = BTreeMap::new();
        let mut by_extension: HashMap<String, Vec<String>> = HashMap::new();
        let mut by_filename: HashMap<String, Vec<String>> = HashMap::new();
        let mut by_interpreter: HashMap<String, Vec<String>> = HashMap::new();
        let mut by_alias = HashMap::new();

        for entry in &entries {
            by_alias
                .entry(alias_key(&entry.name))
                .or_insert_with(|| entry.name.clone());
        }

        for entry in entries {
            for alias in &entry.aliases {
                by_alias
                    .entry(alias_key(alias))
                    .or_insert_with(|| entry.name.clone());
            }
            for ext in &entry.extensions {
                push_unique(by_extension.entry(ext.to_lowercase()).or_default(), &entry.name);
            }
            for filename in &entry.filenames {
                push_unique(by_filename.entry(filename.clone()).or_default(), &entry.name);
            }
            for interpreter in &entry.interpreters {
                push_unique(by_interpreter.entry(interpreter.clone()).or_default(), &entry.name);
            }

            languages.insert(
                entry.name,
                LanguageInfo {
                    kind: entry.kind,
                    auxiliary: entry.auxiliary,
                    extensions: entry.extensions,
                },
            );
        }

        log::debug!(
            "registry: {} languages, {} extensions, {} filenames, {} interpreters",
            languages.len(),
            by_extension.len(),
            by_filename.len(),
            by_interpreter.len()
        );

        Self {
            languages,
            by_extension,
            by_filename,
            by_interpreter,
            by_alias,
            heuristics: Vec::new(),
            heuristics_by_extension: HashMap::new(),
            classifier,
        }
    }

    /// Languages registered for an exact file name.
    pub fn filename_languages(&self, filename: &str) -> &[String] {
        lookup(&self.by_filename, filename)
    }

    /// Languages registered for a lowercased extension (with its dot).
    pub fn extension_languages(&self, extension: &str) -> &[String] {
        lookup(&self.by_extension, extension)
    }

    /// Languages registered for an interpreter name.
    pub fn interpreter_languages(&self, interpreter: &str) -> &[String] {
        lookup(&self.by_interpreter, interpreter)
    }

    /// Compiled heuristics for a lowercased extension.
    pub fn heuristics_for(&self, extension: &str) -> Option<&Heuristics> {
        self.heuristics_by_extension
            .get(extension)
            .and_then(|&index| self.heuristics.get(index))
    }

    /// Language for a name or alias.
    ///
    /// Matching ignores case, treats spaces as `_` and drops anything after
    /// a comma, so `CPP,v2` finds `C++`.
    pub fn language_by_alias(&self, alias: &str) -> Option<&str> {
        let key = alias_key(alias.split(',').next().unwrap_or_default());
        if key.is_empty() {
            return None;
        }
        self.by_alias.get(&key).map(String::as_str)
    }

    /// All language names, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Type of `language`; [`LanguageType::Unknown`] for unknown names.
    pub fn language_type(&self, language: &str) -> LanguageType {
        self.languages
            .get(language)
            .map_or(LanguageType::Unknown, |info| info.kind)
    }

    /// Extensions declared for `language`, in catalog order.
    pub fn language_extensions(&self, language: &str) -> &[String] {
        self.languages
            .get(language)
            .map_or(&[][..], |info| info.extensions.as_slice())
    }

    /// True for supporting languages such as configuration or markup formats.
    pub fn is_auxiliary_language(&self, language: &str) -> bool {
        self.languages
            .get(language)
            .is_some_and(|info| info.auxiliary)
    }

    /// True when the extension of `path` maps to a configuration language.
    pub fn is_configuration(&self, path: &str) -> bool {
        extension_of(path)
            .and_then(|ext| self.extension_languages(&ext).first())
            .is_some_and(|language| CONFIGURATION_LANGUAGES.contains(&language.as_str()))
    }

    /// Score `content` against `candidates`.
    ///
    /// Candidates are resolved through the alias table; an empty slice
    /// scores every language the classifier knows. When candidates are given
    /// but none resolve, nothing is scored.
    pub fn classify(&self, content: &[u8], candidates: &[&str]) -> ScoreMap<'_> {
        if candidates.is_empty() {
            return self.classifier.classify(content, &[]);
        }

        let mut resolved: Vec<&str> = candidates
            .iter()
            .filter_map(|candidate| self.language_by_alias(candidate))
            .collect();
        resolved.sort_unstable();
        resolved.dedup();

        if resolved.is_empty() {
            log::debug!("no classifier candidates resolved from {:?}", candidates);
            return ScoreMap::new();
        }

        self.classifier.classify(content, &resolved)
    }

    /// Best classifier language among `candidates`. Never safe.
    pub fn language_by_classifier(&self, content: &[u8], candidates: &[&str]) -> Detection<'_> {
        let scores = self.classify(content, candidates);
        match classifier::best(&scores) {
            Some(language) => Detection {
                language,
                safe: false,
            },
            None => Detection::unknown(),
        }
    }

    /// Language of a file, trying each strategy in turn.
    pub fn get_language(&self, filename: &str, content: &[u8]) -> &str {
        self.detect(filename, content).language
    }

    /// Like [`Registry::get_language`], also reporting which strategy
    /// answered.
    ///
    /// The first strategy with a single candidate wins. When none is that
    /// certain, the classifier picks among all languages.
    pub fn detect(&self, filename: &str, content: &[u8]) -> Guess<'_> {
        for strategy in Strategy::CASCADE {
            let detection = strategy.detect(self, filename, content);
            if detection.safe {
                log::debug!("{}: {} by {}", filename, detection.language, strategy);
                return Guess {
                    language: detection.language,
                    strategy: Some(strategy),
                    safe: true,
                };
            }
        }

        let scores = self.classify(content, &[]);
        match classifier::best(&scores) {
            Some(language) => {
                log::debug!("{}: {} by classifier", filename, language);
                Guess {
                    language,
                    strategy: Some(Strategy::Classifier),
                    safe: false,
                }
            }
            None => Guess {
                language: OTHER_LANGUAGE,
                strategy: None,
                safe: false,
            },
        }
    }

    /// Plausible languages of a file.
    ///
    /// A strategy with a single candidate answers outright. Otherwise the
    /// candidates of the first strategy that produced any are returned, and
    /// failing that every classifier language, best first.
    pub fn get_languages(&self, filename: &str, content: &[u8]) -> Vec<&str> {
        let mut first = Vec::new();
        for strategy in Strategy::CASCADE {
            let candidates = strategy.candidates(self, filename, content);
            if candidates.len() == 1 {
                return candidates;
            }
            if first.is_empty() {
                first = candidates;
            }
        }

        if first.is_empty() {
            first = Strategy::Classifier.candidates(self, filename, content);
        }
        first
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("languages", &self.languages.len())
            .field("extensions", &self.by_extension.len())
            .field("filenames", &self.by_filename.len())
            .field("interpreters", &self.by_interpreter.len())
            .field("aliases", &self.by_alias.len())
            .field("heuristics", &self.heuristics.len())
            .finish_non_exhaustive()
    }
}

fn alias_key(alias: &str) -> String {
    alias.trim().to_lowercase().replace(' ', "_")
}

fn push_unique(list: &mut Vec<String>, language: &str) {
    if !list.iter().any(|l| l == language) {
        list.push(language.to_string());
    }
}

fn lookup<'a>(table: &'a HashMap<String, Vec<String>>, key: &str) -> &'a [String] {
    table.get(key).map_or(&[][..], Vec::as_slice)
}
