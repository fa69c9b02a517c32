//! Language catalog.
//!
//! A [`Catalog`] is the declarative input a [`Registry`](crate::Registry) is
//! built from: every known language with its type, aliases, extensions,
//! filenames and interpreters, plus the content heuristics used to
//! disambiguate shared extensions. The crate ships a built-in catalog; an
//! alternate one can be loaded from JSON.

mod builtin;

use crate::error::{Result, SniffError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::path::Path;

/// Broad category of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageType {
    /// Type not recorded.
    #[default]
    Unknown,
    /// Data formats (JSON, YAML, CSV, ...).
    Data,
    /// Programming languages.
    Programming,
    /// Markup languages (HTML, XML, ...).
    Markup,
    /// Prose (plain text, reStructuredText, ...).
    Prose,
}

impl LanguageType {
    /// Lowercase identifier used in JSON and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageType::Unknown => "unknown",
            LanguageType::Data => "data",
            LanguageType::Programming => "programming",
            LanguageType::Markup => "markup",
            LanguageType::Prose => "prose",
        }
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One language of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Canonical language name, unique across the catalog.
    pub name: String,
    /// Language category.
    #[serde(rename = "type", default)]
    pub kind: LanguageType,
    /// Auxiliary languages are not interesting on their own (Makefile, ...).
    #[serde(default, skip_serializing_if = "is_false")]
    pub auxiliary: bool,
    /// Secondary names, matched case-insensitively.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Extensions including the leading dot (`.rs`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
    /// Exact file names (`Dockerfile`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filenames: Vec<String>,
    /// Shebang interpreters (`python3`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interpreters: Vec<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl LanguageEntry {
    /// Create an entry with no lookup keys.
    pub fn new(name: &str, kind: LanguageType) -> Self {
        Self {
            name: name.to_string(),
            kind,
            auxiliary: false,
            aliases: Vec::new(),
            extensions: Vec::new(),
            filenames: Vec::new(),
            interpreters: Vec::new(),
        }
    }

    /// Set the aliases.
    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = owned(aliases);
        self
    }

    /// Set the extensions.
    pub fn extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = owned(extensions);
        self
    }

    /// Set the exact file names.
    pub fn filenames(mut self, filenames: &[&str]) -> Self {
        self.filenames = owned(filenames);
        self
    }

    /// Set the shebang interpreters.
    pub fn interpreters(mut self, interpreters: &[&str]) -> Self {
        self.interpreters = owned(interpreters);
        self
    }

    /// Mark the language as auxiliary.
    pub fn auxiliary(mut self) -> Self {
        self.auxiliary = true;
        self
    }
}

/// A single heuristic rule as written in a catalog.
///
/// At most one matcher (`pattern`, `named_pattern`, `negative_pattern` or
/// `and`) may be set; a rule with none of them always matches. Sub-rules of
/// `and` carry no languages of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Languages returned when the rule matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    /// Matches if any pattern matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pattern: Vec<String>,
    /// Matches if any pattern of the named group matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_pattern: Option<String>,
    /// Matches if the pattern does not match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_pattern: Option<String>,
    /// Matches if every sub-rule matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub and: Vec<RuleSpec>,
}

impl RuleSpec {
    /// Unconditional rule.
    pub fn always(languages: &[&str]) -> Self {
        Self {
            languages: owned(languages),
            ..Self::default()
        }
    }

    /// Rule matching when any of `patterns` matches.
    pub fn pattern(languages: &[&str], patterns: &[&str]) -> Self {
        Self {
            languages: owned(languages),
            pattern: owned(patterns),
            ..Self::default()
        }
    }

    /// Rule matching a shared named pattern group.
    pub fn named_pattern(languages: &[&str], name: &str) -> Self {
        Self {
            languages: owned(languages),
            named_pattern: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Rule matching when `pattern` does not match.
    pub fn negative_pattern(languages: &[&str], pattern: &str) -> Self {
        Self {
            languages: owned(languages),
            negative_pattern: Some(pattern.to_string()),
            ..Self::default()
        }
    }

    /// Rule matching when every sub-rule matches.
    pub fn and(languages: &[&str], rules: Vec<RuleSpec>) -> Self {
        Self {
            languages: owned(languages),
            and: rules,
            ..Self::default()
        }
    }

    fn matcher_count(&self) -> usize {
        [
            !self.pattern.is_empty(),
            self.named_pattern.is_some(),
            self.negative_pattern.is_some(),
            !self.and.is_empty(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// Ordered heuristic rules shared by a group of extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disambiguation {
    /// Extensions (with leading dot) the rules apply to.
    pub extensions: Vec<String>,
    /// Rules, evaluated in order.
    pub rules: Vec<RuleSpec>,
}

impl Disambiguation {
    /// Create a disambiguation block.
    pub fn new(extensions: &[&str], rules: Vec<RuleSpec>) -> Self {
        Self {
            extensions: owned(extensions),
            rules,
        }
    }
}

/// Declarative description of every language known to a registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Known languages.
    pub languages: Vec<LanguageEntry>,
    /// Content heuristics keyed by extension group.
    #[serde(default)]
    pub disambiguations: Vec<Disambiguation>,
    /// Pattern groups referenced by `named_pattern` rules.
    #[serde(default)]
    pub named_patterns: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Parse a catalog from JSON text and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| SniffError::io(path, e))?;
        log::debug!("loading catalog from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Serialize the catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check structural consistency.
    ///
    /// Language names must be unique and non-empty, rules may only name
    /// known languages and set at most one matcher, named patterns must
    /// exist, and an extension may belong to one disambiguation block only.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::with_capacity(self.languages.len());
        for entry in &self.languages {
            if entry.name.trim().is_empty() {
                return Err(SniffError::InvalidCatalog {
                    message: "language with an empty name".to_string(),
                });
            }
            if !names.insert(entry.name.as_str()) {
                return Err(SniffError::InvalidCatalog {
                    message: format!("language '{}' is declared twice", entry.name),
                });
            }
        }

        let mut claimed = BTreeSet::new();
        for block in &self.disambiguations {
            for ext in &block.extensions {
                if !claimed.insert(ext.to_lowercase()) {
                    return Err(SniffError::DuplicateHeuristic {
                        extension: ext.clone(),
                    });
                }
            }
            for rule in &block.rules {
                self.validate_rule(rule, &names, true)?;
            }
        }

        Ok(())
    }

    fn validate_rule(&self, rule: &RuleSpec, names: &HashSet<&str>, top_level: bool) -> Result<()> {
        if rule.matcher_count() > 1 {
            return Err(SniffError::InvalidCatalog {
                message: format!("rule for {:?} sets more than one matcher", rule.languages),
            });
        }

        if top_level && rule.languages.is_empty() {
            return Err(SniffError::InvalidCatalog {
                message: "top-level rule without languages".to_string(),
            });
        }

        if let Some(unknown) = rule.languages.iter().find(|l| !names.contains(l.as_str())) {
            return Err(SniffError::InvalidCatalog {
                message: format!("rule names unknown language '{}'", unknown),
            });
        }

        if let Some(name) = &rule.named_pattern {
            if !self.named_patterns.contains_key(name) {
                return Err(SniffError::UnknownNamedPattern { name: name.clone() });
            }
        }

        for sub in &rule.and {
            self.validate_rule(sub, names, false)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mini() -> Catalog {
        Catalog {
            languages: vec![
                LanguageEntry::new("C", LanguageType::Programming).extensions(&[".c", ".h"]),
                LanguageEntry::new("C++", LanguageType::Programming)
                    .aliases(&["cpp"])
                    .extensions(&[".cpp", ".h"]),
            ],
            disambiguations: vec![Disambiguation::new(
                &[".h"],
                vec![
                    RuleSpec::named_pattern(&["C++"], "cpp"),
                    RuleSpec::always(&["C"]),
                ],
            )],
            named_patterns: BTreeMap::from([(
                "cpp".to_string(),
                vec![r"^\s*template\s*<".to_string()],
            )]),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_json_roundtrip_keeps_rules() {
        let catalog = mini();
        let json = catalog.to_json_pretty().unwrap();
        assert!(json.contains("\"named_pattern\": \"cpp\""));
        assert!(!json.contains("negative_pattern"));
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
    }

    #[test]
    fn test_type_defaults_to_unknown() {
        let catalog =
            Catalog::from_json_str(r#"{"languages": [{"name": "Foo"}]}"#).unwrap();
        assert_eq!(catalog.languages[0].kind, LanguageType::Unknown);
        assert!(catalog.disambiguations.is_empty());
    }

    #[test]
    fn test_duplicate_language_rejected() {
        let mut catalog = mini();
        catalog
            .languages
            .push(LanguageEntry::new("C", LanguageType::Programming));
        let err = catalog.validate().unwrap_err();
        assert_eq!(err.kind(), "InvalidCatalog");
    }

    #[test]
    fn test_unknown_named_pattern_rejected() {
        let mut catalog = mini();
        catalog.named_patterns.clear();
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, SniffError::UnknownNamedPattern { ref name } if name == "cpp"));
    }

    #[test]
    fn test_extension_in_two_blocks_rejected() {
        let mut catalog = mini();
        catalog
            .disambiguations
            .push(Disambiguation::new(&[".H"], vec![RuleSpec::always(&["C"])]));
        let err = catalog.validate().unwrap_err();
        assert_eq!(err.kind(), "DuplicateHeuristic");
    }

    #[test]
    fn test_rule_with_two_matchers_rejected() {
        let mut catalog = mini();
        let mut rule = RuleSpec::pattern(&["C"], &["x"]);
        rule.negative_pattern = Some("y".to_string());
        catalog.disambiguations[0].rules.insert(0, rule);
        assert_eq!(catalog.validate().unwrap_err().kind(), "InvalidCatalog");
    }

    #[test]
    fn test_rule_naming_unknown_language_rejected() {
        let mut catalog = mini();
        catalog.disambiguations[0]
            .rules
            .push(RuleSpec::always(&["Objective-C"]));
        assert_eq!(catalog.validate().unwrap_err().kind(), "InvalidCatalog");
    }
}
