//! Detection strategies.
//!
//! Each strategy maps a file name and/or content to candidate languages
//! using only the tables held by a [`Registry`]. A strategy is *safe* when it
//! produces exactly one candidate. Strategies never fail: anything they
//! cannot make sense of yields no candidates, reported as
//! [`OTHER_LANGUAGE`](crate::OTHER_LANGUAGE).

pub mod content;
pub mod extension;
pub mod filename;
pub mod modeline;
pub mod shebang;

use crate::registry::Registry;
use crate::OTHER_LANGUAGE;
use serde::Serialize;
use std::fmt;

/// Outcome of a single-answer strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection<'a> {
    /// Detected language, or [`OTHER_LANGUAGE`].
    pub language: &'a str,
    /// True when exactly one language matched.
    pub safe: bool,
}

impl<'a> Detection<'a> {
    /// The "no answer" detection.
    pub fn unknown() -> Self {
        Self {
            language: OTHER_LANGUAGE,
            safe: false,
        }
    }

    /// First candidate, safe iff it is the only one.
    pub fn from_candidates(candidates: &[&'a str]) -> Self {
        match candidates {
            [] => Self::unknown(),
            [only] => Self {
                language: *only,
                safe: true,
            },
            [first, ..] => Self {
                language: *first,
                safe: false,
            },
        }
    }

    /// True for the "no answer" detection.
    pub fn is_unknown(&self) -> bool {
        self.language == OTHER_LANGUAGE
    }
}

/// Detection strategies, including the statistical fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Emacs or Vim modeline in the first or last lines.
    Modeline,
    /// Exact file name.
    Filename,
    /// `#!` interpreter line.
    Shebang,
    /// File extension.
    Extension,
    /// Content heuristics for ambiguous extensions.
    Content,
    /// Naive-Bayes token classifier.
    Classifier,
}

impl Strategy {
    /// Cheap strategies in precedence order; the classifier runs after them.
    pub const CASCADE: [Strategy; 5] = [
        Strategy::Modeline,
        Strategy::Filename,
        Strategy::Shebang,
        Strategy::Extension,
        Strategy::Content,
    ];

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Modeline => "modeline",
            Strategy::Filename => "filename",
            Strategy::Shebang => "shebang",
            Strategy::Extension => "extension",
            Strategy::Content => "content",
            Strategy::Classifier => "classifier",
        }
    }

    /// Candidate languages produced by this strategy.
    ///
    /// Classifier candidates are every scored language, best first.
    pub fn candidates<'r>(
        self,
        registry: &'r Registry,
        filename: &str,
        content: &[u8],
    ) -> Vec<&'r str> {
        match self {
            Strategy::Modeline => modeline::languages_by_modeline(registry, content),
            Strategy::Filename => filename::languages_by_filename(registry, filename),
            Strategy::Shebang => shebang::languages_by_shebang(registry, content),
            Strategy::Extension => extension::languages_by_extension(registry, filename),
            Strategy::Content => content::languages_by_content(registry, filename, content),
            Strategy::Classifier => {
                let scores = registry.classify(content, &[]);
                crate::classifier::ranked(&scores)
                    .into_iter()
                    .map(|(language, _)| language)
                    .collect()
            }
        }
    }

    /// Single-answer form of [`Strategy::candidates`].
    pub fn detect<'r>(self, registry: &'r Registry, filename: &str, content: &[u8]) -> Detection<'r> {
        Detection::from_candidates(&self.candidates(registry, filename, content))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_candidates() {
        assert_eq!(Detection::from_candidates(&[]), Detection::unknown());
        assert_eq!(
            Detection::from_candidates(&["Go"]),
            Detection {
                language: "Go",
                safe: true
            }
        );
        assert_eq!(
            Detection::from_candidates(&["C", "C++"]),
            Detection {
                language: "C",
                safe: false
            }
        );
    }

    #[test]
    fn test_unknown_is_never_safe() {
        let unknown = Detection::unknown();
        assert!(unknown.is_unknown());
        assert!(!unknown.safe);
    }

    #[test]
    fn test_cascade_order() {
        let names: Vec<_> = Strategy::CASCADE.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            ["modeline", "filename", "shebang", "extension", "content"]
        );
    }
}
