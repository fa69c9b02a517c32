//! Compiled content heuristics.
//!
//! A catalog [`RuleSpec`] is compiled into a [`Rule`]: a language list plus a
//! [`Matcher`] tree evaluated against file content. Patterns run in
//! multi-line mode on the linear-time `regex` engine. Patterns written for
//! backtracking engines (lookaround, backreferences, atomic groups,
//! possessive quantifiers, Ruby `/.../` literals) cannot be honoured; the
//! top-level rule containing one is dropped at load time with a warning.

use crate::catalog::RuleSpec;
use crate::error::{Result, SniffError};
use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::collections::BTreeMap;
use std::fmt;

lazy_static! {
    static ref RUBY_LITERAL: Regex = Regex::new(r"^/.*/[imxo]*$").unwrap();
}

/// Condition part of a heuristic rule.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Matches unconditionally.
    Always,
    /// Matches if any pattern matches.
    Or(Vec<Regex>),
    /// Matches if any pattern of a named group matches.
    Named {
        /// Group name as declared in the catalog.
        name: String,
        /// Compiled group patterns.
        patterns: Vec<Regex>,
    },
    /// Matches if the pattern does not match.
    Not(Regex),
    /// Matches if every sub-matcher matches.
    And(Vec<Matcher>),
}

impl Matcher {
    /// Evaluate against `content`.
    pub fn matches(&self, content: &[u8]) -> bool {
        match self {
            Matcher::Always => true,
            Matcher::Or(patterns) | Matcher::Named { patterns, .. } => {
                patterns.iter().any(|re| re.is_match(content))
            }
            Matcher::Not(re) => !re.is_match(content),
            Matcher::And(matchers) => matchers.iter().all(|m| m.matches(content)),
        }
    }
}

/// A compiled heuristic rule.
#[derive(Debug, Clone)]
pub struct Rule {
    languages: Vec<String>,
    matcher: Matcher,
}

impl Rule {
    /// Languages returned when the rule matches.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// The rule's condition.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Evaluate against `content`.
    pub fn matches(&self, content: &[u8]) -> bool {
        self.matcher.matches(content)
    }
}

/// Ordered rules for one group of extensions.
#[derive(Debug, Clone, Default)]
pub struct Heuristics {
    rules: Vec<Rule>,
}

impl Heuristics {
    /// Compile the rules of one disambiguation block.
    ///
    /// Unsupported or invalid patterns drop their top-level rule. A reference
    /// to a named pattern missing from `named` is a hard error.
    pub fn compile(
        label: &str,
        specs: &[RuleSpec],
        named: &BTreeMap<String, Vec<String>>,
    ) -> Result<Self> {
        let mut rules = Vec::with_capacity(specs.len());

        for (index, spec) in specs.iter().enumerate() {
            match compile_matcher(spec, named) {
                Ok(matcher) => rules.push(Rule {
                    languages: spec.languages.clone(),
                    matcher,
                }),
                Err(Rejection::UnknownName(name)) => {
                    return Err(SniffError::UnknownNamedPattern { name });
                }
                Err(rejection) => {
                    log::warn!(
                        "dropping heuristic rule #{} for {} ({:?}): {}",
                        index,
                        label,
                        spec.languages,
                        rejection
                    );
                }
            }
        }

        Ok(Self { rules })
    }

    /// The surviving rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule matching `content`.
    pub fn first_match(&self, content: &[u8]) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(content))
    }
}

#[derive(Debug)]
enum Rejection {
    Unsupported {
        pattern: String,
        construct: &'static str,
    },
    Invalid {
        pattern: String,
        error: String,
    },
    UnknownName(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Unsupported { pattern, construct } => {
                write!(f, "pattern `{}` uses {}", pattern, construct)
            }
            Rejection::Invalid { pattern, error } => {
                write!(f, "pattern `{}` does not compile: {}", pattern, error)
            }
            Rejection::UnknownName(name) => write!(f, "unknown named pattern '{}'", name),
        }
    }
}

fn compile_matcher(
    spec: &RuleSpec,
    named: &BTreeMap<String, Vec<String>>,
) -> std::result::Result<Matcher, Rejection> {
    if !spec.and.is_empty() {
        let matchers = spec
            .and
            .iter()
            .map(|sub| compile_matcher(sub, named))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        return Ok(Matcher::And(matchers));
    }

    if !spec.pattern.is_empty() {
        return Ok(Matcher::Or(compile_patterns(&spec.pattern)?));
    }

    if let Some(name) = &spec.named_pattern {
        let patterns = named
            .get(name)
            .ok_or_else(|| Rejection::UnknownName(name.clone()))?;
        return Ok(Matcher::Named {
            name: name.clone(),
            patterns: compile_patterns(patterns)?,
        });
    }

    if let Some(pattern) = &spec.negative_pattern {
        return Ok(Matcher::Not(compile_pattern(pattern)?));
    }

    Ok(Matcher::Always)
}

fn compile_patterns(patterns: &[String]) -> std::result::Result<Vec<Regex>, Rejection> {
    patterns.iter().map(|p| compile_pattern(p)).collect()
}

fn compile_pattern(pattern: &str) -> std::result::Result<Regex, Rejection> {
    if let Some(construct) = unsupported_construct(pattern) {
        return Err(Rejection::Unsupported {
            pattern: pattern.to_string(),
            construct,
        });
    }

    Regex::new(&format!("(?m){}", pattern)).map_err(|e| Rejection::Invalid {
        pattern: pattern.to_string(),
        error: e.to_string(),
    })
}

/// Name of the first construct in `pattern` the regex engine cannot run.
pub fn unsupported_construct(pattern: &str) -> Option<&'static str> {
    if pattern.len() >= 2 && RUBY_LITERAL.is_match(pattern.as_bytes()) {
        return Some("Ruby regex literal syntax");
    }

    let bytes = pattern.as_bytes();
    let mut in_class = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                match bytes.get(i + 1) {
                    Some(b'1'..=b'9') if !in_class => return Some("a backreference"),
                    Some(b'k') if matches!(bytes.get(i + 2), Some(b'<') | Some(b'\'')) => {
                        return Some("a backreference")
                    }
                    _ => {}
                }
                i += 2;
                continue;
            }
            b'[' if !in_class => in_class = true,
            b']' if in_class => in_class = false,
            b'(' if !in_class => {
                let rest = &bytes[i + 1..];
                if rest.starts_with(b"?=") || rest.starts_with(b"?!") {
                    return Some("lookahead");
                }
                if rest.starts_with(b"?<=") || rest.starts_with(b"?<!") {
                    return Some("lookbehind");
                }
                if rest.starts_with(b"?>") {
                    return Some("an atomic group");
                }
            }
            b'*' | b'+' | b'?' | b'}' if !in_class => {
                if bytes.get(i + 1) == Some(&b'+') {
                    return Some("a possessive quantifier");
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}
