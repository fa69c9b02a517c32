//! Statistical fallback classifier.
//!
//! When no cheap strategy is conclusive, content is scored against a
//! token frequency table with a multinomial naive-Bayes model:
//!
//! ```text
//! score(L) = ln(samples(L) / samples_total) + Σ ln P(token | L)
//! ```
//!
//! where `P(token | L) = count(L, token) / tokens(L)` for tokens seen in the
//! training samples of `L`, and `1 / tokens_total` otherwise. Only the
//! relative order of scores is meaningful.

mod frequencies;
mod samples;

pub use frequencies::FrequencyTable;

use crate::tokenizer::tokenize;
use std::collections::{BTreeMap, HashMap};

/// Language name to log-probability score, ordered by name.
pub type ScoreMap<'a> = BTreeMap<&'a str, f64>;

/// Scores content against a set of candidate languages.
pub trait Classifier: Send + Sync {
    /// Score `content` for each candidate.
    ///
    /// An empty `candidates` slice means every language the classifier
    /// knows. Candidates it does not know are left out of the result. Empty
    /// content yields an empty map.
    fn classify(&self, content: &[u8], candidates: &[&str]) -> ScoreMap<'_>;
}

/// Multinomial naive-Bayes classifier over a [`FrequencyTable`].
#[derive(Debug, Clone)]
pub struct NaiveBayes {
    priors: BTreeMap<String, f64>,
    token_log_probs: HashMap<String, HashMap<String, f64>>,
    unseen_log_prob: f64,
}

impl NaiveBayes {
    /// Precompute log-probabilities from `table`.
    pub fn new(table: &FrequencyTable) -> Self {
        let samples_total = table.languages_total.max(1) as f64;
        let priors = table
            .languages
            .iter()
            .map(|(language, &samples)| (language.clone(), (samples as f64 / samples_total).ln()))
            .collect();

        let token_log_probs = table
            .tokens
            .iter()
            .map(|(language, counts)| {
                let total = table.language_tokens.get(language).copied().unwrap_or(0).max(1) as f64;
                let probs = counts
                    .iter()
                    .map(|(token, &count)| (token.clone(), (count as f64 / total).ln()))
                    .collect();
                (language.clone(), probs)
            })
            .collect();

        Self {
            priors,
            token_log_probs,
            unseen_log_prob: (1.0 / table.tokens_total.max(1) as f64).ln(),
        }
    }

    /// Classifier over the built-in frequency table.
    pub fn builtin() -> Self {
        Self::new(FrequencyTable::builtin())
    }

    /// Languages this classifier can score, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.priors.keys().map(String::as_str)
    }

    fn token_log_prob(&self, language: &str, token: &str) -> f64 {
        self.token_log_probs
            .get(language)
            .and_then(|probs| probs.get(token))
            .copied()
            .unwrap_or(self.unseen_log_prob)
    }

    fn score(&self, prior: f64, language: &str, tokens: &[String]) -> f64 {
        tokens
            .iter()
            .fold(prior, |acc, token| acc + self.token_log_prob(language, token))
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Classifier for NaiveBayes {
    fn classify(&self, content: &[u8], candidates: &[&str]) -> ScoreMap<'_> {
        if content.is_empty() {
            return ScoreMap::new();
        }

        let languages: Vec<(&str, f64)> = if candidates.is_empty() {
            self.priors
                .iter()
                .map(|(language, &prior)| (language.as_str(), prior))
                .collect()
        } else {
            candidates
                .iter()
                .filter_map(|candidate| self.priors.get_key_value(*candidate))
                .map(|(language, &prior)| (language.as_str(), prior))
                .collect()
        };

        let tokens = tokenize(content);
        log::trace!(
            "classifying {} tokens against {} languages",
            tokens.len(),
            languages.len()
        );

        languages
            .into_iter()
            .map(|(language, prior)| (language, self.score(prior, language, &tokens)))
            .collect()
    }
}

/// Scores sorted best first; equal scores are ordered by language name.
pub fn ranked<'a>(scores: &ScoreMap<'a>) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<(&'a str, f64)> = scores.iter().map(|(&l, &s)| (l, s)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

/// Highest scoring language; ties go to the lexicographically smallest name.
pub fn best<'a>(scores: &ScoreMap<'a>) -> Option<&'a str> {
    scores
        .iter()
        .fold(None::<(&'a str, f64)>, |best, (&language, &score)| match best {
            Some((_, top)) if top >= score => best,
            _ => Some((language, score)),
        })
        .map(|(language, _)| language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FrequencyTable {
        let mut table = FrequencyTable::new();
        table.add_sample("Go", b"package main\nfunc main() {}\n");
        table.add_sample("Go", b"package util\nfunc helper() int { return 1 }\n");
        table.add_sample("Python", b"def main():\n    pass\n");
        table.add_sample("Shell", b"echo hi\nfi\n");
        table
    }

    #[test]
    fn test_empty_content_scores_nothing() {
        let nb = NaiveBayes::new(&table());
        assert!(nb.classify(b"", &[]).is_empty());
        assert!(nb.classify(b"", &["Go"]).is_empty());
    }

    #[test]
    fn test_empty_candidates_scores_everything() {
        let nb = NaiveBayes::new(&table());
        let scores = nb.classify(b"package main", &[]);
        assert_eq!(scores.keys().copied().collect::<Vec<_>>(), ["Go", "Python", "Shell"]);
        assert_eq!(best(&scores), Some("Go"));
    }

    #[test]
    fn test_unknown_candidates_are_skipped() {
        let nb = NaiveBayes::new(&table());
        let scores = nb.classify(b"package main", &["Python", "Cobol"]);
        assert_eq!(scores.keys().copied().collect::<Vec<_>>(), ["Python"]);
    }

    #[test]
    fn test_score_formula() {
        let table = table();
        let nb = NaiveBayes::new(&table);
        let scores = nb.classify(b"def nothing", &["Python"]);

        let prior = (1.0f64 / 4.0).ln();
        let python_tokens = table.language_tokens["Python"] as f64;
        let def = (1.0 / python_tokens).ln();
        let unseen = (1.0 / table.tokens_total as f64).ln();
        let expected = prior + def + unseen;

        assert!((scores["Python"] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let mut table = FrequencyTable::new();
        table.add_sample("Zeta", b"alpha");
        table.add_sample("Alpha", b"alpha");
        let nb = NaiveBayes::new(&table);
        let scores = nb.classify(b"alpha beta", &[]);

        assert_eq!(scores["Alpha"], scores["Zeta"]);
        assert_eq!(best(&scores), Some("Alpha"));
        assert_eq!(ranked(&scores)[0].0, "Alpha");
    }

    #[test]
    fn test_ranked_orders_best_first() {
        let scores: ScoreMap = [("A", -3.0), ("B", -1.0), ("C", -2.0)].into_iter().collect();
        let order: Vec<_> = ranked(&scores).into_iter().map(|(l, _)| l).collect();
        assert_eq!(order, ["B", "C", "A"]);
        assert_eq!(best(&ScoreMap::new()), None);
    }
}
