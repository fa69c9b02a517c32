//! Classifier behaviour through the registry and with custom tables.

#[cfg(test)]
mod tests {
    use langsniff::classifier::{best, ranked};
    use langsniff::{Catalog, FrequencyTable, NaiveBayes, Registry, Strategy};

    const ARGPARSE: &[u8] = b"import argparse\n\
        import sys\n\
        \n\
        def main(argv=None):\n\
        \x20   parser = argparse.ArgumentParser(description=\"demo\")\n\
        \x20   parser.add_argument(\"--verbose\", action=\"store_true\")\n\
        \x20   args = parser.parse_args(argv)\n\
        \x20   if args.verbose:\n\
        \x20       print(\"verbose\")\n\
        \x20   return 0\n\
        \n\
        if __name__ == \"__main__\":\n\
        \x20   sys.exit(main())\n";

    #[test]
    fn test_python_over_ruby() {
        let scores = langsniff::classify(ARGPARSE, &["Python", "Ruby"]);
        assert_eq!(scores.len(), 2);
        assert_eq!(best(&scores), Some("Python"));
        assert_eq!(langsniff::language_by_classifier(ARGPARSE, &["Ruby", "Python"]).language, "Python");
    }

    #[test]
    fn test_classifier_is_never_safe() {
        let detection = langsniff::language_by_classifier(ARGPARSE, &["Python"]);
        assert_eq!(detection.language, "Python");
        assert!(!detection.safe);
    }

    #[test]
    fn test_restriction_keeps_scores() {
        let all = langsniff::classify(ARGPARSE, &[]);
        let some = langsniff::classify(ARGPARSE, &["Python", "Ruby", "Perl"]);

        for (language, score) in &some {
            assert_eq!(all[language], *score);
        }

        let full_rank = ranked(&all);
        let position = |language: &str| full_rank.iter().position(|(l, _)| *l == language);
        let restricted: Vec<_> = ranked(&some).into_iter().map(|(l, _)| l).collect();
        for pair in restricted.windows(2) {
            assert!(position(pair[0]) < position(pair[1]));
        }
    }

    #[test]
    fn test_candidates_resolve_aliases() {
        let scores = langsniff::classify(ARGPARSE, &["python3", "PYTHON", "rb"]);
        assert_eq!(scores.keys().copied().collect::<Vec<_>>(), ["Python", "Ruby"]);
    }

    #[test]
    fn test_unknown_candidates() {
        assert!(langsniff::classify(ARGPARSE, &["NotALanguage"]).is_empty());
        assert!(langsniff::language_by_classifier(ARGPARSE, &["NotALanguage"]).is_unknown());
    }

    #[test]
    fn test_empty_content() {
        assert!(langsniff::classify(b"", &[]).is_empty());
        assert!(langsniff::language_by_classifier(b"", &["Python"]).is_unknown());
    }

    #[test]
    fn test_custom_classifier_ties() {
        let mut table = FrequencyTable::new();
        table.add_sample("Ruby", b"puts value");
        table.add_sample("Python", b"puts value");

        let registry =
            Registry::from_catalog_with(Catalog::builtin(), NaiveBayes::new(&table)).unwrap();

        let scores = registry.classify(b"puts value", &[]);
        assert_eq!(scores["Python"], scores["Ruby"]);
        assert_eq!(best(&scores), Some("Python"));

        let guess = registry.detect("noext", b"puts value");
        assert_eq!(guess.language, "Python");
        assert_eq!(guess.strategy, Some(Strategy::Classifier));
    }
}
