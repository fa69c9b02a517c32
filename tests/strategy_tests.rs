//! Strategy tests against the built-in registry.
//!
//! Each strategy is exercised on its own, through the crate-level free
//! functions, the same way callers use them.

#[cfg(test)]
mod tests {
    use langsniff::{Detection, OTHER_LANGUAGE};

    fn safe(language: &str) -> Detection<'_> {
        Detection {
            language,
            safe: true,
        }
    }

    #[test]
    fn test_filename_wins_for_known_names() {
        assert_eq!(langsniff::language_by_filename("Dockerfile"), safe("Dockerfile"));
        assert_eq!(langsniff::language_by_filename("Vagrantfile"), safe("Ruby"));
        assert_eq!(langsniff::language_by_filename(".bashrc"), safe("Shell"));
        assert_eq!(langsniff::language_by_filename("makefile"), safe("Makefile"));
        assert_eq!(langsniff::language_by_filename("project/src/Makefile"), safe("Makefile"));
    }

    #[test]
    fn test_filename_is_case_sensitive() {
        assert!(langsniff::language_by_filename("DOCKERFILE").is_unknown());
        assert!(langsniff::languages_by_filename("main.rs").is_empty());
    }

    #[test]
    fn test_unambiguous_extension_is_safe() {
        assert_eq!(langsniff::language_by_extension("main.go"), safe("Go"));
        assert_eq!(langsniff::language_by_extension("SCRIPT.PY"), safe("Python"));
        assert_eq!(langsniff::language_by_extension("lib/app.kt"), safe("Kotlin"));
    }

    #[test]
    fn test_only_last_extension_counts() {
        assert_eq!(langsniff::languages_by_extension("foo.go.php"), ["Hack", "PHP"]);
        let detection = langsniff::language_by_extension("foo.go.php");
        assert_eq!(detection.language, "Hack");
        assert!(!detection.safe);
    }

    #[test]
    fn test_shared_extension_lists_every_language() {
        assert_eq!(langsniff::languages_by_extension("x.h"), ["C", "C++", "Objective-C"]);
        assert!(langsniff::language_by_extension("no_extension").is_unknown());
    }

    #[test]
    fn test_aliases() {
        assert_eq!(langsniff::language_by_alias("c++"), Some("C++"));
        assert_eq!(langsniff::language_by_alias("C++"), Some("C++"));
        assert_eq!(langsniff::language_by_alias("CPP,v2"), Some("C++"));
        assert_eq!(langsniff::language_by_alias("golang"), Some("Go"));
        assert_eq!(langsniff::language_by_alias("Plain Text"), Some("Text"));
        assert_eq!(langsniff::language_by_alias("emacs lisp"), Some("Emacs Lisp"));
        assert_eq!(langsniff::language_by_alias("BestLanguageEver"), None);
    }

    #[test]
    fn test_shebang_env_and_versions() {
        assert_eq!(
            langsniff::language_by_shebang(b"#!/usr/bin/env python2.6\nprint 1\n"),
            safe("Python")
        );
        assert_eq!(langsniff::language_by_shebang(b"#!/bin/bash\necho hi\n"), safe("Shell"));
        assert_eq!(langsniff::language_by_shebang(b"#!/usr/bin/perl -w\n"), safe("Perl"));
        assert!(langsniff::language_by_shebang(b"#!/usr/bin/env\n").is_unknown());
        assert!(langsniff::language_by_shebang(b"#!/usr/bin/nonesuch\n").is_unknown());
        assert!(langsniff::language_by_shebang(b"print 1\n").is_unknown());
    }

    #[test]
    fn test_shebang_exec_hack() {
        let script = b"#!/bin/sh\n# restart with tclsh \\\nexec tclsh \"$0\" ${1+\"$@\"}\nputs hi\n";
        assert_eq!(langsniff::language_by_shebang(script), safe("Tcl"));
    }

    #[test]
    fn test_emacs_modeline() {
        assert_eq!(
            langsniff::language_by_modeline(b"# -*- mode: ruby -*-\nputs 1\n"),
            safe("Ruby")
        );
        assert_eq!(
            langsniff::language_by_emacs_modeline(b"/* -*- c++ -*- */\nint x;\n"),
            safe("C++")
        );
        assert!(langsniff::language_by_emacs_modeline(b"-*- mode: nonesuch -*-").is_unknown());
    }

    #[test]
    fn test_vim_modeline() {
        assert_eq!(
            langsniff::language_by_vim_modeline(b"// vim: set ft=cpp:\n"),
            safe("C++")
        );
        assert_eq!(
            langsniff::language_by_modeline(b"# vim: syntax=python ft=python filetype=python\n"),
            safe("Python")
        );
    }

    #[test]
    fn test_vim_modeline_disagreement_is_unknown() {
        let detection =
            langsniff::language_by_vim_modeline(b"# vim: syntax=ruby ft=python filetype=perl\n");
        assert_eq!(detection.language, OTHER_LANGUAGE);
        assert!(!detection.safe);
    }

    #[test]
    fn test_modeline_only_near_the_ends() {
        let mut content = String::new();
        for i in 0..15 {
            content.push_str(&format!("line {}\n", i));
        }
        content.push_str("# vim: ft=python\n");
        for i in 0..15 {
            content.push_str(&format!("line {}\n", i));
        }
        assert!(langsniff::language_by_modeline(content.as_bytes()).is_unknown());

        content.push_str("# vim: ft=python\n");
        assert_eq!(langsniff::language_by_modeline(content.as_bytes()), safe("Python"));
    }

    #[test]
    fn test_content_objective_c_beats_cpp_markers() {
        let header = b"#include <vector>\n@interface Widget : NSObject\n@end\n";
        assert_eq!(langsniff::language_by_content("Widget.h", header), safe("Objective-C"));

        let cpp = b"template <typename T>\nclass Box {};\n";
        assert_eq!(langsniff::language_by_content("box.h", cpp), safe("C++"));

        assert!(langsniff::language_by_content("plain.h", b"int x;\n").is_unknown());
    }

    #[test]
    fn test_content_and_rule_and_fallback() {
        let asm = b"  .globl main\nmain:\n  ret\n";
        assert_eq!(langsniff::language_by_content("start.ms", asm), safe("Unix Assembly"));

        let roff = b".TH LANGSNIFF 1\n.SH NAME\n";
        assert_eq!(langsniff::language_by_content("page.ms", roff), safe("Roff"));

        let maxscript = b"/* comment */\nfn area r = pi * r * r\n";
        assert_eq!(langsniff::language_by_content("area.ms", maxscript), safe("MAXScript"));
    }

    #[test]
    fn test_content_multi_language_rule_is_unsafe() {
        assert_eq!(
            langsniff::languages_by_content("module.mod", b"something\n"),
            ["Linux Kernel Module", "AMPL"]
        );
        assert!(!langsniff::language_by_content("module.mod", b"something\n").safe);
    }

    #[test]
    fn test_content_negative_pattern() {
        assert_eq!(langsniff::language_by_content("q.sql", b"SELECT 1;\n"), safe("SQL"));
        let plpgsql = b"CREATE FUNCTION f() RETURNS int AS $$ SELECT 1 $$ LANGUAGE plpgsql;\n";
        assert_eq!(langsniff::language_by_content("f.sql", plpgsql), safe("PLpgSQL"));
    }

    #[test]
    fn test_content_ignores_extensions_without_heuristics() {
        assert!(langsniff::languages_by_content("main.go", b"package main\n").is_empty());
    }

    #[test]
    fn test_strategies_are_idempotent() {
        let inputs: [(&str, &[u8]); 4] = [
            ("Widget.h", b"@interface Widget\n@end\n"),
            ("run", b"#!/usr/bin/env python3\nprint(1)\n"),
            ("a.rb", b"# vim: ft=ruby\nputs 1\n"),
            ("weird.ms", b"  .globl x\n"),
        ];

        for (filename, content) in inputs {
            assert_eq!(
                langsniff::language_by_modeline(content),
                langsniff::language_by_modeline(content)
            );
            assert_eq!(
                langsniff::language_by_filename(filename),
                langsniff::language_by_filename(filename)
            );
            assert_eq!(
                langsniff::language_by_shebang(content),
                langsniff::language_by_shebang(content)
            );
            assert_eq!(
                langsniff::language_by_extension(filename),
                langsniff::language_by_extension(filename)
            );
            assert_eq!(
                langsniff::language_by_content(filename, content),
                langsniff::language_by_content(filename, content)
            );
        }
    }

    #[test]
    fn test_safe_always_means_single_candidate() {
        let cases: [(&str, &[u8]); 3] = [
            ("x.h", b"int x;\n"),
            ("foo.go.php", b""),
            ("module.mod", b"x\n"),
        ];
        for (filename, content) in cases {
            let candidates = langsniff::languages_by_extension(filename);
            let detection = langsniff::language_by_extension(filename);
            assert_eq!(detection.safe, candidates.len() == 1);

            let candidates = langsniff::languages_by_content(filename, content);
            let detection = langsniff::language_by_content(filename, content);
            assert_eq!(detection.safe, candidates.len() == 1);
        }
    }
}
