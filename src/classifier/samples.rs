//! Training corpus compiled into the binary.

/// One labelled training file.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sample {
    pub language: &'static str,
    pub filename: &'static str,
    pub content: &'static str,
}

macro_rules! sample {
    ($language:literal, $file:literal) => {
        Sample {
            language: $language,
            filename: $file,
            content: include_str!(concat!("../../samples/", $language, "/", $file)),
        }
    };
}

pub(crate) const SAMPLES: &[Sample] = &[
    sample!("C#", "Program.cs"),
    sample!("C++", "cache.hpp"),
    sample!("C++", "shapes.cpp"),
    sample!("C", "buffer.h"),
    sample!("C", "list.c"),
    sample!("CSS", "style.css"),
    sample!("Clojure", "core.clj"),
    sample!("Common Lisp", "utils.lisp"),
    sample!("Dockerfile", "Dockerfile"),
    sample!("Elixir", "stack.ex"),
    sample!("Emacs Lisp", "init.el"),
    sample!("Erlang", "counter.erl"),
    sample!("Go", "server.go"),
    sample!("Groovy", "build.gradle"),
    sample!("HTML", "index.html"),
    sample!("Haskell", "Queue.hs"),
    sample!("JSON", "package.json"),
    sample!("Java", "Library.java"),
    sample!("JavaScript", "app.js"),
    sample!("Kotlin", "Main.kt"),
    sample!("Lua", "inventory.lua"),
    sample!("Makefile", "Makefile"),
    sample!("Markdown", "guide.md"),
    sample!("Matlab", "smooth.m"),
    sample!("OCaml", "tree.ml"),
    sample!("Objective-C", "AppDelegate.m"),
    sample!("Objective-C", "Person.h"),
    sample!("PHP", "router.php"),
    sample!("Perl", "Config.pm"),
    sample!("Perl", "report.pl"),
    sample!("Prolog", "family.pl"),
    sample!("Python", "cli.py"),
    sample!("Python", "scheduler.py"),
    sample!("R", "analysis.r"),
    sample!("Raku", "grammar.raku"),
    sample!("Ruby", "Rakefile"),
    sample!("Ruby", "account.rb"),
    sample!("Rust", "parser.rs"),
    sample!("SQL", "schema.sql"),
    sample!("Scala", "WordCount.scala"),
    sample!("Shell", "deploy.sh"),
    sample!("Swift", "Stack.swift"),
    sample!("Tcl", "server.tcl"),
    sample!("TeX", "paper.tex"),
    sample!("TypeScript", "user.ts"),
    sample!("Vim Script", "plugin.vim"),
    sample!("XML", "pom.xml"),
    sample!("YAML", "ci.yml"),
];
