//! Catalog shipped with the crate.

use super::LanguageType::{Data, Markup, Programming, Prose};
use super::{Catalog, Disambiguation, LanguageEntry, RuleSpec};
use std::collections::BTreeMap;

pub(super) fn catalog() -> Catalog {
    Catalog {
        languages: languages(),
        disambiguations: disambiguations(),
        named_patterns: named_patterns(),
    }
}

fn languages() -> Vec<LanguageEntry> {
    vec![
        LanguageEntry::new("AMPL", Programming).extensions(&[".ampl", ".mod"]),
        LanguageEntry::new("Apex", Programming).extensions(&[".cls", ".trigger"]),
        LanguageEntry::new("Awk", Programming)
            .auxiliary()
            .extensions(&[".awk", ".auk", ".gawk", ".mawk", ".nawk"])
            .interpreters(&["awk", "gawk", "mawk", "nawk"]),
        LanguageEntry::new("Batchfile", Programming)
            .auxiliary()
            .aliases(&["bat", "batch", "dosbatch", "winbatch"])
            .extensions(&[".bat", ".cmd"]),
        LanguageEntry::new("C", Programming)
            .extensions(&[".c", ".cats", ".h", ".idc"])
            .interpreters(&["tcc"]),
        LanguageEntry::new("C#", Programming)
            .aliases(&["csharp", "cake", "cakescript"])
            .extensions(&[".cs", ".cake", ".csx"]),
        LanguageEntry::new("C++", Programming)
            .aliases(&["cpp"])
            .extensions(&[
                ".cpp", ".c++", ".cc", ".cp", ".cxx", ".h", ".h++", ".hh", ".hpp", ".hxx",
                ".inl", ".ipp", ".tcc", ".tpp",
            ]),
        LanguageEntry::new("CMake", Programming)
            .auxiliary()
            .extensions(&[".cmake"])
            .filenames(&["CMakeLists.txt"]),
        LanguageEntry::new("CSS", Markup).auxiliary().extensions(&[".css"]),
        LanguageEntry::new("Clojure", Programming)
            .extensions(&[".clj", ".boot", ".cl2", ".cljc", ".cljs", ".cljx"])
            .filenames(&["riemann.config"]),
        LanguageEntry::new("Common Lisp", Programming)
            .aliases(&["lisp"])
            .extensions(&[".lisp", ".asd", ".cl", ".l", ".lsp", ".ny", ".podsl", ".sexp"])
            .interpreters(&["ccl", "clisp", "ecl", "lisp", "sbcl"]),
        LanguageEntry::new("Cool", Programming).extensions(&[".cl"]),
        LanguageEntry::new("D", Programming)
            .aliases(&["Dlang"])
            .extensions(&[".d", ".di"]),
        LanguageEntry::new("DTrace", Programming)
            .aliases(&["dtrace-script"])
            .extensions(&[".d"])
            .interpreters(&["dtrace"]),
        LanguageEntry::new("Dart", Programming)
            .extensions(&[".dart"])
            .interpreters(&["dart"]),
        LanguageEntry::new("Diff", Data)
            .auxiliary()
            .aliases(&["udiff"])
            .extensions(&[".diff", ".patch"]),
        LanguageEntry::new("Dockerfile", Programming)
            .aliases(&["Containerfile"])
            .extensions(&[".dockerfile"])
            .filenames(&["Containerfile", "Dockerfile"]),
        LanguageEntry::new("Elixir", Programming)
            .extensions(&[".ex", ".exs"])
            .filenames(&["mix.lock"])
            .interpreters(&["elixir"]),
        LanguageEntry::new("Emacs Lisp", Programming)
            .aliases(&["elisp", "emacs"])
            .extensions(&[".el", ".emacs"])
            .filenames(&[".emacs", ".emacs.desktop", ".gnus", ".spacemacs", ".viper"]),
        LanguageEntry::new("Erlang", Programming)
            .extensions(&[".erl", ".escript", ".hrl", ".xrl", ".yrl"])
            .filenames(&["Emakefile", "rebar.config", "rebar.lock"])
            .interpreters(&["escript"]),
        LanguageEntry::new("F#", Programming)
            .aliases(&["fsharp"])
            .extensions(&[".fs", ".fsi", ".fsx"]),
        LanguageEntry::new("Filterscript", Programming).extensions(&[".fs"]),
        LanguageEntry::new("Forth", Programming)
            .extensions(&[".fth", ".4th", ".f", ".for", ".forth", ".fr", ".frt", ".fs"]),
        LanguageEntry::new("GCC Machine Description", Programming).extensions(&[".md"]),
        LanguageEntry::new("GLSL", Programming).extensions(&[
            ".glsl", ".fp", ".frag", ".frg", ".fs", ".fsh", ".geom", ".glslv", ".shader",
            ".vert", ".vrx", ".vsh",
        ]),
        LanguageEntry::new("Go", Programming)
            .aliases(&["golang"])
            .extensions(&[".go"]),
        LanguageEntry::new("Groovy", Programming)
            .extensions(&[".groovy", ".gradle", ".grt", ".gtpl", ".gvy"])
            .filenames(&["Jenkinsfile"])
            .interpreters(&["groovy"]),
        LanguageEntry::new("HTML", Markup)
            .auxiliary()
            .aliases(&["xhtml"])
            .extensions(&[".html", ".htm", ".inc", ".st", ".xht", ".xhtml"]),
        LanguageEntry::new("Hack", Programming).extensions(&[".hh", ".hhi", ".php"]),
        LanguageEntry::new("Haskell", Programming)
            .extensions(&[".hs", ".hsc"])
            .interpreters(&["runghc", "runhaskell", "runhugs"]),
        LanguageEntry::new("INI", Data)
            .auxiliary()
            .aliases(&["dosini"])
            .extensions(&[".ini", ".cfg", ".lektorproject", ".prefs", ".pro", ".properties"])
            .filenames(&[".editorconfig", ".gitconfig", "buildozer.spec"]),
        LanguageEntry::new("JSON", Data)
            .auxiliary()
            .aliases(&["geojson", "jsonl", "topojson"])
            .extensions(&[".json", ".avsc", ".geojson", ".gltf", ".JSON-tmLanguage", ".jsonl", ".tfstate", ".topojson", ".webmanifest"])
            .filenames(&[".arcconfig", ".htmlhintrc", ".tern-config", ".tern-project", "composer.lock", "mcmod.info"]),
        LanguageEntry::new("Java", Programming).extensions(&[".java"]),
        LanguageEntry::new("JavaScript", Programming)
            .aliases(&["js", "node"])
            .extensions(&[
                ".js", "._js", ".bones", ".cjs", ".es6", ".jake", ".jsb", ".jscad", ".jsfl",
                ".jsm", ".jss", ".jsx", ".mjs", ".njs", ".pac", ".sjs", ".ssjs", ".xsjs",
                ".xsjslib",
            ])
            .filenames(&["Jakefile"])
            .interpreters(&["chakra", "d8", "gjs", "js", "node", "nodejs", "qjs", "rhino", "v8", "v8-shell"]),
        LanguageEntry::new("Kotlin", Programming).extensions(&[".kt", ".ktm", ".kts"]),
        LanguageEntry::new("Linux Kernel Module", Data).extensions(&[".mod"]),
        LanguageEntry::new("Lua", Programming)
            .extensions(&[".lua", ".fcgi", ".nse", ".p8", ".pd_lua", ".rbxs", ".rockspec", ".wlua"])
            .interpreters(&["lua"]),
        LanguageEntry::new("MAXScript", Programming).extensions(&[".ms", ".mcr"]),
        LanguageEntry::new("Makefile", Programming)
            .aliases(&["bsdmake", "make", "mf"])
            .extensions(&[".mak", ".d", ".make", ".mk", ".mkfile"])
            .filenames(&[
                "BSDmakefile", "GNUmakefile", "Kbuild", "Makefile", "Makefile.am",
                "Makefile.boot", "Makefile.frag", "Makefile.in", "Makefile.inc",
                "Makefile.wat", "makefile", "makefile.sco", "mkfile",
            ])
            .interpreters(&["make"]),
        LanguageEntry::new("Markdown", Prose)
            .auxiliary()
            .aliases(&["md", "pandoc"])
            .extensions(&[
                ".md", ".livemd", ".markdown", ".mdown", ".mdwn", ".mkd", ".mkdn", ".mkdown",
                ".ronn", ".workbook",
            ])
            .filenames(&["contents.lr"]),
        LanguageEntry::new("Matlab", Programming)
            .aliases(&["octave"])
            .extensions(&[".matlab", ".m"]),
        LanguageEntry::new("Mercury", Programming)
            .extensions(&[".m", ".moo"])
            .interpreters(&["mmi"]),
        LanguageEntry::new("Modula-2", Programming).extensions(&[".mod"]),
        LanguageEntry::new("NewLisp", Programming)
            .extensions(&[".nl", ".lisp", ".lsp"])
            .interpreters(&["newlisp"]),
        LanguageEntry::new("OCaml", Programming)
            .extensions(&[".ml", ".eliom", ".eliomi", ".ml4", ".mli", ".mll", ".mly"])
            .interpreters(&["ocaml", "ocamlrun", "ocamlscript"]),
        LanguageEntry::new("Objective-C", Programming)
            .aliases(&["obj-c", "objc", "objectivec"])
            .extensions(&[".m", ".h"]),
        LanguageEntry::new("OpenCL", Programming).extensions(&[".cl", ".opencl"]),
        LanguageEntry::new("PHP", Programming)
            .aliases(&["inc"])
            .extensions(&[
                ".php", ".aw", ".ctp", ".fcgi", ".inc", ".php3", ".php4", ".php5", ".phps",
                ".phpt",
            ])
            .filenames(&[".php", ".php_cs", ".php_cs.dist", "Phakefile"])
            .interpreters(&["php"]),
        LanguageEntry::new("PLSQL", Programming).extensions(&[
            ".pls", ".bdy", ".ddl", ".fnc", ".pck", ".pkb", ".pks", ".plb", ".plsql", ".prc",
            ".spc", ".sql", ".tpb", ".tps", ".trg", ".vw",
        ]),
        LanguageEntry::new("PLpgSQL", Programming).extensions(&[".pgsql", ".sql"]),
        LanguageEntry::new("Perl", Programming)
            .aliases(&["cperl"])
            .extensions(&[
                ".pl", ".al", ".cgi", ".fcgi", ".perl", ".ph", ".plx", ".pm", ".psgi", ".t",
            ])
            .filenames(&["Makefile.PL", "Rexfile", "ack", "cpanfile"])
            .interpreters(&["cperl", "perl"]),
        LanguageEntry::new("PowerShell", Programming)
            .aliases(&["posh", "pwsh"])
            .extensions(&[".ps1", ".psd1", ".psm1"])
            .interpreters(&["pwsh"]),
        LanguageEntry::new("Prolog", Programming)
            .extensions(&[".pl", ".plt", ".pro", ".prolog", ".yap"])
            .interpreters(&["swipl", "yap"]),
        LanguageEntry::new("Python", Programming)
            .aliases(&["python3", "rusthon"])
            .extensions(&[
                ".py", ".cgi", ".fcgi", ".gyp", ".gypi", ".lmi", ".py3", ".pyde", ".pyi",
                ".pyp", ".pyt", ".pyw", ".rpy", ".spec", ".tac", ".wsgi", ".xpy",
            ])
            .filenames(&[".gclient", "DEPS", "SConscript", "SConstruct", "wscript"])
            .interpreters(&["python", "python2", "python3", "py", "pypy", "pypy3"]),
        LanguageEntry::new("R", Programming)
            .aliases(&["Rscript", "splus"])
            .extensions(&[".r", ".rd", ".rsx"])
            .filenames(&[".Rprofile", "expr-dist"])
            .interpreters(&["Rscript"]),
        LanguageEntry::new("Raku", Programming)
            .aliases(&["perl6", "perl-6"])
            .extensions(&[
                ".6pl", ".6pm", ".nqp", ".p6", ".p6l", ".p6m", ".pl", ".pl6", ".pm", ".pm6",
                ".raku", ".rakumod", ".t",
            ])
            .interpreters(&["perl6", "raku", "rakudo"]),
        LanguageEntry::new("Rebol", Programming).extensions(&[".reb", ".r", ".r2", ".r3", ".rebol"]),
        LanguageEntry::new("RenderScript", Programming).extensions(&[".rs", ".rsh"]),
        LanguageEntry::new("Roff", Markup)
            .aliases(&["groff", "man", "manpage", "nroff", "troff"])
            .extensions(&[
                ".roff", ".1", ".1in", ".1m", ".1x", ".2", ".3", ".4", ".5", ".6", ".7", ".8",
                ".9", ".man", ".mdoc", ".me", ".ms", ".n", ".nr", ".rno", ".tmac",
            ])
            .filenames(&["eqnrc", "mmn", "mmt", "troffrc", "troffrc-end"]),
        LanguageEntry::new("Ruby", Programming)
            .aliases(&["jruby", "macruby", "rake", "rb", "rbx"])
            .extensions(&[
                ".rb", ".builder", ".eye", ".gemspec", ".god", ".jbuilder", ".mspec", ".podspec",
                ".rabl", ".rake", ".rbi", ".rbuild", ".rbw", ".rbx", ".ru", ".ruby", ".thor",
                ".watchr",
            ])
            .filenames(&[
                ".irbrc", ".pryrc", "Appraisals", "Berksfile", "Brewfile", "Buildfile",
                "Capfile", "Dangerfile", "Deliverfile", "Fastfile", "Gemfile", "Guardfile",
                "Jarfile", "Mavenfile", "Podfile", "Puppetfile", "Rakefile", "Snapfile",
                "Thorfile", "Vagrantfile", "buildfile",
            ])
            .interpreters(&["jruby", "macruby", "rake", "rbx", "ruby"]),
        LanguageEntry::new("Rust", Programming)
            .aliases(&["rs"])
            .extensions(&[".rs"]),
        LanguageEntry::new("SQL", Data)
            .auxiliary()
            .extensions(&[
                ".sql", ".cql", ".ddl", ".inc", ".mysql", ".prc", ".tab", ".udf", ".viw",
            ]),
        LanguageEntry::new("SQLPL", Programming).extensions(&[".sql", ".db2"]),
        LanguageEntry::new("Scala", Programming)
            .extensions(&[".scala", ".kojo", ".sbt", ".sc"])
            .interpreters(&["scala"]),
        LanguageEntry::new("Shell", Programming)
            .aliases(&["sh", "shell-script", "bash", "zsh"])
            .extensions(&[
                ".sh", ".bash", ".bats", ".cgi", ".command", ".env", ".fcgi", ".ksh",
                ".tmux", ".tool", ".zsh", ".zsh-theme",
            ])
            .filenames(&[
                ".bash_aliases", ".bash_history", ".bash_logout", ".bash_profile", ".bashrc",
                ".cshrc", ".env", ".env.example", ".flaskenv", ".kshrc", ".login", ".profile",
                ".zlogin", ".zlogout", ".zprofile", ".zshenv", ".zshrc", "9fs", "PKGBUILD",
                "bash_aliases", "bash_logout", "bash_profile", "bashrc", "cshrc", "gradlew",
                "kshrc", "login", "man", "profile", "zlogin", "zlogout", "zprofile", "zshenv",
                "zshrc",
            ])
            .interpreters(&["ash", "bash", "dash", "ksh", "mksh", "pdksh", "rc", "sh", "zsh"]),
        LanguageEntry::new("Smalltalk", Programming)
            .aliases(&["squeak"])
            .extensions(&[".st", ".cs"]),
        LanguageEntry::new("Standard ML", Programming)
            .aliases(&["sml"])
            .extensions(&[".ml", ".fun", ".sig", ".sml"]),
        LanguageEntry::new("SuperCollider", Programming)
            .extensions(&[".sc", ".scd"])
            .interpreters(&["sclang", "scsynth"]),
        LanguageEntry::new("Swift", Programming).extensions(&[".swift"]),
        LanguageEntry::new("TOML", Data)
            .auxiliary()
            .extensions(&[".toml"])
            .filenames(&["Cargo.lock", "Gopkg.lock", "Pipfile", "poetry.lock"]),
        LanguageEntry::new("Tcl", Programming)
            .extensions(&[".tcl", ".adp", ".tm"])
            .filenames(&["owh", "starfield"])
            .interpreters(&["tclsh", "wish"]),
        LanguageEntry::new("TeX", Markup)
            .auxiliary()
            .aliases(&["latex"])
            .extensions(&[
                ".tex", ".aux", ".bbx", ".cbx", ".cls", ".dtx", ".ins", ".lbx", ".ltx", ".mkii",
                ".mkiv", ".mkvi", ".sty", ".toc",
            ]),
        LanguageEntry::new("Text", Prose)
            .auxiliary()
            .aliases(&["fundamental", "plain text"])
            .extensions(&[".txt", ".fr", ".nb", ".ncl", ".no"])
            .filenames(&[
                "CITATION", "CITATIONS", "COPYING", "COPYING.regex", "COPYRIGHT.regex",
                "FONTLOG", "INSTALL", "INSTALL.mysql", "LICENSE", "LICENSE.mysql", "NEWS",
                "README.me", "README.mysql", "README.nss", "click.me", "delete.me",
                "keep.me", "package.mask", "package.use.mask", "package.use.stable.mask",
                "read.me", "readme.1st", "test.me", "use.mask", "use.stable.mask",
            ]),
        LanguageEntry::new("TypeScript", Programming)
            .aliases(&["ts"])
            .extensions(&[".ts", ".cts", ".mts", ".tsx"])
            .interpreters(&["deno", "ts-node"]),
        LanguageEntry::new("Unix Assembly", Programming).extensions(&[".s", ".ms"]),
        LanguageEntry::new("Vim Script", Programming)
            .aliases(&["vim", "viml", "nvim", "vimscript"])
            .extensions(&[".vim", ".vba", ".vimrc", ".vmb"])
            .filenames(&[".exrc", ".gvimrc", ".nvimrc", ".vimrc", "_vimrc", "gvimrc", "nvimrc", "vimrc"]),
        LanguageEntry::new("XML", Data)
            .auxiliary()
            .aliases(&["rss", "wsdl", "xsd"])
            .extensions(&[
                ".xml", ".adml", ".admx", ".ant", ".axml", ".builds", ".ccproj", ".ccxml",
                ".clixml", ".cproject", ".csl", ".csproj", ".ct", ".dita", ".ditamap",
                ".ditaval", ".filters", ".fsproj", ".fxml", ".glade", ".gml", ".iml", ".ivy",
                ".jelly", ".kml", ".launch", ".mdpolicy", ".mod", ".mxml", ".nproj", ".nuspec",
                ".odd", ".osm", ".pkgproj", ".plist", ".props", ".ps1xml", ".psc1", ".pt",
                ".rdf", ".resx", ".rss", ".sch", ".scxml", ".sfproj", ".srdf", ".storyboard",
                ".targets", ".tml", ".ts", ".tsx", ".ui", ".urdf", ".ux", ".vbproj",
                ".vcxproj", ".vsixmanifest", ".vssettings", ".vstemplate", ".vxml", ".wixproj",
                ".wsdl", ".wsf", ".wxi", ".wxl", ".wxs", ".x3d", ".xacro", ".xaml", ".xib",
                ".xlf", ".xliff", ".xmi", ".xmp", ".xproj", ".xsd", ".xul", ".zcml",
            ])
            .filenames(&[".classpath", ".cproject", ".project", "App.config", "NuGet.config", "Settings.StyleCop", "Web.Debug.config", "Web.Release.config", "Web.config", "packages.config"]),
        LanguageEntry::new("YAML", Data)
            .auxiliary()
            .aliases(&["yml"])
            .extensions(&[
                ".yml", ".mir", ".reek", ".rviz", ".sublime-syntax", ".syntax", ".yaml",
                ".yaml-tmlanguage",
            ])
            .filenames(&[".clang-format", ".clang-tidy", ".gemrc", "glide.lock", "yarn.lock"]),
        LanguageEntry::new("Zig", Programming).extensions(&[".zig"]),
    ]
}

fn disambiguations() -> Vec<Disambiguation> {
    vec![
        Disambiguation::new(
            &[".cl"],
            vec![
                RuleSpec::pattern(&["Common Lisp"], &[r"(?i)^\s*\((defun|in-package|defpackage) "]),
                RuleSpec::pattern(&["Cool"], &[r"^class"]),
                RuleSpec::pattern(&["OpenCL"], &[r"/\* |// |^\}"]),
            ],
        ),
        Disambiguation::new(&[".cls"], vec![RuleSpec::pattern(&["TeX"], &[r"\\\w+\{"])]),
        Disambiguation::new(
            &[".cs"],
            vec![
                RuleSpec::pattern(&["Smalltalk"], &[r"![\w\s]+methodsFor: "]),
                RuleSpec::pattern(&["C#"], &[r"^\s*namespace\s*[\w\.]+\s*\{", r"^\s*//"]),
            ],
        ),
        Disambiguation::new(
            &[".d"],
            vec![
                RuleSpec::pattern(
                    &["D"],
                    &[r"^module\s+[\w.]*\s*;|import\s+[\w\s,.:]*;|\w+\s+\w+\s*\(.*\)(?:\(.*\))?\s*\{[^}]*\}|unittest\s*(?:\(.*\))?\s*\{[^}]*\}"],
                ),
                RuleSpec::pattern(
                    &["DTrace"],
                    &[r"^(\w+:\w*:\w*:\w*|BEGIN|END|provider\s+|(tick|profile)-\w+\s+\{[^}]*\}|#pragma\s+D\s+(option|attributes|depends_on)\s|#pragma\s+ident\s)"],
                ),
                RuleSpec::pattern(
                    &["Makefile"],
                    &[r"([/\\].*:\s+.*\s\\$|: \\$|^ : |^[\w\s/\\.]+\w+\.\w+\s*:\s+[\w\s/\\.]+\w+\.\w+)"],
                ),
            ],
        ),
        Disambiguation::new(
            &[".fs"],
            vec![
                RuleSpec::pattern(&["Forth"], &[r"^(: |new-device)"]),
                RuleSpec::pattern(&["F#"], &[r"^\s*(#light|import|let|module|namespace|open|type)"]),
                RuleSpec::pattern(&["GLSL"], &[r"^\s*(#version|precision|uniform|varying|vec[234])"]),
                RuleSpec::pattern(&["Filterscript"], &[r"#include|#pragma\s+(rs|version)|__attribute__"]),
            ],
        ),
        Disambiguation::new(
            &[".h"],
            vec![
                RuleSpec::named_pattern(&["Objective-C"], "objectivec"),
                RuleSpec::named_pattern(&["C++"], "cpp"),
            ],
        ),
        Disambiguation::new(
            &[".lisp", ".lsp"],
            vec![
                RuleSpec::pattern(&["Common Lisp"], &[r"(?i)^\s*\((defun|in-package|defpackage) "]),
                RuleSpec::pattern(&["NewLisp"], &[r"^\s*\(define "]),
            ],
        ),
        Disambiguation::new(
            &[".m"],
            vec![
                RuleSpec::named_pattern(&["Objective-C"], "objectivec"),
                RuleSpec::pattern(&["Mercury"], &[r":- module"]),
                RuleSpec::pattern(&["Matlab"], &[r"^\s*%"]),
            ],
        ),
        Disambiguation::new(
            &[".md"],
            vec![
                RuleSpec::pattern(&["Markdown"], &[r"(^[-A-Za-z0-9=#!\*\[|>])|</", r"\A\z"]),
                RuleSpec::pattern(&["GCC Machine Description"], &[r"^(;;|\(define_)"]),
                RuleSpec::always(&["Markdown"]),
            ],
        ),
        Disambiguation::new(
            &[".ml"],
            vec![
                RuleSpec::pattern(&["OCaml"], &[r"(^\s*module)|let rec |match\s+(\S+\s)+with"]),
                RuleSpec::pattern(&["Standard ML"], &[r"=> |case\s+(\S+\s)+of"]),
            ],
        ),
        Disambiguation::new(
            &[".mod"],
            vec![
                RuleSpec::pattern(&["XML"], &[r"<!ENTITY "]),
                RuleSpec::pattern(
                    &["Modula-2"],
                    &[r"(?i)^\s*MODULE [\w\.]+;", r"(?i)^\s*END [\w\.]+;"],
                ),
                RuleSpec::always(&["Linux Kernel Module", "AMPL"]),
            ],
        ),
        Disambiguation::new(
            &[".ms"],
            vec![
                RuleSpec::pattern(&["Roff"], &[r"^[.'][A-Za-z]{2}(\s|$)"]),
                RuleSpec::and(
                    &["Unix Assembly"],
                    vec![
                        RuleSpec::negative_pattern(&[], r"/\*"),
                        RuleSpec::pattern(
                            &[],
                            &[r"^\s*\.(?:include\s|globa?l\s|[A-Za-z][_A-Za-z0-9]*:)"],
                        ),
                    ],
                ),
                RuleSpec::always(&["MAXScript"]),
            ],
        ),
        Disambiguation::new(
            &[".php"],
            vec![
                RuleSpec::pattern(&["Hack"], &[r"<\?hh"]),
                RuleSpec::pattern(&["PHP"], &[r"<\?[^h]"]),
            ],
        ),
        Disambiguation::new(
            &[".pl"],
            vec![
                RuleSpec::pattern(&["Prolog"], &[r"^[^#]*:-"]),
                RuleSpec::named_pattern(&["Perl"], "perl5"),
                RuleSpec::named_pattern(&["Raku"], "perl6"),
            ],
        ),
        Disambiguation::new(
            &[".pm", ".t"],
            vec![
                RuleSpec::named_pattern(&["Perl"], "perl5"),
                RuleSpec::named_pattern(&["Raku"], "perl6"),
            ],
        ),
        Disambiguation::new(
            &[".r"],
            vec![
                RuleSpec::pattern(&["Rebol"], &[r"(?i)\bRebol\b"]),
                RuleSpec::pattern(&["R"], &[r"<-|^\s*#"]),
            ],
        ),
        Disambiguation::new(
            &[".rs"],
            vec![
                RuleSpec::pattern(&["Rust"], &[r"^(use |fn |mod |pub |macro_rules|impl|#!?\[)"]),
                RuleSpec::pattern(&["RenderScript"], &[r"#include|#pragma\s+(rs|version)|__attribute__"]),
            ],
        ),
        Disambiguation::new(
            &[".sc"],
            vec![
                RuleSpec::pattern(
                    &["SuperCollider"],
                    &[r"\^(this|super)\.", r"^\s*(\+|\*)\s*\w+\s*\{", r"^\s*~\w+\s*=\."],
                ),
                RuleSpec::pattern(
                    &["Scala"],
                    &[r"^\s*import (scala|java)\.", r"^\s*val\s+\w+\s*=", r"^\s*class\b"],
                ),
            ],
        ),
        Disambiguation::new(
            &[".sql"],
            vec![
                RuleSpec::pattern(
                    &["PLpgSQL"],
                    &[
                        r"(?i)^\\i\b|AS \$\$|LANGUAGE '?plpgsql'?",
                        r"(?i)SECURITY (DEFINER|INVOKER)",
                        r"(?i)BEGIN( WORK| TRANSACTION)?;",
                    ],
                ),
                RuleSpec::pattern(
                    &["SQLPL"],
                    &[
                        r"(?i)(alter module)|(language sql)|(begin( NOT)+ atomic)",
                        r"(?i)signal SQLSTATE '[0-9]+'",
                    ],
                ),
                RuleSpec::pattern(
                    &["PLSQL"],
                    &[
                        r"(?i)\$\$PLSQL_|XMLTYPE|sysdate|systimestamp|\.nextval|connect by|AUTHID (DEFINER|CURRENT_USER)",
                        r"(?i)constructor\W+function",
                    ],
                ),
                RuleSpec::negative_pattern(&["SQL"], r"(?i)\b(begin|boolean|package|exception)\b"),
            ],
        ),
        Disambiguation::new(
            &[".ts"],
            vec![
                RuleSpec::pattern(&["XML"], &[r"<TS\b"]),
                RuleSpec::always(&["TypeScript"]),
            ],
        ),
        Disambiguation::new(
            &[".tsx"],
            vec![
                RuleSpec::pattern(&["XML"], &[r"(?i)^\s*<\?xml\s+version"]),
                RuleSpec::always(&["TypeScript"]),
            ],
        ),
    ]
}

fn named_patterns() -> BTreeMap<String, Vec<String>> {
    let groups: [(&str, &[&str]); 4] = [
        (
            "cpp",
            &[
                r"^\s*#\s*include <(cstdint|string|vector|map|list|array|bitset|queue|stack|forward_list|unordered_map|unordered_set|(i|o|io)stream)>",
                r"^\s*template\s*<",
                r"^[ \t]*try",
                r"^[ \t]*catch\s*\(",
                r"^[ \t]*(class|(using[ \t]+)?namespace)\s+\w+",
                r"^[ \t]*(private|public|protected):$",
                r"std::\w+",
            ],
        ),
        (
            "objectivec",
            &[r#"^\s*(@(interface|class|protocol|property|end|synchronised|selector|implementation)\b|#import\s+.+\.h[">])"#],
        ),
        ("perl5", &[r"\buse\s+(?:strict\b|v?5\.)"]),
        ("perl6", &[r"^\s*(?:use\s+v6\b|\bmodule\b|\b(?:my\s+)?class\b)"]),
    ];

    groups
        .iter()
        .map(|(name, patterns)| {
            (
                name.to_string(),
                patterns.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect()
}
