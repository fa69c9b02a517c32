//! Langsniff: programming language detection for source files.
//!
//! A file's language is found by a cascade of cheap strategies (modeline,
//! file name, shebang, extension, content heuristics) backed by a naive-Bayes
//! token classifier when none of them is conclusive.
//!
//! The free functions in this crate use the built-in [`Registry`]. Build a
//! registry from your own [`Catalog`] to change the tables.
//!
//! ```
//! assert_eq!(langsniff::get_language("main.rs", b"fn main() {}"), "Rust");
//! assert_eq!(langsniff::get_language("Dockerfile", b""), "Dockerfile");
//! ```

#![warn(missing_docs)]
// env_logger is used by src/main.rs (binary), not this library
#![expect(unused_crate_dependencies)]

pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod files;
pub mod heuristics;
pub mod registry;
pub mod strategy;
pub mod summary;
pub mod tokenizer;

/// Re-export common error types for convenience.
pub use error::{Result, SniffError};

pub use catalog::{Catalog, LanguageType};
pub use classifier::{Classifier, FrequencyTable, NaiveBayes, ScoreMap};
pub use files::{
    is_binary, is_documentation, is_dot_file, is_generated, is_image, is_test, is_vendor,
};
pub use registry::{Guess, Registry};
pub use strategy::{Detection, Strategy};
pub use tokenizer::tokenize;

/// Language reported when nothing matched.
pub const OTHER_LANGUAGE: &str = "Other";

/// Langsniff version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language of a file from its name and content.
pub fn get_language(filename: &str, content: &[u8]) -> &'static str {
    Registry::builtin().get_language(filename, content)
}

/// Language of a file plus the strategy that found it.
pub fn detect(filename: &str, content: &[u8]) -> Guess<'static> {
    Registry::builtin().detect(filename, content)
}

/// Plausible languages of a file.
pub fn get_languages(filename: &str, content: &[u8]) -> Vec<&'static str> {
    Registry::builtin().get_languages(filename, content)
}

/// Language named by an Emacs or Vim modeline.
pub fn language_by_modeline(content: &[u8]) -> Detection<'static> {
    strategy::modeline::language_by_modeline(Registry::builtin(), content)
}

/// Languages named by an Emacs or Vim modeline.
pub fn languages_by_modeline(content: &[u8]) -> Vec<&'static str> {
    strategy::modeline::languages_by_modeline(Registry::builtin(), content)
}

/// Language named by an Emacs `-*- ... -*-` modeline.
pub fn language_by_emacs_modeline(content: &[u8]) -> Detection<'static> {
    strategy::modeline::language_by_emacs_modeline(Registry::builtin(), content)
}

/// Language named by a Vim modeline.
pub fn language_by_vim_modeline(content: &[u8]) -> Detection<'static> {
    strategy::modeline::language_by_vim_modeline(Registry::builtin(), content)
}

/// Language registered for an exact file name.
pub fn language_by_filename(filename: &str) -> Detection<'static> {
    strategy::filename::language_by_filename(Registry::builtin(), filename)
}

/// Languages registered for an exact file name.
pub fn languages_by_filename(filename: &str) -> Vec<&'static str> {
    strategy::filename::languages_by_filename(Registry::builtin(), filename)
}

/// Language of the `#!` interpreter.
pub fn language_by_shebang(content: &[u8]) -> Detection<'static> {
    strategy::shebang::language_by_shebang(Registry::builtin(), content)
}

/// Languages of the `#!` interpreter.
pub fn languages_by_shebang(content: &[u8]) -> Vec<&'static str> {
    strategy::shebang::languages_by_shebang(Registry::builtin(), content)
}

/// Language registered for the file extension.
pub fn language_by_extension(filename: &str) -> Detection<'static> {
    strategy::extension::language_by_extension(Registry::builtin(), filename)
}

/// Languages registered for the file extension.
pub fn languages_by_extension(filename: &str) -> Vec<&'static str> {
    strategy::extension::languages_by_extension(Registry::builtin(), filename)
}

/// Language chosen by the content heuristics of the file extension.
pub fn language_by_content(filename: &str, content: &[u8]) -> Detection<'static> {
    strategy::content::language_by_content(Registry::builtin(), filename, content)
}

/// Languages chosen by the content heuristics of the file extension.
pub fn languages_by_content(filename: &str, content: &[u8]) -> Vec<&'static str> {
    strategy::content::languages_by_content(Registry::builtin(), filename, content)
}

/// Classifier scores of `content` for `candidates` (all languages when empty).
pub fn classify(content: &[u8], candidates: &[&str]) -> ScoreMap<'static> {
    Registry::builtin().classify(content, candidates)
}

/// Best classifier language among `candidates`.
pub fn language_by_classifier(content: &[u8], candidates: &[&str]) -> Detection<'static> {
    Registry::builtin().language_by_classifier(content, candidates)
}

/// Language for a name or alias such as `cpp` or `golang`.
pub fn language_by_alias(alias: &str) -> Option<&'static str> {
    Registry::builtin().language_by_alias(alias)
}

/// Type of a language.
pub fn language_type(language: &str) -> LanguageType {
    Registry::builtin().language_type(language)
}

/// Extensions declared for a language.
pub fn language_extensions(language: &str) -> &'static [String] {
    Registry::builtin().language_extensions(language)
}

/// True for supporting languages such as configuration formats.
pub fn is_auxiliary_language(language: &str) -> bool {
    Registry::builtin().is_auxiliary_language(language)
}

/// True when the extension of `path` maps to a configuration language.
pub fn is_configuration(path: &str) -> bool {
    Registry::builtin().is_configuration(path)
}
