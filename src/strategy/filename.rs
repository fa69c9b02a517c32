//! Exact file name lookup.

use super::Detection;
use crate::registry::Registry;
use std::path::Path;

/// Final path component of `filename`, or the input itself.
pub(crate) fn base_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename)
}

/// Languages registered for the exact (case-sensitive) file name.
pub fn languages_by_filename<'r>(registry: &'r Registry, filename: &str) -> Vec<&'r str> {
    registry
        .filename_languages(base_name(filename))
        .iter()
        .map(String::as_str)
        .collect()
}

/// Single-answer form of [`languages_by_filename`].
pub fn language_by_filename<'r>(registry: &'r Registry, filename: &str) -> Detection<'r> {
    Detection::from_candidates(&languages_by_filename(registry, filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("src/lib/Makefile"), "Makefile");
        assert_eq!(base_name(".bashrc"), ".bashrc");
        assert_eq!(base_name("Dockerfile"), "Dockerfile");
        assert_eq!(base_name(""), "");
    }
}
