//! Content heuristics for ambiguous extensions.

use super::extension::extension_of;
use super::Detection;
use crate::registry::Registry;

/// Languages of the first heuristic rule matching `content`.
///
/// Only extensions with a disambiguation block engage this strategy.
pub fn languages_by_content<'r>(
    registry: &'r Registry,
    filename: &str,
    content: &[u8],
) -> Vec<&'r str> {
    let Some(ext) = extension_of(filename) else {
        return Vec::new();
    };
    let Some(heuristics) = registry.heuristics_for(&ext) else {
        return Vec::new();
    };

    match heuristics.first_match(content) {
        Some(rule) => {
            log::debug!("{}: heuristic for {} matched {:?}", filename, ext, rule.languages());
            rule.languages().iter().map(String::as_str).collect()
        }
        None => Vec::new(),
    }
}

/// Single-answer form of [`languages_by_content`].
pub fn language_by_content<'r>(
    registry: &'r Registry,
    filename: &str,
    content: &[u8],
) -> Detection<'r> {
    Detection::from_candidates(&languages_by_content(registry, filename, content))
}
