//! File extension lookup.

use super::filename::base_name;
use super::Detection;
use crate::registry::Registry;

/// Lowercased extension of `filename`, including the leading dot.
///
/// Only the text after the last dot counts (`foo.go.php` is `.php`). A
/// dot file such as `.bashrc` is its own extension.
pub fn extension_of(filename: &str) -> Option<String> {
    let name = base_name(filename);
    let dot = name.rfind('.')?;
    let ext = &name[dot..];
    (ext.len() > 1).then(|| ext.to_lowercase())
}

/// Languages registered for the extension of `filename`, in table order.
pub fn languages_by_extension<'r>(registry: &'r Registry, filename: &str) -> Vec<&'r str> {
    let Some(ext) = extension_of(filename) else {
        return Vec::new();
    };

    registry
        .extension_languages(&ext)
        .iter()
        .map(String::as_str)
        .collect()
}

/// Single-answer form of [`languages_by_extension`].
pub fn language_by_extension<'r>(registry: &'r Registry, filename: &str) -> Detection<'r> {
    Detection::from_candidates(&languages_by_extension(registry, filename))
}
