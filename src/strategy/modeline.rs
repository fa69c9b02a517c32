//! Emacs and Vim modelines.
//!
//! Only the first and last [`SEARCH_SCOPE`] lines are inspected, so a
//! modeline-looking string in the middle of a large file is ignored.

use super::Detection;
use crate::registry::Registry;
use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::borrow::Cow;

/// Number of lines inspected at each end of the content.
pub const SEARCH_SCOPE: usize = 5;

lazy_static! {
    static ref EMACS_MODELINE: Regex = Regex::new(r"(?-u).*-\*-\s*(.+?)\s*-\*-.*(?m:$)").unwrap();
    static ref EMACS_LANG: Regex = Regex::new(r"(?-u).*(?i:mode)\s*:\s*([^\s;]+)\s*;*.*").unwrap();
    static ref VIM_MODELINE: Regex =
        Regex::new(r"(?-u)(?:(?m:\s|^)vi(?:m[<=>]?\d+|m)?|[\t\x20]*ex)\s*[:]\s*(.*)(?m:$)").unwrap();
    static ref VIM_LANG: Regex = Regex::new(r"(?-u)(?i:filetype|ft|syntax)\s*=(\w+)(?:\s|:|$)").unwrap();
}

/// Languages named by a modeline near either end of `content`.
///
/// The Emacs form is tried first, then the Vim form.
pub fn languages_by_modeline<'r>(registry: &'r Registry, content: &[u8]) -> Vec<&'r str> {
    let window = header_and_footer(content);

    let languages = languages_by_emacs_modeline(registry, &window);
    if !languages.is_empty() {
        return languages;
    }

    languages_by_vim_modeline(registry, &window)
}

/// Language named by a modeline near either end of `content`.
pub fn language_by_modeline<'r>(registry: &'r Registry, content: &[u8]) -> Detection<'r> {
    Detection::from_candidates(&languages_by_modeline(registry, content))
}

/// Language named by the last `-*- ... -*-` line of `content`.
///
/// The value of a `mode:` key is used when present, otherwise the whole text
/// between the markers. The name is resolved through the alias table.
pub fn languages_by_emacs_modeline<'r>(registry: &'r Registry, content: &[u8]) -> Vec<&'r str> {
    let Some(line) = EMACS_MODELINE
        .captures_iter(content)
        .last()
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    let line = line.as_bytes();
    let alias = EMACS_LANG
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or(line, |m| m.as_bytes());

    resolve(registry, alias)
}

/// Single-answer form of [`languages_by_emacs_modeline`].
pub fn language_by_emacs_modeline<'r>(registry: &'r Registry, content: &[u8]) -> Detection<'r> {
    Detection::from_candidates(&languages_by_emacs_modeline(registry, content))
}

/// Language named by the last `vim:`/`vi:`/`ex:` modeline of `content`.
///
/// Every `filetype=`, `ft=` and `syntax=` on that line must agree.
pub fn languages_by_vim_modeline<'r>(registry: &'r Registry, content: &[u8]) -> Vec<&'r str> {
    let Some(line) = VIM_MODELINE
        .captures_iter(content)
        .last()
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    let values: Vec<&[u8]> = VIM_LANG
        .captures_iter(line.as_bytes())
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_bytes())
        .collect();

    let Some((first, rest)) = values.split_first() else {
        return Vec::new();
    };

    if rest.iter().any(|value| value != first) {
        log::debug!(
            "vim modeline disagrees on filetype: {:?}",
            values
                .iter()
                .map(|v| String::from_utf8_lossy(v))
                .collect::<Vec<_>>()
        );
        return Vec::new();
    }

    resolve(registry, first)
}

/// Single-answer form of [`languages_by_vim_modeline`].
pub fn language_by_vim_modeline<'r>(registry: &'r Registry, content: &[u8]) -> Detection<'r> {
    Detection::from_candidates(&languages_by_vim_modeline(registry, content))
}

fn resolve<'r>(registry: &'r Registry, alias: &[u8]) -> Vec<&'r str> {
    let alias = String::from_utf8_lossy(alias);
    registry.language_by_alias(&alias).into_iter().collect()
}

/// First and last [`SEARCH_SCOPE`] lines joined by a newline, or the whole
/// content when it is short.
pub(crate) fn header_and_footer(content: &[u8]) -> Cow<'_, [u8]> {
    let newlines = content.iter().filter(|&&b| b == b'\n').count();
    if newlines < 2 * SEARCH_SCOPE {
        return Cow::Borrowed(content);
    }

    let lines: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
    let head = &lines[..SEARCH_SCOPE];
    let foot = &lines[lines.len() - SEARCH_SCOPE..];

    let mut window = head.join(&b'\n');
    window.push(b'\n');
    window.extend_from_slice(&foot.join(&b'\n'));
    Cow::Owned(window)
}
