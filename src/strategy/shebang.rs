//! `#!` interpreter lines.

use super::Detection;
use crate::registry::Registry;
use lazy_static::lazy_static;
use regex::Regex;

/// Lines scanned for an `exec` re-dispatch after `#!/bin/sh`.
const EXEC_SEARCH_LINES: usize = 5;

lazy_static! {
    static ref PYTHON_VERSION: Regex = Regex::new(r"python\d\.\d+").unwrap();
    static ref EXEC_HACK: Regex = Regex::new(r"exec (\w+).+\$0.+\$@").unwrap();
}

/// Interpreter named on the first line of `content`, if it is a shebang.
///
/// `#!/usr/bin/env X` yields `X`; otherwise the last path segment of the
/// first word is used. A `#!/bin/sh` script that immediately re-executes
/// itself under another interpreter (`exec tclsh "$0" "$@"`) yields that
/// interpreter. Versioned Python names are cut at the first dot.
pub fn interpreter(content: &[u8]) -> Option<String> {
    let first_line = content.split(|&b| b == b'\n').next()?;
    let line = String::from_utf8_lossy(first_line);
    let rest = line.strip_prefix("#!")?;

    let mut words = rest.split_whitespace();
    let program = words.next()?;

    let mut interpreter = if program.contains("env") {
        words.next()?.to_string()
    } else {
        program.rsplit('/').next().unwrap_or(program).to_string()
    };

    if interpreter == "sh" {
        if let Some(exec) = exec_target(content) {
            interpreter = exec;
        }
    }

    if PYTHON_VERSION.is_match(&interpreter) {
        if let Some(dot) = interpreter.find('.') {
            interpreter.truncate(dot);
        }
    }

    (!interpreter.is_empty()).then_some(interpreter)
}

fn exec_target(content: &[u8]) -> Option<String> {
    content
        .split(|&b| b == b'\n')
        .take(EXEC_SEARCH_LINES)
        .find_map(|line| {
            let line = String::from_utf8_lossy(line);
            EXEC_HACK
                .captures(&line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
}

/// Languages registered for the shebang interpreter of `content`.
pub fn languages_by_shebang<'r>(registry: &'r Registry, content: &[u8]) -> Vec<&'r str> {
    let Some(interpreter) = interpreter(content) else {
        return Vec::new();
    };

    log::trace!("shebang interpreter: {}", interpreter);
    registry
        .interpreter_languages(&interpreter)
        .iter()
        .map(String::as_str)
        .collect()
}

/// Single-answer form of [`languages_by_shebang`].
pub fn language_by_shebang<'r>(registry: &'r Registry, content: &[u8]) -> Detection<'r> {
    Detection::from_candidates(&languages_by_shebang(registry, content))
}
