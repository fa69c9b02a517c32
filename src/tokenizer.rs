//! Language-agnostic tokenizer.
//!
//! Produces the token stream consumed by the classifier. Extraction runs in
//! fixed phases over a private copy of the content. Most phases collect
//! their tokens and then blank what they matched, so later phases never see
//! it. Two phases leave text behind:
//!
//! - shebang lines are reported but not blanked, so the interpreter path
//!   also shows up as regular words
//! - closing an SGML tag writes `>` over the byte after its name and only
//!   that `<name>` head is blanked; the rest of the tag flows into the later
//!   phases, and the first attribute (no longer preceded by whitespace) is
//!   not reported as an attribute
//!
//! 1. shebang lines (`SHEBANG#!<interpreter>`)
//! 2. SGML tags (`<tag>`, `</tag>`, attribute names and lone values)
//! 3. string literals, comments and numbers (dropped)
//! 4. punctuation, 5. regular words, 6. operators
//! 7. every remaining non-blank character on its own

use lazy_static::lazy_static;
use regex::bytes::Regex;

/// Only the first `BYTE_LIMIT` bytes of content are tokenized.
pub const BYTE_LIMIT: usize = 100_000;

/// Tokens longer than this are dropped.
pub const MAX_TOKEN_LEN: usize = 32;

const SHEBANG_PREFIX: &str = "SHEBANG#!";

lazy_static! {
    static ref SHEBANG: Regex = Regex::new(
        r"(?m-u)^#!(?:/\w+)*/(?:(\w+)|\w+(?:\s*\w+=\w+\s*)*\s*(\w+))(?:\s*-\w+\s*)*$"
    )
    .unwrap();
    static ref SGML: Regex = Regex::new(r#"(?-u)(</?[^\s<>=\d"']+)(?:\s(?s:.)*?/?>|>)"#).unwrap();
    static ref SGML_COMMENT: Regex = Regex::new(r"(?-u)<!--(?s:.)*?-->").unwrap();
    static ref SGML_ATTRIBUTES: Regex = Regex::new(r"(?-u)\s+(\w+=)|\s+([^\s>]+)").unwrap();
    static ref SGML_LONE_ATTRIBUTE: Regex = Regex::new(r"(?-u)\w+").unwrap();
    static ref LITERAL_STRING: Regex = Regex::new(r#"(?-u)"(?s:.)*?"|'(?s:.)*?'"#).unwrap();
    static ref MULTILINE_COMMENT: Regex = Regex::new(
        r#"(?-u)/\*(?s:.)*?\*/|<!--(?s:.)*?-->|\{-(?s:.)*?-\}|\(\*(?s:.)*?\*\)|"""(?s:.)*?"""|'''(?s:.)*?'''"#
    )
    .unwrap();
    static ref SINGLE_LINE_COMMENT: Regex =
        Regex::new(r#"(?m-u)(?://|--|#|%|")\s[^\n]*$"#).unwrap();
    static ref LITERAL_NUMBER: Regex = Regex::new(
        r"(?-u)(?:0x[0-9A-Fa-f](?:[0-9A-Fa-f]|\.)*|\d(?:\d|\.)*)(?:[uU][lL]{0,2}|(?:[eE][-+]\d*)?[fFlL]*)"
    )
    .unwrap();
    static ref PUNCTUATION: Regex = Regex::new(r"[;{}()\[\]]").unwrap();
    static ref REGULAR: Regex = Regex::new(r"[0-9A-Za-z_.@#/*]+").unwrap();
    static ref OPERATORS: Regex = Regex::new(r"<<?|\+|-|\*|/|%|&&?|\|\|?").unwrap();
}

/// Split `content` into classifier tokens.
///
/// The input is never modified; a fresh vector is returned on every call.
pub fn tokenize(content: &[u8]) -> Vec<String> {
    let content = &content[..content.len().min(BYTE_LIMIT)];
    let mut tokens = Vec::with_capacity(64);

    extract_shebangs(content, &mut tokens);
    let text = extract_sgml(content, &mut tokens);
    let text = skip_comments_and_literals(text);
    let text = extract_matches(&text, &PUNCTUATION, &mut tokens);
    let text = extract_matches(&text, &REGULAR, &mut tokens);
    let text = extract_matches(&text, &OPERATORS, &mut tokens);
    extract_remainders(&text, &mut tokens);

    log::trace!("tokenized {} bytes into {} tokens", content.len(), tokens.len());
    tokens
}

fn push_token(tokens: &mut Vec<String>, token: &[u8]) {
    if !token.is_empty() && token.len() <= MAX_TOKEN_LEN {
        tokens.push(String::from_utf8_lossy(token).into_owned());
    }
}

fn blank(text: &[u8], re: &Regex) -> Vec<u8> {
    re.replace_all(text, &b" "[..]).into_owned()
}

fn extract_shebangs(text: &[u8], tokens: &mut Vec<String>) {
    for caps in SHEBANG.captures_iter(text) {
        let interpreter = caps.get(1).or_else(|| caps.get(2));
        if let Some(interpreter) = interpreter {
            let name = interpreter.as_bytes();
            if name.len() <= MAX_TOKEN_LEN {
                tokens.push(format!(
                    "{}{}",
                    SHEBANG_PREFIX,
                    String::from_utf8_lossy(name)
                ));
            }
        }
    }
}

fn extract_sgml(text: &[u8], tokens: &mut Vec<String>) -> Vec<u8> {
    let mut closed = text.to_vec();

    for caps in SGML.captures_iter(text) {
        let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if SGML_COMMENT.is_match(whole.as_bytes()) {
            continue;
        }

        let name = tag.as_bytes();
        if name.len() <= MAX_TOKEN_LEN {
            let mut token = name.to_vec();
            token.push(b'>');
            tokens.push(String::from_utf8_lossy(&token).into_owned());
        }

        if let Some(byte) = closed.get_mut(tag.end()) {
            *byte = b'>';
        }
        extract_sgml_attributes(&closed[whole.range()], tokens);
    }

    // Re-matching the closed text only finds the `<name>` heads.
    blank(&closed, &SGML)
}

fn extract_sgml_attributes(tag: &[u8], tokens: &mut Vec<String>) {
    for caps in SGML_ATTRIBUTES.captures_iter(tag) {
        if let Some(name) = caps.get(1) {
            push_token(tokens, name.as_bytes());
        }

        if let Some(value) = caps.get(2) {
            for word in SGML_LONE_ATTRIBUTE.find_iter(value.as_bytes()) {
                push_token(tokens, word.as_bytes());
            }
        }
    }
}

fn skip_comments_and_literals(text: Vec<u8>) -> Vec<u8> {
    // Literals go first so comment markers inside strings are not honoured.
    [
        &*LITERAL_STRING,
        &*MULTILINE_COMMENT,
        &*SINGLE_LINE_COMMENT,
        &*LITERAL_NUMBER,
    ]
    .into_iter()
    .fold(text, |text, re| blank(&text, re))
}

fn extract_matches(text: &[u8], re: &Regex, tokens: &mut Vec<String>) -> Vec<u8> {
    for m in re.find_iter(text) {
        push_token(tokens, m.as_bytes());
    }

    blank(text, re)
}

fn extract_remainders(text: &[u8], tokens: &mut Vec<String>) {
    for field in text
        .split(|b| b.is_ascii_whitespace())
        .filter(|field| !field.is_empty())
    {
        for ch in String::from_utf8_lossy(field).chars() {
            tokens.push(ch.to_string());
        }
    }
}
