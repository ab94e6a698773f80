//! # Properties Parser
//!
//! Reads the flat `key=value` configuration format used by `application.properties`.
//!
//! Supported syntax:
//! - `key=value`, `key:value` and `key value` separators
//! - `\r`, `\n` and `\r\n` line terminators
//! - `#` and `!` comment lines, blank lines
//! - a trailing backslash continues the logical line
//! - escapes `\t`, `\n`, `\r`, `\f`, `\uXXXX` (surrogate pairs included) and any escaped literal (`\=`, `\:`, `\ `)
//!
//! Later duplicates of a key replace earlier ones.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::str::Chars;
use thiserror::Error;

lazy_static! {
    // `\r\n`, `\r` and `\n` all end a line.
    static ref LINE_BREAK_RE: Regex = Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid");
}

/// A flat mapping of configuration keys to their raw values.
pub type PropertyMap = BTreeMap<String, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("Malformed \\uXXXX escape on line {line}.")]
    InvalidUnicodeEscape { line: usize },
}

/// Parses properties text into a `PropertyMap`.
pub fn parse(content: &str) -> Result<PropertyMap, PropertiesError> {
    let mut properties = PropertyMap::new();
    let mut lines = LINE_BREAK_RE.split(content).enumerate();

    while let Some((index, raw_line)) = lines.next() {
        let line_number = index + 1;
        let trimmed = raw_line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        // Join continuation lines into one logical line.
        let mut logical = String::from(trimmed);
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_key_value(&logical);
        let key = unescape(key, line_number)?;
        let value = unescape(value, line_number)?;
        log::trace!("Parsed property '{}' on line {}", key, line_number);
        properties.insert(key, value);
    }

    Ok(properties)
}

// A line continues when it ends with an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

// Splits a logical line at the first unescaped `=`, `:` or whitespace.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                let key = line.get(..i).unwrap_or_default();
                let rest = line.get(i + c.len_utf8()..).unwrap_or_default();
                return (key, rest.trim_start());
            }
            c if c.is_whitespace() => {
                let key = line.get(..i).unwrap_or_default();
                let rest = line.get(i..).unwrap_or_default().trim_start();
                // `key = value`: a separator may follow the whitespace.
                let rest = rest
                    .strip_prefix('=')
                    .or_else(|| rest.strip_prefix(':'))
                    .map(str::trim_start)
                    .unwrap_or(rest);
                return (key, rest);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(text: &str, line: usize) -> Result<String, PropertiesError> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => {
                let invalid = PropertiesError::InvalidUnicodeEscape { line };
                let unit = read_hex4(&mut chars).ok_or_else(|| invalid.clone())?;
                let code_point = if (0xD800..=0xDBFF).contains(&unit) {
                    // A high surrogate must be followed by `\uXXXX` holding the low half.
                    let low = match (chars.next(), chars.next()) {
                        (Some('\\'), Some('u')) => read_hex4(&mut chars),
                        _ => None,
                    }
                    .filter(|low| (0xDC00..=0xDFFF).contains(low))
                    .ok_or_else(|| invalid.clone())?;
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                result.push(char::from_u32(code_point).ok_or(invalid)?);
            }
            Some(other) => result.push(other),
            None => {}
        }
    }
    Ok(result)
}

// Reads the four hex digits of a `\uXXXX` escape.
fn read_hex4(chars: &mut Chars<'_>) -> Option<u32> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok()
}
