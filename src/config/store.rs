//! Flat key/value configuration store.
//!
//! Every supported file format is reduced to the same shape: dotted string
//! keys mapping to string values. Nested tables become `a.b.c` keys and
//! arrays of scalars are joined with commas, so
//!
//! ```toml
//! [nouns_pipeline]
//! annotators = ["tokenize", "ssplit", "pos"]
//! ```
//!
//! reads the same as `nouns_pipeline.annotators=tokenize,ssplit,pos`.

use std::collections::BTreeMap;

use serde_json::Value;

/// Parsed configuration file format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Properties,
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "properties" | "props" => Some(Self::Properties),
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// String-keyed configuration values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Parse `text` in the given format. The error string describes what was
    /// malformed.
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, String> {
        match format {
            ConfigFormat::Properties => Ok(Self::from_properties(text)),
            ConfigFormat::Toml => {
                let value: Value = toml::from_str(text).map_err(|e| e.to_string())?;
                Self::from_value(&value)
            }
            ConfigFormat::Json => {
                let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
                Self::from_value(&value)
            }
            ConfigFormat::Yaml => {
                let value: Value = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
                Self::from_value(&value)
            }
        }
    }

    /// Parse Java-style `.properties` text.
    ///
    /// Supports `key=value`, `key: value` and `key value` lines, `#` and `!`
    /// comments, backslash line continuations and `\uXXXX` escapes. Later
    /// keys overwrite earlier ones.
    pub fn from_properties(text: &str) -> Self {
        let mut store = Self::new();
        let mut lines = text.lines();

        while let Some(line) = lines.next() {
            let mut logical = line.trim_start().to_string();
            if logical.is_empty() || logical.starts_with('#') || logical.starts_with('!') {
                continue;
            }
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_property(&logical);
            if key.is_empty() {
                continue;
            }
            store.set(unescape(key), unescape(value));
        }

        store
    }

    /// Flatten a structured document. The root must be a table.
    fn from_value(value: &Value) -> Result<Self, String> {
        let Value::Object(root) = value else {
            return Err("top level must be a table of keys".to_string());
        };
        let mut store = Self::new();
        for (key, child) in root {
            flatten_into(&mut store, key, child)?;
        }
        Ok(store)
    }
}

fn flatten_into(store: &mut ConfigStore, key: &str, value: &Value) -> Result<(), String> {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (child_key, child) in map {
                flatten_into(store, &format!("{key}.{child_key}"), child)?;
            }
        }
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match scalar_to_string(item) {
                    Some(s) => parts.push(s),
                    None => return Err(format!("'{key}' may only contain plain values")),
                }
            }
            store.set(key, parts.join(","));
        }
        scalar => {
            if let Some(s) = scalar_to_string(scalar) {
                store.set(key, s);
            }
        }
    }
    Ok(())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    trailing % 2 == 1
}

/// Split a logical line at the first unescaped `=`, `:` or whitespace.
fn split_property(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (line[..i].trim_end(), line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[i..].trim_start();
                let rest = rest
                    .strip_prefix(['=', ':'])
                    .map(str::trim_start)
                    .unwrap_or(rest);
                return (&line[..i], rest);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{0C}'),
            Some('u') => match read_hex4(&mut chars) {
                Some(unit) => out.push(decode_utf16_unit(unit, &mut chars)),
                None => out.push('u'),
            },
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Read four hex digits, leaving `chars` untouched if they are not there.
fn read_hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let digits = chars.as_str().get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let unit = u32::from_str_radix(digits, 16).ok()?;
    *chars = chars.as_str()[4..].chars();
    Some(unit)
}

/// Turn a `\uXXXX` code unit into a char, pairing a high surrogate with a
/// following `\uXXXX` low surrogate. Unpaired surrogates become U+FFFD.
fn decode_utf16_unit(unit: u32, chars: &mut std::str::Chars<'_>) -> char {
    if (0xD800..0xDC00).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = read_hex4(&mut lookahead).filter(|l| (0xDC00..0xE000).contains(l)) {
                *chars = lookahead;
                let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER);
            }
        }
    }
    char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
}
