use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

/// Name of the implicit section that receives key/value pairs appearing
/// before the first `[name]` header.
pub const COMMON_SECTION: &str = "BuiltCommon";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SectionData {
    /// Keys in first-seen order. Membership always matches `values`.
    pub(crate) keys: Vec<String>,
    pub(crate) values: HashMap<String, String>,
}

/// An ordered section/key/value model built by `parse_ini`.
///
/// Sections are kept in first-seen order with the common section first, and
/// keys within a section are kept in first-seen order as well. The model is
/// a plain value: it is never mutated after parsing, so reads through shared
/// references are safe. Re-parsing produces a fresh value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    pub(crate) names: Vec<String>,
    pub(crate) sections: HashMap<String, SectionData>,
}

impl IniFile {
    /// An empty model. Holds no sections, not even the common one; parsing
    /// is what brings the common section into existence.
    pub fn new() -> Self {
        Self::default()
    }

    /// List section names in first-seen order, common section first.
    ///
    /// An empty pattern returns the full list. Otherwise names are filtered
    /// through `pattern` as a regular expression; a pattern that fails to
    /// compile yields no matches rather than an error.
    pub fn section_names(&self, pattern: &str) -> Vec<&str> {
        if pattern.is_empty() {
            return self.names.iter().map(String::as_str).collect();
        }
        filter_matching(self.names.iter().map(String::as_str), pattern)
    }

    /// List a section's keys in first-seen order.
    ///
    /// An empty section name selects the common section. An unknown section
    /// yields an empty list. The pattern follows the same rules as
    /// [`section_names`](Self::section_names).
    pub fn keys(&self, section: &str, pattern: &str) -> Vec<&str> {
        let Some(data) = self.sections.get(resolve_section(section)) else {
            return Vec::new();
        };
        if pattern.is_empty() {
            return data.keys.iter().map(String::as_str).collect();
        }
        filter_matching(data.keys.iter().map(String::as_str), pattern)
    }

    /// Look up a value, or return `default` when the (section, key) pair is
    /// absent.
    ///
    /// An empty section name selects the common section. A key containing a
    /// `.` is treated as `section.key`: the part before the first dot
    /// overrides the section argument, so `get_str("", "db.host", ...)`
    /// reads `host` from `[db]`.
    pub fn get_str<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        let (section, key) = match key.split_once('.') {
            Some((s, k)) => (s, k),
            None => (section, key),
        };
        match self
            .sections
            .get(resolve_section(section))
            .and_then(|data| data.values.get(key))
        {
            Some(value) => value.as_str(),
            None => default,
        }
    }

    /// Look up a boolean value.
    ///
    /// Recognizes `y`/`yes`/`on` and `n`/`no`/`off` (case-insensitive) on
    /// top of the standard `true`/`false`/`t`/`f`/`1`/`0` spellings. Any
    /// other content, including an absent key, resolves to `default`.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.get_str(section, key, "").to_ascii_lowercase().as_str() {
            "y" | "yes" | "on" | "true" | "t" | "1" => true,
            "n" | "no" | "off" | "false" | "f" | "0" => false,
            _ => default,
        }
    }

    /// Look up a base-10 signed integer value, or `default` on absence or
    /// parse failure.
    pub fn get_i64(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_parsed(section, key, default)
    }

    /// Look up a floating point value, or `default` on absence or parse
    /// failure.
    pub fn get_f64(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get_parsed(section, key, default)
    }

    /// Shared parse-with-fallback primitive behind the numeric getters.
    fn get_parsed<V: FromStr>(&self, section: &str, key: &str, default: V) -> V {
        self.get_str(section, key, "").parse().unwrap_or(default)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(resolve_section(name))
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(resolve_section(section))
            .is_some_and(|data| data.values.contains_key(key))
    }

    /// Number of sections, counting the common section.
    pub fn section_count(&self) -> usize {
        self.names.len()
    }

    /// Number of keys in a section. Unknown sections count zero.
    pub fn key_count(&self, section: &str) -> usize {
        self.sections
            .get(resolve_section(section))
            .map_or(0, |data| data.keys.len())
    }
}

impl fmt::Display for IniFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::write::write_ini(self))
    }
}

fn resolve_section(section: &str) -> &str {
    if section.is_empty() {
        COMMON_SECTION
    } else {
        section
    }
}

/// Regex-filter an ordered name sequence. A pattern that fails to compile
/// yields no matches; callers rely on that policy instead of receiving an
/// error.
fn filter_matching<'a>(names: impl Iterator<Item = &'a str>, pattern: &str) -> Vec<&'a str> {
    let Ok(re) = Regex::new(pattern) else {
        return Vec::new();
    };
    names.filter(|name| re.is_match(name)).collect()
}
