use std::path::Path;

use crate::error::Error;
use crate::inifile::{COMMON_SECTION, IniFile, SectionData};

/// Parse raw INI text into an [`IniFile`].
///
/// The parser is lenient by contract: lines it cannot make sense of are
/// skipped, never reported. Invalid UTF-8 is decoded lossily, so parsing
/// cannot fail.
///
/// Rules, applied per line after trimming outer whitespace:
/// - empty lines, lines shorter than 3 bytes, and lines starting with `#`
///   or `;` are skipped;
/// - `[name]` switches the active section, creating it on first sight; a
///   name that trims to nothing leaves the active section unchanged;
/// - everything else splits at the first `=` (or, failing that, the first
///   space) into a key/value pair; the first assignment to a key within a
///   section wins and later duplicates are dropped;
/// - values wrapped symmetrically in `"`, `'` or backtick are stored with
///   the quotes stripped, everything else verbatim.
pub fn parse_ini(input: &[u8]) -> IniFile {
    let text = String::from_utf8_lossy(input);
    let mut ini = IniFile::default();
    ini.names.push(COMMON_SECTION.to_string());
    ini.sections
        .insert(COMMON_SECTION.to_string(), SectionData::default());

    let mut current = COMMON_SECTION.to_string();

    for raw_line in text.trim().split('\n') {
        let line = raw_line.trim();
        // Shorter than `k=v` cannot carry an assignment or a header.
        if line.len() < 3 || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            let name = line[1..line.len() - 1].trim();
            if !name.is_empty() {
                if !ini.sections.contains_key(name) {
                    ini.names.push(name.to_string());
                    ini.sections.insert(name.to_string(), SectionData::default());
                }
                current = name.to_string();
            }
            continue;
        }
        let Some(split) = line.find('=').or_else(|| line.find(' ')) else {
            continue;
        };
        let key = line[..split].trim();
        let value = line[split + 1..].trim();
        if key.is_empty() {
            continue;
        }
        let section = ini
            .sections
            .get_mut(&current)
            .expect("active section exists");
        if section.values.contains_key(key) {
            continue;
        }
        section.keys.push(key.to_string());
        let value = quoted_interior(value).unwrap_or(value);
        section.values.insert(key.to_string(), value.to_string());
    }

    ini
}

/// Read a file and parse it. I/O failure is the only error this library
/// surfaces; the parse itself cannot fail.
pub fn load_ini(path: impl AsRef<Path>) -> Result<IniFile, Error> {
    let data = std::fs::read(path)?;
    Ok(parse_ini(&data))
}

/// The interior of a value wrapped symmetrically in one of the recognized
/// quote characters (`"`, `'`, backtick), if it is so wrapped.
pub(crate) fn quoted_interior(value: &str) -> Option<&str> {
    let bytes = value.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    if bytes[0] == bytes[bytes.len() - 1] && matches!(bytes[0], b'"' | b'\'' | b'`') {
        Some(&value[1..value.len() - 1])
    } else {
        None
    }
}
