use crate::inifile::{COMMON_SECTION, IniFile};
use crate::parse::quoted_interior;

/// Render the model back to INI text.
///
/// This is a projection of the model through the accessor layer, not an
/// echo of the original input: comments are gone and quoting is normalized.
/// The common section's pairs come first without a header; every other
/// section gets a `[name]` header preceded by a blank line, except at the
/// very top of the output.
pub fn write_ini(ini: &IniFile) -> String {
    let mut lines: Vec<String> = Vec::new();
    for name in ini.section_names("") {
        if name != COMMON_SECTION {
            if lines.is_empty() {
                lines.push(format!("[{name}]"));
            } else {
                lines.push(format!("\n[{name}]"));
            }
        }
        for key in ini.keys(name, "") {
            lines.push(render_pair(key, ini.get_str(name, key, "")));
        }
    }
    lines.join("\n")
}

fn render_pair(key: &str, value: &str) -> String {
    let bytes = value.as_bytes();
    if bytes.first().is_some_and(u8::is_ascii_whitespace)
        || bytes.last().is_some_and(u8::is_ascii_whitespace)
    {
        return format!("{key} = \"{value}\"");
    }
    if quoted_interior(value).is_some() {
        // Wrap in whichever quote character differs from the value's own
        // first character so the wrapper survives a re-parse.
        let tag = if bytes[0] == b'"' { '`' } else { '"' };
        return format!("{key} = {tag}{value}{tag}");
    }
    format!("{key} = {value}")
}
