//! Output formats for extracted records.
//!
//! The text formats (label, lines, JSON) are written here. YAML, TOML, and
//! CBOR go through dedicated libraries in `transcode`.

use libkpl::format_label;

use crate::record::Record;
use crate::transcode;

/// Output format selected with `-t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One label per input
    Label,
    /// One value per line, blank line between inputs
    Lines,
    /// JSON array of records
    Json,
    /// YAML sequence of records
    Yaml,
    /// TOML `[[names]]` tables
    Toml,
    /// CBOR (binary)
    Cbor,
}

impl Format {
    /// Look up a format by name, accepting common aliases.
    pub fn from_name(name: &str) -> Option<Format> {
        match name {
            "label" => Some(Format::Label),
            "lines" => Some(Format::Lines),
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            "cbor" => Some(Format::Cbor),
            _ => None,
        }
    }
}

/// Encode records in the given format.
pub fn encode(records: &[Record], format: Format, separator: &str) -> Result<Vec<u8>, String> {
    match format {
        Format::Label => Ok(encode_labels(records, separator).into_bytes()),
        Format::Lines => Ok(encode_lines(records).into_bytes()),
        Format::Json => Ok(encode_json(records).into_bytes()),
        Format::Yaml => transcode::yaml::encode(records).map(String::into_bytes),
        Format::Toml => Ok(transcode::toml::encode(records).into_bytes()),
        Format::Cbor => transcode::cbor::encode(records),
    }
}

// =============================================================================
// Label
// =============================================================================

fn encode_labels(records: &[Record], separator: &str) -> String {
    let mut out = String::new();
    for record in records {
        if let Some(domain) = &record.domain {
            out.push_str(domain);
            out.push_str(": ");
        }
        out.push_str(&format_label(&record.values, separator));
        out.push('\n');
    }
    out
}

// =============================================================================
// Lines
// =============================================================================

fn encode_lines(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| {
            record
                .values
                .iter()
                .map(|v| format!("{}\n", escape_line(v)))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep a value on one line: backslashes are doubled, newlines become `\n`.
fn escape_line(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            c => result.push(c),
        }
    }
    result
}

// =============================================================================
// JSON
// =============================================================================

fn encode_json(records: &[Record]) -> String {
    if records.is_empty() {
        return "[]\n".to_string();
    }
    let items: Vec<String> = records.iter().map(encode_json_record).collect();
    format!("[\n{}\n]\n", items.join(",\n"))
}

fn encode_json_record(record: &Record) -> String {
    let mut fields = vec![format!("    \"input\": {}", encode_json_string(&record.input))];
    if let Some(domain) = &record.domain {
        fields.push(format!("    \"domain\": {}", encode_json_string(domain)));
    }
    let values = if record.values.is_empty() {
        "[]".to_string()
    } else {
        let items: Vec<String> = record
            .values
            .iter()
            .map(|v| format!("      {}", encode_json_string(v)))
            .collect();
        format!("[\n{}\n    ]", items.join(",\n"))
    };
    fields.push(format!("    \"values\": {}", values));
    format!("  {{\n{}\n  }}", fields.join(",\n"))
}

fn encode_json_string(s: &str) -> String {
    let mut result = String::from("\"");
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0c' => result.push_str("\\f"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::from_list("type=Cat,name=\"Tom, the cat\""),
            Record::from_list(r#"note="a\nb",path="C:\\x""#),
        ]
    }

    #[test]
    fn test_format_names() {
        assert_eq!(Format::from_name("yml"), Some(Format::Yaml));
        assert_eq!(Format::from_name("label"), Some(Format::Label));
        assert_eq!(Format::from_name("xml"), None);
    }

    #[test]
    fn test_labels() {
        let out = encode_labels(&records(), " / ");
        assert_eq!(out, "Cat / Tom, the cat\na b / C:\\x\n");
    }

    #[test]
    fn test_labels_with_domain() {
        let records = vec![Record::from_object_name("zoo:type=Cat,name=Tom").unwrap()];
        assert_eq!(encode_labels(&records, ", "), "zoo: Cat, Tom\n");
    }

    #[test]
    fn test_lines() {
        let out = encode_lines(&records());
        assert_eq!(out, "Cat\nTom, the cat\n\na\\nb\nC:\\\\x\n");
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(encode_json(&[]), "[]\n");
    }

    #[test]
    fn test_json() {
        let records = vec![Record::from_object_name("zoo:a=\"x\\\"y\",b=").unwrap()];
        let expected = concat!(
            "[\n",
            "  {\n",
            "    \"input\": \"zoo:a=\\\"x\\\\\\\"y\\\",b=\",\n",
            "    \"domain\": \"zoo\",\n",
            "    \"values\": [\n",
            "      \"x\\\"y\",\n",
            "      \"\"\n",
            "    ]\n",
            "  }\n",
            "]\n",
        );
        assert_eq!(encode_json(&records), expected);
    }

    #[test]
    fn test_json_string_control() {
        assert_eq!(encode_json_string("a\u{1}\n"), "\"a\\u0001\\n\"");
    }

    #[test]
    fn test_encode_dispatch() {
        let bytes = encode(&records(), Format::Label, ", ").unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Cat, Tom, the cat\na b, C:\\x\n");
    }
}
