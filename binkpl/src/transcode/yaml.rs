//! YAML output: a sequence of mappings.
//!
//! ```yaml
//! - input: zoo:type=Cat
//!   domain: zoo
//!   values:
//!   - Cat
//! ```

use serde_yaml::{Mapping, Value as YamlValue};

use crate::record::Record;

/// Encode records as a YAML document.
pub fn encode(records: &[Record]) -> Result<String, String> {
    let items: Vec<YamlValue> = records.iter().map(record_to_yaml).collect();
    serde_yaml::to_string(&YamlValue::Sequence(items))
        .map_err(|e| format!("YAML encode error: {}", e))
}

fn record_to_yaml(record: &Record) -> YamlValue {
    let mut map = Mapping::new();
    map.insert(
        YamlValue::String("input".into()),
        YamlValue::String(record.input.clone()),
    );
    if let Some(domain) = &record.domain {
        map.insert(
            YamlValue::String("domain".into()),
            YamlValue::String(domain.clone()),
        );
    }
    let values = record
        .values
        .iter()
        .map(|v| YamlValue::String(v.clone()))
        .collect();
    map.insert(
        YamlValue::String("values".into()),
        YamlValue::Sequence(values),
    );
    YamlValue::Mapping(map)
}
