//! CBOR output: an array of maps with text keys.

use ciborium::value::Value as CborValue;

use crate::record::Record;

/// Encode records as CBOR bytes.
pub fn encode(records: &[Record]) -> Result<Vec<u8>, String> {
    let items = records.iter().map(record_to_cbor).collect();
    let mut out = Vec::new();
    ciborium::ser::into_writer(&CborValue::Array(items), &mut out)
        .map_err(|e| format!("CBOR encode error: {}", e))?;
    Ok(out)
}

fn record_to_cbor(record: &Record) -> CborValue {
    let mut entries = vec![(
        CborValue::Text("input".into()),
        CborValue::Text(record.input.clone()),
    )];
    if let Some(domain) = &record.domain {
        entries.push((
            CborValue::Text("domain".into()),
            CborValue::Text(domain.clone()),
        ));
    }
    let values = record
        .values
        .iter()
        .map(|v| CborValue::Text(v.clone()))
        .collect();
    entries.push((CborValue::Text("values".into()), CborValue::Array(values)));
    CborValue::Map(entries)
}
