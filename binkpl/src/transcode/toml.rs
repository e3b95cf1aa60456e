//! TOML output: one `[[names]]` table per record.
//!
//! TOML needs a table at the top level, so records are wrapped in an array
//! of tables named `names`. An empty record list gives an empty document.

use toml_edit::{value, Array, ArrayOfTables, DocumentMut, Item, Table};

use crate::record::Record;

/// Key holding the array of record tables.
const NAMES_KEY: &str = "names";

/// Encode records as a TOML document.
pub fn encode(records: &[Record]) -> String {
    let mut doc = DocumentMut::new();
    if records.is_empty() {
        return doc.to_string();
    }

    let mut tables = ArrayOfTables::new();
    for record in records {
        tables.push(record_to_table(record));
    }
    doc.insert(NAMES_KEY, Item::ArrayOfTables(tables));
    doc.to_string()
}

fn record_to_table(record: &Record) -> Table {
    let mut table = Table::new();
    table.insert("input", value(record.input.as_str()));
    if let Some(domain) = &record.domain {
        table.insert("domain", value(domain.as_str()));
    }
    let mut values = Array::new();
    for v in &record.values {
        values.push(v.as_str());
    }
    table.insert("values", value(values));
    table
}
