//! Value extraction for management-object names.
//!
//! Management-object names (JMX `ObjectName` and friends) look like
//! `domain:key1=value1,key2="quoted, value"`. This crate pulls the ordered
//! values out of the key-property list after the `:`.
//!
//! # Scanning
//!
//! The extractor is a single pass over the characters of the list:
//!
//! 1. **Keys** are read up to `=`. A `"` right after `=` opens a quoted value.
//!
//! 2. **Unquoted values** run up to the next `,`.
//!
//! 3. **Quoted values** run up to the next unescaped `"`. Inside them `\n`
//!    is a newline and `\` before any other character yields that character.
//!
//! Malformed input is never rejected. Whatever was collected is returned.

mod cursor;
mod error;
mod extract;
mod label;
mod object_name;

pub use error::{Error, Result};
pub use extract::{extract_properties, extract_values, Property};
pub use label::{format_label, label, DEFAULT_SEPARATOR};
pub use object_name::ObjectName;
