//! One processed input: where it came from and what it decoded to.

use libkpl::{extract_values, ObjectName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The input exactly as read.
    pub input: String,
    /// Domain, when the input was a whole object name.
    pub domain: Option<String>,
    pub values: Vec<String>,
}

impl Record {
    /// Treat `input` as a bare key-property list.
    pub fn from_list(input: &str) -> Self {
        Self {
            input: input.to_string(),
            domain: None,
            values: extract_values(input),
        }
    }

    /// Treat `input` as `domain:key-property-list`.
    pub fn from_object_name(input: &str) -> libkpl::Result<Self> {
        let name = ObjectName::parse(input)?;
        Ok(Self {
            input: input.to_string(),
            domain: Some(name.domain().to_string()),
            values: name.values(),
        })
    }
}
