//! Whole management-object names: `domain:key=value,...`.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::extract::{extract_properties, extract_values, Property};

/// Separates the domain from the key-property list.
const DOMAIN_SEPARATOR: char = ':';

/// A management-object name split into domain and key-property list.
///
/// Only the split is performed; neither part is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectName<'a> {
    domain: &'a str,
    key_property_list: &'a str,
}

impl<'a> ObjectName<'a> {
    /// Split `name` at its first `:`.
    ///
    /// # Example
    ///
    /// ```
    /// use libkpl::ObjectName;
    ///
    /// let name = ObjectName::parse("zoo:type=Cat,name=Tom").unwrap();
    /// assert_eq!(name.domain(), "zoo");
    /// assert_eq!(name.values(), vec!["Cat", "Tom"]);
    /// ```
    pub fn parse(name: &'a str) -> Result<Self> {
        match name.split_once(DOMAIN_SEPARATOR) {
            Some((domain, key_property_list)) => Ok(Self {
                domain,
                key_property_list,
            }),
            None => {
                debug!(name, "object name has no domain separator");
                Err(Error::MissingDomainSeparator(name.to_string()))
            }
        }
    }

    pub fn domain(&self) -> &'a str {
        self.domain
    }

    pub fn key_property_list(&self) -> &'a str {
        self.key_property_list
    }

    /// Decoded values of the key-property list, in order.
    pub fn values(&self) -> Vec<String> {
        extract_values(self.key_property_list)
    }

    /// Keys and decoded values of the key-property list, in order.
    pub fn properties(&self) -> Vec<Property> {
        extract_properties(self.key_property_list)
    }
}

impl fmt::Display for ObjectName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.domain, DOMAIN_SEPARATOR, self.key_property_list
        )
    }
}
