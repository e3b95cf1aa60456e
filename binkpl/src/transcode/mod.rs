//! Output through third-party serializers.
//!
//! Every format carries the same record shape: `input`, an optional
//! `domain`, and the ordered `values`.

pub mod cbor;
pub mod toml;
pub mod yaml;
