//! Derived-field samplers.
//!
//! Each submodule samples one family of derived attributes over the static
//! catalogs: names, postal addresses, contact details, and timestamps.

pub mod address;
pub mod contact;
pub mod names;
pub mod timestamp;
