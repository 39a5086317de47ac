//! Shared domain types for the effigy incarnation inventory.
//!
//! An incarnation is one instantiation of a template repository into a
//! target repository, tracked with version and merge-request metadata.
//! This crate holds the UI-facing view types and the conversions between
//! them; the wire shapes and HTTP plumbing live in `effigy-client`.

pub mod incarnation;
pub mod types;
