//! HTTP client library for the effigy incarnation inventory API.
//!
//! Provides the wire shapes exchanged with the backend, the pure
//! translator between wire and view representations, and the
//! [`IncarnationsClient`](incarnations::IncarnationsClient) repository
//! client that composes both over an authenticated [`reqwest`] transport.

pub mod config;
pub mod error;
pub mod incarnations;
pub mod translate;
pub mod transport;
pub mod wire;
