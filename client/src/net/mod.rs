//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends requests, `api` builds and runs them, `envelope` decodes
//! collection responses, and `types` defines the wire records.

pub mod api;
pub mod envelope;
#[cfg(test)]
pub(crate) mod test_backend;
pub mod transport;
pub mod types;
