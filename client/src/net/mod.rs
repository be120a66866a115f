//! Networking modules for the showcase backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, `config`
//! resolves the backend base URL, and `error` is the failure taxonomy every
//! caller matches on.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
