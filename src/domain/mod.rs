//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Backend entities, deserialized permissively
//! - `wire.rs`: Request bodies sent to the backend
//! - `client.rs`: Sub-client with one method per endpoint

pub mod class_summary;
pub mod error_question;
