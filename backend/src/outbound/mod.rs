//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **memory**: in-process entity and archive stores
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
