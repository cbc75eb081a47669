//! Volatile in-process adapters for the entity and archive stores.
//!
//! Both stores guard their records with `std::sync::RwLock` and are shared
//! through `Arc`. Nothing survives a restart.

mod archive_store;
mod entity_store;

pub use archive_store::InMemoryArchiveStore;
pub use entity_store::InMemoryEntityStore;
