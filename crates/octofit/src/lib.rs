//! Records and persistence for the OctoFit tracker.
//!
//! Five flat record kinds ([`models`]) live behind the [`Store`] trait;
//! [`Database`] is the PostgreSQL implementation and [`MemoryStore`] the
//! in-process one.

pub mod database;
pub mod errors;
pub mod memory;
pub mod models;
pub mod store;

pub use database::Database;
pub use errors::StoreError;
pub use memory::MemoryStore;
pub use store::Store;
