//! Service layer for the studio site.
//! - `storage`: document store trait with in-process/JSON-file and MongoDB backends.
//! - `data`: typed data access on top of a store, one method per entity and operation.
//! - `seed`: idempotent first-run catalog.

pub mod errors;
pub mod storage;
pub mod data;
pub mod seed;
#[cfg(test)]
pub mod test_support;

pub use data::DataService;
