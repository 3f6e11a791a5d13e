// src/store.rs

pub mod record;
pub mod record_store;

pub use record::{Duplicable, Patchable, Record};
pub use record_store::{RecordStore, SCHEMA_VERSION};
