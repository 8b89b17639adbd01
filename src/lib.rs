//! Program Filter
//!
//! Cascading dropdown for the admissions admin: the program field of the
//! academic intake form only lists the programs of the chosen university.
//!
//! Layout:
//! - models / options: option entries and the lists each refresh renders
//! - field / source: dropdown and endpoint abstractions
//! - sync: the refresh protocol
//! - attach: host, field and binding checks before a synchronizer starts
//! - web (wasm32 only): DOM, HTTP and page wiring

pub mod attach;
pub mod config;
pub mod error;
pub mod field;
pub mod models;
pub mod options;
pub mod source;
pub mod sync;

#[cfg(target_arch = "wasm32")]
mod web;

pub use attach::{prepare, FieldLookup};
pub use config::FilterConfig;
pub use error::{FilterError, FilterResult};
pub use field::{MemorySelect, SelectField};
pub use models::{ProgramRecord, RecordId, SelectOption};
pub use source::ProgramSource;
pub use sync::{DropdownSync, PendingFetch, RefreshOutcome, RefreshStep};

/// Tag on every console line
pub const LOG_PREFIX: &str = "ProgramFilter";
