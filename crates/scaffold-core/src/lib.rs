//! Scaffold Core - vault layout materialization
//!
//! This crate parses a JSON document describing nested folders and note
//! files, and reproduces that layout inside a vault through a small
//! [`Store`] abstraction. Creation is idempotent: existing notes are never
//! overwritten and nothing is ever deleted.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod materialize;
pub mod plan;
pub mod settings;
pub mod store;
pub mod structure;
pub mod util;

pub use error::{MaterializeError, MaterializeResult};
pub use materialize::{materialize, Action, Materializer, Report};
pub use settings::{NewFileLocation, Settings};
pub use store::{DiskStore, MemoryStore, PlanningStore, Store, StoreError};
pub use structure::{Structure, StructureNode, NOTE_EXTENSION};
