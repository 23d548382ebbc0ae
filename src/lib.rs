//! Library crate for people-picker.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - Error and result types (`error`)
//! - Display-name formatting (`format`)
//! - People records, HTTP source, decoration and ordering (`people`)
//! - In-memory search over formatted labels (`search`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `people-picker` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod error;
pub mod format;
pub mod people;
pub mod search;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
pub use format::format_label;
