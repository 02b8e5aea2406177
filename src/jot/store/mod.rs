//! # Storage Layer
//!
//! This module defines the storage abstraction for jot. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage — the whole collection as a
//!   pretty-printed JSON array in a single file (`notes.json` by default)
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Model
//!
//! There are exactly two operations: load the whole collection, save the
//! whole collection. Every mutation rewrites the entire document; there is
//! no partial update and no append. The document shape is an ordered array
//! of `{title, content, date}` objects — pretty-printing is cosmetic, the
//! field names and ordering are the compatibility contract.

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;

/// Abstract interface for note storage.
///
/// Implementations persist the full ordered collection; callers own the
/// in-memory copy and push it back down after every mutation.
pub trait DataStore {
    /// Load the full note collection. A missing document yields an empty
    /// collection; a structurally invalid one is a serialization error the
    /// caller decides how to recover from.
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Replace the persisted document with the given collection.
    fn save_notes(&mut self, notes: &[Note]) -> Result<()>;
}
