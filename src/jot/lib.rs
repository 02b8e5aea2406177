//! # Jot Architecture
//!
//! Jot is a **UI-agnostic note-keeping library** with a menu-driven console
//! client on top. The interactive shell is the only place that reads stdin or
//! writes to the terminal; everything inward returns structured values.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell Layer (shell.rs, wired by main.rs)                   │
//! │  - Prints the menu, reads lines, formats output             │
//! │  - The ONLY place that knows about stdin/stdout/colors      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory note collection                       │
//! │  - Loads once at startup, persists after every mutation     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the note list                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note Identity
//!
//! Notes have no stable identifier. They are addressed by their 1-based
//! position in insertion order, and deleting a note shifts every later
//! position down by one. This is fine for a single interactive session and
//! deliberately not designed for anything more.
//!
//! ## Persistence Model
//!
//! The whole collection lives in memory for the lifetime of the process and
//! is rewritten to disk in full after every mutation. There is no partial
//! update, no locking, and no protection against a concurrent external
//! writer; the last completed write wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The core [`model::Note`] type
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `shell`: The interactive menu loop (part of the binary, not the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
