//! # Recipebox Architecture
//!
//! Recipebox is a **UI-agnostic recipe library**: an in-memory recipe box with
//! ingredient lists, search, and category facets. The bundled CLI is one client
//! of it; a web view or a GUI would call the same API.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, validates form input, prints results   │
//! │  - Runs the interactive session loop                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store for one session                           │
//! │  - Resolves selectors (1, 2, 3 or UUIDs) to ids             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + filter.rs                  │
//! │  - Create / update / delete, ingredient edits, basket       │
//! │  - Pure search and category derivation                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore (ordered, session-local)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **No persistence.** Each session starts from [`seed::sample_recipes`] and
//!   forgets everything on exit. Only settings ([`config`]) touch the disk.
//! - **Order is stable.** The collection keeps insertion order; updates edit in
//!   place.
//! - **Stale ids are harmless.** Updating or deleting something that no longer
//!   exists does nothing and reports nothing affected.
//! - **Callers validate.** The store stores what it is given; required titles,
//!   ingredient names, and image limits ([`image`]) are checked before calling.
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`filter`]: Search, category facet, sort
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: `Recipe`, `Ingredient`, drafts and patches
//! - [`index`]: Display indexes and selectors
//! - [`image`]: Image validation and data URLs
//! - [`seed`]: Sample recipes
//! - [`config`]: Settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod image;
pub mod index;
pub mod model;
pub mod seed;
pub mod store;
