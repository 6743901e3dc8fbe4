//! # Larder Architecture
//!
//! Larder is a **UI-agnostic recipe-tracking library**. The binary is a thin
//! CLI client over it; nothing inside the library writes to stdout, reads the
//! terminal, or calls `std::process::exit`.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Input normalization and index resolution                 │
//! │  - Translates store outcomes into user-facing messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - RecipeStore: sole owner of the catalog and the pantry    │
//! │  - Persists both collections on every mutation              │
//! │  - SlotBackend trait: FsBackend (prod), MemoryBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Matching Core
//!
//! The one derived view is availability: a recipe is cookable when every one
//! of its ingredient names, case-folded, is present in the pantry. Recipes
//! carry their own denormalized ingredient text; removing a pantry entry
//! never rewrites a recipe.
//!
//! ## Testing Strategy
//!
//! Business logic is tested in `commands/*.rs` and `store/` against
//! `MemoryBackend`. The CLI surface gets an end-to-end pass in `tests/`
//! driving the real binary against a temp data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`store`]: Collections, matching, persistence slots
//! - [`model`]: Core data types (`Recipe`, `Ingredient`, `CookingUnit`)
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration for instructions
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod store;
