//! # Stockpile Architecture
//!
//! Stockpile is a **UI-agnostic inventory library** with a small CLI client on
//! top. The library owns a product collection, enforces its invariants and
//! writes the whole collection through to a backing file after every change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, sets exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade that dispatches to commands                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns inventory outcomes into `CmdResult` messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory (inventory.rs)                                   │
//! │  - Validation, unique ids, write-through, degraded mode     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: JSON, text lines, in-memory        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the
//! process. Diagnostics go out as `tracing` events and as `CmdMessage`s.
//!
//! ## Failure Model
//!
//! - Bad input and unknown ids are `Err` values and change nothing.
//! - A failed write-through keeps the in-memory change and is reported as a
//!   warning; the inventory keeps working in memory.
//! - Malformed persisted records are skipped one by one at load time.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user-facing operation
//! - [`inventory`]: The product collection and its invariants
//! - [`store`]: Storage abstraction and backends
//! - [`model`]: `Product`, `NewProduct`, `Summary`
//! - [`config`]: `config.json` handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
