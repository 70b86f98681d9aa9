//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory library** with a small CLI client on
//! top. The library never prints, never exits, and never assumes a terminal;
//! the same core could sit behind a GUI form or an HTTP handler.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats tables, colours low stock      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Writes the inventory file after successful mutations     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, multi-id operations, user-facing messages    │
//! │  - Returns `CmdResult`                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `Inventory`: owned products, id counter, CRUD, stats     │
//! │  - CSV codec and file I/O                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`error::Result`]. Lookups of unknown ids
//! fail with `NotFound`, unreadable or unwritable files with
//! `FileOperationFailed`. `create` fails with `IdsExhausted` once the id
//! counter has no successor. Malformed rows in an inventory file are not errors:
//! they are skipped and counted.
//!
//! ## Threading
//!
//! Everything is synchronous and single-owner. `Inventory` has no interior
//! locking; share it across threads behind your own `Mutex`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user-facing operation
//! - [`store`]: The inventory itself and its CSV persistence
//! - [`model`]: The `Product` record
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
