//! # Stockpile Architecture
//!
//! Stockpile is a **UI-agnostic inventory library** with a command-line
//! client on top. The interactive menu and the one-shot subcommands are two
//! clients of the same core.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu, formats tables          │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (add/remove → signed delta)            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns inventory outcomes into CmdResult + messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection Store (inventory.rs) + Query Engine (query.rs)  │
//! │  - Owns the records and the id counter                      │
//! │  - Persists the whole collection after each mutation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) over the line codec (codec.rs)      │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>` and never touches the terminal. Warnings that the user
//! should see (a substituted expiry date, a line skipped on load, a failed
//! save) travel as [`commands::CmdMessage`]s.
//!
//! ## Persistence Failures Are Advisory
//!
//! A mutation that succeeds in memory stays applied even if the rewrite of
//! the data file fails. The failure comes back as a warning message and the
//! next successful save brings the file up to date.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`inventory`]: The collection store and id generator
//! - [`query`]: Search and low-stock filters
//! - [`model`]: `Record`, `ItemKind`, `ExpiryDate`, `ItemDraft`
//! - [`codec`]: One record per comma separated line
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Locating the store and wiring up a `StockApi`
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive menu and table output for the binary (not part of the lib API)

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod inventory;
pub mod model;
pub mod query;
pub mod store;
