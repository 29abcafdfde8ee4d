//! # Command Layer
//!
//! Each command lives in its own submodule as a plain `run` function over an
//! [`Inventory`](crate::inventory::Inventory) (or the store paths, for
//! `config`/`init`) and returns a [`CmdResult`].
//!
//! Commands never print, never prompt and never exit. Anything worth telling
//! the user goes into [`CmdResult::messages`] with a [`MessageLevel`]; the UI
//! decides how to show it.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` fixtures and check the `CmdResult`
//! contents, including the messages.
//!
//! ## Command Modules
//!
//! - [`load`]: Populate an inventory and report what was skipped
//! - [`create`]: Add a new item
//! - [`adjust`]: Add or remove stock
//! - [`remove`]: Delete an item
//! - [`list`]: Every item, in store order
//! - [`search`]: Free-text search
//! - [`low_stock`]: Items below a threshold
//! - [`config`]: Manage configuration
//! - [`init`]: Create the store directory

use crate::config::StockConfig;
use crate::error::StockError;
use crate::model::Record;
use std::path::PathBuf;

pub mod adjust;
pub mod config;
pub mod create;
pub mod init;
pub mod list;
pub mod load;
pub mod low_stock;
pub mod remove;
pub mod search;

#[derive(Debug, Clone)]
pub struct StockPaths {
    /// Directory holding the data file and config.json
    pub store_dir: PathBuf,
    /// The inventory file itself
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Record>,
    pub listed_items: Vec<Record>,
    /// Threshold used by a low stock report
    pub threshold: Option<i64>,
    pub config: Option<StockConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<Record>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_config(mut self, config: StockConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Report a failed rewrite. The in-memory change already happened.
    pub fn note_save_error(&mut self, save_error: Option<StockError>) {
        if let Some(e) = save_error {
            self.add_message(CmdMessage::warning(format!(
                "Change kept in memory but could not be saved: {}",
                e
            )));
        }
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
