//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every stockpile operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Inventory`] for the lifetime of the session
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (an add/remove choice becomes a signed delta,
//!   a missing threshold becomes the configured one)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `inventory.rs`
//! - **I/O to the user**: No stdout, stderr, prompts or exit codes
//!
//! ## Generic Over DataStore
//!
//! `StockApi<S: DataStore>` is generic over the storage backend:
//! - Production: `StockApi<FileStore>`
//! - Testing: `StockApi<InMemoryStore>`

use crate::commands;
use crate::config::StockConfig;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::ItemDraft;
use crate::store::DataStore;

/// The main API facade for stockpile operations.
pub struct StockApi<S: DataStore> {
    inventory: Inventory<S>,
    paths: commands::StockPaths,
    config: StockConfig,
}

impl<S: DataStore> StockApi<S> {
    /// Load the inventory from `store`. The returned `CmdResult` carries the
    /// load diagnostics (first run, skipped lines).
    pub fn open(
        store: S,
        paths: commands::StockPaths,
        config: StockConfig,
    ) -> Result<(Self, commands::CmdResult)> {
        let (inventory, loaded) = commands::load::run(store)?;
        Ok((
            Self {
                inventory,
                paths,
                config,
            },
            loaded,
        ))
    }

    pub fn create_item(&mut self, draft: ItemDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.inventory, draft)
    }

    pub fn adjust_stock(
        &mut self,
        id: u64,
        adjustment: StockAdjustment,
    ) -> Result<commands::CmdResult> {
        commands::adjust::run(&mut self.inventory, id, adjustment)
    }

    pub fn remove_item(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.inventory, id)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn search_items(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.inventory, term)
    }

    /// Falls back to the configured threshold when `threshold` is `None`.
    pub fn low_stock(&self, threshold: Option<i64>) -> Result<commands::CmdResult> {
        let threshold = threshold.unwrap_or(self.config.low_stock_threshold);
        commands::low_stock::run(&self.inventory, threshold)
    }

    /// The configured low-stock threshold.
    pub fn low_stock_threshold(&self) -> i64 {
        self.config.low_stock_threshold
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::StockPaths {
        &self.paths
    }

    pub fn inventory(&self) -> &Inventory<S> {
        &self.inventory
    }
}

pub use crate::commands::adjust::StockAdjustment;
pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StockPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::store::memory::fixtures::{generic, grocery};
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> StockApi<InMemoryStore> {
        let paths = StockPaths {
            store_dir: PathBuf::from("unused"),
            data_file: PathBuf::from("unused/inventory_data.txt"),
        };
        let (api, _) = StockApi::open(InMemoryStore::new(), paths, StockConfig::default()).unwrap();
        api
    }

    #[test]
    fn create_then_list() {
        let mut api = api();
        api.create_item(generic("Tape", "Office", 2)).unwrap();
        api.create_item(grocery("Milk", "Dairy", "2030-01-01", 9))
            .unwrap();

        let listed = api.list_items().unwrap().listed_items;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].name(), "Milk");
    }

    #[test]
    fn adjust_dispatches_sign() {
        let mut api = api();
        api.create_item(generic("Tape", "Office", 2)).unwrap();
        api.adjust_stock(1, StockAdjustment::Add(3)).unwrap();
        let result = api.adjust_stock(1, StockAdjustment::Remove(5)).unwrap();
        assert_eq!(result.affected_items[0].quantity(), 0);
    }

    #[test]
    fn low_stock_uses_configured_threshold() {
        let paths = StockPaths {
            store_dir: PathBuf::from("unused"),
            data_file: PathBuf::from("unused/inventory_data.txt"),
        };
        let config = StockConfig {
            low_stock_threshold: 20,
            ..StockConfig::default()
        };
        let (mut api, _) = StockApi::open(InMemoryStore::new(), paths, config).unwrap();
        api.create_item(generic("Tape", "Office", 10)).unwrap();

        assert_eq!(api.low_stock(None).unwrap().listed_items.len(), 1);
        assert_eq!(api.low_stock(Some(5)).unwrap().listed_items.len(), 0);
    }

    #[test]
    fn remove_unknown_surfaces_not_found() {
        let mut api = api();
        assert!(matches!(api.remove_item(3), Err(StockError::NotFound(3))));
    }
}
