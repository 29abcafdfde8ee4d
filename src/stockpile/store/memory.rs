use super::{decode_lines, encode_lines, DataStore, LoadReport};
use crate::error::{Result, StockError};
use crate::model::Record;
use std::io;

/// In-memory storage for testing and development.
///
/// Holds the encoded document rather than the records so loads go through the
/// same codec path as [`FileStore`](super::fs::FileStore).
#[derive(Default)]
pub struct InMemoryStore {
    contents: Option<String>,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose backing document already holds `text`.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent `save_all` fail with an IO error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<LoadReport> {
        match &self.contents {
            Some(text) => Ok(decode_lines(text)),
            None => Ok(LoadReport {
                first_run: true,
                ..LoadReport::default()
            }),
        }
    }

    fn save_all(&mut self, records: &[Record]) -> Result<()> {
        if self.fail_writes {
            return Err(StockError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "writes disabled",
            )));
        }
        self.contents = Some(encode_lines(records));
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::inventory::Inventory;
    use crate::model::{ItemDraft, KindDraft};

    pub fn generic(name: &str, category: &str, quantity: i64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            price: 1.0,
            quantity,
            kind: KindDraft::Generic {
                category: Some(category.to_string()),
            },
        }
    }

    pub fn electronics(name: &str, brand: &str, quantity: i64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            price: 199.0,
            quantity,
            kind: KindDraft::Electronics {
                brand: brand.to_string(),
                warranty_months: 12,
            },
        }
    }

    pub fn grocery(name: &str, category: &str, expiry: &str, quantity: i64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            price: 2.0,
            quantity,
            kind: KindDraft::Grocery {
                expiry_date: expiry.to_string(),
                category: category.to_string(),
            },
        }
    }

    pub struct InventoryFixture {
        pub inventory: Inventory<InMemoryStore>,
    }

    impl Default for InventoryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl InventoryFixture {
        pub fn new() -> Self {
            let (inventory, _) = Inventory::open(InMemoryStore::new()).unwrap();
            Self { inventory }
        }

        pub fn with_item(mut self, draft: ItemDraft) -> Self {
            self.inventory.create(draft).unwrap();
            self
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = generic(&format!("Item {}", i + 1), "General", (i as i64) + 1);
                self.inventory.create(draft).unwrap();
            }
            self
        }
    }
}
