//! # Inventory
//!
//! [`Inventory`] is the single owner of every [`Record`] and of the id
//! generator. It is the only place that checks id uniqueness and the only
//! place that moves a quantity.
//!
//! ## Persistence
//!
//! Every mutation (`add`, `create`, `update_stock`, `remove`) rewrites the
//! whole store through its [`DataStore`]. A failed rewrite does not undo the
//! in-memory change: the in-memory state stays authoritative until the next
//! successful save, and the failure comes back in [`Saved::save_error`] for
//! the caller to report.
//!
//! ## Stock policy
//!
//! Strict: an adjustment that would take a quantity below zero is refused
//! with [`StockError::WouldGoNegative`] and nothing changes. Reaching exactly
//! zero is fine.
//!
//! A record loaded with a quantity already below zero keeps it. Such a
//! record can be topped up but not drawn down further.

use crate::error::{Result, StockError, ValidationError};
use crate::model::{ItemDraft, Record};
use crate::store::{DataStore, SkippedLine};
use std::path::Path;

/// The value of a successful mutation, plus the persistence failure if the
/// rewrite that followed it did not go through.
#[derive(Debug)]
pub struct Saved<T> {
    pub value: T,
    pub save_error: Option<StockError>,
}

impl<T> Saved<T> {
    pub fn is_persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Created {
    pub record: Record,
    /// Set when the draft's expiry date was unusable and the sentinel was stored instead.
    pub substituted_expiry: Option<ValidationError>,
}

/// What happened while populating an inventory from its store.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
    /// Ids seen more than once; only the first occurrence is kept.
    pub duplicate_ids: Vec<u64>,
    pub first_run: bool,
}

pub struct Inventory<S: DataStore> {
    records: Vec<Record>,
    next_id: u64,
    store: S,
}

impl<S: DataStore> Inventory<S> {
    /// Load all records from `store`. Loading never writes.
    pub fn open(store: S) -> Result<(Self, LoadSummary)> {
        let report = store.load()?;
        let mut inventory = Self {
            records: Vec::with_capacity(report.records.len()),
            next_id: 1,
            store,
        };
        let mut summary = LoadSummary {
            skipped: report.skipped,
            first_run: report.first_run,
            ..LoadSummary::default()
        };

        for record in report.records {
            if inventory.contains(record.id()) {
                summary.duplicate_ids.push(record.id());
                continue;
            }
            inventory.advance_past(record.id());
            inventory.records.push(record);
        }
        summary.loaded = inventory.records.len();

        Ok((inventory, summary))
    }

    /// Hand out the next id. The counter never goes back.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Append `record`. Rejected without mutation if its id is taken.
    pub fn add(&mut self, record: Record) -> Result<Saved<()>> {
        if self.contains(record.id()) {
            return Err(StockError::DuplicateId(record.id()));
        }
        self.advance_past(record.id());
        self.records.push(record);
        Ok(self.persist(()))
    }

    /// Validate `draft`, give it a fresh id and add it.
    ///
    /// Ids are only consumed by drafts that validate.
    pub fn create(&mut self, draft: ItemDraft) -> Result<Saved<Created>> {
        let (record, substituted_expiry) = Record::from_draft(self.next_id, draft)?;
        self.next_id();
        let saved = self.add(record.clone())?;
        Ok(Saved {
            value: Created {
                record,
                substituted_expiry,
            },
            save_error: saved.save_error,
        })
    }

    pub fn find_by_id(&self, id: u64) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or(StockError::NotFound(id))
    }

    /// Apply `delta` to the quantity of item `id` and return the new quantity.
    pub fn update_stock(&mut self, id: u64, delta: i64) -> Result<Saved<i64>> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StockError::NotFound(id))?;

        let quantity = record.quantity();
        let updated = quantity
            .checked_add(delta)
            .ok_or(ValidationError::Overflow { field: "quantity" })?;
        if updated < 0 && delta < 0 {
            return Err(StockError::WouldGoNegative {
                id,
                quantity,
                delta,
            });
        }
        record.set_quantity(updated);

        Ok(self.persist(updated))
    }

    /// Remove item `id`, keeping the order of the rest, and hand it back.
    pub fn remove(&mut self, id: u64) -> Result<Saved<Record>> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StockError::NotFound(id))?;
        let removed = self.records.remove(pos);
        Ok(self.persist(removed))
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub fn location(&self) -> Option<&Path> {
        self.store.location()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn advance_past(&mut self, id: u64) {
        if id >= self.next_id {
            self.next_id = id.saturating_add(1);
        }
    }

    fn persist<T>(&mut self, value: T) -> Saved<T> {
        let save_error = self.store.save_all(&self.records).err();
        Saved { value, save_error }
    }
}
