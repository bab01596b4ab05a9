//! Test utilities and mock types for halftone development.
//!
//! Provides mock implementations of the core traits
//! ([`Record`](halftone_core::Record), [`Host`](halftone_core::Host))
//! and record fixtures for constructing test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use halftone_core::{FieldWriteError, Host, HostError, PaintError, Record};

mod fixtures;
pub use fixtures::{apartment, non_apartment};

/// Mock record backed by a plain field bag.
///
/// Pre-populate fields with [`with_field`](MockRecord::with_field);
/// mark fields read-only with [`with_read_only`](MockRecord::with_read_only)
/// to exercise the fatal write path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockRecord {
    fields: BTreeMap<String, String>,
    read_only: BTreeSet<String>,
}

impl MockRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Mark a field as read-only; writes to it fail.
    pub fn with_read_only(mut self, name: impl Into<String>) -> Self {
        self.read_only.insert(name.into());
        self
    }
}

impl Record for MockRecord {
    fn field(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldWriteError> {
        if self.read_only.contains(name) {
            return Err(FieldWriteError {
                field: name.to_string(),
                reason: "field is read-only".to_string(),
            });
        }
        self.fields.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// Shared handle onto a [`MockHost`]-owned record.
///
/// Snapshot handles returned by `fetch_rooms` write through to the
/// host's storage, matching the handle identity of real host elements.
#[derive(Clone, Debug)]
pub struct SharedRecord(Rc<RefCell<MockRecord>>);

impl Record for SharedRecord {
    fn field(&self, name: &str) -> String {
        self.0.borrow().field(name)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldWriteError> {
        self.0.borrow_mut().set_field(name, value)
    }
}

/// Mock implementation of [`Host`].
///
/// Owns a set of records, serves shared handles from `fetch_rooms`, and
/// implements `run_in_transaction` with genuine rollback: on `Err` the
/// records are restored to their pre-transaction state, so tests can
/// assert that no partial mutations persist. Error reports are captured
/// for inspection via [`reported`](MockHost::reported).
#[derive(Debug, Default)]
pub struct MockHost {
    records: Vec<SharedRecord>,
    fetch_failure: Option<String>,
    last_transaction: Option<String>,
    reported: Vec<(String, String)>,
}

impl MockHost {
    pub fn new(records: Vec<MockRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| SharedRecord(Rc::new(RefCell::new(r))))
                .collect(),
            fetch_failure: None,
            last_transaction: None,
            reported: Vec::new(),
        }
    }

    /// Make the next `fetch_rooms` call fail with the given reason.
    pub fn with_fetch_failure(mut self, reason: impl Into<String>) -> Self {
        self.fetch_failure = Some(reason.into());
        self
    }

    /// Handle onto the n-th record for assertions.
    pub fn record(&self, index: usize) -> SharedRecord {
        self.records[index].clone()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Name of the most recent transaction, if any ran.
    pub fn last_transaction(&self) -> Option<&str> {
        self.last_transaction.as_deref()
    }

    /// `(title, message)` pairs captured from `report_error`.
    pub fn reported(&self) -> &[(String, String)] {
        &self.reported
    }
}

impl Host for MockHost {
    type Record = SharedRecord;

    fn fetch_rooms(&mut self) -> Result<Vec<SharedRecord>, HostError> {
        if let Some(reason) = &self.fetch_failure {
            return Err(HostError {
                reason: reason.clone(),
            });
        }
        Ok(self.records.clone())
    }

    fn run_in_transaction<T>(
        &mut self,
        name: &str,
        action: impl FnOnce(&mut Self) -> Result<T, PaintError>,
    ) -> Result<T, PaintError> {
        self.last_transaction = Some(name.to_string());
        let snapshot: Vec<MockRecord> = self.records.iter().map(|r| r.0.borrow().clone()).collect();
        match action(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                for (handle, saved) in self.records.iter().zip(snapshot) {
                    *handle.0.borrow_mut() = saved;
                }
                Err(err)
            }
        }
    }

    fn report_error(&mut self, title: &str, message: &str) {
        self.reported.push((title.to_string(), message.to_string()));
    }
}
