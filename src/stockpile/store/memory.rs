use super::{Loaded, StorageBackend};
use crate::error::{Result, StockError};
use crate::model::Product;
use std::cell::{Cell, RefCell};
use std::io;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the inventory is
/// single-threaded and `StorageBackend::save` takes `&self`.
#[derive(Default)]
pub struct MemBackend {
    records: RefCell<Vec<Product>>,
    saves: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail, to exercise degraded mode.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Make every subsequent `load` fail as if the store were unreadable.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Snapshot of what was last saved.
    pub fn saved(&self) -> Vec<Product> {
        self.records.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Loaded> {
        if self.simulate_read_error.get() {
            return Err(StockError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated read error",
            )));
        }
        Ok(Loaded {
            records: self.records.borrow().clone(),
            issues: Vec::new(),
        })
    }

    fn save(&self, products: &[&Product]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StockError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write error",
            )));
        }
        *self.records.borrow_mut() = products.iter().map(|p| (*p).clone()).collect();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
