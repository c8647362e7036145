//! # Inventory
//!
//! [`Inventory`] owns the product collection. It is the only code that
//! creates, mutates or drops a [`Product`], and it writes the entire
//! collection through to its [`StorageBackend`] after every successful
//! mutation.
//!
//! ## Outcomes
//!
//! - Rejected input (`Rejection`) and unknown ids (`NotFound`) come back as
//!   `Err` and leave both memory and storage untouched. This includes ids the
//!   backend reports it could not read back.
//! - A successful mutation comes back as a [`Receipt`]. If the write-through
//!   failed, the receipt carries [`WriteStatus::Degraded`]: the in-memory
//!   change stands and the next successful save will carry it to disk.
//!
//! ## Check Ordering
//!
//! The single-field updates validate the new value *before* looking up the
//! id, so a negative quantity against an unknown id is reported as rejected,
//! not as not found.

use crate::error::{Rejection, Result, StockError};
use crate::model::{validate_name, validate_price, validate_quantity, NewProduct, Product, Summary};
use crate::store::{IssueKind, LoadIssue, StorageBackend};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

/// A single field-level change applied to the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Added(Product),
    Removed(Product),
    QuantityChanged { id: String, from: u64, to: u64 },
    PriceChanged { id: String, from: f64, to: f64 },
    Renamed { id: String, from: String, to: String },
}

/// Whether the write-through after a mutation reached the backing store.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteStatus {
    Persisted,
    /// The change lives in memory only; the reason is the storage error.
    Degraded(String),
    /// Nothing changed, so nothing was written.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub changes: Vec<Change>,
    pub write: WriteStatus,
}

impl Receipt {
    pub fn is_degraded(&self) -> bool {
        matches!(self.write, WriteStatus::Degraded(_))
    }
}

pub struct Inventory<B: StorageBackend> {
    backend: B,
    products: BTreeMap<String, Product>,
    issues: Vec<LoadIssue>,
}

impl<B: StorageBackend> Inventory<B> {
    /// Load whatever the backend holds. Never fails: an unreadable store
    /// yields an empty inventory plus a diagnostic in [`Self::load_issues`].
    pub fn open(backend: B) -> Self {
        let mut products = BTreeMap::new();
        let mut issues = Vec::new();

        match backend.load() {
            Ok(loaded) => {
                issues = loaded.issues;
                for product in loaded.records {
                    if products.contains_key(product.id()) {
                        issues.push(LoadIssue::whole_store(IssueKind::DuplicateId(
                            product.id().to_string(),
                        )));
                        continue;
                    }
                    products.insert(product.id().to_string(), product);
                }
            }
            Err(e) => {
                issues.push(LoadIssue::whole_store(IssueKind::Unreadable(e.to_string())));
            }
        }

        for issue in &issues {
            warn!(location = %backend.location(), "{}", issue);
        }
        info!(
            location = %backend.location(),
            count = products.len(),
            skipped = issues.len(),
            "inventory loaded"
        );

        Self {
            backend,
            products,
            issues,
        }
    }

    pub fn add(&mut self, new: NewProduct) -> Result<Receipt> {
        let id = new.id.trim();
        if id.is_empty() {
            return Err(Rejection::EmptyId.into());
        }
        if self.products.contains_key(id) {
            return Err(Rejection::DuplicateId(id.to_string()).into());
        }

        let product = Product::validate(new)?;
        self.backend.check(&product)?;
        self.products
            .insert(product.id().to_string(), product.clone());
        Ok(self.commit(vec![Change::Added(product)]))
    }

    pub fn remove(&mut self, id: &str) -> Result<Receipt> {
        let id = id.trim();
        let removed = self
            .products
            .remove(id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))?;
        Ok(self.commit(vec![Change::Removed(removed)]))
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<Receipt> {
        let quantity = validate_quantity(quantity)?;
        let product = self.product_mut(id)?;
        let change = Change::QuantityChanged {
            id: product.id().to_string(),
            from: product.quantity(),
            to: quantity,
        };
        product.set_quantity(quantity);
        Ok(self.commit(vec![change]))
    }

    pub fn update_price(&mut self, id: &str, price: f64) -> Result<Receipt> {
        let price = validate_price(price)?;
        let product = self.product_mut(id)?;
        let change = Change::PriceChanged {
            id: product.id().to_string(),
            from: product.price(),
            to: price,
        };
        product.set_price(price);
        Ok(self.commit(vec![change]))
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<Receipt> {
        let name = validate_name(name)?;
        let product = self.product_mut(id)?;
        let change = Change::Renamed {
            id: product.id().to_string(),
            from: product.name().to_string(),
            to: name.clone(),
        };
        product.set_name(name);
        Ok(self.commit(vec![change]))
    }

    /// Apply an optional quantity and an optional price in one write. Both
    /// values are validated before either is applied.
    pub fn update(&mut self, id: &str, quantity: Option<i64>, price: Option<f64>) -> Result<Receipt> {
        let quantity = quantity.map(validate_quantity).transpose()?;
        let price = price.map(validate_price).transpose()?;
        let product = self.product_mut(id)?;

        let mut changes = Vec::new();
        if let Some(quantity) = quantity {
            changes.push(Change::QuantityChanged {
                id: product.id().to_string(),
                from: product.quantity(),
                to: quantity,
            });
            product.set_quantity(quantity);
        }
        if let Some(price) = price {
            changes.push(Change::PriceChanged {
                id: product.id().to_string(),
                from: product.price(),
                to: price,
            });
            product.set_price(price);
        }

        if changes.is_empty() {
            return Ok(Receipt {
                changes,
                write: WriteStatus::Unchanged,
            });
        }
        Ok(self.commit(changes))
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id.trim())
    }

    /// Case-insensitive substring match on names. An empty term matches
    /// every product.
    pub fn search_by_name(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .values()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn list_all(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    pub fn aggregate(&self) -> Summary {
        Summary {
            count: self.products.len(),
            total_value: self.products.values().map(Product::value).sum(),
        }
    }

    /// Distinct first words of product names, e.g. "Cable" for
    /// "Cable HDMI" and "Cable USB".
    pub fn name_groups(&self) -> BTreeSet<String> {
        self.products
            .values()
            .filter_map(|p| p.name().split_whitespace().next())
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Records skipped while opening.
    pub fn load_issues(&self) -> &[LoadIssue] {
        &self.issues
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn product_mut(&mut self, id: &str) -> Result<&mut Product> {
        let id = id.trim();
        self.products
            .get_mut(id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))
    }

    fn commit(&self, changes: Vec<Change>) -> Receipt {
        let snapshot: Vec<&Product> = self.products.values().collect();
        let write = match self.backend.save(&snapshot) {
            Ok(()) => WriteStatus::Persisted,
            Err(e) => {
                warn!(
                    location = %self.backend.location(),
                    error = %e,
                    "write-through failed, change kept in memory only"
                );
                WriteStatus::Degraded(e.to_string())
            }
        };
        Receipt { changes, write }
    }
}
