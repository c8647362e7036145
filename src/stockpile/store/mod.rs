//! # Storage Layer
//!
//! The [`StorageBackend`] trait is the only thing the inventory knows about
//! durability. A backend loads the whole collection once, when the inventory
//! is opened, and overwrites the whole collection on every save.
//!
//! ## Implementations
//!
//! - [`json::JsonBackend`]: a JSON array document (`inventory.json`).
//! - [`text::TextBackend`]: one `id,name,quantity,price` line per product
//!   (`inventory.txt`).
//! - [`memory::MemBackend`]: no persistence, with switches to simulate read
//!   and write failures.
//!
//! ## Loading Is Lenient
//!
//! `load` only returns `Err` when the backing store cannot be read at all.
//! A record that fails to parse or validate is skipped and reported as a
//! [`LoadIssue`], so one bad line never costs the rest of the inventory.
//!
//! ## Saving Is A Full Rewrite
//!
//! Each `save` truncates and rewrites the target inside a single call. There
//! is no temp-file-and-rename step: a crash mid-write can leave a truncated
//! file behind, which the next load reports through its issues.

use crate::error::{Rejection, Result};
use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub mod json;
pub mod memory;
pub mod text;

/// Result of reading a backing store.
#[derive(Debug, Default)]
pub struct Loaded {
    /// Records that passed field validation, in file order.
    pub records: Vec<Product>,
    pub issues: Vec<LoadIssue>,
}

/// A record (or the whole document) that was skipped while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadIssue {
    /// 1-based line number for text stores, 1-based entry number for JSON.
    /// `None` when the problem concerns the whole store.
    pub position: Option<usize>,
    pub kind: IssueKind,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IssueKind {
    #[error("expected 4 fields, found {0}")]
    WrongFieldCount(usize),

    #[error("{field} is not a valid number: '{value}'")]
    BadNumber { field: &'static str, value: String },

    #[error("malformed entry: {0}")]
    MalformedEntry(String),

    #[error("{0}")]
    Invalid(Rejection),

    #[error("duplicate id '{0}', keeping the first occurrence")]
    DuplicateId(String),

    #[error("document is corrupt, starting empty: {0}")]
    CorruptDocument(String),

    #[error("store could not be read, continuing in memory only: {0}")]
    Unreadable(String),
}

impl LoadIssue {
    pub fn at(position: usize, kind: IssueKind) -> Self {
        Self {
            position: Some(position),
            kind,
        }
    }

    pub fn whole_store(kind: IssueKind) -> Self {
        Self {
            position: None,
            kind,
        }
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "record {} skipped: {}", pos, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Raw persistence for the product collection.
pub trait StorageBackend {
    /// Read every persisted record. Missing storage is an empty inventory,
    /// not an error.
    fn load(&self) -> Result<Loaded>;

    /// Replace the persisted collection with `products`.
    fn save(&self, products: &[&Product]) -> Result<()>;

    /// Human readable description of where data lives (a path for file
    /// backends).
    fn location(&self) -> String;

    /// Refuse a product this backend could not read back unchanged.
    fn check(&self, _product: &Product) -> std::result::Result<(), Rejection> {
        Ok(())
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn load(&self) -> Result<Loaded> {
        (**self).load()
    }

    fn save(&self, products: &[&Product]) -> Result<()> {
        (**self).save(products)
    }

    fn location(&self) -> String {
        (**self).location()
    }

    fn check(&self, product: &Product) -> std::result::Result<(), Rejection> {
        (**self).check(product)
    }
}

/// Which on-disk format a file backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    #[default]
    Json,
    Text,
}

impl StorageFormat {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            StorageFormat::Json => "inventory.json",
            StorageFormat::Text => "inventory.txt",
        }
    }
}

impl FromStr for StorageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(StorageFormat::Json),
            "text" | "txt" => Ok(StorageFormat::Text),
            other => Err(format!("unknown storage format '{}' (use json or text)", other)),
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageFormat::Json => write!(f, "json"),
            StorageFormat::Text => write!(f, "text"),
        }
    }
}

/// Build the file backend for `format` rooted at `path`.
pub fn file_backend(format: StorageFormat, path: &Path) -> Box<dyn StorageBackend> {
    match format {
        StorageFormat::Json => Box::new(json::JsonBackend::new(path)),
        StorageFormat::Text => Box::new(text::TextBackend::new(path)),
    }
}
