use super::{IssueKind, LoadIssue, Loaded, StorageBackend};
use crate::error::{Rejection, Result, StockError};
use crate::model::{NewProduct, Product};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const HEADER: &str = "# Inventory file - format: id,name,quantity,price";

/// Stores one product per line as `id,name,quantity,price`.
///
/// Fields are not quoted, so a name containing a comma produces a line with
/// the wrong field count and is skipped on the next load. Ids that would
/// break the line layout are refused up front by [`StorageBackend::check`].
pub struct TextBackend {
    path: PathBuf,
}

impl TextBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn create_empty(&self) -> Result<()> {
        self.write_lines(&[])
    }

    fn write_lines(&self, products: &[&Product]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }

        let file = File::create(&self.path).map_err(StockError::Io)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", HEADER).map_err(StockError::Io)?;
        for p in products {
            writeln!(
                writer,
                "{},{},{},{}",
                p.id(),
                p.name(),
                p.quantity(),
                p.price()
            )
            .map_err(StockError::Io)?;
        }
        writer.flush().map_err(StockError::Io)?;
        Ok(())
    }
}

fn parse_line(line: &str) -> std::result::Result<Product, IssueKind> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 4 {
        return Err(IssueKind::WrongFieldCount(parts.len()));
    }

    let quantity_raw = parts[2].trim();
    let quantity: i64 = quantity_raw.parse().map_err(|_| IssueKind::BadNumber {
        field: "quantity",
        value: quantity_raw.to_string(),
    })?;

    let price_raw = parts[3].trim();
    let price: f64 = price_raw.parse().map_err(|_| IssueKind::BadNumber {
        field: "price",
        value: price_raw.to_string(),
    })?;

    Product::validate(NewProduct::new(parts[0], parts[1], quantity, price))
        .map_err(IssueKind::Invalid)
}

fn parse_lines(content: &[u8]) -> Loaded {
    let mut loaded = Loaded::default();

    for (i, raw) in content.split(|b| *b == b'\n').enumerate() {
        let raw = match std::str::from_utf8(raw) {
            Ok(raw) => raw,
            Err(e) => {
                loaded.issues.push(LoadIssue::at(
                    i + 1,
                    IssueKind::MalformedEntry(format!("line is not valid UTF-8: {}", e)),
                ));
                continue;
            }
        };
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Ok(product) => loaded.records.push(product),
            Err(kind) => loaded.issues.push(LoadIssue::at(i + 1, kind)),
        }
    }

    loaded
}

impl StorageBackend for TextBackend {
    fn load(&self) -> Result<Loaded> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "creating empty inventory file");
            if let Err(e) = self.create_empty() {
                warn!(path = %self.path.display(), error = %e, "could not create inventory file");
            }
            return Ok(Loaded::default());
        }

        let content = fs::read(&self.path).map_err(StockError::Io)?;
        Ok(parse_lines(&content))
    }

    fn save(&self, products: &[&Product]) -> Result<()> {
        self.write_lines(products)?;
        debug!(path = %self.path.display(), count = products.len(), "inventory saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn check(&self, product: &Product) -> std::result::Result<(), Rejection> {
        let reason = if product.id().starts_with('#') {
            "a leading '#' marks a comment line"
        } else if product.id().contains(',') {
            "',' separates fields"
        } else {
            return Ok(());
        };
        Err(Rejection::UnstorableId {
            id: product.id().to_string(),
            reason,
        })
    }
}
