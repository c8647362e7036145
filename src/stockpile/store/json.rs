use super::{IssueKind, LoadIssue, Loaded, StorageBackend};
use crate::error::{Result, StockError};
use crate::model::{NewProduct, Product};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk shape of one product. The keys predate the Rust port and are kept
/// so existing inventory files keep loading.
#[derive(Serialize)]
struct RecordOut<'a> {
    id: &'a str,
    nombre: &'a str,
    cantidad: u64,
    precio: f64,
}

#[derive(Deserialize)]
struct RecordIn {
    id: RecordId,
    #[serde(rename = "nombre", alias = "name")]
    name: String,
    #[serde(rename = "cantidad", alias = "quantity")]
    quantity: i64,
    #[serde(rename = "precio", alias = "price")]
    price: f64,
}

/// Older files used integer ids.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Text(s) => s,
            RecordId::Number(n) => n.to_string(),
        }
    }
}

/// Stores the inventory as a pretty-printed JSON array.
pub struct JsonBackend {
    path: PathBuf,
}

impl JsonBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_entries(content: &str) -> Loaded {
    let mut loaded = Loaded::default();

    let entries: Vec<serde_json::Value> = match serde_json::from_str(content) {
        Ok(entries) => entries,
        Err(e) => {
            loaded
                .issues
                .push(LoadIssue::whole_store(IssueKind::CorruptDocument(e.to_string())));
            return loaded;
        }
    };

    for (i, value) in entries.into_iter().enumerate() {
        let position = i + 1;
        let record: RecordIn = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                loaded
                    .issues
                    .push(LoadIssue::at(position, IssueKind::MalformedEntry(e.to_string())));
                continue;
            }
        };

        let request = NewProduct::new(record.id, record.name, record.quantity, record.price);
        match Product::validate(request) {
            Ok(product) => loaded.records.push(product),
            Err(rejection) => loaded
                .issues
                .push(LoadIssue::at(position, IssueKind::Invalid(rejection))),
        }
    }

    loaded
}

impl StorageBackend for JsonBackend {
    fn load(&self) -> Result<Loaded> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no inventory file yet");
            return Ok(Loaded::default());
        }

        let content = fs::read_to_string(&self.path).map_err(StockError::Io)?;
        if content.trim().is_empty() {
            return Ok(Loaded::default());
        }
        Ok(parse_entries(&content))
    }

    fn save(&self, products: &[&Product]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }

        let records: Vec<RecordOut<'_>> = products
            .iter()
            .map(|p| RecordOut {
                id: p.id(),
                nombre: p.name(),
                cantidad: p.quantity(),
                precio: p.price(),
            })
            .collect();

        let file = File::create(&self.path).map_err(StockError::Io)?;
        let mut writer = BufWriter::new(file);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        records
            .serialize(&mut ser)
            .map_err(StockError::Serialization)?;
        writer.write_all(b"\n").map_err(StockError::Io)?;
        writer.flush().map_err(StockError::Io)?;

        debug!(path = %self.path.display(), count = records.len(), "inventory saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
