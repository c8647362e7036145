//! # API Facade
//!
//! [`StockApi`] is the single entry point for UI clients. It owns the
//! [`Inventory`] and dispatches every request to the matching command in
//! `commands/*.rs`, returning a structured [`CmdResult`].
//!
//! The API does no terminal I/O and holds no business rules of its own.
//! It is generic over [`StorageBackend`] so the same facade runs against a
//! file in production and a `MemBackend` in tests.

use crate::commands;
use crate::config::StockConfig;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::NewProduct;
use crate::store::{file_backend, StorageBackend};
use tracing::warn;

pub struct StockApi<B: StorageBackend> {
    inventory: Inventory<B>,
    paths: commands::StockPaths,
}

impl<B: StorageBackend> StockApi<B> {
    pub fn new(inventory: Inventory<B>, paths: commands::StockPaths) -> Self {
        Self { inventory, paths }
    }

    /// Warnings collected while the inventory was loaded.
    pub fn load_messages(&self) -> Vec<commands::CmdMessage> {
        commands::helpers::load_messages(&self.inventory)
    }

    pub fn add_product(&mut self, new: NewProduct) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, new)
    }

    pub fn remove_product(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.inventory, id)
    }

    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> Result<commands::CmdResult> {
        commands::update::set_quantity(&mut self.inventory, id, quantity)
    }

    pub fn set_price(&mut self, id: &str, price: f64) -> Result<commands::CmdResult> {
        commands::update::set_price(&mut self.inventory, id, price)
    }

    pub fn rename_product(&mut self, id: &str, name: &str) -> Result<commands::CmdResult> {
        commands::update::rename(&mut self.inventory, id, name)
    }

    pub fn update_product(
        &mut self,
        id: &str,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.inventory, id, quantity, price)
    }

    pub fn search_products(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.inventory, term)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn summary(&self) -> Result<commands::CmdResult> {
        commands::summary::run(&self.inventory)
    }

    pub fn name_groups(&self) -> Result<commands::CmdResult> {
        commands::summary::groups(&self.inventory)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn inventory(&self) -> &Inventory<B> {
        &self.inventory
    }

    pub fn paths(&self) -> &commands::StockPaths {
        &self.paths
    }
}

/// Open the file-backed inventory described by `<home>/config.json`.
///
/// A config file that cannot be parsed falls back to defaults with a warning.
pub fn open_file_store(paths: commands::StockPaths) -> StockApi<Box<dyn StorageBackend>> {
    let config = StockConfig::load(&paths.home).unwrap_or_else(|e| {
        warn!(home = %paths.home.display(), error = %e, "ignoring unreadable config");
        StockConfig::default()
    });
    let backend = file_backend(config.format, &config.data_path(&paths.home));
    StockApi::new(Inventory::open(backend), paths)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StockPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use tempfile::TempDir;

    fn mem_api(dir: &TempDir) -> StockApi<MemBackend> {
        StockApi::new(
            Inventory::open(MemBackend::new()),
            StockPaths::new(dir.path()),
        )
    }

    #[test]
    fn dispatches_mutations_to_inventory() {
        let dir = TempDir::new().unwrap();
        let mut api = mem_api(&dir);

        api.add_product(NewProduct::new("1", "Laptop", 5, 899.99))
            .unwrap();
        api.set_quantity("1", 4).unwrap();
        api.set_price("1", 850.0).unwrap();
        api.rename_product("1", "Notebook").unwrap();

        let product = api.inventory().get("1").unwrap();
        assert_eq!(product.name(), "Notebook");
        assert_eq!(product.quantity(), 4);
        assert_eq!(product.price(), 850.0);

        api.remove_product("1").unwrap();
        assert!(api.list_products().unwrap().listed_products.is_empty());
    }

    #[test]
    fn open_file_store_honours_text_format() {
        let dir = TempDir::new().unwrap();
        let paths = StockPaths::new(dir.path());
        let config = StockConfig {
            format: crate::store::StorageFormat::Text,
            data_file: None,
        };
        config.save(dir.path()).unwrap();

        let mut api = open_file_store(paths);
        assert!(dir.path().join("inventory.txt").exists());
        api.add_product(NewProduct::new("7", "Stapler", 3, 4.5))
            .unwrap();

        let on_disk = std::fs::read_to_string(dir.path().join("inventory.txt")).unwrap();
        assert!(on_disk.ends_with("7,Stapler,3,4.5\n"));
    }

    #[test]
    fn corrupt_config_falls_back_to_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.json"), "{ nope").unwrap();

        let mut api = open_file_store(StockPaths::new(dir.path()));
        api.add_product(NewProduct::new("1", "Glue", 1, 1.0)).unwrap();
        assert!(dir.path().join("inventory.json").exists());
    }
}
