use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(inventory: &Inventory<B>, term: &str) -> Result<CmdResult> {
    let hits: Vec<_> = inventory
        .search_by_name(term)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if hits.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products found matching '{}'.",
            term
        )));
    }
    Ok(result.with_listed_products(hits))
}
