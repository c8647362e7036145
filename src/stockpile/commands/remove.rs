use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::StorageBackend;

use super::helpers::receipt_result;

pub fn run<B: StorageBackend>(inventory: &mut Inventory<B>, id: &str) -> Result<CmdResult> {
    let receipt = inventory.remove(id)?;
    Ok(receipt_result(inventory, receipt))
}
