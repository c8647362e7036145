use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::NewProduct;
use crate::store::StorageBackend;

use super::helpers::receipt_result;

pub fn run<B: StorageBackend>(inventory: &mut Inventory<B>, new: NewProduct) -> Result<CmdResult> {
    let receipt = inventory.add(new)?;
    Ok(receipt_result(inventory, receipt))
}
