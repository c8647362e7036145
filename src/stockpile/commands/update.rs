use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::StorageBackend;

use super::helpers::receipt_result;

pub fn set_quantity<B: StorageBackend>(
    inventory: &mut Inventory<B>,
    id: &str,
    quantity: i64,
) -> Result<CmdResult> {
    let receipt = inventory.update_quantity(id, quantity)?;
    Ok(receipt_result(inventory, receipt))
}

pub fn set_price<B: StorageBackend>(
    inventory: &mut Inventory<B>,
    id: &str,
    price: f64,
) -> Result<CmdResult> {
    let receipt = inventory.update_price(id, price)?;
    Ok(receipt_result(inventory, receipt))
}

pub fn rename<B: StorageBackend>(
    inventory: &mut Inventory<B>,
    id: &str,
    name: &str,
) -> Result<CmdResult> {
    let receipt = inventory.rename(id, name)?;
    Ok(receipt_result(inventory, receipt))
}

pub fn run<B: StorageBackend>(
    inventory: &mut Inventory<B>,
    id: &str,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<CmdResult> {
    let receipt = inventory.update(id, quantity, price)?;
    Ok(receipt_result(inventory, receipt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::model::NewProduct;
    use crate::store::memory::MemBackend;

    fn seeded() -> Inventory<MemBackend> {
        let mut inv = Inventory::open(MemBackend::new());
        add::run(&mut inv, NewProduct::new("2", "Mouse", 15, 29.99)).unwrap();
        inv
    }

    #[test]
    fn quantity_message_shows_transition() {
        let mut inv = seeded();
        let result = set_quantity(&mut inv, "2", 10).unwrap();
        assert_eq!(result.messages[0].content, "Quantity updated (2): 15 -> 10");
        assert_eq!(result.affected_products[0].quantity(), 10);
    }

    #[test]
    fn price_and_rename_update_product() {
        let mut inv = seeded();
        set_price(&mut inv, "2", 19.5).unwrap();
        let result = rename(&mut inv, "2", "Trackball").unwrap();
        assert_eq!(result.affected_products[0].name(), "Trackball");
        assert_eq!(result.affected_products[0].price(), 19.5);
    }

    #[test]
    fn empty_update_is_informational() {
        let mut inv = seeded();
        let result = run(&mut inv, "2", None, None).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
