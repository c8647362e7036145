use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(inventory: &Inventory<B>) -> Result<CmdResult> {
    let products = inventory.list_all().into_iter().cloned().collect();
    Ok(CmdResult::default()
        .with_listed_products(products)
        .with_summary(inventory.aggregate()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::NewProduct;
    use crate::store::memory::MemBackend;

    #[test]
    fn lists_products_ordered_by_id() {
        let mut inv = Inventory::open(MemBackend::new());
        add::run(&mut inv, NewProduct::new("b", "Second", 1, 1.0)).unwrap();
        add::run(&mut inv, NewProduct::new("a", "First", 1, 1.0)).unwrap();

        let result = run(&inv).unwrap();
        let ids: Vec<_> = result.listed_products.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(result.summary.unwrap().count, 2);
    }

    #[test]
    fn empty_inventory_lists_nothing() {
        let inv = Inventory::open(MemBackend::new());
        let result = run(&inv).unwrap();
        assert!(result.listed_products.is_empty());
    }
}
