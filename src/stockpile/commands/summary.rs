use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(inventory: &Inventory<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_summary(inventory.aggregate()))
}

pub fn groups<B: StorageBackend>(inventory: &Inventory<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_groups(inventory.name_groups().into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::NewProduct;
    use crate::store::memory::MemBackend;

    #[test]
    fn summary_matches_laptop_and_mouse_scenario() {
        let mut inv = Inventory::open(MemBackend::new());
        add::run(&mut inv, NewProduct::new("1", "Laptop", 5, 899.99)).unwrap();
        add::run(&mut inv, NewProduct::new("2", "Mouse", 15, 29.99)).unwrap();

        let summary = run(&inv).unwrap().summary.unwrap();
        assert_eq!(summary.count, 2);
        assert!((summary.total_value - 4949.80).abs() < 1e-6);
    }

    #[test]
    fn groups_are_sorted_first_words() {
        let mut inv = Inventory::open(MemBackend::new());
        add::run(&mut inv, NewProduct::new("1", "Mouse Pad", 1, 1.0)).unwrap();
        add::run(&mut inv, NewProduct::new("2", "Cable USB", 1, 1.0)).unwrap();
        add::run(&mut inv, NewProduct::new("3", "Mouse", 1, 1.0)).unwrap();

        let result = groups(&inv).unwrap();
        assert_eq!(result.groups, vec!["Cable".to_string(), "Mouse".to_string()]);
    }
}
