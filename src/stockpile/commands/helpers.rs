use crate::commands::{CmdMessage, CmdResult};
use crate::inventory::{Change, Inventory, Receipt, WriteStatus};
use crate::store::StorageBackend;

pub(crate) fn describe_change(change: &Change) -> String {
    match change {
        Change::Added(p) => format!("Product added: {} ({})", p.name(), p.id()),
        Change::Removed(p) => format!("Product removed: {} ({})", p.name(), p.id()),
        Change::QuantityChanged { id, from, to } => {
            format!("Quantity updated ({}): {} -> {}", id, from, to)
        }
        Change::PriceChanged { id, from, to } => {
            format!("Price updated ({}): ${:.2} -> ${:.2}", id, from, to)
        }
        Change::Renamed { id, from, to } => {
            format!("Product renamed ({}): {} -> {}", id, from, to)
        }
    }
}

/// Turn a receipt into messages, flagging changes that never reached disk.
pub(crate) fn receipt_result<B: StorageBackend>(
    inventory: &Inventory<B>,
    receipt: Receipt,
) -> CmdResult {
    let mut result = CmdResult::default();

    for change in &receipt.changes {
        result.add_message(CmdMessage::success(describe_change(change)));
    }

    match &receipt.write {
        WriteStatus::Persisted => {}
        WriteStatus::Unchanged => result.add_message(CmdMessage::info("Nothing to update.")),
        WriteStatus::Degraded(reason) => result.add_message(CmdMessage::warning(format!(
            "Change applied in memory but not saved to {}: {}",
            inventory.location(),
            reason
        ))),
    }

    for change in receipt.changes {
        match change {
            Change::Added(p) | Change::Removed(p) => result.affected_products.push(p),
            Change::QuantityChanged { id, .. }
            | Change::PriceChanged { id, .. }
            | Change::Renamed { id, .. } => {
                if let Some(p) = inventory.get(&id) {
                    if !result.affected_products.iter().any(|a| a.id() == p.id()) {
                        result.affected_products.push(p.clone());
                    }
                }
            }
        }
    }

    result
}

/// Warnings for every record skipped when the inventory was opened.
pub(crate) fn load_messages<B: StorageBackend>(inventory: &Inventory<B>) -> Vec<CmdMessage> {
    inventory
        .load_issues()
        .iter()
        .map(|issue| CmdMessage::warning(format!("{}: {}", inventory.location(), issue)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::NewProduct;
    use crate::store::memory::MemBackend;

    #[test]
    fn degraded_receipt_adds_warning() {
        let mut inv = Inventory::open(MemBackend::new());
        inv.backend().set_simulate_write_error(true);
        let receipt = inv.add(NewProduct::new("1", "Tape", 2, 3.0)).unwrap();

        let result = receipt_result(&inv, receipt);
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert!(result.messages[1].content.contains("not saved to memory"));
        assert_eq!(result.affected_products.len(), 1);
    }

    #[test]
    fn field_changes_report_current_product_once() {
        let mut inv = Inventory::open(MemBackend::new());
        inv.add(NewProduct::new("1", "Tape", 2, 3.0)).unwrap();
        let receipt = inv.update("1", Some(4), Some(2.5)).unwrap();

        let result = receipt_result(&inv, receipt);
        assert_eq!(result.affected_products.len(), 1);
        assert_eq!(result.affected_products[0].quantity(), 4);
        assert_eq!(
            result.messages[1].content,
            "Price updated (1): $3.00 -> $2.50"
        );
    }
}
