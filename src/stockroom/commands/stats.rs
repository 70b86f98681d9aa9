use crate::commands::{CmdResult, InventoryStats};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let stats = InventoryStats {
        count: inventory.count(),
        total_value: inventory.total_value(),
        value_by_category: inventory.value_by_category(),
        count_by_category: inventory.count_by_category(),
    };
    Ok(CmdResult::default().with_stats(stats))
}
