use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(inventory: &Inventory, threshold: u32) -> Result<CmdResult> {
    let low = inventory.low_stock(threshold);
    let mut result = CmdResult::default();
    if low.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products are below the stock threshold ({})",
            threshold
        )));
    } else {
        let value: f64 = low.iter().map(|p| p.total_value()).sum();
        result.add_message(CmdMessage::warning(format!(
            "{} product(s) below {} in stock, worth {:.2} in total",
            low.len(),
            threshold,
            value
        )));
    }
    Ok(result.with_listed_products(low))
}
