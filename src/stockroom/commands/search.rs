use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;

pub fn by_name(inventory: &Inventory, term: &str) -> Result<CmdResult> {
    let found = inventory.find_by_name(term);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products with a name containing '{}'",
            term
        )));
    }
    Ok(result.with_listed_products(found))
}

pub fn by_category(inventory: &Inventory, category: &str) -> Result<CmdResult> {
    let found = inventory.find_by_category(category);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products found in category '{}'",
            category
        )));
    }
    Ok(result.with_listed_products(found))
}
