use crate::commands::{CmdMessage, CmdResult, ProductUpdate};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(inventory: &mut Inventory, update: &ProductUpdate) -> Result<CmdResult> {
    let current = inventory.read(update.id)?;

    let mut result = CmdResult::default();
    if update.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to update for product #{}",
            update.id
        )));
        return Ok(result);
    }

    let next = update.apply_to(&current);
    next.validate()?;
    inventory.update(update.id, &next)?;

    let updated = inventory.read(update.id)?;
    result.add_message(CmdMessage::success(format!(
        "Product updated (#{}): {}",
        updated.id(),
        updated.name
    )));
    Ok(result.with_affected_products(vec![updated]))
}
