use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;
use std::collections::HashSet;

/// Deletes every listed product. All ids are checked first, so an unknown id
/// deletes nothing. A repeated id is deleted once.
pub fn run(inventory: &mut Inventory, ids: &[u32]) -> Result<CmdResult> {
    let mut seen = HashSet::new();
    let targets = ids
        .iter()
        .filter(|id| seen.insert(**id))
        .map(|id| inventory.read(*id))
        .collect::<Result<Vec<_>>>()?;

    let mut result = CmdResult::default();
    for product in targets {
        inventory.delete(product.id())?;
        result.add_message(CmdMessage::success(format!(
            "Product deleted (#{}): {}",
            product.id(),
            product.name
        )));
        result.affected_products.push(product);
    }

    Ok(result)
}
