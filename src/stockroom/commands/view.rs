use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Inventory;

pub fn run(inventory: &Inventory, ids: &[u32]) -> Result<CmdResult> {
    let products = ids
        .iter()
        .map(|id| inventory.read(*id))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_products(products))
}
