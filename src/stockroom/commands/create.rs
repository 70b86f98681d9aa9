use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::Inventory;

pub fn run(inventory: &mut Inventory, product: Product) -> Result<CmdResult> {
    product.validate()?;

    let id = inventory.create(product)?;
    let created = inventory.read(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added (#{}): {}",
        id, created.name
    )));
    Ok(result.with_affected_products(vec![created]))
}
