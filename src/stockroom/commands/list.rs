use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_products(inventory.list_all().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::InventoryFixture;

    #[test]
    fn lists_in_insertion_order() {
        let mut inventory = InventoryFixture::new().with_products(3).inventory;
        inventory.delete(2).unwrap();

        let result = run(&inventory).unwrap();
        let names: Vec<_> = result
            .listed_products
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Test Product 1", "Test Product 3"]);
    }

    #[test]
    fn empty_inventory_lists_nothing() {
        let result = run(&Inventory::new()).unwrap();
        assert!(result.listed_products.is_empty());
    }
}
