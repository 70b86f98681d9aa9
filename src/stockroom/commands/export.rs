use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;
use std::path::Path;

pub fn run(inventory: &Inventory, path: &Path) -> Result<CmdResult> {
    inventory.save(path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} product(s) to {}",
        inventory.count(),
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::InventoryFixture;
    use tempfile::TempDir;

    #[test]
    fn writes_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let inventory = InventoryFixture::new().with_products(2).inventory;

        let result = run(&inventory, &path).unwrap();
        assert!(path.exists());
        assert!(result.messages[0].content.contains("2 product(s)"));
    }
}
