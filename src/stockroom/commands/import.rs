use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;
use std::path::Path;

/// Replaces the inventory with the contents of `path`.
pub fn run(inventory: &mut Inventory, path: &Path) -> Result<CmdResult> {
    let report = inventory.load(path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} product(s) from {}",
        report.loaded,
        path.display()
    )));
    if report.skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} malformed row(s)",
            report.skipped
        )));
    }
    Ok(result.with_load_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::store::fixtures::InventoryFixture;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn replaces_inventory_and_reports_skips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            "ID,Name,Category,Price,Quantity,Description,Total Value\n\
             5,\"Saw\",\"Tools\",19.99,3,\"\",59.97\n\
             6,\"Glue\",\"Craft\",n/a,1,\"\",0\n",
        )
        .unwrap();

        let mut inventory = InventoryFixture::new().with_products(3).inventory;
        let result = run(&mut inventory, &path).unwrap();

        assert_eq!(inventory.count(), 1);
        assert_eq!(inventory.read(5).unwrap().name, "Saw");
        let report = result.load_report.unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn missing_file_keeps_inventory() {
        let dir = TempDir::new().unwrap();
        let mut inventory = InventoryFixture::new().with_products(3).inventory;

        let err = run(&mut inventory, &dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, InventoryError::FileOperationFailed { .. }));
        assert_eq!(inventory.count(), 3);
    }
}
