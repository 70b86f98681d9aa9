use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stockroom(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.env("STOCKROOM_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_and_list() {
    let home = TempDir::new().unwrap();

    stockroom(&home)
        .args(["add", "Hammer", "Tools", "12.5", "4", "-d", "16oz, claw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added (#1): Hammer"));

    stockroom(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hammer"))
        .stdout(predicate::str::contains("$50.00"));

    let written = fs::read_to_string(home.path().join("inventory.csv")).unwrap();
    assert_eq!(
        written,
        "ID,Name,Category,Price,Quantity,Description,Total Value\n\
         1,\"Hammer\",\"Tools\",12.5,4,\"16oz, claw\",50\n"
    );
}

#[test]
fn test_bare_invocation_lists() {
    let home = TempDir::new().unwrap();
    stockroom(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));
}

#[test]
fn test_show_unknown_id_fails() {
    let home = TempDir::new().unwrap();
    stockroom(&home)
        .args(["show", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product with ID 3 not found"));
}

#[test]
fn test_add_rejects_empty_name() {
    let home = TempDir::new().unwrap();
    stockroom(&home)
        .args(["add", "", "Tools", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name cannot be empty"));
    assert!(!home.path().join("inventory.csv").exists());
}

#[test]
fn test_update_and_delete() {
    let home = TempDir::new().unwrap();
    stockroom(&home)
        .args(["add", "Saw", "Tools", "19.99", "3"])
        .assert()
        .success();
    stockroom(&home)
        .args(["add", "Glue", "Craft", "2.5", "40"])
        .assert()
        .success();

    stockroom(&home)
        .args(["update", "1", "--quantity", "30", "--name", "Hand Saw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated (#1): Hand Saw"));

    stockroom(&home)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hand Saw"))
        .stdout(predicate::str::contains("Quantity:    30"));

    stockroom(&home)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product deleted (#1): Hand Saw"));

    stockroom(&home)
        .args(["add", "Tape", "Craft", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added (#3): Tape"));
}

#[test]
fn test_search_and_category() {
    let home = TempDir::new().unwrap();
    for args in [
        ["add", "Claw Hammer", "Tools", "12.5", "4"],
        ["add", "Ladder", "Tools & Hardware", "99", "2"],
    ] {
        stockroom(&home).args(args).assert().success();
    }

    stockroom(&home)
        .args(["category", "Tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Claw Hammer"))
        .stdout(predicate::str::contains("Ladder").not());

    stockroom(&home)
        .args(["search", "hammer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products with a name containing 'hammer'"));
}

#[test]
fn test_low_stock_uses_threshold() {
    let home = TempDir::new().unwrap();
    for args in [
        ["add", "Five", "X", "1", "5"],
        ["add", "Ten", "X", "1", "10"],
        ["add", "Fifteen", "X", "1", "15"],
    ] {
        stockroom(&home).args(args).assert().success();
    }

    stockroom(&home)
        .args(["low-stock", "-t", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Five"))
        .stdout(predicate::str::contains("Ten").not())
        .stdout(predicate::str::contains("1 product(s) below 10 in stock"));

    stockroom(&home)
        .args(["config", "low-stock-threshold", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("low-stock-threshold set to 16"))
        .stdout(predicate::str::contains("currency = ").not());

    stockroom(&home)
        .arg("low-stock")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 product(s) below 16 in stock"));
}

#[test]
fn test_stats_json() {
    let home = TempDir::new().unwrap();
    stockroom(&home)
        .args(["add", "Hammer", "Tools", "10", "2"])
        .assert()
        .success();
    stockroom(&home)
        .args(["add", "Glue", "Craft", "2.5", "4"])
        .assert()
        .success();

    let output = stockroom(&home)
        .args(["stats", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["count"], 2);
    assert_eq!(stats["total_value"], 30.0);
    assert_eq!(stats["count_by_category"]["Tools"], 1);
    assert_eq!(stats["value_by_category"]["Craft"], 10.0);
}

#[test]
fn test_import_skips_bad_rows_and_export_round_trips() {
    let home = TempDir::new().unwrap();
    let source = home.path().join("source.csv");
    fs::write(
        &source,
        "ID,Name,Category,Price,Quantity,Description,Total Value\r\n\
         7,\"A, \"\"B\"\"\",\"C\",19.99,3,\"line with, comma and \"\"quote\"\"\",59.97\r\n\
         8,\"Broken\",\"C\",free,1,\"\",0\r\n",
    )
    .unwrap();

    stockroom(&home)
        .arg("import")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 product(s)"))
        .stdout(predicate::str::contains("Skipped 1 malformed row(s)"));

    let exported = home.path().join("exported.csv");
    stockroom(&home)
        .arg("export")
        .arg(&exported)
        .assert()
        .success();

    let written = fs::read_to_string(&exported).unwrap();
    assert!(written.contains(
        "7,\"A, \"\"B\"\"\",\"C\",19.99,3,\"line with, comma and \"\"quote\"\"\",59.97\n"
    ));

    stockroom(&home)
        .args(["add", "Next", "C", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added (#8): Next"));
}

#[test]
fn test_import_missing_file_fails() {
    let home = TempDir::new().unwrap();
    stockroom(&home)
        .args(["import", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_file_flag_overrides_data_file() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("shop.csv");

    stockroom(&home)
        .arg("--file")
        .arg(&custom)
        .args(["add", "Hammer", "Tools", "1", "1"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!home.path().join("inventory.csv").exists());
}

#[test]
fn test_config_show_and_reject() {
    let home = TempDir::new().unwrap();
    stockroom(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("low-stock-threshold = 10"))
        .stdout(predicate::str::contains("currency = $"));

    stockroom(&home)
        .args(["config", "low-stock-threshold", "lots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("must be a non-negative integer"));
}
