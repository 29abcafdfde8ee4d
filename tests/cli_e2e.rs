use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn data_file(temp: &TempDir) -> PathBuf {
    temp.path().join("inventory_data.txt")
}

fn stockpile(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .arg("--file")
        .arg(data_file(temp));
    cmd
}

fn contents(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn add_writes_one_line_per_item() {
    let temp = TempDir::new().unwrap();

    stockpile(&temp)
        .args(["add", "electronics", "Gaming", "Laptop"])
        .args(["--price", "999.99", "--qty", "4", "--brand", "Acme", "--warranty", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added successfully! ID: 1"));

    stockpile(&temp)
        .args(["add", "grocery", "Milk", "--price", "1.25", "--qty", "30"])
        .args(["--category", "Dairy", "--expires", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 2"));

    stockpile(&temp)
        .args(["add", "generic", "Stapler", "--price", "7.5", "--qty", "12"])
        .assert()
        .success();

    assert_eq!(
        contents(&data_file(&temp)),
        "1,Electronics,Gaming Laptop,999.99,4,Acme,24\n\
         2,Grocery,Milk,1.25,30,2025-06-01,Dairy\n\
         3,Generic,Stapler,7.5,12,General\n"
    );
}

#[test]
fn list_is_the_default_command() {
    let temp = TempDir::new().unwrap();
    fs::write(data_file(&temp), "1,Generic,Tape,2.5,3,Office\n").unwrap();

    stockpile(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tape").and(predicate::str::contains("Category: Office")));
}

#[test]
fn empty_inventory_lists_nothing() {
    let temp = TempDir::new().unwrap();

    stockpile(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items in inventory."));
    // Listing never creates the file.
    assert!(!data_file(&temp).exists());
}

#[test]
fn stock_cannot_go_negative() {
    let temp = TempDir::new().unwrap();
    fs::write(data_file(&temp), "1,Generic,Tape,2.5,3,Office\n").unwrap();

    stockpile(&temp)
        .args(["stock", "1", "remove", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tape now has 0 in stock"));

    stockpile(&temp)
        .args(["stock", "1", "remove", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));

    assert_eq!(contents(&data_file(&temp)), "1,Generic,Tape,2.5,0,Office\n");
}

#[test]
fn remove_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(data_file(&temp), "1,Generic,Tape,2.5,3,Office\n").unwrap();

    stockpile(&temp)
        .args(["rm", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item with ID 9 not found"));

    assert_eq!(contents(&data_file(&temp)), "1,Generic,Tape,2.5,3,Office\n");
}

#[test]
fn ids_continue_after_highest_persisted() {
    let temp = TempDir::new().unwrap();
    fs::write(data_file(&temp), "7,Generic,Tape,2.5,3,Office\n").unwrap();

    stockpile(&temp)
        .args(["add", "generic", "Glue", "--price", "1", "--qty", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 8"));
}

#[test]
fn malformed_lines_are_skipped_with_warning() {
    let temp = TempDir::new().unwrap();
    fs::write(
        data_file(&temp),
        "1,Generic,Tape,2.5,3,Office\n2,Generic,Broken\n",
    )
    .unwrap();

    stockpile(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Skipped line 2")
                .and(predicate::str::contains("Tape"))
                .and(predicate::str::contains("Broken").not()),
        );
}

#[test]
fn search_and_low_stock() {
    let temp = TempDir::new().unwrap();
    fs::write(
        data_file(&temp),
        "1,Generic,Laptop,900,3,Electronics\n2,Generic,Mouse,20,10,Accessories\n",
    )
    .unwrap();

    stockpile(&temp)
        .args(["search", "lap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop").and(predicate::str::contains("Mouse").not()));

    stockpile(&temp)
        .args(["search", "keyboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items match 'keyboard'"));

    stockpile(&temp)
        .arg("low")
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop").and(predicate::str::contains("Mouse").not()));

    stockpile(&temp)
        .args(["low", "--threshold", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items below threshold of 2 units."));
}

#[test]
fn bad_expiry_date_falls_back_with_warning() {
    let temp = TempDir::new().unwrap();

    stockpile(&temp)
        .args(["add", "grocery", "Bread", "--price", "2", "--qty", "5"])
        .args(["--category", "Bakery", "--expires", "tomorrow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("using 2024-12-31 instead"));

    assert_eq!(
        contents(&data_file(&temp)),
        "1,Grocery,Bread,2,5,2024-12-31,Bakery\n"
    );
}

#[test]
fn names_with_commas_are_rejected() {
    let temp = TempDir::new().unwrap();

    stockpile(&temp)
        .args(["add", "generic", "Nuts,", "bolts", "--price", "1", "--qty", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name is invalid"));
    assert!(!data_file(&temp).exists());
}

#[test]
fn config_threshold_drives_low_report() {
    let temp = TempDir::new().unwrap();
    fs::write(data_file(&temp), "1,Generic,Tape,2.5,8,Office\n").unwrap();

    stockpile(&temp)
        .args(["config", "low-stock-threshold", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("low-stock-threshold set to 10"));
    assert!(temp.path().join("config.json").exists());

    stockpile(&temp)
        .arg("low")
        .assert()
        .success()
        .stdout(predicate::str::contains("Below 10 items").and(predicate::str::contains("Tape")));
}

#[test]
fn menu_reads_stdin() {
    let temp = TempDir::new().unwrap();

    stockpile(&temp)
        .arg("menu")
        .write_stdin("1\n3\nTape\n2.5\n3\nOffice\n4\n7\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Item added successfully! ID: 1")
                .and(predicate::str::contains("INVENTORY"))
                .and(predicate::str::contains("Goodbye!")),
        );

    assert_eq!(
        contents(&data_file(&temp)),
        "1,Generic,Tape,2.5,3,Office\n"
    );
}

#[test]
fn project_store_is_found_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    Command::cargo_bin("stockpile")
        .unwrap()
        .current_dir(temp.path())
        .env("NO_COLOR", "1")
        .arg("init")
        .assert()
        .success();

    Command::cargo_bin("stockpile")
        .unwrap()
        .current_dir(&nested)
        .env("NO_COLOR", "1")
        .args(["add", "generic", "Tape", "--price", "1", "--qty", "1"])
        .assert()
        .success();

    assert!(temp
        .path()
        .join(".stockpile")
        .join("inventory_data.txt")
        .exists());
}

#[test]
fn negative_quantity_line_survives_next_write() {
    let temp = TempDir::new().unwrap();
    fs::write(
        data_file(&temp),
        "1,Generic,Tape,2.5,-2,Office\n2,Generic,Glue,1,4,Office\n",
    )
    .unwrap();

    stockpile(&temp)
        .args(["add", "generic", "Pen", "--price", "1", "--qty", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 3"));

    assert_eq!(
        contents(&data_file(&temp)),
        "1,Generic,Tape,2.5,-2,Office\n\
         2,Generic,Glue,1,4,Office\n\
         3,Generic,Pen,1,1,General\n"
    );
}

#[test]
fn non_utf8_line_is_skipped_with_warning() {
    let temp = TempDir::new().unwrap();
    fs::write(
        data_file(&temp),
        b"1,Generic,Tape,2.5,3,Office\n2,Generic,Caf\xe9,1,1,Food\n",
    )
    .unwrap();

    stockpile(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Skipped line 2")
                .and(predicate::str::contains("Tape")),
        );
}
