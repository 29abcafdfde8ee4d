use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn run<S: DataStore>(inventory: &Inventory<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_items(inventory.records().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::InventoryFixture;

    #[test]
    fn lists_in_insertion_order() {
        let mut inventory = InventoryFixture::new().with_items(3).inventory;
        inventory.remove(1).unwrap();

        let result = run(&inventory).unwrap();
        let names: Vec<_> = result.listed_items.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Item 2", "Item 3"]);
    }

    #[test]
    fn empty_inventory_lists_nothing() {
        let inventory = InventoryFixture::new().inventory;
        assert!(run(&inventory).unwrap().listed_items.is_empty());
    }
}
