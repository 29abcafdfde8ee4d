use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::query;
use crate::store::DataStore;

pub fn run<S: DataStore>(inventory: &Inventory<S>, term: &str) -> Result<CmdResult> {
    let found: Vec<_> = query::search(inventory.records(), term)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No items match '{}'", term.trim())));
    }
    Ok(result.with_listed_items(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{generic, InventoryFixture};

    fn fixture() -> InventoryFixture {
        InventoryFixture::new()
            .with_item(generic("Laptop", "Electronics", 3))
            .with_item(generic("Mouse", "Accessories", 10))
    }

    fn ids(result: &CmdResult) -> Vec<u64> {
        result.listed_items.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn search_examples() {
        let inventory = fixture().inventory;
        assert_eq!(ids(&run(&inventory, "lap").unwrap()), vec![1]);
        assert_eq!(ids(&run(&inventory, "ACCESSORIES").unwrap()), vec![2]);
        assert_eq!(ids(&run(&inventory, "").unwrap()), Vec::<u64>::new());
        assert_eq!(ids(&run(&inventory, "1").unwrap()), vec![1]);
    }

    #[test]
    fn no_match_adds_info_message() {
        let inventory = fixture().inventory;
        let result = run(&inventory, "keyboard").unwrap();
        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages[0].content, "No items match 'keyboard'");
    }
}
