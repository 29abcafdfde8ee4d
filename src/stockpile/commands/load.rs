use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: S) -> Result<(Inventory<S>, CmdResult)> {
    let (inventory, summary) = Inventory::open(store)?;
    let mut result = CmdResult::default();

    if summary.first_run {
        result.add_message(CmdMessage::info(
            "No existing data file found. Starting with empty inventory.",
        ));
    } else {
        let from = inventory
            .location()
            .map(|path| format!(" from {}", path.display()))
            .unwrap_or_default();
        result.add_message(CmdMessage::info(format!(
            "Loaded {} item(s){}",
            summary.loaded, from
        )));
    }

    for skipped in &summary.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipped line {}: {}",
            skipped.line_no, skipped.reason
        )));
    }
    for id in &summary.duplicate_ids {
        result.add_message(CmdMessage::warning(format!(
            "Skipped duplicate item ID {}",
            id
        )));
    }

    Ok((inventory, result))
}
