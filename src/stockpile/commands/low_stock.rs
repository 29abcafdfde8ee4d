use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::query;
use crate::store::DataStore;

pub fn run<S: DataStore>(inventory: &Inventory<S>, threshold: i64) -> Result<CmdResult> {
    let low: Vec<_> = query::low_stock(inventory.records(), threshold)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_threshold(threshold);
    if low.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No items below threshold of {} units.",
            threshold
        )));
    }
    Ok(result.with_listed_items(low))
}
