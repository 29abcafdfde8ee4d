use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{ItemDraft, SENTINEL_EXPIRY};
use crate::store::DataStore;

pub fn run<S: DataStore>(inventory: &mut Inventory<S>, draft: ItemDraft) -> Result<CmdResult> {
    let saved = inventory.create(draft)?;
    let created = saved.value;
    let mut result = CmdResult::default();

    if let Some(reason) = &created.substituted_expiry {
        result.add_message(CmdMessage::warning(format!(
            "{}; using {} instead",
            reason, SENTINEL_EXPIRY
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Item added successfully! ID: {}",
        created.record.id()
    )));
    result.note_save_error(saved.save_error);
    result.affected_items.push(created.record);

    Ok(result)
}
