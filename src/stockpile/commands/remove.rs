use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn run<S: DataStore>(inventory: &mut Inventory<S>, id: u64) -> Result<CmdResult> {
    let saved = inventory.remove(id)?;
    let mut result = CmdResult::default();

    result.add_message(CmdMessage::success(format!(
        "Item with ID {} has been removed: {}",
        id,
        saved.value.name()
    )));
    result.note_save_error(saved.save_error);
    result.affected_items.push(saved.value);
    Ok(result)
}
