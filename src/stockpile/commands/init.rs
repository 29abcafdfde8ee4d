use crate::commands::{CmdMessage, CmdResult, StockPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &StockPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.store_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized stockpile store at {}",
        paths.store_dir.display()
    )));
    Ok(result)
}
