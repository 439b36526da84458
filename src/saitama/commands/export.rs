use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::transfer::export_to;
use std::path::Path;

pub fn run<S: DataStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let problems = store.load()?;
    export_to(&problems, path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} problems to {}",
        problems.len(),
        path.display()
    )));
    Ok(result)
}
