use crate::commands::{AppPaths, CmdResult};
use crate::error::Result;

pub fn run(paths: &AppPaths) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.paths = vec![
        ("data".to_string(), paths.data_path.clone()),
        ("backups".to_string(), paths.backup_dir.clone()),
        ("config".to_string(), paths.app_dir.clone()),
    ];
    Ok(result)
}
