use crate::commands::{save_problems, CmdMessage, CmdResult};
use crate::error::{Result, SaitamaError};
use crate::lookup::find_by_id_mut;
use crate::model::{normalize_id, Difficulty};
use crate::store::DataStore;

/// Fields to change; `None` leaves the current value alone.
#[derive(Debug, Clone, Default)]
pub struct ProblemUpdate {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub difficulty: Option<Difficulty>,
    pub platform: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

impl ProblemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.tags.is_none()
            && self.difficulty.is_none()
            && self.platform.is_none()
            && self.url.is_none()
            && self.notes.is_none()
    }
}

pub fn run<S: DataStore>(store: &mut S, id: &str, update: ProblemUpdate) -> Result<CmdResult> {
    let id = normalize_id(id);
    if update.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(SaitamaError::Api("Problem name cannot be empty".into()));
        }
    }

    let mut problems = store.load()?;
    let updated = {
        let (_, problem) = find_by_id_mut(&mut problems, &id)
            .ok_or_else(|| SaitamaError::ProblemNotFound(id.clone()))?;

        if let Some(name) = update.name {
            problem.name = name.trim().to_string();
        }
        if let Some(tags) = update.tags {
            problem.tags = tags;
        }
        if let Some(difficulty) = update.difficulty {
            problem.difficulty = difficulty.to_string();
        }
        if let Some(platform) = update.platform {
            problem.platform = platform;
        }
        if let Some(url) = update.url {
            problem.url = url;
        }
        if let Some(notes) = update.notes {
            problem.notes = notes;
        }
        problem.clone()
    };

    let mut result = CmdResult::default();
    save_problems(store, &problems, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Problem '{}' updated",
        updated.id
    )));
    Ok(result.with_affected_problems(vec![updated]))
}
