use crate::commands::{save_problems, CmdMessage, CmdResult};
use crate::error::{Result, SaitamaError};
use crate::lookup::find_by_id;
use crate::model::{normalize_id, Difficulty, Problem};
use crate::store::DataStore;

/// Input for a new problem, as collected by the UI.
#[derive(Debug, Clone, Default)]
pub struct NewProblem {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub platform: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

pub fn run<S: DataStore>(store: &mut S, input: NewProblem) -> Result<CmdResult> {
    let id = normalize_id(&input.id);
    if id.is_empty() {
        return Err(SaitamaError::Api("Problem ID cannot be empty".into()));
    }
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(SaitamaError::Api("Problem name cannot be empty".into()));
    }

    let mut problems = store.load()?;
    if find_by_id(&problems, &id).is_some() {
        return Err(SaitamaError::DuplicateId(id));
    }

    let mut problem = Problem::new(id, name, input.tags);
    if let Some(difficulty) = input.difficulty {
        problem.difficulty = difficulty.to_string();
    }
    problem.platform = input.platform.unwrap_or_default();
    problem.url = input.url.unwrap_or_default();
    problem.notes = input.notes.unwrap_or_default();

    problems.push(problem.clone());

    let mut result = CmdResult::default();
    save_problems(store, &problems, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Problem '{}' added ({})",
        problem.name, problem.id
    )));
    Ok(result.with_affected_problems(vec![problem]))
}
