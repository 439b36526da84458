use crate::commands::{save_problems, CmdMessage, CmdResult};
use crate::error::{Result, SaitamaError};
use crate::lookup::find_by_id_mut;
use crate::model::normalize_id;
use crate::store::DataStore;
use chrono::Utc;

/// Records a solve: bumps the count and sets `last_solved` to now.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let id = normalize_id(id);
    let mut problems = store.load()?;

    let solved = match find_by_id_mut(&mut problems, &id) {
        Some((_, problem)) => {
            problem.mark_solved(Utc::now());
            problem.clone()
        }
        None => return Err(SaitamaError::ProblemNotFound(id)),
    };

    let mut result = CmdResult::default();
    save_problems(store, &problems, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "'{}' solved {} time{}",
        solved.id,
        solved.solve_count,
        if solved.solve_count == 1 { "" } else { "s" }
    )));
    Ok(result.with_affected_problems(vec![solved]))
}
