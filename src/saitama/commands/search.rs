use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Problem;
use crate::store::DataStore;

/// Case-insensitive substring match over the name and every tag.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let needle = query.trim().to_lowercase();
    let matches: Vec<Problem> = store
        .load()?
        .into_iter()
        .filter(|p| matches_query(p, &needle))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No problems found matching '{}'",
            query
        )));
    }
    Ok(result.with_listed_problems(matches))
}

fn matches_query(problem: &Problem, needle: &str) -> bool {
    problem.name.to_lowercase().contains(needle)
        || problem
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}
