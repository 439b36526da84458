use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Difficulty, Problem};
use crate::store::DataStore;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub total_problems: usize,
    pub unique_tags: usize,
    pub average_tags: f64,
    pub solved_problems: usize,
    pub total_solves: u64,
    /// Problems per difficulty, in easy/medium/hard order, then unrated.
    pub by_difficulty: Vec<(String, usize)>,
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let problems = store.load()?;
    let mut result = CmdResult::default();
    result.stats = Some(compute(&problems));
    Ok(result)
}

fn compute(problems: &[Problem]) -> Stats {
    let total_tags: usize = problems.iter().map(|p| p.tags.len()).sum();
    let unique_tags = problems
        .iter()
        .flat_map(|p| p.tags.iter())
        .collect::<HashSet<_>>()
        .len();

    let mut by_difficulty: Vec<(String, usize)> = Difficulty::all()
        .iter()
        .map(|d| {
            let count = problems.iter().filter(|p| p.difficulty == d.as_str()).count();
            (d.to_string(), count)
        })
        .collect();
    let rated: usize = by_difficulty.iter().map(|(_, n)| n).sum();
    by_difficulty.push(("unrated".to_string(), problems.len() - rated));

    Stats {
        total_problems: problems.len(),
        unique_tags,
        average_tags: if problems.is_empty() {
            0.0
        } else {
            total_tags as f64 / problems.len() as f64
        },
        solved_problems: problems.iter().filter(|p| p.solve_count > 0).count(),
        total_solves: problems.iter().map(|p| u64::from(p.solve_count)).sum(),
        by_difficulty,
    }
}
