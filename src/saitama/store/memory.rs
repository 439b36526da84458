use super::{DataStore, SaveReport};
use crate::error::Result;
use crate::model::Problem;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    problems: Vec<Problem>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_problems(problems: Vec<Problem>) -> Self {
        Self { problems, saves: 0 }
    }

    /// Number of times `save` was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Problem>> {
        Ok(self.problems.clone())
    }

    fn save(&mut self, problems: &[Problem]) -> Result<SaveReport> {
        self.problems = problems.to_vec();
        self.saves += 1;
        Ok(SaveReport::default())
    }
}
