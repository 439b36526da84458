use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let problems = store.load()?;
    Ok(CmdResult::default().with_listed_problems(problems))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Problem;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_stored_order() {
        let store = InMemoryStore::with_problems(vec![
            Problem::new("Z1", "Last alphabetically", vec![]),
            Problem::new("A1", "First alphabetically", vec![]),
        ]);

        let result = run(&store).unwrap();
        let ids: Vec<_> = result.listed_problems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["Z1", "A1"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert!(result.listed_problems.is_empty());
    }
}
