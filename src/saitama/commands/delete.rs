use crate::commands::{save_problems, CmdMessage, CmdResult};
use crate::error::{Result, SaitamaError};
use crate::lookup::find_by_id;
use crate::model::normalize_id;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let id = normalize_id(id);
    let mut problems = store.load()?;
    let index = match find_by_id(&problems, &id) {
        Some((index, _)) => index,
        None => return Err(SaitamaError::ProblemNotFound(id)),
    };
    let removed = problems.remove(index);

    let mut result = CmdResult::default();
    save_problems(store, &problems, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Problem '{}' deleted",
        removed.id
    )));
    Ok(result.with_affected_problems(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Problem;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_and_keeps_order() {
        let mut store = InMemoryStore::with_problems(vec![
            Problem::new("A", "a", vec![]),
            Problem::new("B", "b", vec![]),
            Problem::new("C", "c", vec![]),
        ]);

        let result = run(&mut store, "b").unwrap();
        assert_eq!(result.affected_problems[0].id, "B");

        let ids: Vec<_> = store.load().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut store = InMemoryStore::with_problems(vec![Problem::new("A", "a", vec![])]);
        let err = run(&mut store, "Z").unwrap_err();
        assert!(matches!(err, SaitamaError::ProblemNotFound(_)));
        assert_eq!(store.saves(), 0);
    }
}
