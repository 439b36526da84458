use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Problem;
use crate::store::DataStore;
use std::collections::HashMap;

/// Every tag with the number of problems carrying it, most used first.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let problems = store.load()?;
    let mut result = CmdResult::default();
    result.tag_counts = tag_counts(&problems);
    if result.tag_counts.is_empty() {
        result.add_message(CmdMessage::info("No tags found"));
    }
    Ok(result)
}

fn tag_counts(problems: &[Problem]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for problem in problems {
        for tag in &problem.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn counts_sorted_by_usage_then_name() {
        let store = InMemoryStore::with_problems(vec![
            Problem::new("A", "a", vec!["dp".into(), "array".into()]),
            Problem::new("B", "b", vec!["dp".into()]),
            Problem::new("C", "c", vec!["graph".into()]),
        ]);

        let result = run(&store).unwrap();
        assert_eq!(
            result.tag_counts,
            vec![
                ("dp".to_string(), 2),
                ("array".to_string(), 1),
                ("graph".to_string(), 1),
            ]
        );
    }

    #[test]
    fn no_tags_message() {
        let store = InMemoryStore::with_problems(vec![Problem::new("A", "a", vec![])]);
        let result = run(&store).unwrap();
        assert!(result.tag_counts.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
