use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SaitamaError};
use crate::model::Problem;
use crate::store::DataStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks `count` distinct problems at random, optionally only those carrying `tag`.
pub fn run<S: DataStore, R: Rng + ?Sized>(
    store: &S,
    count: usize,
    tag: Option<&str>,
    rng: &mut R,
) -> Result<CmdResult> {
    if count == 0 {
        return Err(SaitamaError::Api("Pick count must be at least 1".into()));
    }

    let tag = tag.map(|t| t.trim().to_lowercase());
    let pool: Vec<Problem> = store
        .load()?
        .into_iter()
        .filter(|p| tag.as_deref().map_or(true, |t| p.has_tag(t)))
        .collect();

    let mut result = CmdResult::default();
    if pool.is_empty() {
        let message = match &tag {
            Some(t) => format!("No problems tagged '{}'", t),
            None => "No problems found. Add some first with: saitama add".to_string(),
        };
        result.add_message(CmdMessage::info(message));
        return Ok(result);
    }

    if pool.len() < count {
        result.add_message(CmdMessage::warning(format!(
            "Not enough problems! You have {}, but requested {}. Showing all of them.",
            pool.len(),
            count
        )));
    }

    let picked: Vec<Problem> = pool.choose_multiple(rng, count).cloned().collect();
    Ok(result.with_listed_problems(picked))
}
