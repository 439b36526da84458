use crate::model::Problem;

/// Finds the first problem whose ID is exactly `id`.
///
/// Matching is case-sensitive; callers normalize with
/// [`crate::model::normalize_id`] first when that is wanted.
pub fn find_by_id<'a>(problems: &'a [Problem], id: &str) -> Option<(usize, &'a Problem)> {
    problems.iter().enumerate().find(|(_, p)| p.id == id)
}

pub fn find_by_id_mut<'a>(problems: &'a mut [Problem], id: &str) -> Option<(usize, &'a mut Problem)> {
    problems.iter_mut().enumerate().find(|(_, p)| p.id == id)
}
