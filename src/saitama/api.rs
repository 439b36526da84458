//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands/*.rs` and returns `Result<CmdResult>`;
//! it holds no business logic and does no terminal I/O.
//!
//! `SaitamaApi<S: DataStore>` is generic over the storage backend:
//! - Production: `SaitamaApi<FileStore>`
//! - Testing: `SaitamaApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{normalize_id, Problem};
use crate::store::DataStore;
use rand::Rng;
use std::path::Path;

pub struct SaitamaApi<S: DataStore> {
    store: S,
    paths: commands::AppPaths,
}

impl<S: DataStore> SaitamaApi<S> {
    pub fn new(store: S, paths: commands::AppPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_problem(&mut self, input: NewProblem) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, input)
    }

    pub fn list_problems(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn pick_problems<R: Rng + ?Sized>(
        &self,
        count: usize,
        tag: Option<&str>,
        rng: &mut R,
    ) -> Result<commands::CmdResult> {
        commands::pick::run(&self.store, count, tag, rng)
    }

    pub fn search_problems(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn delete_problem(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn edit_problem(&mut self, id: &str, update: ProblemUpdate) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, update)
    }

    pub fn solve_problem(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::solve::run(&mut self.store, id)
    }

    pub fn tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(&self.store)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn import_problems(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn export_problems(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn show_paths(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.paths)
    }

    /// Looks a problem up without changing anything (used for confirmations).
    pub fn get_problem(&self, id: &str) -> Result<Option<Problem>> {
        let problems = self.store.load()?;
        Ok(crate::lookup::find_by_id(&problems, &normalize_id(id)).map(|(_, p)| p.clone()))
    }

    pub fn paths(&self) -> &commands::AppPaths {
        &self.paths
    }
}

pub use crate::commands::add::NewProblem;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::ProblemUpdate;
pub use crate::commands::stats::Stats;
pub use crate::commands::{AppPaths, CmdMessage, CmdResult, MessageLevel};
