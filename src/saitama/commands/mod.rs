//! # Command Layer
//!
//! One module per user-facing operation. Each `run` loads the collection from a
//! [`DataStore`], works on it in memory, saves at most once, and returns a
//! [`CmdResult`]. Nothing here prints or exits; user-visible outcomes are
//! [`CmdMessage`]s for the UI to render.

use crate::config::SaitamaConfig;
use crate::error::Result;
use crate::model::Problem;
use crate::store::DataStore;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod paths;
pub mod pick;
pub mod search;
pub mod solve;
pub mod stats;
pub mod tags;

/// Where this installation keeps its files.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub app_dir: PathBuf,
    pub data_path: PathBuf,
    pub backup_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_problems: Vec<Problem>,
    pub listed_problems: Vec<Problem>,
    pub tag_counts: Vec<(String, usize)>,
    pub stats: Option<stats::Stats>,
    pub paths: Vec<(String, PathBuf)>,
    pub config: Option<SaitamaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_problems(mut self, problems: Vec<Problem>) -> Self {
        self.affected_problems = problems;
        self
    }

    pub fn with_listed_problems(mut self, problems: Vec<Problem>) -> Self {
        self.listed_problems = problems;
        self
    }

    pub fn with_config(mut self, config: SaitamaConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Saves and turns any backup warnings into messages on `result`.
pub(crate) fn save_problems<S: DataStore>(
    store: &mut S,
    problems: &[Problem],
    result: &mut CmdResult,
) -> Result<()> {
    let report = store.save(problems)?;
    for warning in report.warnings {
        result.add_message(CmdMessage::warning(format!("Warning: {}", warning)));
    }
    Ok(())
}
