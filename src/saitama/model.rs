use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single tracked coding problem.
///
/// Field names are the on-disk contract. Optional metadata is omitted from the
/// JSON when it holds its zero value, and older files that wrote `"tags": null`
/// or a zero timestamp (`0001-01-01T00:00:00Z`) still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "zero_time_as_none"
    )]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "zero_time_as_none"
    )]
    pub last_solved: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub solve_count: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub platform: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl Problem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags,
            date_added: Some(Utc::now()),
            last_solved: None,
            solve_count: 0,
            difficulty: String::new(),
            platform: String::new(),
            url: String::new(),
            notes: String::new(),
        }
    }

    /// Stamps `date_added` if it is missing. Returns true when the record changed.
    pub fn ensure_added(&mut self, now: DateTime<Utc>) -> bool {
        if self.date_added.is_some() {
            return false;
        }
        self.date_added = Some(now);
        true
    }

    pub fn mark_solved(&mut self, at: DateTime<Utc>) {
        self.last_solved = Some(at);
        self.solve_count = self.solve_count.saturating_add(1);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

/// Problem IDs are stored upper-cased (`lc1` and `LC1` are the same problem).
pub fn normalize_id(id: &str) -> String {
    id.trim().to_uppercase()
}

/// Splits a comma separated tag list into trimmed, lower-cased tags, dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// Older files wrote the zero time instead of omitting the field.
fn zero_time_as_none<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
    Ok(value.filter(|t| t.year() > 1))
}
