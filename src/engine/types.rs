// src/engine/types.rs
use std::fmt;

use serde::Serialize;

/// Publication year. Undated items compare greater than any real year,
/// so they sort last when ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Year {
    Known(i64),
    Unknown,
}

impl Year {
    pub fn is_before(&self, year: i64) -> bool {
        matches!(self, Year::Known(y) if *y < year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Known(y) => write!(f, "{y}"),
            Year::Unknown => f.write_str("?"),
        }
    }
}

/// One hit from the search endpoint. Field order gives the `(year, name, id)` ordering.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchResult {
    pub year: Year,
    pub name: String,
    pub id: String,
}

impl SearchResult {
    pub fn new(year: Year, name: impl Into<String>, id: impl Into<String>) -> Self {
        Self { year, name: name.into(), id: id.into() }
    }
}

/// Resolved catalog reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameId(pub String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Final record, one output row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Game {
    pub name: String,
    pub player_range: String,
    pub playing_time: i64,
    pub url: String,
}

/// What one call to the search primitive produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Never empty.
    Found(Vec<SearchResult>),
    NotFound,
    Failed(String),
}

impl SearchOutcome {
    pub fn from_results(results: Vec<SearchResult>) -> Self {
        if results.is_empty() { SearchOutcome::NotFound } else { SearchOutcome::Found(results) }
    }

    /// Failures count as "nothing found".
    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            SearchOutcome::Found(v) => v,
            SearchOutcome::NotFound | SearchOutcome::Failed(_) => Vec::new(),
        }
    }
}
