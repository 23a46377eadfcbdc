//! Filter, pagination and sort state describing which leads are requested.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::lead::LeadStatus;

/// Default number of leads per page.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
/// Sort key used until the caller picks another one.
pub const DEFAULT_SORT_FIELD: &str = "score";

/// Optional predicates narrowing the requested leads. The server combines them
/// with logical AND.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSpec {
    pub status: Option<LeadStatus>,
    pub min_score: Option<i32>,
    pub industry: Option<String>,
    pub source: Option<String>,
    /// Free-text search; empty means no search.
    pub search_query: String,
}

impl FilterSpec {
    /// Writes a single filter key.
    pub fn apply(&mut self, filter: Filter) {
        match filter {
            Filter::Status(value) => self.status = value,
            Filter::MinScore(value) => self.min_score = value,
            Filter::Industry(value) => self.industry = value,
            Filter::Source(value) => self.source = value,
            Filter::SearchQuery(value) => self.search_query = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterSpec::default()
    }
}

/// One filter key together with its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    Status(Option<LeadStatus>),
    MinScore(Option<i32>),
    Industry(Option<String>),
    Source(Option<String>),
    SearchQuery(String),
}

impl Filter {
    /// Name of the filter key as it appears in the UI state.
    pub const fn key(&self) -> &'static str {
        match self {
            Filter::Status(_) => "status",
            Filter::MinScore(_) => "minScore",
            Filter::Industry(_) => "industry",
            Filter::Source(_) => "source",
            Filter::SearchQuery(_) => "searchQuery",
        }
    }
}

/// Page window over the filtered lead set.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationSpec {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    /// Server-reported count matching the current filter.
    pub total: u64,
}

impl PaginationSpec {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::default()
        }
    }
}

impl Default for PaginationSpec {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested ordering of the lead list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_FIELD, SortDirection::Desc)
    }
}
