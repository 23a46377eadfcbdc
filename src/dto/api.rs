//! Wire shapes exchanged with the leads API.

use serde::{Deserialize, Serialize};

use crate::domain::lead::{Lead, LeadStatus};
use crate::domain::query::{FilterSpec, PaginationSpec, SortDirection, SortSpec};

/// Body of a successful `GET /leads`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadsPage {
    /// Page of leads in server order.
    pub leads: Vec<Lead>,
    /// Total number of leads matching the filter.
    pub total: u64,
}

/// Structured error body returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
}

/// Canonical query descriptor for `GET /leads`.
///
/// Paging and sorting keys are always present; filter keys are omitted when
/// unset or empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadListParams {
    pub page: u32,
    pub limit: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

impl LeadListParams {
    pub fn new(pagination: &PaginationSpec, sort: &SortSpec, filters: &FilterSpec) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            sort_by: sort.field.clone(),
            sort_direction: sort.direction,
            status: filters.status,
            min_score: filters.min_score,
            industry: non_empty(&filters.industry),
            source: non_empty(&filters.source),
            search: Some(filters.search_query.clone()).filter(|s| !s.is_empty()),
        }
    }

    /// Renders the descriptor as a URL query string.
    pub fn to_query_string(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::Filter;

    #[test]
    fn defaults_only_carry_paging_and_sorting() {
        let params = LeadListParams::new(
            &PaginationSpec::default(),
            &SortSpec::default(),
            &FilterSpec::default(),
        );

        assert_eq!(
            params.to_query_string().unwrap(),
            "page=1&limit=10&sortBy=score&sortDirection=desc"
        );
    }

    #[test]
    fn set_filters_are_appended_in_fixed_order() {
        let mut filters = FilterSpec::default();
        filters.apply(Filter::SearchQuery("acme corp".into()));
        filters.apply(Filter::Status(Some(LeadStatus::Qualified)));
        filters.apply(Filter::MinScore(Some(0)));
        filters.apply(Filter::Source(Some("referral".into())));

        let params = LeadListParams::new(
            &PaginationSpec {
                page: 3,
                limit: 25,
                total: 99,
            },
            &SortSpec::new("companyName", SortDirection::Asc),
            &filters,
        );

        assert_eq!(
            params.to_query_string().unwrap(),
            "page=3&limit=25&sortBy=companyName&sortDirection=asc\
             &status=qualified&minScore=0&source=referral&search=acme+corp"
        );
    }

    #[test]
    fn empty_strings_are_never_sent() {
        let mut filters = FilterSpec::default();
        filters.apply(Filter::Industry(Some(String::new())));
        filters.apply(Filter::Source(Some(String::new())));
        filters.apply(Filter::SearchQuery(String::new()));

        let params = LeadListParams::new(
            &PaginationSpec::default(),
            &SortSpec::default(),
            &filters,
        );

        assert!(params.industry.is_none());
        assert!(params.source.is_none());
        assert!(params.search.is_none());
    }

    #[test]
    fn leads_page_parses_list_response() {
        let page: LeadsPage = serde_json::from_str(r#"{"leads": [], "total": 42}"#).unwrap();
        assert_eq!(page.total, 42);
        assert!(page.leads.is_empty());

        let error: ErrorPayload = serde_json::from_str("{}").unwrap();
        assert!(error.message.is_none());
    }
}
