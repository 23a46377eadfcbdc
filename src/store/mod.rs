//! Client-side state for the lead collection.
//!
//! [`LeadsStore`] owns the current page of leads, its view copy, the selected
//! record and the filter/sort/pagination state. It is mutated only through the
//! reducer methods below; the async side lives in
//! [`crate::services::leads::LeadsService`].

use crate::domain::lead::Lead;
use crate::domain::query::{Filter, FilterSpec, PaginationSpec, SortDirection, SortSpec};
use crate::domain::stats::{LeadStats, StatsConfig, compute_stats};
use crate::domain::types::LeadId;
use crate::dto::api::{LeadListParams, LeadsPage};
use crate::pagination::PageWindow;

pub mod tracker;

use tracker::{OperationId, OperationKind, OperationState, OperationStatus, OperationTracker};

#[derive(Clone, Debug)]
pub struct LeadsStore {
    leads: Vec<Lead>,
    filtered_leads: Vec<Lead>,
    selected_lead: Option<Lead>,
    is_loading: bool,
    error: Option<String>,
    filters: FilterSpec,
    pagination: PaginationSpec,
    sort_by: SortSpec,
    operations: OperationTracker,
    revision: u64,
}

impl Default for LeadsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadsStore {
    pub fn new() -> Self {
        Self::with_page_limit(PaginationSpec::default().limit)
    }

    pub fn with_page_limit(limit: u32) -> Self {
        Self {
            leads: Vec::new(),
            filtered_leads: Vec::new(),
            selected_lead: None,
            is_loading: false,
            error: None,
            filters: FilterSpec::default(),
            pagination: PaginationSpec::with_limit(limit),
            sort_by: SortSpec::default(),
            operations: OperationTracker::new(),
            revision: 0,
        }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// View copy of [`Self::leads`]; filtering happens on the server.
    pub fn filtered_leads(&self) -> &[Lead] {
        &self.filtered_leads
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.selected_lead.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn pagination(&self) -> &PaginationSpec {
        &self.pagination
    }

    pub fn sort_by(&self) -> &SortSpec {
        &self.sort_by
    }

    pub fn operation(&self, kind: OperationKind) -> &OperationState {
        self.operations.state(kind)
    }

    pub fn operation_status(&self, kind: OperationKind) -> &OperationStatus {
        self.operations.status(kind)
    }

    /// Incremented whenever `leads` changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Request descriptor for the next list fetch.
    pub fn list_params(&self) -> LeadListParams {
        LeadListParams::new(&self.pagination, &self.sort_by, &self.filters)
    }

    pub fn page_window(&self) -> PageWindow {
        PageWindow::new(&self.pagination)
    }

    /// Derives dashboard stats without caching; see [`StatsMemo`].
    pub fn stats(&self, config: &StatsConfig) -> LeadStats {
        compute_stats(&self.leads, config)
    }

    fn leads_changed(&mut self) {
        self.filtered_leads = self.leads.clone();
        self.revision += 1;
    }

    /// Marks a new invocation of `kind` as pending.
    pub fn begin(&mut self, kind: OperationKind) -> OperationId {
        if kind.is_read() {
            self.is_loading = true;
            self.error = None;
        }
        let id = self.operations.start(kind);
        log::debug!("{kind} ({id}) pending");
        id
    }

    /// Records a failed invocation. Reads surface `message` through
    /// [`Self::error`]; mutations only record it in the operation status.
    pub fn reject(&mut self, kind: OperationKind, id: OperationId, message: impl Into<String>) {
        let message = message.into();
        if kind.is_read() {
            self.is_loading = false;
            self.error = Some(message.clone());
        }
        self.operations.reject(kind, id, message);
    }

    /// Replaces the page of leads in server order.
    pub fn fulfill_fetch_leads(&mut self, id: OperationId, page: LeadsPage) {
        self.is_loading = false;
        self.leads = page.leads;
        self.pagination.total = page.total;
        self.leads_changed();
        self.operations.fulfill(OperationKind::FetchLeads, id);
        log::debug!(
            "fetch_leads ({id}) fulfilled with {} of {} leads",
            self.leads.len(),
            self.pagination.total
        );
    }

    /// Caches a single record; it may be absent from the current page.
    pub fn fulfill_fetch_lead_by_id(&mut self, id: OperationId, lead: Lead) {
        self.is_loading = false;
        self.selected_lead = Some(lead);
        self.operations.fulfill(OperationKind::FetchLeadById, id);
    }

    /// Prepends the created lead and counts it in the total.
    pub fn fulfill_create_lead(&mut self, id: OperationId, lead: Lead) {
        log::info!("Created lead {}", lead.id);
        self.leads.insert(0, lead);
        self.pagination.total += 1;
        self.leads_changed();
        self.operations.fulfill(OperationKind::CreateLead, id);
    }

    /// Replaces the lead with the same id in place. Leads outside the current
    /// page are not inserted.
    pub fn fulfill_update_lead(&mut self, id: OperationId, lead: Lead) {
        if self
            .selected_lead
            .as_ref()
            .is_some_and(|selected| selected.id == lead.id)
        {
            self.selected_lead = Some(lead.clone());
        }

        match self.leads.iter().position(|existing| existing.id == lead.id) {
            Some(index) => {
                log::info!("Updated lead {}", lead.id);
                self.leads[index] = lead;
                self.leads_changed();
            }
            None => {
                log::warn!("Updated lead {} is not on the current page, ignoring", lead.id);
            }
        }
        self.operations.fulfill(OperationKind::UpdateLead, id);
    }

    /// Removes the lead, uncounts it and drops a matching selection.
    pub fn fulfill_delete_lead(&mut self, id: OperationId, lead_id: &LeadId) {
        self.leads.retain(|lead| &lead.id != lead_id);
        if self.pagination.total == 0 {
            log::warn!("Deleted lead {lead_id} while the total was already 0");
        }
        self.pagination.total = self.pagination.total.saturating_sub(1);
        self.leads_changed();

        if self
            .selected_lead
            .as_ref()
            .is_some_and(|selected| &selected.id == lead_id)
        {
            self.selected_lead = None;
        }
        log::info!("Deleted lead {lead_id}");
        self.operations.fulfill(OperationKind::DeleteLead, id);
    }

    /// Sets one filter key and returns to the first page. The caller is
    /// responsible for fetching again.
    pub fn set_filter(&mut self, filter: Filter) {
        log::debug!("Filter {} changed", filter.key());
        self.filters.apply(filter);
        self.pagination.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
        self.pagination.page = 1;
    }

    /// Pages are 1-based; `0` is treated as `1`.
    pub fn set_page(&mut self, page: u32) {
        self.pagination.page = page.max(1);
    }

    /// Changes the page size and returns to the first page. `0` is treated as `1`.
    pub fn set_limit(&mut self, limit: u32) {
        self.pagination.limit = limit.max(1);
        self.pagination.page = 1;
    }

    pub fn set_sort_by(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.sort_by = SortSpec::new(field, direction);
    }

    pub fn clear_selected_lead(&mut self) {
        self.selected_lead = None;
    }
}

/// Caches [`LeadStats`] against [`LeadsStore::revision`].
#[derive(Clone, Debug, Default)]
pub struct StatsMemo {
    cached: Option<(u64, LeadStats)>,
}

impl StatsMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, store: &LeadsStore, config: &StatsConfig) -> LeadStats {
        match self.cached {
            Some((revision, stats)) if revision == store.revision() => stats,
            _ => {
                let stats = store.stats(config);
                self.cached = Some((store.revision(), stats));
                stats
            }
        }
    }

    /// Drops the cached value, e.g. after the stats config changed.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
