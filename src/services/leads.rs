//! Runs lead operations against the API and applies their outcome to the store.
//!
//! [`LeadsService`] is constructed once at startup and handed to the view layer
//! by reference. The store sits in a `RefCell` that is never borrowed across
//! an `.await`, so several operations may be in flight on the same thread.
//! They are applied in completion order; nothing is cancelled or sequenced.

use std::cell::{Ref, RefCell};

use crate::api::errors::ApiError;
use crate::api::{LeadReader, LeadWriter};
use crate::domain::lead::{Lead, NewLead, UpdateLead};
use crate::domain::query::{Filter, SortDirection};
use crate::domain::stats::{LeadStats, StatsConfig};
use crate::domain::types::LeadId;
use crate::forms::lead::LeadForm;
use crate::models::config::ClientConfig;
use crate::store::tracker::{OperationId, OperationKind};
use crate::store::{LeadsStore, StatsMemo};
use crate::services::{ServiceError, ServiceResult};

pub struct LeadsService<A> {
    api: A,
    store: RefCell<LeadsStore>,
    stats_config: StatsConfig,
    stats: RefCell<StatsMemo>,
}

impl<A> LeadsService<A> {
    pub fn new(api: A, store: LeadsStore, stats_config: StatsConfig) -> Self {
        Self {
            api,
            store: RefCell::new(store),
            stats_config,
            stats: RefCell::new(StatsMemo::new()),
        }
    }

    pub fn from_config(api: A, config: &ClientConfig) -> Self {
        Self::new(
            api,
            LeadsStore::with_page_limit(config.page_limit),
            config.stats_config(),
        )
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Read access for the view layer. Drop the guard before awaiting.
    pub fn store(&self) -> Ref<'_, LeadsStore> {
        self.store.borrow()
    }

    /// Dashboard numbers for the current leads, recomputed only after the
    /// collection changed.
    pub fn stats(&self) -> LeadStats {
        let store = self.store.borrow();
        self.stats.borrow_mut().get(&store, &self.stats_config)
    }

    pub fn set_stats_config(&mut self, stats_config: StatsConfig) {
        self.stats_config = stats_config;
        self.stats.get_mut().invalidate();
    }

    pub fn set_filter(&self, filter: Filter) {
        self.store.borrow_mut().set_filter(filter);
    }

    pub fn clear_filters(&self) {
        self.store.borrow_mut().clear_filters();
    }

    pub fn set_page(&self, page: u32) {
        self.store.borrow_mut().set_page(page);
    }

    pub fn set_limit(&self, limit: u32) {
        self.store.borrow_mut().set_limit(limit);
    }

    pub fn set_sort_by(&self, field: impl Into<String>, direction: SortDirection) {
        self.store.borrow_mut().set_sort_by(field, direction);
    }

    pub fn clear_selected_lead(&self) {
        self.store.borrow_mut().clear_selected_lead();
    }

    fn begin(&self, kind: OperationKind) -> OperationId {
        self.store.borrow_mut().begin(kind)
    }

    /// Records the failure in the store and converts it for the caller.
    fn reject(&self, kind: OperationKind, id: OperationId, err: ApiError) -> ServiceError {
        let message = err
            .server_message()
            .unwrap_or(kind.default_error())
            .to_string();
        log::error!("{kind} ({id}) rejected: {err}");
        self.store.borrow_mut().reject(kind, id, message.clone());
        ServiceError::Rejected {
            operation: kind,
            message,
            source: err,
        }
    }
}

impl<A: LeadReader> LeadsService<A> {
    /// Fetches the page described by the current filter, sort and pagination.
    pub async fn fetch_leads(&self) -> ServiceResult<()> {
        let kind = OperationKind::FetchLeads;
        let (id, params) = {
            let mut store = self.store.borrow_mut();
            let id = store.begin(kind);
            (id, store.list_params())
        };

        match self.api.list_leads(&params).await {
            Ok(page) => {
                self.store.borrow_mut().fulfill_fetch_leads(id, page);
                Ok(())
            }
            Err(err) => Err(self.reject(kind, id, err)),
        }
    }

    /// Loads a single lead into the selection, even if it is not on the
    /// current page.
    pub async fn fetch_lead_by_id(&self, lead_id: &LeadId) -> ServiceResult<Lead> {
        let kind = OperationKind::FetchLeadById;
        let id = self.begin(kind);

        match self.api.get_lead(lead_id).await {
            Ok(lead) => {
                self.store
                    .borrow_mut()
                    .fulfill_fetch_lead_by_id(id, lead.clone());
                Ok(lead)
            }
            Err(err) => Err(self.reject(kind, id, err)),
        }
    }
}

impl<A: LeadWriter> LeadsService<A> {
    pub async fn create_lead(&self, new_lead: &NewLead) -> ServiceResult<Lead> {
        let kind = OperationKind::CreateLead;
        let id = self.begin(kind);

        match self.api.create_lead(new_lead).await {
            Ok(lead) => {
                self.store.borrow_mut().fulfill_create_lead(id, lead.clone());
                Ok(lead)
            }
            Err(err) => Err(self.reject(kind, id, err)),
        }
    }

    /// Validates the form before anything is sent.
    pub async fn create_lead_from_form(&self, form: LeadForm) -> ServiceResult<Lead> {
        let new_lead = NewLead::try_from(form).map_err(|err| {
            log::error!("Failed to validate lead form: {err}");
            err
        })?;
        self.create_lead(&new_lead).await
    }

    pub async fn update_lead(&self, lead_id: &LeadId, updates: &UpdateLead) -> ServiceResult<Lead> {
        let kind = OperationKind::UpdateLead;
        let id = self.begin(kind);

        match self.api.update_lead(lead_id, updates).await {
            Ok(lead) => {
                self.store.borrow_mut().fulfill_update_lead(id, lead.clone());
                Ok(lead)
            }
            Err(err) => Err(self.reject(kind, id, err)),
        }
    }

    pub async fn update_lead_from_form(
        &self,
        lead_id: &LeadId,
        form: LeadForm,
    ) -> ServiceResult<Lead> {
        let updates = UpdateLead::try_from(form).map_err(|err| {
            log::error!("Failed to validate lead form: {err}");
            err
        })?;
        self.update_lead(lead_id, &updates).await
    }

    pub async fn delete_lead(&self, lead_id: &LeadId) -> ServiceResult<()> {
        let kind = OperationKind::DeleteLead;
        let id = self.begin(kind);

        match self.api.delete_lead(lead_id).await {
            Ok(()) => {
                self.store.borrow_mut().fulfill_delete_lead(id, lead_id);
                Ok(())
            }
            Err(err) => Err(self.reject(kind, id, err)),
        }
    }
}
