//! Transport seam between the lead store and the remote leads API.
//!
//! The traits are async and deliberately not `Send`: every operation runs on
//! the dashboard's single logical thread.

use crate::{
    api::errors::ApiResult,
    domain::{
        lead::{Lead, NewLead, UpdateLead},
        types::LeadId,
    },
    dto::api::{LeadListParams, LeadsPage},
};

pub mod errors;
pub mod http;

#[allow(async_fn_in_trait)]
pub trait LeadReader {
    /// `GET /leads` with the canonical query string.
    async fn list_leads(&self, params: &LeadListParams) -> ApiResult<LeadsPage>;
    /// `GET /leads/{id}`.
    async fn get_lead(&self, id: &LeadId) -> ApiResult<Lead>;
}

#[allow(async_fn_in_trait)]
pub trait LeadWriter {
    /// `POST /leads`.
    async fn create_lead(&self, new_lead: &NewLead) -> ApiResult<Lead>;
    /// `PUT /leads/{id}`.
    async fn update_lead(&self, id: &LeadId, updates: &UpdateLead) -> ApiResult<Lead>;
    /// `DELETE /leads/{id}`.
    async fn delete_lead(&self, id: &LeadId) -> ApiResult<()>;
}
