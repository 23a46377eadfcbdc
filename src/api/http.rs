//! `reqwest` implementation of the leads API traits.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{LeadReader, LeadWriter};
use crate::domain::lead::{Lead, NewLead, UpdateLead};
use crate::domain::types::LeadId;
use crate::dto::api::{ErrorPayload, LeadListParams, LeadsPage};
use crate::models::config::ClientConfig;

/// Talks to the leads resource under a configured base URL.
#[derive(Clone, Debug)]
pub struct HttpLeadsApi {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpLeadsApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let base_url =
            Url::parse(&config.api_base_url).map_err(|e| ApiError::Url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Url(format!(
                "{} cannot be used as a base url",
                config.api_base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: config.api_token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Builds `{base}/leads` or `{base}/leads/{id}` with the id percent-encoded.
    fn endpoint(&self, id: Option<&LeadId>) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::Url(self.base_url.to_string()))?;
            segments.pop_if_empty().push("leads");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Maps non-2xx responses onto [`ApiError`], keeping the server's `message`.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorPayload>()
        .await
        .ok()
        .and_then(|payload| payload.message);

    if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound { message })
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(ApiError::from)
}

impl LeadReader for HttpLeadsApi {
    async fn list_leads(&self, params: &LeadListParams) -> ApiResult<LeadsPage> {
        let mut url = self.endpoint(None)?;
        url.set_query(Some(&params.to_query_string()?));

        log::debug!("GET {url}");
        let response = self.request(Method::GET, url).send().await?;
        read_json(response).await
    }

    async fn get_lead(&self, id: &LeadId) -> ApiResult<Lead> {
        let url = self.endpoint(Some(id))?;

        log::debug!("GET {url}");
        let response = self.request(Method::GET, url).send().await?;
        read_json(response).await
    }
}

impl LeadWriter for HttpLeadsApi {
    async fn create_lead(&self, new_lead: &NewLead) -> ApiResult<Lead> {
        let url = self.endpoint(None)?;

        log::debug!("POST {url}");
        let response = self.request(Method::POST, url).json(new_lead).send().await?;
        read_json(response).await
    }

    async fn update_lead(&self, id: &LeadId, updates: &UpdateLead) -> ApiResult<Lead> {
        let url = self.endpoint(Some(id))?;

        log::debug!("PUT {url}");
        let response = self.request(Method::PUT, url).json(updates).send().await?;
        read_json(response).await
    }

    async fn delete_lead(&self, id: &LeadId) -> ApiResult<()> {
        let url = self.endpoint(Some(id))?;

        log::debug!("DELETE {url}");
        let response = self.request(Method::DELETE, url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
