use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{
    LeadStatus, NewLead, UpdateLead, normalize_tags, normalize_text, sanitize_notes,
};
use crate::domain::types::LeadEmail;
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for creating or editing a lead.
pub struct LeadForm {
    #[validate(length(min = 1))]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub contact_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: Option<LeadStatus>,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fields shared by the create and update payloads after normalization.
struct CleanLead {
    company_name: String,
    email: String,
    industry: Option<String>,
    contact_name: Option<String>,
    phone: Option<String>,
    source: Option<String>,
    status: Option<LeadStatus>,
    score: Option<i32>,
    notes: Option<String>,
    tags: Vec<String>,
}

impl LeadForm {
    fn clean(self) -> Result<CleanLead, FormError> {
        self.validate()?;

        let company_name =
            normalize_text(Some(self.company_name)).ok_or(FormError::InvalidCompanyName)?;
        let email = LeadEmail::new(self.email)
            .map_err(|_| FormError::InvalidEmail)?
            .into_inner();

        Ok(CleanLead {
            company_name,
            email,
            industry: normalize_text(Some(self.industry)),
            contact_name: normalize_text(Some(self.contact_name)),
            phone: normalize_text(Some(self.phone)),
            source: normalize_text(Some(self.source)),
            status: self.status,
            score: self.score,
            notes: sanitize_notes(self.notes),
            tags: normalize_tags(self.tags),
        })
    }
}

impl TryFrom<LeadForm> for NewLead {
    type Error = FormError;

    fn try_from(form: LeadForm) -> Result<Self, Self::Error> {
        let lead = form.clean()?;
        Ok(NewLead {
            company_name: lead.company_name,
            industry: lead.industry,
            contact_name: lead.contact_name,
            email: Some(lead.email),
            phone: lead.phone,
            status: Some(lead.status.unwrap_or(LeadStatus::New)),
            score: lead.score,
            source: lead.source,
            notes: lead.notes,
            tags: lead.tags,
        })
    }
}

impl TryFrom<LeadForm> for UpdateLead {
    type Error = FormError;

    /// Blank optional inputs are left out of the update rather than cleared.
    fn try_from(form: LeadForm) -> Result<Self, Self::Error> {
        let lead = form.clean()?;
        Ok(UpdateLead {
            company_name: Some(lead.company_name),
            industry: lead.industry,
            contact_name: lead.contact_name,
            email: Some(lead.email),
            phone: lead.phone,
            status: lead.status,
            score: lead.score,
            source: lead.source,
            notes: lead.notes,
            tags: Some(lead.tags),
        })
    }
}
