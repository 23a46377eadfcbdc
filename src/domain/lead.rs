use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{LeadId, TypeConstraintError};

/// Qualification stage of a lead.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Unqualified,
}

impl LeadStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Unqualified => "unqualified",
        }
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "unqualified" => Ok(LeadStatus::Unqualified),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown lead status `{other}`"
            ))),
        }
    }
}

/// Prospective customer record as returned by the leads API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub company_name: String,
    pub industry: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    /// Qualification score, conceptually within `0..=100`.
    pub score: i32,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Ordered labels; duplicates are kept as received.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial lead body sent when creating a record.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Partial lead body sent when updating a record. Absent fields stay untouched
/// on the server.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateLead {
    /// Returns `true` when the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == UpdateLead::default()
    }
}

/// Trims a free-form value, mapping blank input to `None`.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Strips unsafe markup from user-entered notes.
pub fn sanitize_notes(value: Option<String>) -> Option<String> {
    normalize_text(value.map(|s| ammonia::clean(&s)))
}

/// Trims tags and drops blank ones, keeping order and duplicates.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_payload() {
        let lead: Lead = serde_json::from_value(json!({
            "id": "l-1",
            "companyName": "Acme",
            "industry": "Retail",
            "contactName": "Jane Doe",
            "email": "jane@acme.test",
            "phone": "+1 555 0100",
            "status": "qualified",
            "score": 82,
            "source": "webinar",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-02T10:00:00Z",
            "tags": ["vip", "vip"]
        }))
        .unwrap();

        assert_eq!(lead.id.as_str(), "l-1");
        assert_eq!(lead.status, LeadStatus::Qualified);
        assert_eq!(lead.score, 82);
        assert!(lead.last_activity.is_none());
        assert!(lead.notes.is_none());
        assert_eq!(lead.tags, vec!["vip", "vip"]);
    }

    #[test]
    fn partial_bodies_omit_absent_fields() {
        let new_lead = NewLead {
            company_name: "Acme".into(),
            score: Some(40),
            ..NewLead::default()
        };
        assert_eq!(
            serde_json::to_value(&new_lead).unwrap(),
            json!({"companyName": "Acme", "score": 40})
        );

        let update = UpdateLead {
            status: Some(LeadStatus::Contacted),
            ..UpdateLead::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"status": "contacted"})
        );
        assert!(UpdateLead::default().is_empty());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Unqualified".parse::<LeadStatus>(), Ok(LeadStatus::Unqualified));
        assert!("archived".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn notes_are_sanitized() {
        let notes = sanitize_notes(Some("  <script>alert(1)</script>call back ".into()));
        assert_eq!(notes.as_deref(), Some("call back"));
        assert_eq!(sanitize_notes(Some("   ".into())), None);
    }
}
