//! CSV export of the loaded leads for the dashboard's report button.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::lead::Lead;
use crate::services::ServiceResult;

#[derive(Serialize)]
struct LeadCsvRow<'a> {
    id: &'a str,
    company_name: &'a str,
    industry: &'a str,
    contact_name: &'a str,
    email: &'a str,
    phone: &'a str,
    status: &'static str,
    score: i32,
    source: &'a str,
    created_at: String,
    updated_at: String,
    last_activity: Option<String>,
    notes: Option<&'a str>,
    tags: String,
}

impl<'a> From<&'a Lead> for LeadCsvRow<'a> {
    fn from(lead: &'a Lead) -> Self {
        Self {
            id: lead.id.as_str(),
            company_name: &lead.company_name,
            industry: &lead.industry,
            contact_name: &lead.contact_name,
            email: &lead.email,
            phone: &lead.phone,
            status: lead.status.as_str(),
            score: lead.score,
            source: &lead.source,
            created_at: lead.created_at.to_rfc3339(),
            updated_at: lead.updated_at.to_rfc3339(),
            last_activity: lead.last_activity.map(|ts| ts.to_rfc3339()),
            notes: lead.notes.as_deref(),
            tags: lead.tags.join(";"),
        }
    }
}

/// Writes `leads` as CSV with a header row and returns the number of rows.
pub fn write_leads_csv<W: Write>(leads: &[Lead], writer: W) -> ServiceResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for lead in leads {
        csv_writer.serialize(LeadCsvRow::from(lead))?;
    }
    csv_writer.flush()?;
    Ok(leads.len())
}

/// Creates (or truncates) `path` and writes the report there.
pub fn export_leads_to_path(leads: &[Lead], path: &Path) -> ServiceResult<usize> {
    let file = File::create(path).map_err(|err| {
        log::error!("Failed to create export file {}: {err}", path.display());
        err
    })?;
    let rows = write_leads_csv(leads, file)?;
    log::info!("Exported {rows} leads to {}", path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::lead::LeadStatus;
    use crate::domain::types::LeadId;

    fn lead() -> Lead {
        let ts = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        Lead {
            id: LeadId::new("l-7").unwrap(),
            company_name: "Initech, LLC".into(),
            industry: "Software".into(),
            contact_name: "Bill Lumbergh".into(),
            email: "bill@initech.test".into(),
            phone: "555-0199".into(),
            status: LeadStatus::Contacted,
            score: 71,
            source: "referral".into(),
            created_at: ts,
            updated_at: ts,
            last_activity: None,
            notes: None,
            tags: vec!["tps".into(), "reports".into()],
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let mut buffer = Vec::new();
        let rows = write_leads_csv(&[lead()], &mut buffer).unwrap();
        assert_eq!(rows, 1);

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some(
                "id,company_name,industry,contact_name,email,phone,status,score,source,\
                 created_at,updated_at,last_activity,notes,tags"
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                "l-7,\"Initech, LLC\",Software,Bill Lumbergh,bill@initech.test,555-0199,\
                 contacted,71,referral,2024-02-29T12:00:00+00:00,2024-02-29T12:00:00+00:00,,,\
                 tps;reports"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_collection_writes_nothing() {
        let mut buffer = Vec::new();
        assert_eq!(write_leads_csv(&[], &mut buffer).unwrap(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn exports_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.csv");
        assert_eq!(export_leads_to_path(&[lead(), lead()], &path).unwrap(), 2);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }
}
