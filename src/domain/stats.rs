//! Dashboard summary numbers derived from the in-memory lead collection.

use serde::{Deserialize, Serialize};

use crate::domain::lead::Lead;

/// Minimum score for a lead to count as qualified.
pub const QUALIFIED_SCORE_THRESHOLD: i32 = 70;

/// Share of qualified leads assumed to convert. This is a placeholder
/// approximation, not a measured conversion figure.
pub const PLACEHOLDER_CONVERSION_FACTOR: f64 = 0.4;

/// Tunables for [`compute_stats`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsConfig {
    pub qualified_score_threshold: i32,
    pub conversion_factor: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            qualified_score_threshold: QUALIFIED_SCORE_THRESHOLD,
            conversion_factor: PLACEHOLDER_CONVERSION_FACTOR,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total_leads: usize,
    pub qualified_leads: usize,
    pub avg_score: i64,
    /// Percentage, `0..=100` for well-formed input.
    pub conversion_rate: i64,
}

/// Rounds half toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Derives the dashboard numbers from `leads`. All values are zero for an
/// empty slice.
pub fn compute_stats(leads: &[Lead], config: &StatsConfig) -> LeadStats {
    if leads.is_empty() {
        return LeadStats::default();
    }

    let total = leads.len();
    let qualified = leads
        .iter()
        .filter(|lead| lead.score >= config.qualified_score_threshold)
        .count();
    let score_sum: i64 = leads.iter().map(|lead| i64::from(lead.score)).sum();

    LeadStats {
        total_leads: total,
        qualified_leads: qualified,
        avg_score: round_half_up(score_sum as f64 / total as f64),
        conversion_rate: round_half_up(
            qualified as f64 / total as f64 * config.conversion_factor * 100.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::lead::LeadStatus;
    use crate::domain::types::LeadId;

    fn lead(id: &str, score: i32) -> Lead {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Lead {
            id: LeadId::new(id).unwrap(),
            company_name: format!("Company {id}"),
            industry: "Software".into(),
            contact_name: "Contact".into(),
            email: format!("{id}@example.com"),
            phone: "555".into(),
            status: LeadStatus::New,
            score,
            source: "web".into(),
            created_at: ts,
            updated_at: ts,
            last_activity: None,
            notes: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn dashboard_scenario() {
        let leads: Vec<Lead> = [90, 60, 75, 40]
            .iter()
            .enumerate()
            .map(|(i, score)| lead(&i.to_string(), *score))
            .collect();

        let stats = compute_stats(&leads, &StatsConfig::default());

        assert_eq!(
            stats,
            LeadStats {
                total_leads: 4,
                qualified_leads: 2,
                avg_score: 66,
                conversion_rate: 20,
            }
        );
    }

    #[test]
    fn empty_collection_is_all_zero() {
        assert_eq!(
            compute_stats(&[], &StatsConfig::default()),
            LeadStats::default()
        );
    }

    #[test]
    fn threshold_is_inclusive_and_configurable() {
        let leads = vec![lead("a", 70), lead("b", 69)];
        let stats = compute_stats(&leads, &StatsConfig::default());
        assert_eq!(stats.qualified_leads, 1);
        // 139 / 2 = 69.5 rounds up.
        assert_eq!(stats.avg_score, 70);

        let config = StatsConfig {
            qualified_score_threshold: 60,
            conversion_factor: 1.0,
        };
        let stats = compute_stats(&leads, &config);
        assert_eq!(stats.qualified_leads, 2);
        assert_eq!(stats.conversion_rate, 100);
    }
}
