use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::Path;

/// One policy/news record as published in the input feed. The identifying
/// fields read as empty when absent or `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub policy_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub department: String,
    pub key_points: Option<Vec<String>>,
    pub budget_allocation: Option<f64>,
    pub public_approval_rating: Option<f64>,
    pub implementation_phase: Option<String>,
    pub affected_industries: Option<Vec<String>>,
    pub estimated_job_creation: Option<i64>,
    pub projected_carbon_reduction: Option<String>,
    pub challenges: Option<Vec<String>>,
    pub next_review_date: Option<String>,
    #[serde(flatten)]
    pub metrics: OperationalMetrics,
}

/// Day-to-day figures reported for policies already in rollout.
/// They sit at the top level of each record in the feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OperationalMetrics {
    pub daily_solar_installations: Option<i64>,
    pub daily_ev_purchases: Option<i64>,
    pub energy_efficiency_compliance_rate: Option<f64>,
    pub public_inquiries_received: Option<i64>,
    pub media_mentions: Option<i64>,
    pub stock_market_impact: Option<BTreeMap<String, String>>,
    pub local_government_adoption_rate: Option<String>,
    pub newly_identified_challenges: Option<Vec<String>>,
}

impl OperationalMetrics {
    /// True when any of the rollout counters carries a non-zero value.
    /// Media mentions, market impact, adoption rate and new challenges
    /// do not count on their own.
    pub fn is_reported(&self) -> bool {
        self.daily_solar_installations.unwrap_or(0) != 0
            || self.daily_ev_purchases.unwrap_or(0) != 0
            || self.energy_efficiency_compliance_rate.unwrap_or(0.0) != 0.0
            || self.public_inquiries_received.unwrap_or(0) != 0
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// Reads the raw feed from disk. Every call hits the filesystem.
pub async fn read_json(path: impl AsRef<Path>) -> std::io::Result<Vec<u8>> {
    tokio::fs::read(path).await
}

pub fn decode_items(data: &[u8]) -> serde_json::Result<Vec<NewsItem>> {
    serde_json::from_slice(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_required_and_optional_fields() {
        let data = br#"[{
            "date": "2024-03-01",
            "policy_name": "Green Homes Grant",
            "department": "Energy",
            "key_points": ["Rebates", "Insulation"],
            "budget_allocation": 2500000.5,
            "estimated_job_creation": 1200,
            "daily_solar_installations": 40,
            "stock_market_impact": {"SOLR": "up 3%"}
        }]"#;
        let items = decode_items(data).unwrap();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.policy_name, "Green Homes Grant");
        assert_eq!(item.key_points.as_deref().unwrap(), ["Rebates", "Insulation"]);
        assert_eq!(item.budget_allocation, Some(2500000.5));
        assert_eq!(item.public_approval_rating, None);
        assert_eq!(item.metrics.daily_solar_installations, Some(40));
        assert_eq!(
            item.metrics.stock_market_impact.as_ref().unwrap()["SOLR"],
            "up 3%"
        );
    }

    #[test]
    fn missing_identity_field_reads_as_empty() {
        let data = br#"[{"policy_name": "p", "department": "Energy"}]"#;
        let items = decode_items(data).unwrap();
        assert_eq!(items[0].date, "");
        assert_eq!(items[0].policy_name, "p");
    }

    #[test]
    fn null_identity_field_reads_as_empty() {
        let data = br#"[{"date": null, "policy_name": "p", "department": null}]"#;
        let items = decode_items(data).unwrap();
        assert_eq!(items[0].date, "");
        assert_eq!(items[0].department, "");
    }

    #[test]
    fn rejects_wrongly_typed_identity_field() {
        let data = br#"[{"date": "2024-03-01", "policy_name": 42, "department": "Energy"}]"#;
        assert!(decode_items(data).is_err());
    }

    #[test]
    fn rejects_wrongly_typed_list() {
        let data = br#"[{"date": "d", "policy_name": "p", "department": "x", "challenges": "none"}]"#;
        assert!(decode_items(data).is_err());
    }

    #[test]
    fn rejects_non_array_document() {
        assert!(decode_items(br#"{"policy_name": "p"}"#).is_err());
        assert!(decode_items(b"not json").is_err());
    }

    #[test]
    fn metrics_reported_only_for_trigger_counters() {
        let mut m = OperationalMetrics::default();
        assert!(!m.is_reported());

        m.media_mentions = Some(300);
        m.local_government_adoption_rate = Some("40%".into());
        m.newly_identified_challenges = Some(vec!["Grid load".into()]);
        assert!(!m.is_reported());

        m.daily_solar_installations = Some(0);
        assert!(!m.is_reported());

        m.energy_efficiency_compliance_rate = Some(0.5);
        assert!(m.is_reported());

        let m = OperationalMetrics {
            public_inquiries_received: Some(3),
            ..Default::default()
        };
        assert!(m.is_reported());
    }

    #[tokio::test]
    async fn read_json_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json(dir.path().join("absent.json")).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn read_json_returns_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        std::fs::write(&path, b"[ ]\n").unwrap();
        assert_eq!(read_json(&path).await.unwrap(), b"[ ]\n");
    }
}
