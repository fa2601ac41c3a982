use crate::news::{NewsItem, OperationalMetrics};
use std::collections::BTreeMap;

const PREAMBLE: &str = "Analyze the provided JSON data and create a meaningful summary. \
The data represents information about government policies, bills, and expenditures. \
Here's the data:\n";

/// Builds the full prompt for a feed: the instruction header followed by
/// one block per item, in feed order.
pub fn build_prompt(items: &[NewsItem]) -> String {
    let mut out = String::from(PREAMBLE);
    for item in items {
        push_item(&mut out, item);
        if item.metrics.is_reported() {
            push_metrics(&mut out, &item.metrics);
        }
    }
    out
}

fn push_item(out: &mut String, item: &NewsItem) {
    line(out, "Policy", &item.policy_name);
    line(out, "Date", &item.date);
    line(out, "Department", &item.department);
    if let Some(points) = &item.key_points {
        line(out, "Key Points", list(points));
    }
    if let Some(budget) = item.budget_allocation {
        line(out, "Budget", format_args!("${budget}"));
    }
    if let Some(rating) = item.public_approval_rating {
        line(out, "Approval", format_args!("{rating}%"));
    }
    if let Some(phase) = &item.implementation_phase {
        line(out, "Phase", phase);
    }
    if let Some(industries) = &item.affected_industries {
        line(out, "Industries", list(industries));
    }
    if let Some(jobs) = item.estimated_job_creation {
        line(out, "Jobs", jobs);
    }
    if let Some(carbon) = &item.projected_carbon_reduction {
        line(out, "Carbon Reduction", carbon);
    }
    if let Some(challenges) = &item.challenges {
        line(out, "Challenges", list(challenges));
    }
    if let Some(review) = &item.next_review_date {
        line(out, "Review Date", review);
    }
    out.push('\n');
}

fn push_metrics(out: &mut String, m: &OperationalMetrics) {
    if let Some(v) = m.daily_solar_installations {
        line(out, "Daily Solar Installations", v);
    }
    if let Some(v) = m.daily_ev_purchases {
        line(out, "Daily EV Purchases", v);
    }
    if let Some(v) = m.energy_efficiency_compliance_rate {
        line(out, "Efficiency Rate", format_args!("{v}%"));
    }
    if let Some(v) = m.public_inquiries_received {
        line(out, "Inquiries", v);
    }
    if let Some(v) = m.media_mentions {
        line(out, "Mentions", v);
    }
    if let Some(impact) = &m.stock_market_impact {
        line(out, "Stock Impact", pairs(impact));
    }
    if let Some(v) = &m.local_government_adoption_rate {
        line(out, "Adoption Rate", v);
    }
    if let Some(v) = &m.newly_identified_challenges {
        line(out, "New Challenges", list(v));
    }
    out.push('\n');
}

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    out.push_str(&format!("{label}: {value}\n"));
}

fn list(values: &[String]) -> String {
    values.join(", ")
}

fn pairs(map: &BTreeMap<String, String>) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(", ")
}
