//! Admin analytics presentation logic.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::net::types::Analytics;
use crate::util::format::format_thousands;

/// Currency prefix for revenue figures.
pub const CURRENCY: &str = "EGP";

/// One headline figure on the analytics page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

pub fn stat_cards(analytics: &Analytics) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Revenue",
            value: revenue_label(analytics.total_revenue),
        },
        StatCard {
            label: "Tickets Sold",
            value: count_label(analytics.total_tickets_sold),
        },
        StatCard {
            label: "Total Events",
            value: count_label(analytics.total_events),
        },
    ]
}

pub fn revenue_label(revenue: Option<f64>) -> String {
    format!("{CURRENCY} {}", format_thousands(revenue.unwrap_or(0.0)))
}

#[allow(clippy::cast_precision_loss)]
fn count_label(count: u64) -> String {
    format_thousands(count as f64)
}

/// Percentage with one decimal; missing values show as `0%`.
pub fn percentage_label(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => {
            let rounded = format!("{v:.1}");
            format!("{}%", rounded.trim_end_matches(".0"))
        }
        _ => "0%".to_owned(),
    }
}

/// Gender rows as `(label, count, percentage label)`.
pub fn gender_rows(analytics: &Analytics) -> [(&'static str, u64, String); 2] {
    let g = &analytics.gender_distribution;
    [
        ("Male", g.male, percentage_label(g.male_percentage)),
        ("Female", g.female, percentage_label(g.female_percentage)),
    ]
}

/// Venues by tickets sold, busiest first; ties broken by name.
pub fn location_rows(analytics: &Analytics) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> = analytics
        .location_distribution
        .iter()
        .map(|(venue, count)| (venue.clone(), *count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
