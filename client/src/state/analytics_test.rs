use super::*;
use crate::net::types::GenderDistribution;

fn sample() -> Analytics {
    Analytics {
        total_revenue: Some(125_000.0),
        total_tickets_sold: 1_250,
        total_events: 12,
        gender_distribution: GenderDistribution {
            male: 700,
            female: 550,
            male_percentage: Some(56.0),
            female_percentage: Some(44.0),
        },
        location_distribution: [("Giza", 300), ("Cairo", 800), ("Alexandria", 300)]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect(),
    }
}

#[test]
fn stat_cards_format_currency_and_counts() {
    let cards = stat_cards(&sample());
    assert_eq!(cards[0].value, "EGP 125,000");
    assert_eq!(cards[1].value, "1,250");
    assert_eq!(cards[2].value, "12");
}

#[test]
fn missing_revenue_shows_zero() {
    assert_eq!(revenue_label(None), "EGP 0");
}

#[test]
fn percentage_label_trims_whole_numbers() {
    assert_eq!(percentage_label(Some(56.0)), "56%");
    assert_eq!(percentage_label(Some(57.14)), "57.1%");
    assert_eq!(percentage_label(None), "0%");
}

#[test]
fn location_rows_sort_by_count_then_name() {
    let rows = location_rows(&sample());
    let names: Vec<&str> = rows.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["Cairo", "Alexandria", "Giza"]);
}

#[test]
fn gender_rows_carry_counts_and_percentages() {
    let rows = gender_rows(&sample());
    assert_eq!(rows[0], ("Male", 700, "56%".to_owned()));
    assert_eq!(rows[1].1, 550);
}

#[test]
fn empty_analytics_renders_without_rows() {
    let empty = Analytics::default();
    assert!(location_rows(&empty).is_empty());
    assert_eq!(stat_cards(&empty)[0].value, "EGP 0");
}
