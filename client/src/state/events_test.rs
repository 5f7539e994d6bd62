use super::*;

fn event(id: &str, name: &str, venue: &str, date: &str, price: Option<f64>, available: u32) -> Event {
    Event {
        id: id.to_owned(),
        name: name.to_owned(),
        description: String::new(),
        venue: venue.to_owned(),
        date: date.to_owned(),
        time: String::new(),
        price,
        total_seats: 100,
        sold_seats: 100 - available,
        available_seats: None,
        category: String::new(),
        status: "upcoming".to_owned(),
    }
}

fn sample() -> Vec<Event> {
    vec![
        event("a", "Jazz Night", "Cairo Opera House", "2025-06-01", Some(350.0), 10),
        event("b", "Tech Summit", "Alexandria Library", "2025-03-15T09:00:00Z", None, 80),
        event("c", "Film Festival", "Cairo Citadel", "", Some(120.0), 40),
    ]
}

fn ids(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn empty_term_keeps_everything_in_api_order() {
    assert_eq!(ids(&visible_events(&sample(), "  ", SortKey::None)), ["a", "b", "c"]);
}

#[test]
fn term_matches_name_or_venue_case_insensitively() {
    assert_eq!(ids(&visible_events(&sample(), "cairo", SortKey::None)), ["a", "c"]);
    assert_eq!(ids(&visible_events(&sample(), "SUMMIT", SortKey::None)), ["b"]);
    assert!(visible_events(&sample(), "berlin", SortKey::None).is_empty());
}

#[test]
fn tickets_filter_on_name_and_venue() {
    let tickets: Vec<Ticket> = serde_json::from_value(serde_json::json!([
        { "altid": "t1", "name": "Jazz Night", "venue": "Cairo Opera House" },
        { "altid": "t2", "name": "Tech Summit", "venue": "Alexandria Library" }
    ]))
    .unwrap();
    let visible = visible_tickets(&tickets, "alexandria");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].altid, "t2");
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn available_seats_sorts_descending() {
    assert_eq!(ids(&visible_events(&sample(), "", SortKey::AvailableSeats)), ["b", "c", "a"]);
}

#[test]
fn price_sorts_ascending_with_unpriced_last() {
    assert_eq!(ids(&visible_events(&sample(), "", SortKey::Price)), ["c", "a", "b"]);
}

#[test]
fn date_sorts_ascending_with_undated_last() {
    assert_eq!(ids(&visible_events(&sample(), "", SortKey::Date)), ["b", "a", "c"]);
}

#[test]
fn sort_key_round_trips_through_select_value() {
    for key in SortKey::ALL {
        assert_eq!(SortKey::from_value(key.value()), key);
    }
    assert_eq!(SortKey::from_value("bogus"), SortKey::None);
}

// =============================================================
// Presentation
// =============================================================

#[test]
fn sold_percent_handles_zero_total_and_oversell() {
    assert!((sold_percent(0, 0) - 0.0).abs() < f64::EPSILON);
    assert!((sold_percent(25, 100) - 25.0).abs() < f64::EPSILON);
    assert!((sold_percent(150, 100) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn status_class_maps_known_statuses() {
    assert_eq!(status_class("upcoming"), "status-badge--upcoming");
    assert_eq!(status_class("closed"), "status-badge--closed");
    assert_eq!(status_class("cancelled"), "status-badge--other");
}
