//! Event and ticket list presentation logic.
//!
//! DESIGN
//! ======
//! Filtering, sorting, and badge styling are pure functions over the wire
//! types so list pages only hold signals and markup.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cmp::Ordering;

use crate::net::types::{Event, Ticket};
use crate::util::format::iso_date;

/// Sort order selectable on the events list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the order the API returned.
    #[default]
    None,
    /// Most available seats first.
    AvailableSeats,
    /// Cheapest first; unpriced events last.
    Price,
    /// Earliest first; undated events last.
    Date,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::None, Self::AvailableSeats, Self::Price, Self::Date];

    /// Value used in the `<select>` element.
    pub fn value(self) -> &'static str {
        match self {
            Self::None => "",
            Self::AvailableSeats => "availableSeats",
            Self::Price => "price",
            Self::Date => "date",
        }
    }

    pub fn from_value(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.value() == raw)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Sort by",
            Self::AvailableSeats => "Available Seats",
            Self::Price => "Price",
            Self::Date => "Date",
        }
    }
}

fn matches_term(name: &str, venue: &str, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || name.to_lowercase().contains(&term) || venue.to_lowercase().contains(&term)
}

/// Events whose name or venue contains `term`, sorted by `sort`.
pub fn visible_events(events: &[Event], term: &str, sort: SortKey) -> Vec<Event> {
    let mut visible: Vec<Event> = events
        .iter()
        .filter(|e| matches_term(&e.name, &e.venue, term))
        .cloned()
        .collect();
    match sort {
        SortKey::None => {}
        SortKey::AvailableSeats => visible.sort_by_key(|e| std::cmp::Reverse(e.available())),
        SortKey::Price => visible.sort_by(|a, b| compare_missing_last(a.price, b.price, f64::total_cmp)),
        SortKey::Date => visible.sort_by(|a, b| compare_missing_last(iso_date(&a.date), iso_date(&b.date), Ord::cmp)),
    }
    visible
}

/// Tickets whose event name or venue contains `term`.
pub fn visible_tickets(tickets: &[Ticket], term: &str) -> Vec<Ticket> {
    tickets
        .iter()
        .filter(|t| matches_term(&t.name, &t.venue, term))
        .cloned()
        .collect()
}

fn compare_missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Share of seats sold, in percent, clamped to `0..=100`.
pub fn sold_percent(sold: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(sold) / f64::from(total) * 100.0).clamp(0.0, 100.0)
}

/// CSS modifier class for a status badge.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "upcoming" => "status-badge--upcoming",
        "pending" => "status-badge--pending",
        "closed" => "status-badge--closed",
        "ongoing" => "status-badge--ongoing",
        _ => "status-badge--other",
    }
}
