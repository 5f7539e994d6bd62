//! Add/edit event form model.
//!
//! DESIGN
//! ======
//! Inputs are held as raw strings exactly as typed; `validate` converts them
//! into the typed `EventDraft` that is sent to the API, so a half-typed
//! price never reaches the wire.

#[cfg(test)]
#[path = "event_form_test.rs"]
mod event_form_test;

use serde::Serialize;

use crate::net::types::Event;
use crate::util::format::iso_date;

pub const DEFAULT_STATUS: &str = "upcoming";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Venue,
    Date,
    Time,
    Price,
    TotalSeats,
    Category,
    Status,
}

impl Field {
    pub const ALL: [Self; 9] = [
        Self::Name,
        Self::Description,
        Self::Venue,
        Self::Date,
        Self::Time,
        Self::Price,
        Self::TotalSeats,
        Self::Category,
        Self::Status,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Venue => "Venue",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Price => "Price (EGP)",
            Self::TotalSeats => "Total Seats",
            Self::Category => "Category",
            Self::Status => "Status",
        }
    }

    /// HTML `type` attribute for the field's input.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Price | Self::TotalSeats => "number",
            _ => "text",
        }
    }

    pub fn required(self) -> bool {
        matches!(self, Self::Name | Self::Venue | Self::Date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a non-negative number")]
    InvalidNumber(&'static str),
}

/// Raw form inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub venue: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub total_seats: String,
    pub category: String,
    pub status: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            venue: String::new(),
            date: String::new(),
            time: String::new(),
            price: String::new(),
            total_seats: String::new(),
            category: String::new(),
            status: DEFAULT_STATUS.to_owned(),
        }
    }
}

impl EventForm {
    /// Prefill from an existing event; dates are reduced to `YYYY-MM-DD`.
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            venue: event.venue.clone(),
            date: iso_date(&event.date).unwrap_or_default().to_owned(),
            time: event.time.clone(),
            price: event.price.map(|p| p.to_string()).unwrap_or_default(),
            total_seats: event.total_seats.to_string(),
            category: event.category.clone(),
            status: if event.status.is_empty() {
                DEFAULT_STATUS.to_owned()
            } else {
                event.status.clone()
            },
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Venue => &self.venue,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Price => &self.price,
            Field::TotalSeats => &self.total_seats,
            Field::Category => &self.category,
            Field::Status => &self.status,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Venue => &mut self.venue,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Price => &mut self.price,
            Field::TotalSeats => &mut self.total_seats,
            Field::Category => &mut self.category,
            Field::Status => &mut self.status,
        };
        *slot = value;
    }

    /// Check required fields and numeric inputs.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in field order.
    pub fn validate(&self) -> Result<EventDraft, FormError> {
        for field in Field::ALL {
            if field.required() && self.get(field).trim().is_empty() {
                return Err(FormError::Missing(field.label()));
            }
        }
        let price = parse_non_negative(&self.price).ok_or(FormError::InvalidNumber(Field::Price.label()))?;
        let total_seats = self
            .total_seats
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidNumber(Field::TotalSeats.label()))?;
        let status = match self.status.trim() {
            "" => DEFAULT_STATUS.to_owned(),
            other => other.to_owned(),
        };

        Ok(EventDraft {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            venue: self.venue.trim().to_owned(),
            date: self.date.trim().to_owned(),
            time: self.time.trim().to_owned(),
            price,
            total_seats,
            category: self.category.trim().to_owned(),
            status,
        })
    }
}

fn parse_non_negative(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
}

/// Validated payload for `/admin/event/add` and `/admin/event/update/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub venue: String,
    pub date: String,
    pub time: String,
    pub price: f64,
    pub total_seats: u32,
    pub category: String,
    pub status: String,
}
