//! Wire types for the EventX API.
//!
//! DESIGN
//! ======
//! The API is external and loosely typed: ids arrive either as plain strings
//! or as `{ "$oid": ... }` objects, and prices as numbers or numeric strings.
//! Deserializers here normalize those shapes once so view code never has to.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// An event as returned by `/admin/event/*`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", deserialize_with = "deserialize_object_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub venue: String,
    /// Date or ISO-8601 timestamp as sent by the API.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    /// `None` when the API sent something that is not a number.
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub price: Option<f64>,
    #[serde(default)]
    pub total_seats: u32,
    #[serde(default)]
    pub sold_seats: u32,
    #[serde(default)]
    pub available_seats: Option<u32>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
}

impl Event {
    /// Seats still for sale, derived from total and sold when the API omits it.
    pub fn available(&self) -> u32 {
        self.available_seats
            .unwrap_or_else(|| self.total_seats.saturating_sub(self.sold_seats))
    }
}

/// A purchased ticket as returned by `/user/ticket`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(deserialize_with = "deserialize_object_id")]
    pub altid: String,
    pub name: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: String,
}

/// Envelope around `/admin/analytics`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalyticsEnvelope {
    #[serde(default)]
    pub success: bool,
    pub data: Option<Analytics>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub total_tickets_sold: u64,
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub gender_distribution: GenderDistribution,
    /// Tickets sold per venue.
    #[serde(default)]
    pub location_distribution: BTreeMap<String, u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderDistribution {
    #[serde(default)]
    pub male: u64,
    #[serde(default)]
    pub female: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub male_percentage: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub female_percentage: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ObjectId {
    Plain(String),
    Wrapped {
        #[serde(alias = "$oid")]
        oid: String,
    },
}

fn deserialize_object_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ObjectId::deserialize(deserializer)? {
        ObjectId::Plain(id) | ObjectId::Wrapped { oid: id } => id,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientNumber::deserialize(deserializer)? {
        LenientNumber::Number(n) => Some(n),
        LenientNumber::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        LenientNumber::Other(_) => None,
    })
}
