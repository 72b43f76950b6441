use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, timestamp, validation, EntityPatch, NewEntity, StoredEntity};

pub const STATUSES: [&str; 5] = ["new", "quoted", "booked", "completed", "cancelled"];
pub const INITIAL_STATUS: &str = "new";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
    #[serde(with = "timestamp")]
    pub event_date: DateTime<Utc>,
    pub guest_count: Option<u32>,
    pub budget: Option<String>,
    pub venue: Option<String>,
    pub additional_info: Option<String>,
    pub status: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl StoredEntity for BookingRequest {
    const COLLECTION: &'static str = "booking_requests";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequestCreate {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
    pub event_date: String,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

fn event_date_required(raw: &str) -> Result<DateTime<Utc>, ModelError> {
    validation::parse_event_date(raw).ok_or_else(|| ModelError::invalid("Valid event date is required"))
}

impl NewEntity for BookingRequestCreate {
    type Entity = BookingRequest;

    fn validate(&self) -> Result<(), ModelError> {
        validation::require_text("name", &self.name)?;
        validation::require_text("phone", &self.phone)?;
        validation::require_text("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(ModelError::invalid("email must contain '@'"));
        }
        validation::require_text("event_type", &self.event_type)?;
        event_date_required(&self.event_date).map(|_| ())
    }

    fn into_entity(self, id: String, now: DateTime<Utc>) -> Result<BookingRequest, ModelError> {
        let event_date = event_date_required(&self.event_date)?;
        Ok(BookingRequest {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            event_type: self.event_type,
            event_date,
            guest_count: self.guest_count,
            budget: self.budget,
            venue: self.venue,
            additional_info: self.additional_info,
            status: INITIAL_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: String,
}

impl EntityPatch for BookingStatusUpdate {
    type Entity = BookingRequest;

    fn validate(&self) -> Result<(), ModelError> {
        validation::one_of("status", &self.status, &STATUSES)
    }
}
