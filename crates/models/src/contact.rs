use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, timestamp, validation, EntityPatch, NewEntity, StoredEntity};

pub const STATUSES: [&str; 3] = ["new", "contacted", "closed"];
pub const INITIAL_STATUS: &str = "new";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub event_type: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub event_date: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub status: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl StoredEntity for ContactMessage {
    const COLLECTION: &'static str = "contact_messages";
}

/// Contact form submission. `event_date` arrives as the form's raw string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessageCreate {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewEntity for ContactMessageCreate {
    type Entity = ContactMessage;

    fn validate(&self) -> Result<(), ModelError> {
        validation::require_text("name", &self.name)?;
        validation::require_text("phone", &self.phone)
    }

    /// An unparsable event date is dropped rather than rejected.
    fn into_entity(self, id: String, now: DateTime<Utc>) -> Result<ContactMessage, ModelError> {
        Ok(ContactMessage {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            event_type: self.event_type,
            event_date: self.event_date.as_deref().and_then(validation::parse_event_date),
            message: self.message,
            status: INITIAL_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageStatusUpdate {
    pub status: String,
}

impl EntityPatch for MessageStatusUpdate {
    type Entity = ContactMessage;

    fn validate(&self) -> Result<(), ModelError> {
        validation::one_of("status", &self.status, &STATUSES)
    }
}
