//! Photography packages offered on the site (the `services` collection).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, timestamp, validation, EntityPatch, NewEntity, StoredEntity};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    pub description: String,
    pub description_en: Option<String>,
    /// Free text such as `₪1,500 - ₪2,500`.
    pub price: String,
    pub duration: String,
    pub duration_en: Option<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    pub includes_en: Option<Vec<String>>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub order: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool { true }

impl StoredEntity for ServiceOffering {
    const COLLECTION: &'static str = "services";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceOfferingCreate {
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    pub description: String,
    #[serde(default)]
    pub description_en: Option<String>,
    pub price: String,
    pub duration: String,
    #[serde(default)]
    pub duration_en: Option<String>,
    pub includes: Vec<String>,
    #[serde(default)]
    pub includes_en: Option<Vec<String>>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub order: i64,
}

impl NewEntity for ServiceOfferingCreate {
    type Entity = ServiceOffering;

    fn validate(&self) -> Result<(), ModelError> {
        validation::require_text("name", &self.name)?;
        validation::require_text("description", &self.description)?;
        validation::require_text("price", &self.price)?;
        validation::require_text("duration", &self.duration)
    }

    fn into_entity(self, id: String, now: DateTime<Utc>) -> Result<ServiceOffering, ModelError> {
        Ok(ServiceOffering {
            id,
            name: self.name,
            name_en: self.name_en,
            description: self.description,
            description_en: self.description_en,
            price: self.price,
            duration: self.duration,
            duration_en: self.duration_en,
            includes: self.includes,
            includes_en: self.includes_en,
            active: self.active,
            order: self.order,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceOfferingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes_en: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl EntityPatch for ServiceOfferingUpdate {
    type Entity = ServiceOffering;

    fn validate(&self) -> Result<(), ModelError> {
        validation::require_text_opt("name", self.name.as_deref())?;
        validation::require_text_opt("description", self.description.as_deref())?;
        validation::require_text_opt("price", self.price.as_deref())?;
        validation::require_text_opt("duration", self.duration.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_to_active_and_keeps_list_order() {
        let input: ServiceOfferingCreate = serde_json::from_value(serde_json::json!({
            "name": "ברית מילה",
            "description": "צילום עדין",
            "price": "₪1,500 - ₪2,500",
            "duration": "4 שעות",
            "includes": ["c", "a", "b"]
        }))
        .unwrap();
        assert!(input.active);
        assert!(input.validate().is_ok());
        let svc = input.into_entity("s1".into(), Utc::now()).unwrap();
        assert_eq!(svc.includes, vec!["c", "a", "b"]);
        assert!(svc.includes_en.is_none());
    }

    #[test]
    fn blank_price_is_rejected() {
        let patch = ServiceOfferingUpdate { price: Some("".into()), ..Default::default() };
        assert!(patch.validate().is_err());
        let patch = ServiceOfferingUpdate { active: Some(false), ..Default::default() };
        assert!(patch.validate().is_ok());
        assert!(!patch.is_empty());
    }
}
