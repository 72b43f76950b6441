use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, timestamp, validation, EntityPatch, NewEntity, StoredEntity};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    pub event: String,
    pub event_en: Option<String>,
    pub text: String,
    pub text_en: Option<String>,
    pub rating: i32,
    #[serde(default = "default_approved")]
    pub approved: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

fn default_approved() -> bool { true }

impl StoredEntity for Testimonial {
    const COLLECTION: &'static str = "testimonials";
}

pub fn validate_rating(rating: i32) -> Result<(), ModelError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ModelError::invalid(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestimonialCreate {
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    pub event: String,
    #[serde(default)]
    pub event_en: Option<String>,
    pub text: String,
    #[serde(default)]
    pub text_en: Option<String>,
    pub rating: i32,
    #[serde(default = "default_approved")]
    pub approved: bool,
    #[serde(default)]
    pub featured: bool,
}

impl NewEntity for TestimonialCreate {
    type Entity = Testimonial;

    fn validate(&self) -> Result<(), ModelError> {
        validation::require_text("name", &self.name)?;
        validation::require_text("event", &self.event)?;
        validation::require_text("text", &self.text)?;
        validate_rating(self.rating)
    }

    fn into_entity(self, id: String, now: DateTime<Utc>) -> Result<Testimonial, ModelError> {
        Ok(Testimonial {
            id,
            name: self.name,
            name_en: self.name_en,
            event: self.event,
            event_en: self.event_en,
            text: self.text,
            text_en: self.text_en,
            rating: self.rating,
            approved: self.approved,
            featured: self.featured,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl EntityPatch for TestimonialUpdate {
    type Entity = Testimonial;

    fn validate(&self) -> Result<(), ModelError> {
        validation::require_text_opt("name", self.name.as_deref())?;
        validation::require_text_opt("event", self.event.as_deref())?;
        validation::require_text_opt("text", self.text.as_deref())?;
        if let Some(r) = self.rating { validate_rating(r)?; }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rating: i32) -> TestimonialCreate {
        TestimonialCreate {
            name: "Cohen Family".into(),
            name_en: None,
            event: "Bar Mitzvah".into(),
            event_en: None,
            text: "Wonderful".into(),
            text_en: None,
            rating,
            approved: true,
            featured: false,
        }
    }

    #[test]
    fn rating_bounds() {
        assert!(sample(0).validate().is_err());
        assert!(sample(1).validate().is_ok());
        assert!(sample(5).validate().is_ok());
        assert!(sample(6).validate().is_err());
        assert!(TestimonialUpdate { rating: Some(9), ..Default::default() }.validate().is_err());
        assert!(TestimonialUpdate { rating: Some(4), ..Default::default() }.validate().is_ok());
    }

    #[test]
    fn approved_by_default() {
        let input: TestimonialCreate = serde_json::from_value(serde_json::json!({
            "name": "n", "event": "e", "text": "t", "rating": 5
        }))
        .unwrap();
        assert!(input.approved);
        assert!(!input.featured);
    }
}
