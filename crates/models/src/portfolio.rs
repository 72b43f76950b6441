use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, timestamp, validation, EntityPatch, NewEntity, StoredEntity};

pub const CATEGORIES: [&str; 5] = [
    "Bar Mitzvah",
    "Bat Mitzvah",
    "Brit Milah",
    "Torah Reading",
    "Family Event",
];

/// Category filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub title_en: Option<String>,
    pub category: String,
    pub image: String,
    pub description: String,
    pub description_en: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl StoredEntity for PortfolioItem {
    const COLLECTION: &'static str = "portfolio";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItemCreate {
    pub title: String,
    #[serde(default)]
    pub title_en: Option<String>,
    pub category: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i64,
}

pub fn validate_category(category: &str) -> Result<(), ModelError> {
    validation::one_of("category", category, &CATEGORIES)
}

pub fn validate_image(url: &str) -> Result<(), ModelError> {
    if !(url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/')) {
        return Err(ModelError::invalid("image must be an http(s) URL or an absolute path"));
    }
    Ok(())
}

impl NewEntity for PortfolioItemCreate {
    type Entity = PortfolioItem;

    fn validate(&self) -> Result<(), ModelError> {
        validation::require_text("title", &self.title)?;
        validation::require_text("description", &self.description)?;
        validate_category(&self.category)?;
        validate_image(&self.image)
    }

    fn into_entity(self, id: String, now: DateTime<Utc>) -> Result<PortfolioItem, ModelError> {
        Ok(PortfolioItem {
            id,
            title: self.title,
            title_en: self.title_en,
            category: self.category,
            image: self.image,
            description: self.description,
            description_en: self.description_en,
            featured: self.featured,
            order: self.order,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl EntityPatch for PortfolioItemUpdate {
    type Entity = PortfolioItem;

    fn validate(&self) -> Result<(), ModelError> {
        validation::require_text_opt("title", self.title.as_deref())?;
        validation::require_text_opt("description", self.description.as_deref())?;
        if let Some(c) = &self.category { validate_category(c)?; }
        if let Some(i) = &self.image { validate_image(i)?; }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PortfolioItemCreate {
        PortfolioItemCreate {
            title: "בר מצווה".into(),
            title_en: Some("Bar Mitzvah".into()),
            category: "Bar Mitzvah".into(),
            image: "https://images.example.com/1.jpg".into(),
            description: "חגיגה".into(),
            description_en: None,
            featured: true,
            order: 3,
        }
    }

    #[test]
    fn create_validation() {
        assert!(sample().validate().is_ok());
        assert!(PortfolioItemCreate { category: "Wedding".into(), ..sample() }.validate().is_err());
        assert!(PortfolioItemCreate { category: ALL_CATEGORIES.into(), ..sample() }.validate().is_err());
        assert!(PortfolioItemCreate { title: " ".into(), ..sample() }.validate().is_err());
        assert!(PortfolioItemCreate { image: "ftp://x".into(), ..sample() }.validate().is_err());
    }

    #[test]
    fn entity_serializes_missing_optionals_as_null() {
        let now = Utc::now();
        let item = sample().into_entity("abc".into(), now).unwrap();
        assert_eq!(item.created_at, item.updated_at);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "abc");
        assert!(json["description_en"].is_null());
        assert!(json.as_object().unwrap().contains_key("description_en"));
        assert_eq!(json["order"], 3);
    }

    #[test]
    fn patch_carries_only_provided_fields() {
        let patch = PortfolioItemUpdate { featured: Some(false), ..Default::default() };
        let fields = patch.fields().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["featured"], false);
        assert!(PortfolioItemUpdate::default().is_empty());
        assert!(PortfolioItemUpdate { category: Some("Picnic".into()), ..Default::default() }.validate().is_err());
    }

    #[test]
    fn create_payload_defaults() {
        let input: PortfolioItemCreate = serde_json::from_value(serde_json::json!({
            "title": "t", "category": "Brit Milah", "image": "/img.jpg", "description": "d"
        }))
        .unwrap();
        assert!(!input.featured);
        assert_eq!(input.order, 0);
        assert!(input.title_en.is_none());
    }
}
