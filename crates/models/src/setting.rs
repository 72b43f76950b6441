use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::timestamp;

pub const COLLECTION: &str = "settings";

/// Well-known keys written by the seed loader.
pub const PHOTOGRAPHER_INFO: &str = "photographer_info";
pub const CONTACT_INFO: &str = "contact_info";
pub const SOCIAL_MEDIA: &str = "social_media";

pub type SettingValue = Map<String, Value>;

/// Key-value settings document; addressed by `key`, not by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: SettingValue,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingUpdate {
    pub value: SettingValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_requires_object_value() {
        let ok: Result<SettingUpdate, _> = serde_json::from_value(serde_json::json!({"value": {"phone": "1"}}));
        assert!(ok.is_ok());
        let bad: Result<SettingUpdate, _> = serde_json::from_value(serde_json::json!({"value": "1"}));
        assert!(bad.is_err());
    }
}
