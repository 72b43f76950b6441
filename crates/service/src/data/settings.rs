use std::collections::BTreeMap;

use chrono::Utc;
use models::setting::{self, Setting, SettingValue};
use models::timestamp;
use serde_json::Value;
use tracing::{debug, instrument};

use super::{decode, DataService};
use crate::errors::ServiceError;
use crate::storage::{Document, Filter};

fn by_key(key: &str) -> Filter { Filter::new().eq("key", key) }

impl DataService {
    /// Every setting as `key -> value`.
    pub async fn all_settings(&self) -> Result<BTreeMap<String, SettingValue>, ServiceError> {
        let docs = self.store().find(setting::COLLECTION, &Filter::new(), None).await?;
        docs.into_iter()
            .map(|doc| decode::<Setting>(doc).map(|s| (s.key, s.value)))
            .collect()
    }

    pub async fn setting(&self, key: &str) -> Result<Option<SettingValue>, ServiceError> {
        self.store()
            .find_one(setting::COLLECTION, &by_key(key))
            .await?
            .map(|doc| decode::<Setting>(doc).map(|s| s.value))
            .transpose()
    }

    /// Upsert `value` under `key`. Any key is accepted; always `true` once
    /// the store accepts the write.
    #[instrument(skip(self, value))]
    pub async fn set_setting(&self, key: &str, value: SettingValue) -> Result<bool, ServiceError> {
        let mut set = Document::new();
        set.insert("value".into(), Value::Object(value));
        set.insert("updated_at".into(), Value::String(timestamp::format(&Utc::now())));
        let result = self.store().update_one(setting::COLLECTION, &by_key(key), set, true).await?;
        debug!(matched = result.matched, upserted = result.upserted, "setting_written");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_service;
    use serde_json::json;

    fn value(v: Value) -> SettingValue {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn upsert_then_overwrite() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        assert!(svc.setting("contact_info").await?.is_none());

        assert!(svc.set_setting("contact_info", value(json!({"phone": "050-1"}))).await?);
        assert!(svc.set_setting("contact_info", value(json!({"phone": "050-2"}))).await?);

        let current = svc.setting("contact_info").await?.unwrap();
        assert_eq!(current["phone"], "050-2");

        let all = svc.all_settings().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all["contact_info"]["phone"], "050-2");
        Ok(())
    }

    #[tokio::test]
    async fn any_key_is_accepted() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        assert!(svc.set_setting("hero banner", SettingValue::new()).await?);
        assert!(svc.set_setting("עברית", value(json!({"title": "שלום"}))).await?);

        let all = svc.all_settings().await?;
        assert_eq!(all.len(), 2);
        assert!(all["hero banner"].is_empty());
        assert_eq!(all["עברית"]["title"], "שלום");
        Ok(())
    }

    #[tokio::test]
    async fn overwrite_replaces_value_and_bumps_timestamp() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        svc.set_setting("social_media", value(json!({"instagram": "@old"}))).await?;
        let stored = |doc: Option<Document>| -> Result<Setting, ServiceError> {
            decode(doc.ok_or_else(|| ServiceError::not_found("Setting"))?)
        };
        let before = stored(svc.store().find_one(setting::COLLECTION, &by_key("social_media")).await?)?;

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        svc.set_setting("social_media", value(json!({"facebook": "studio"}))).await?;
        let after = stored(svc.store().find_one(setting::COLLECTION, &by_key("social_media")).await?)?;

        assert_eq!(after.key, before.key);
        assert_eq!(Value::Object(after.value), json!({"facebook": "studio"}));
        assert!(after.updated_at > before.updated_at);
        assert_eq!(svc.store().count(setting::COLLECTION, &Filter::new()).await?, 1);
        Ok(())
    }
}
