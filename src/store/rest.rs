use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{IntakeHistory, IntakeRecord, PreferenceSet, UserProfile};
use crate::store::{free_form_number, StoreError, UserStore};

/// Client for a remote JSON document store.
///
/// Speaks the RTDB-style REST dialect: every node is addressable as
/// `{base}/users/{uid}/<node>.json`, GET returns `null` for absent nodes,
/// PUT overwrites a node wholesale.
pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        RestStore {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn node_url(&self, user_id: &str, node: &str) -> String {
        format!("{}/users/{}/{}.json", self.base_url, user_id, node)
    }

    async fn get_node<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, StoreError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        if status != 200 {
            return Err(StoreError::Api {
                status,
                message: body,
            });
        }

        debug!("GET {} -> {}", url, body);
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| StoreError::MalformedDocument(e.to_string()))
    }

    async fn put_node<T: Serialize>(&self, url: &str, value: &T) -> Result<(), StoreError> {
        let response = self
            .client
            .put(url)
            .json(value)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status,
                message: body,
            });
        }
        Ok(())
    }
}

/// Raw profile node as stored: name/gender free-form strings, age/weight
/// free-form values.
#[derive(Debug, Default, Deserialize)]
struct ProfileDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    age: Option<Value>,
    #[serde(default)]
    weight: Option<Value>,
}

#[async_trait]
impl UserStore for RestStore {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        let url = format!("{}/users/{}.json", self.base_url, user_id);
        let document: ProfileDocument = self.get_node(&url).await?.unwrap_or_default();

        let age = document
            .age
            .as_ref()
            .and_then(free_form_number)
            .filter(|v| *v >= 0.0)
            .map(|v| v.round() as u32);
        let weight = document
            .weight
            .as_ref()
            .and_then(free_form_number)
            .filter(|v| *v >= 0.0);

        Ok(UserProfile {
            id: user_id.to_string(),
            name: document.name.unwrap_or_else(|| "User".to_string()),
            gender: document.gender.unwrap_or_else(|| "Unknown".to_string()),
            age,
            weight,
        })
    }

    async fn get_preferences(&self, user_id: &str) -> Result<PreferenceSet, StoreError> {
        let url = self.node_url(user_id, "preferences");
        Ok(self.get_node(&url).await?.unwrap_or_default())
    }

    async fn set_preferences(
        &self,
        user_id: &str,
        preferences: &PreferenceSet,
    ) -> Result<(), StoreError> {
        let url = self.node_url(user_id, "preferences");
        self.put_node(&url, preferences).await
    }

    async fn get_intake(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<IntakeRecord>, StoreError> {
        let url = self.node_url(user_id, &format!("health_intake/{}", date.format("%Y-%m-%d")));
        self.get_node(&url).await
    }

    async fn set_intake(
        &self,
        user_id: &str,
        date: NaiveDate,
        record: &IntakeRecord,
    ) -> Result<(), StoreError> {
        let url = self.node_url(user_id, &format!("health_intake/{}", date.format("%Y-%m-%d")));
        self.put_node(&url, record).await
    }

    async fn get_intake_history(&self, user_id: &str) -> Result<IntakeHistory, StoreError> {
        let url = self.node_url(user_id, "health_intake");
        let raw: HashMap<String, IntakeRecord> = self.get_node(&url).await?.unwrap_or_default();

        let mut history = IntakeHistory::new();
        for (key, record) in raw {
            match NaiveDate::parse_from_str(&key, "%Y-%m-%d") {
                Ok(date) => {
                    history.insert(date, record);
                }
                Err(_) => warn!("skipping intake record with undated key {key:?}"),
            }
        }
        Ok(history)
    }
}
