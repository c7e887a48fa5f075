//! In-process store for tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::{IntakeHistory, IntakeRecord, PreferenceSet, UserProfile};
use crate::store::{StoreError, UserStore};

#[derive(Debug, Default, Clone)]
struct UserDocument {
    profile: Option<UserProfile>,
    preferences: PreferenceSet,
    intake: IntakeHistory,
}

/// An in-memory store with the same defaulting behavior as the remote one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile for a user.
    pub fn with_profile(self, profile: UserProfile) -> Self {
        {
            let mut users = self.users.write().unwrap();
            let document = users.entry(profile.id.clone()).or_default();
            document.profile = Some(profile);
        }
        self
    }

    /// Seed an intake record for a user and date.
    pub fn with_intake(self, user_id: &str, date: NaiveDate, record: IntakeRecord) -> Self {
        {
            let mut users = self.users.write().unwrap();
            let document = users.entry(user_id.to_string()).or_default();
            document.intake.insert(date, record);
        }
        self
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        let users = self.users.read().unwrap();
        Ok(users
            .get(user_id)
            .and_then(|document| document.profile.clone())
            .unwrap_or_else(|| UserProfile {
                id: user_id.to_string(),
                name: "User".to_string(),
                gender: "Unknown".to_string(),
                age: None,
                weight: None,
            }))
    }

    async fn get_preferences(&self, user_id: &str) -> Result<PreferenceSet, StoreError> {
        let users = self.users.read().unwrap();
        Ok(users
            .get(user_id)
            .map(|document| document.preferences.clone())
            .unwrap_or_default())
    }

    async fn set_preferences(
        &self,
        user_id: &str,
        preferences: &PreferenceSet,
    ) -> Result<(), StoreError> {
        let mut users = self.users.write().unwrap();
        let document = users.entry(user_id.to_string()).or_default();
        document.preferences = preferences.clone();
        Ok(())
    }

    async fn get_intake(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<IntakeRecord>, StoreError> {
        let users = self.users.read().unwrap();
        Ok(users
            .get(user_id)
            .and_then(|document| document.intake.get(&date).copied()))
    }

    async fn set_intake(
        &self,
        user_id: &str,
        date: NaiveDate,
        record: &IntakeRecord,
    ) -> Result<(), StoreError> {
        let mut users = self.users.write().unwrap();
        let document = users.entry(user_id.to_string()).or_default();
        document.intake.insert(date, *record);
        Ok(())
    }

    async fn get_intake_history(&self, user_id: &str) -> Result<IntakeHistory, StoreError> {
        let users = self.users.read().unwrap();
        Ok(users
            .get(user_id)
            .map(|document| document.intake.clone())
            .unwrap_or_default())
    }
}
