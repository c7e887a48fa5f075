//! Client interface to the remote per-user record store.
//!
//! The store is an external collaborator with a narrow contract: read and
//! write preference lists, dated intake records, and the user profile, keyed
//! by user id. Operations may fail with [`StoreError`]; callers surface a
//! notice and degrade to empty defaults instead of halting.
//!
//! Writes carry no transaction or version guard: concurrent writers to the
//! same user's preference list race last-write-wins.

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{IntakeHistory, IntakeRecord, PreferenceSet, UserProfile};

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    RequestFailed(String),

    #[error("store returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed store document: {0}")]
    MalformedDocument(String),
}

/// Read/write access to one user's stored records.
///
/// Absent documents read as empty defaults; saves are full overwrites
/// (last write wins, no merge).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Read the user profile, with free-form age/weight resolved to
    /// validated optional numerics.
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StoreError>;

    async fn get_preferences(&self, user_id: &str) -> Result<PreferenceSet, StoreError>;

    async fn set_preferences(
        &self,
        user_id: &str,
        preferences: &PreferenceSet,
    ) -> Result<(), StoreError>;

    async fn get_intake(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<IntakeRecord>, StoreError>;

    /// Overwrite the intake record for one date.
    async fn set_intake(
        &self,
        user_id: &str,
        date: NaiveDate,
        record: &IntakeRecord,
    ) -> Result<(), StoreError>;

    async fn get_intake_history(&self, user_id: &str) -> Result<IntakeHistory, StoreError>;
}

/// Resolve a free-form stored value (number or string, possibly with a unit)
/// to a numeric. This is the profile-read boundary: anything unresolvable
/// becomes `None` and renders as `Unknown` downstream.
pub(crate) fn free_form_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s
            .replace(',', "")
            .trim()
            .trim_end_matches(|c: char| c.is_alphabetic())
            .trim()
            .parse::<f64>()
            .ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_free_form_number_shapes() {
        assert_eq!(free_form_number(&json!(30)), Some(30.0));
        assert_eq!(free_form_number(&json!(65.5)), Some(65.5));
        assert_eq!(free_form_number(&json!("30")), Some(30.0));
        assert_eq!(free_form_number(&json!(" 65kg ")), Some(65.0));
        assert_eq!(free_form_number(&json!("1,200")), Some(1200.0));
        assert_eq!(free_form_number(&json!("thirty")), None);
        assert_eq!(free_form_number(&json!(null)), None);
        assert_eq!(free_form_number(&json!([1, 2])), None);
    }
}
