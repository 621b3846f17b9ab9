//! # Alias Records
//!
//! The domain record for one forwarding alias, as reported by the remote
//! service. Field names match the addy.io JSON payload so the gateway can
//! deserialize straight into this type.

use serde::{Deserialize, Serialize};

/// Opaque, stable alias identifier (a UUID string on addy.io).
pub type AliasId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    pub id: AliasId,
    pub email: String,
    /// Free-form note; addy.io sends `null` when unset.
    #[serde(default)]
    pub description: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub emails_forwarded: u64,
    #[serde(default)]
    pub emails_blocked: u64,
    #[serde(default)]
    pub emails_replied: u64,
    #[serde(default)]
    pub emails_sent: u64,
}

impl AliasRecord {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// `"<blocked>/<forwarded>"`
    pub fn forward_counts(&self) -> String {
        format!("{}/{}", self.emails_blocked, self.emails_forwarded)
    }

    /// `"<replied>/<sent>"`
    pub fn reply_counts(&self) -> String {
        format!("{}/{}", self.emails_replied, self.emails_sent)
    }
}

/// Immutable snapshot of the alias a toggle was issued for.
///
/// Captured from the highlighted row when the key is pressed and never
/// re-read, so a fetch landing in between cannot change what gets toggled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub id: AliasId,
    pub was_active: bool,
}

impl From<&AliasRecord> for ToggleRequest {
    fn from(alias: &AliasRecord) -> Self {
        Self {
            id: alias.id.clone(),
            was_active: alias.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_addy_payload() {
        let json = r#"{
            "id": "50c9e585-e7f5-41c4-9016-9014c15454bc",
            "user_id": "ca0a4e09-c266-4f6f-845c-958db5090f09",
            "local_part": "first",
            "domain": "johndoe.anonaddy.com",
            "email": "first@johndoe.anonaddy.com",
            "active": true,
            "description": null,
            "emails_forwarded": 12,
            "emails_blocked": 3,
            "emails_replied": 1,
            "emails_sent": 4
        }"#;
        let alias: AliasRecord = serde_json::from_str(json).unwrap();
        assert_eq!(alias.id, "50c9e585-e7f5-41c4-9016-9014c15454bc");
        assert_eq!(alias.email, "first@johndoe.anonaddy.com");
        assert!(alias.active);
        assert_eq!(alias.description(), "");
        assert_eq!(alias.forward_counts(), "3/12");
        assert_eq!(alias.reply_counts(), "1/4");
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let json = r#"{"id": "1", "email": "a@x.com", "active": false, "description": "shop"}"#;
        let alias: AliasRecord = serde_json::from_str(json).unwrap();
        assert_eq!(alias.description(), "shop");
        assert_eq!(alias.forward_counts(), "0/0");
        assert_eq!(alias.reply_counts(), "0/0");
    }

    #[test]
    fn test_toggle_request_snapshots_state() {
        let mut alias: AliasRecord =
            serde_json::from_str(r#"{"id": "7", "email": "b@x.com", "active": true}"#).unwrap();
        let request = ToggleRequest::from(&alias);
        alias.active = false;
        assert_eq!(request.id, "7");
        assert!(request.was_active);
    }
}
