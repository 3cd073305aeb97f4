//! Per-row save state of the config editor.

use crate::features::config::form::{ConfigField, ValidationError, coerce_value};
use botwatch_api_models::ConfigUpdateRequest;
use std::collections::HashMap;

/// Save progress of one row.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RowStatus {
    /// Editable, no pending feedback.
    #[default]
    Idle,
    /// Write in flight; the save control is disabled.
    Saving,
    /// Transient "saved" feedback.
    Saved,
}

/// What the row shows after the server accepted a write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Transient "saved" label on the save control.
    Saved,
    /// One-time notice asking the operator to log in again.
    ReauthRequired {
        /// Translation key of the notice.
        notice_key: &'static str,
        /// Whether the input must be emptied.
        clear_input: bool,
    },
}

impl SaveOutcome {
    /// Outcome of a successful write of `field`.
    #[must_use]
    pub fn for_field(field: &ConfigField) -> Self {
        if !field.requires_reauth() {
            Self::Saved
        } else if field.key == "DASHBOARD_USERNAME" {
            Self::ReauthRequired {
                notice_key: "config.notices.username_changed",
                clear_input: false,
            }
        } else {
            Self::ReauthRequired {
                notice_key: "config.notices.password_changed",
                clear_input: true,
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
struct RowState {
    draft: Option<String>,
    status: RowStatus,
}

/// Drafts and save status keyed by config key.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ConfigRows {
    rows: HashMap<String, RowState>,
}

impl ConfigRows {
    /// Current control value: the draft when edited, otherwise the server value.
    #[must_use]
    pub fn value(&self, field: &ConfigField) -> String {
        self.rows
            .get(&field.key)
            .and_then(|row| row.draft.clone())
            .unwrap_or_else(|| field.value.clone())
    }

    /// Record a keystroke.
    pub fn set_draft(&mut self, key: &str, value: String) {
        self.rows.entry(key.to_string()).or_default().draft = Some(value);
    }

    /// Save status of a row.
    #[must_use]
    pub fn status(&self, key: &str) -> RowStatus {
        self.rows
            .get(key)
            .map(|row| row.status.clone())
            .unwrap_or_default()
    }

    /// Validate the row and, when valid, mark it saving and return the write.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the row stays editable and no request
    /// exists to send.
    pub fn begin_save(
        &mut self,
        field: &ConfigField,
    ) -> Result<ConfigUpdateRequest, ValidationError> {
        let value = coerce_value(field, &self.value(field))?;
        self.rows.entry(field.key.clone()).or_default().status = RowStatus::Saving;
        Ok(ConfigUpdateRequest {
            key: field.key.clone(),
            value,
        })
    }

    /// Settle a write. Returns the outcome on success; failures leave the draft
    /// untouched so the operator can retry.
    pub fn finish(&mut self, field: &ConfigField, accepted: bool) -> Option<SaveOutcome> {
        let row = self.rows.entry(field.key.clone()).or_default();
        if !accepted {
            row.status = RowStatus::Idle;
            return None;
        }
        let outcome = SaveOutcome::for_field(field);
        match outcome {
            SaveOutcome::Saved => row.status = RowStatus::Saved,
            SaveOutcome::ReauthRequired { clear_input, .. } => {
                row.status = RowStatus::Idle;
                if clear_input {
                    row.draft = Some(String::new());
                }
            }
        }
        Some(outcome)
    }

    /// Drop the transient "saved" feedback.
    pub fn clear_feedback(&mut self, key: &str) {
        if let Some(row) = self.rows.get_mut(key) {
            if row.status == RowStatus::Saved {
                row.status = RowStatus::Idle;
            }
        }
    }

    /// Forget every draft, e.g. after the snapshot was reloaded.
    pub fn reset(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::config::form::build_config_sections;
    use botwatch_api_models::{ConfigSnapshot, LogChannels, Scalar};
    use serde_json::json;

    fn snapshot() -> ConfigSnapshot {
        ConfigSnapshot {
            channels: Some(LogChannels {
                logs_id: Some(Scalar::Int(-100)),
                ..LogChannels::default()
            }),
            ..ConfigSnapshot::default()
        }
    }

    fn field(key: &str) -> ConfigField {
        build_config_sections(&snapshot())
            .into_iter()
            .flat_map(|section| section.fields)
            .find(|field| field.key == key)
            .expect("field present")
    }

    #[test]
    fn non_numeric_draft_issues_no_write() {
        let logs = field("LOGS_ID");
        let mut rows = ConfigRows::default();
        rows.set_draft("LOGS_ID", "abc".into());
        let mut writes = Vec::new();
        if let Ok(request) = rows.begin_save(&logs) {
            writes.push(request);
        }
        assert!(writes.is_empty());
        assert_eq!(rows.status("LOGS_ID"), RowStatus::Idle);
        assert_eq!(rows.value(&logs), "abc");
    }

    #[test]
    fn valid_number_round_trips_into_request() {
        let logs = field("LOGS_ID");
        let mut rows = ConfigRows::default();
        assert_eq!(rows.value(&logs), "-100");
        let request = rows.begin_save(&logs).expect("valid");
        assert_eq!(request.key, "LOGS_ID");
        assert_eq!(request.value, json!(-100));
        assert_eq!(rows.status("LOGS_ID"), RowStatus::Saving);
        assert_eq!(rows.finish(&logs, true), Some(SaveOutcome::Saved));
        assert_eq!(rows.status("LOGS_ID"), RowStatus::Saved);
        rows.clear_feedback("LOGS_ID");
        assert_eq!(rows.status("LOGS_ID"), RowStatus::Idle);
    }

    #[test]
    fn password_save_clears_input_and_asks_for_login() {
        let password = field("DASHBOARD_PASSWORD");
        let mut rows = ConfigRows::default();
        assert_eq!(
            rows.begin_save(&password),
            Err(ValidationError::EmptyPassword)
        );
        rows.set_draft("DASHBOARD_PASSWORD", "hunter2".into());
        assert!(rows.begin_save(&password).is_ok());
        assert_eq!(
            rows.finish(&password, true),
            Some(SaveOutcome::ReauthRequired {
                notice_key: "config.notices.password_changed",
                clear_input: true,
            })
        );
        assert_eq!(rows.value(&password), "");
    }

    #[test]
    fn failed_write_keeps_draft_editable() {
        let username = field("DASHBOARD_USERNAME");
        let mut rows = ConfigRows::default();
        rows.set_draft("DASHBOARD_USERNAME", "admin2".into());
        assert!(rows.begin_save(&username).is_ok());
        assert_eq!(rows.finish(&username, false), None);
        assert_eq!(rows.status("DASHBOARD_USERNAME"), RowStatus::Idle);
        assert_eq!(rows.value(&username), "admin2");
    }
}
