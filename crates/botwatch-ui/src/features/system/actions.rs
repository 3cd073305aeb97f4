//! Administrative and moderation actions.

use crate::features::cards::state::CardId;
use crate::i18n::TranslationBundle;
use botwatch_api_models::ActionResponse;

/// Confirmed POST actions exposed on the system and lists tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdminAction {
    /// Rotate the outbound IP (restarts WireGuard).
    RotateIp,
    /// Restart the bot service.
    RestartService,
    /// Update download engines.
    UpdateEngines,
    /// Delete user files.
    CleanupUserFiles,
    /// Re-download domain and keyword lists.
    UpdateLists,
}

impl AdminAction {
    /// Actions rendered on the system tab.
    pub const SYSTEM: [Self; 4] = [
        Self::RotateIp,
        Self::RestartService,
        Self::CleanupUserFiles,
        Self::UpdateEngines,
    ];

    /// POST endpoint.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::RotateIp => "/api/rotate-ip",
            Self::RestartService => "/api/restart-service",
            Self::UpdateEngines => "/api/update-engines",
            Self::CleanupUserFiles => "/api/cleanup-user-files",
            Self::UpdateLists => "/api/update-lists",
        }
    }

    /// Button label key.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::RotateIp => "system.ip_rotate",
            Self::RestartService => "system.restart",
            Self::UpdateEngines => "system.update_engines",
            Self::CleanupUserFiles => "system.cleanup",
            Self::UpdateLists => "lists.update",
        }
    }

    const fn message_prefix(self) -> &'static str {
        match self {
            Self::RotateIp => "actions.rotate_ip",
            Self::RestartService => "actions.restart",
            Self::UpdateEngines => "actions.update_engines",
            Self::CleanupUserFiles => "actions.cleanup",
            Self::UpdateLists => "actions.update_lists",
        }
    }

    /// Confirmation prompt.
    #[must_use]
    pub fn confirm_text(self, bundle: &TranslationBundle) -> String {
        bundle.text(&format!("{}.confirm", self.message_prefix()))
    }

    /// Cards reloaded after a successful run.
    #[must_use]
    pub const fn reloads(self) -> &'static [CardId] {
        match self {
            Self::RotateIp => &[CardId::SystemMetrics],
            Self::UpdateEngines => &[CardId::PackageVersions],
            Self::UpdateLists => &[CardId::ListsStats],
            Self::RestartService | Self::CleanupUserFiles => &[],
        }
    }

    /// Alert text for a settled run.
    #[must_use]
    pub fn result_text(
        self,
        result: &Result<ActionResponse, String>,
        bundle: &TranslationBundle,
    ) -> String {
        let response = match result {
            Ok(response) => response,
            Err(error) => return bundle.format("actions.error", &[("error", error)]),
        };
        let outcome = if response.is_ok() { "ok" } else { "failed" };
        let mut message = response
            .message
            .clone()
            .unwrap_or_else(|| bundle.text(&format!("{}.{outcome}", self.message_prefix())));
        if self == Self::RotateIp && response.is_ok() {
            if let (Some(ipv4), Some(ipv6)) = (&response.ipv4, &response.ipv6) {
                message.push_str("\n\n");
                message.push_str(&bundle.format(
                    "actions.new_addresses",
                    &[("ipv4", ipv4), ("ipv6", ipv6)],
                ));
            }
        }
        message
    }
}

/// Block or unblock a user from a row control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModerationAction {
    /// Add to the block list.
    Block,
    /// Remove from the block list.
    Unblock,
}

impl ModerationAction {
    /// POST endpoint.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Block => "/api/block-user",
            Self::Unblock => "/api/unblock-user",
        }
    }

    /// Row control glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Block => "❌",
            Self::Unblock => "✅",
        }
    }

    /// Confirmation prompt with the user id bound.
    #[must_use]
    pub fn confirm_text(self, user_id: i64, bundle: &TranslationBundle) -> String {
        let key = match self {
            Self::Block => "modals.block_confirm",
            Self::Unblock => "modals.unblock_confirm",
        };
        bundle.format(key, &[("id", &user_id)])
    }

    /// Cards refreshed once the request settled.
    #[must_use]
    pub const fn reloads(self) -> &'static [CardId] {
        &[CardId::BlockedUsers]
    }
}

/// Logout endpoint.
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

/// Page shown after logout, reached even when the request fails.
pub const LOGIN_PAGE: &str = "/login";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    fn bundle() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::En)
    }

    #[test]
    fn rotate_ip_reports_new_addresses() {
        let response = ActionResponse {
            status: Some("ok".into()),
            ipv4: Some("1.2.3.4".into()),
            ipv6: Some("::1".into()),
            ..ActionResponse::default()
        };
        let text = AdminAction::RotateIp.result_text(&Ok(response), &bundle());
        assert!(text.starts_with("IP rotated successfully"));
        assert!(text.contains("New IPv4: 1.2.3.4"));
        assert!(text.ends_with("New IPv6: ::1"));
    }

    #[test]
    fn server_message_wins_over_fallback() {
        let response = ActionResponse {
            status: Some("error".into()),
            message: Some("systemctl missing".into()),
            ..ActionResponse::default()
        };
        assert_eq!(
            AdminAction::RestartService.result_text(&Ok(response), &bundle()),
            "systemctl missing"
        );
        assert_eq!(
            AdminAction::CleanupUserFiles.result_text(&Ok(ActionResponse::default()), &bundle()),
            "Failed to cleanup files"
        );
    }

    #[test]
    fn transport_errors_are_prefixed() {
        let text = AdminAction::UpdateLists.result_text(&Err("HTTP 500".into()), &bundle());
        assert_eq!(text, "Error: HTTP 500");
    }

    #[test]
    fn reloads_follow_the_action() {
        assert_eq!(AdminAction::RotateIp.reloads(), &[CardId::SystemMetrics]);
        assert_eq!(AdminAction::UpdateEngines.reloads(), &[CardId::PackageVersions]);
        assert!(AdminAction::RestartService.reloads().is_empty());
        assert!(ModerationAction::Unblock.reloads().contains(&CardId::BlockedUsers));
    }

    #[test]
    fn moderation_prompt_binds_the_id() {
        assert_eq!(
            ModerationAction::Block.confirm_text(42, &bundle()),
            "Block user 42?"
        );
        assert_eq!(
            ModerationAction::Unblock.confirm_text(7, &bundle()),
            "Unblock user 7?"
        );
    }
}
