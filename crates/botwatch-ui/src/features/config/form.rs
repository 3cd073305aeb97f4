//! Config field descriptors, section building and value coercion.

use crate::core::logic::parse_list;
use crate::i18n::TranslationBundle;
use botwatch_api_models::{ConfigSnapshot, LogChannels, ProxySettings, Scalar};
use serde_json::Value;
use thiserror::Error;

/// Number of YouTube cookie slots always rendered.
pub const YOUTUBE_COOKIE_SLOTS: usize = 11;

/// Options offered by the rotation selectors.
pub const ROTATION_OPTIONS: &[&str] = &["random", "round_robin"];

/// Input control for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Numeric input.
    Number,
    /// Masked input; never prefilled with anything the user has to clear.
    Password,
    /// Comma-separated list.
    List,
    /// Fixed choice.
    Select(&'static [&'static str]),
}

impl FieldKind {
    /// `type` attribute of the rendered input.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Password => "password",
            Self::Text | Self::List | Self::Select(_) => "text",
        }
    }
}

/// Field-specific coercion overriding the kind default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueTransform {
    /// Comma-separated numbers; entries that do not parse are dropped.
    NumberList,
}

/// Localized label of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldLabel {
    /// Plain translation key.
    Key(&'static str),
    /// Numbered YouTube cookie slot (1-based).
    CookieSlot(usize),
    /// Per-service cookie URL.
    ServiceCookie(String),
}

impl FieldLabel {
    /// Render the label in the active locale.
    #[must_use]
    pub fn resolve(&self, bundle: &TranslationBundle) -> String {
        match self {
            Self::Key(key) => bundle.text(key),
            Self::CookieSlot(index) => {
                bundle.format("config.fields.cookie_slot", &[("index", index)])
            }
            Self::ServiceCookie(name) => {
                bundle.format("config.fields.service_cookie", &[("name", name)])
            }
        }
    }
}

/// One editable configuration value.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigField {
    /// Server-side config key.
    pub key: String,
    /// Row label.
    pub label: FieldLabel,
    /// Initial control value.
    pub value: String,
    /// Control kind.
    pub kind: FieldKind,
    /// Optional placeholder translation key.
    pub placeholder_key: Option<&'static str>,
    /// Optional coercion override.
    pub transform: Option<ValueTransform>,
}

impl ConfigField {
    fn new(key: impl Into<String>, label: FieldLabel, value: String, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label,
            value,
            kind,
            placeholder_key: None,
            transform: None,
        }
    }

    fn text(key: &str, label: &'static str, value: Option<&str>) -> Self {
        Self::new(
            key,
            FieldLabel::Key(label),
            value.unwrap_or_default().to_string(),
            FieldKind::Text,
        )
    }

    fn number(key: &str, label: &'static str, value: Option<&Scalar>) -> Self {
        Self::new(
            key,
            FieldLabel::Key(label),
            value.map(ToString::to_string).unwrap_or_default(),
            FieldKind::Number,
        )
    }

    fn number_list(key: &str, label: &'static str, values: &[Scalar]) -> Self {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            transform: Some(ValueTransform::NumberList),
            ..Self::new(key, FieldLabel::Key(label), joined, FieldKind::List)
        }
    }

    /// Whether a successful save requires the operator to log in again.
    #[must_use]
    pub fn requires_reauth(&self) -> bool {
        self.kind == FieldKind::Password || self.key == "DASHBOARD_USERNAME"
    }
}

/// Titled group of fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigSection {
    /// Heading translation key.
    pub title_key: &'static str,
    /// Rows in display order.
    pub fields: Vec<ConfigField>,
}

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A number field held something that is not a number.
    #[error("value for {key} must be a number")]
    NotANumber {
        /// Offending config key.
        key: String,
    },
    /// A password field was left empty.
    #[error("password cannot be empty")]
    EmptyPassword,
}

impl ValidationError {
    /// Translation key of the user-facing warning.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::NotANumber { .. } => "config.errors.not_a_number",
            Self::EmptyPassword => "config.errors.empty_password",
        }
    }
}

/// Convert the raw control value into the JSON value sent to the server.
///
/// # Errors
///
/// Returns [`ValidationError`] when the value does not fit the field kind.
pub fn coerce_value(field: &ConfigField, raw: &str) -> Result<Value, ValidationError> {
    if let Some(ValueTransform::NumberList) = field.transform {
        return Ok(Value::Array(
            parse_list(raw).iter().filter_map(|item| parse_number(item)).collect(),
        ));
    }
    match field.kind {
        FieldKind::Number => parse_number(raw.trim()).ok_or_else(|| ValidationError::NotANumber {
            key: field.key.clone(),
        }),
        FieldKind::List => Ok(Value::Array(
            parse_list(raw).into_iter().map(Value::String).collect(),
        )),
        FieldKind::Password if raw.trim().is_empty() => Err(ValidationError::EmptyPassword),
        FieldKind::Password | FieldKind::Text | FieldKind::Select(_) => {
            Ok(Value::String(raw.to_string()))
        }
    }
}

fn parse_number(raw: &str) -> Option<Value> {
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Value::from(int));
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Value::from)
}

/// Build the editor sections from a config snapshot.
///
/// Sections without fields are omitted.
#[must_use]
pub fn build_config_sections(snapshot: &ConfigSnapshot) -> Vec<ConfigSection> {
    let mut sections = Vec::new();
    let mut push = |title_key, fields: Vec<ConfigField>| {
        if !fields.is_empty() {
            sections.push(ConfigSection { title_key, fields });
        }
    };

    if let Some(proxy) = &snapshot.proxy {
        push("config.sections.proxy_1", proxy_fields("PROXY", proxy));
    }
    if let Some(proxy) = &snapshot.proxy_2 {
        push("config.sections.proxy_2", proxy_fields("PROXY_2", proxy));
    }
    push(
        "config.sections.proxy_strategy",
        vec![ConfigField::new(
            "PROXY_SELECT",
            FieldLabel::Key("config.fields.selection_mode"),
            snapshot
                .proxy_select
                .clone()
                .unwrap_or_else(|| "random".to_string()),
            FieldKind::Select(ROTATION_OPTIONS),
        )],
    );
    if let Some(cookies) = &snapshot.cookies {
        let fields = cookies
            .iter()
            .map(|(name, url)| {
                let upper = name.to_uppercase();
                ConfigField::new(
                    format!("{upper}_COOKIE_URL"),
                    FieldLabel::ServiceCookie(upper),
                    url.clone().unwrap_or_default(),
                    FieldKind::Text,
                )
            })
            .collect();
        push("config.sections.service_cookies", fields);
    }
    push("config.sections.youtube_cookies", youtube_fields(snapshot));
    push(
        "config.sections.allowed_groups",
        vec![ConfigField::number_list(
            "ALLOWED_GROUP",
            "config.fields.group_ids",
            &snapshot.allowed_groups,
        )],
    );
    push(
        "config.sections.admins",
        vec![ConfigField::number_list(
            "ADMIN",
            "config.fields.admin_ids",
            &snapshot.admins,
        )],
    );
    push(
        "config.sections.miniapp",
        vec![ConfigField::text(
            "MINIAPP_URL",
            "config.fields.miniapp_url",
            snapshot.miniapp_url.as_deref(),
        )],
    );
    push(
        "config.sections.subscription",
        vec![ConfigField::text(
            "SUBSCRIBE_CHANNEL_URL",
            "config.fields.subscribe_link",
            snapshot.subscribe_channel_url.as_deref(),
        )],
    );
    let username = snapshot
        .dashboard
        .as_ref()
        .and_then(|auth| auth.username.as_deref());
    push(
        "config.sections.dashboard_auth",
        vec![
            ConfigField::text("DASHBOARD_USERNAME", "config.fields.username", username),
            ConfigField {
                placeholder_key: Some("config.fields.new_password"),
                ..ConfigField::new(
                    "DASHBOARD_PASSWORD",
                    FieldLabel::Key("config.fields.password"),
                    String::new(),
                    FieldKind::Password,
                )
            },
        ],
    );
    push(
        "config.sections.logging_channels",
        channel_fields(&snapshot.channels.clone().unwrap_or_default()),
    );
    sections
}

fn proxy_fields(prefix: &str, proxy: &ProxySettings) -> Vec<ConfigField> {
    vec![
        ConfigField::text(
            &format!("{prefix}_TYPE"),
            "config.fields.type",
            proxy.kind.as_deref(),
        ),
        ConfigField::text(&format!("{prefix}_IP"), "config.fields.ip", proxy.ip.as_deref()),
        ConfigField::number(
            &format!("{prefix}_PORT"),
            "config.fields.port",
            proxy.port.as_ref(),
        ),
        ConfigField::text(
            &format!("{prefix}_USER"),
            "config.fields.user",
            proxy.user.as_deref(),
        ),
        ConfigField::new(
            format!("{prefix}_PASSWORD"),
            FieldLabel::Key("config.fields.password"),
            proxy.password.clone().unwrap_or_default(),
            FieldKind::Password,
        ),
    ]
}

fn youtube_fields(snapshot: &ConfigSnapshot) -> Vec<ConfigField> {
    let youtube = snapshot.youtube_cookies.clone().unwrap_or_default();
    let mut fields = vec![
        ConfigField::new(
            "YOUTUBE_COOKIE_ORDER",
            FieldLabel::Key("config.fields.rotation_mode"),
            youtube
                .order
                .clone()
                .unwrap_or_else(|| "round_robin".to_string()),
            FieldKind::Select(ROTATION_OPTIONS),
        ),
        ConfigField::text(
            "YOUTUBE_COOKIE_TEST_URL",
            "config.fields.test_url",
            youtube.test_url.as_deref(),
        ),
        ConfigField::text(
            "COOKIE_URL",
            "config.fields.fallback_cookie_url",
            youtube.cookie_url.as_deref(),
        ),
        ConfigField::text(
            "YOUTUBE_POT_BASE_URL",
            "config.fields.pot_base_url",
            youtube.pot_base_url.as_deref(),
        ),
    ];
    fields.extend((0..YOUTUBE_COOKIE_SLOTS).map(|slot| {
        let key = if slot == 0 {
            "YOUTUBE_COOKIE_URL".to_string()
        } else {
            format!("YOUTUBE_COOKIE_URL_{slot}")
        };
        let value = youtube
            .list
            .get(slot)
            .and_then(Option::as_ref)
            .map(ToString::to_string)
            .unwrap_or_default();
        ConfigField::new(key, FieldLabel::CookieSlot(slot + 1), value, FieldKind::Text)
    }));
    fields
}

fn channel_fields(channels: &LogChannels) -> Vec<ConfigField> {
    [
        ("LOGS_ID", "config.fields.logs_id", &channels.logs_id),
        ("LOGS_VIDEO_ID", "config.fields.logs_video_id", &channels.logs_video_id),
        ("LOGS_NSFW_ID", "config.fields.logs_nsfw_id", &channels.logs_nsfw_id),
        ("LOGS_IMG_ID", "config.fields.logs_img_id", &channels.logs_img_id),
        ("LOGS_PAID_ID", "config.fields.logs_paid_id", &channels.logs_paid_id),
        ("LOG_EXCEPTION", "config.fields.log_exception", &channels.log_exception),
        (
            "SUBSCRIBE_CHANNEL",
            "config.fields.subscribe_channel",
            &channels.subscribe_channel,
        ),
    ]
    .into_iter()
    .map(|(key, label, value)| ConfigField::number(key, label, value.as_ref()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use botwatch_api_models::{DashboardAuth, YoutubeCookies};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn field(kind: FieldKind) -> ConfigField {
        ConfigField::new("KEY", FieldLabel::Key("config.fields.ip"), String::new(), kind)
    }

    #[test]
    fn number_field_rejects_text_and_empty() {
        let number = field(FieldKind::Number);
        assert_eq!(
            coerce_value(&number, "abc"),
            Err(ValidationError::NotANumber { key: "KEY".into() })
        );
        assert!(coerce_value(&number, "  ").is_err());
        assert_eq!(coerce_value(&number, " 8080 "), Ok(json!(8080)));
        assert_eq!(coerce_value(&number, "-100123"), Ok(json!(-100_123)));
        assert_eq!(coerce_value(&number, "1.5"), Ok(json!(1.5)));
    }

    #[test]
    fn list_field_splits_trims_and_drops_empties() {
        assert_eq!(
            coerce_value(&field(FieldKind::List), " a, ,b ,,c"),
            Ok(json!(["a", "b", "c"]))
        );
    }

    #[test]
    fn number_list_transform_drops_non_numbers() {
        let ids = ConfigField::number_list("ADMIN", "config.fields.admin_ids", &[]);
        assert_eq!(coerce_value(&ids, "1, x, 2,,-3"), Ok(json!([1, 2, -3])));
    }

    #[test]
    fn password_refuses_empty() {
        let password = field(FieldKind::Password);
        assert_eq!(coerce_value(&password, "   "), Err(ValidationError::EmptyPassword));
        assert_eq!(coerce_value(&password, "s3cret"), Ok(json!("s3cret")));
        assert_eq!(
            ValidationError::EmptyPassword.message_key(),
            "config.errors.empty_password"
        );
    }

    #[test]
    fn empty_snapshot_keeps_always_present_sections() {
        let sections = build_config_sections(&ConfigSnapshot::default());
        let titles: Vec<_> = sections.iter().map(|s| s.title_key).collect();
        assert!(!titles.contains(&"config.sections.proxy_1"));
        assert!(!titles.contains(&"config.sections.service_cookies"));
        assert_eq!(titles.first(), Some(&"config.sections.proxy_strategy"));
        assert_eq!(titles.last(), Some(&"config.sections.logging_channels"));
        assert_eq!(sections[0].fields[0].value, "random");
    }

    #[test]
    fn youtube_section_always_has_eleven_slots() {
        let snapshot = ConfigSnapshot {
            youtube_cookies: Some(YoutubeCookies {
                list: vec![Some(Scalar::Text("https://a".into())), None],
                ..YoutubeCookies::default()
            }),
            ..ConfigSnapshot::default()
        };
        let sections = build_config_sections(&snapshot);
        let youtube = sections
            .iter()
            .find(|s| s.title_key == "config.sections.youtube_cookies")
            .expect("youtube section");
        let slots: Vec<_> = youtube
            .fields
            .iter()
            .filter(|f| matches!(f.label, FieldLabel::CookieSlot(_)))
            .collect();
        assert_eq!(slots.len(), YOUTUBE_COOKIE_SLOTS);
        assert_eq!(slots[0].key, "YOUTUBE_COOKIE_URL");
        assert_eq!(slots[0].value, "https://a");
        assert_eq!(slots[10].key, "YOUTUBE_COOKIE_URL_10");
        assert_eq!(youtube.fields[0].value, "round_robin");
    }

    #[test]
    fn proxies_cookies_and_auth_map_to_keys() {
        let snapshot = ConfigSnapshot {
            proxy_2: Some(ProxySettings {
                port: Some(Scalar::Int(3128)),
                ..ProxySettings::default()
            }),
            cookies: Some(BTreeMap::from([("vk".to_string(), None)])),
            admins: vec![Scalar::Int(1), Scalar::Int(2)],
            dashboard: Some(DashboardAuth {
                username: Some("root".into()),
            }),
            ..ConfigSnapshot::default()
        };
        let sections = build_config_sections(&snapshot);
        let all: Vec<&ConfigField> = sections.iter().flat_map(|s| &s.fields).collect();
        let find = |key: &str| all.iter().find(|f| f.key == key).copied();
        assert_eq!(find("PROXY_2_PORT").map(|f| f.value.as_str()), Some("3128"));
        assert!(find("PROXY_PORT").is_none());
        assert_eq!(
            find("VK_COOKIE_URL").map(|f| &f.label),
            Some(&FieldLabel::ServiceCookie("VK".into()))
        );
        assert_eq!(find("ADMIN").map(|f| f.value.as_str()), Some("1, 2"));
        let password = find("DASHBOARD_PASSWORD").expect("password row");
        assert!(password.value.is_empty());
        assert!(password.requires_reauth());
        assert!(find("DASHBOARD_USERNAME").is_some_and(ConfigField::requires_reauth));
        assert!(!find("ADMIN").is_some_and(ConfigField::requires_reauth));
    }

    #[test]
    fn labels_resolve_with_bindings() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(FieldLabel::CookieSlot(3).resolve(&bundle), "Cookie #3");
        assert_eq!(
            FieldLabel::ServiceCookie("VK".into()).resolve(&bundle),
            "VK cookie URL"
        );
    }
}
