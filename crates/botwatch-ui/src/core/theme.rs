//! Theme preference for the dashboard shell.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    #[default]
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and local storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored identifier; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Translation key for the toggle button, which names the theme it switches to.
    #[must_use]
    pub const fn toggle_label_key(self) -> &'static str {
        match self {
            Self::Light => "buttons.theme_dark",
            Self::Dark => "buttons.theme_light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn parse_round_trips_and_rejects_unknown() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse(" dark "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggle_label_key(), "buttons.theme_light");
    }
}
