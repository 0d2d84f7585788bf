use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour scheme preference, persisted as `"light"` / `"dark"`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    /// Light scheme
    Light,
    /// Dark scheme, used when nothing is stored
    #[default]
    Dark,
}

impl AppTheme {
    /// Every theme, in display order
    pub const ALL: [AppTheme; 2] = [AppTheme::Light, AppTheme::Dark];

    /// Persisted form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AppTheme::Light => "light",
            AppTheme::Dark => "dark",
        }
    }

    /// Label for settings screens
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            AppTheme::Light => "Light",
            AppTheme::Dark => "Dark",
        }
    }

    /// The other theme
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            AppTheme::Light => AppTheme::Dark,
            AppTheme::Dark => AppTheme::Light,
        }
    }

    /// True for [`AppTheme::Dark`]
    #[must_use]
    pub fn is_dark(&self) -> bool {
        *self == AppTheme::Dark
    }
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(AppTheme::Light),
            "dark" => Ok(AppTheme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}
