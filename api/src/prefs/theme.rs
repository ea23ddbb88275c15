use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// The color scheme of the interface.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value for the `data-theme` attribute understood by pico.css.
    pub fn as_attr(self) -> &'static str {
        self.into()
    }

    /// Picks the initial theme from a build-time variable, with a conservative
    /// in-code default.
    ///
    /// # Environment Variables (read by the compiler, case-insensitive):
    /// - `ANALYZER_DEFAULT_THEME`: "light" or "dark".
    ///   defaults to light
    pub fn from_build_env() -> Self {
        option_env!("ANALYZER_DEFAULT_THEME")
            .and_then(|s| Self::from_str(s.trim()).ok())
            .unwrap_or(Self::Light)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_build_env()
    }
}
