//! Light/dark color schemes

use serde::Serialize;

/// Color scheme (light or dark mode)
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];

    /// Stable mode id used by exporters (`light` / `dark`)
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// A value authored separately for light and dark mode
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SchemePair<T> {
    pub light: T,
    pub dark: T,
}

impl<T> SchemePair<T> {
    pub const fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    /// Get the value for a color scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &T {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}
