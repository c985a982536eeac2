//! Spacing tokens for theming
//!
//! Keys keep declaration order (`0`, `px`, `0.5`, `1`, ... `32`) in every
//! export, rather than sorting integer-like keys first.

use indexmap::IndexMap;
use serde::Serialize;

/// Base spacing scale: key (`"0"`, `"px"`, `"0.5"`, `"1"`, ...) to length
pub type SpacingScale = IndexMap<String, String>;

const SPACING: [(&str, &str); 16] = [
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "2px"),
    ("1", "4px"),
    ("2", "8px"),
    ("3", "12px"),
    ("4", "16px"),
    ("5", "20px"),
    ("6", "24px"),
    ("8", "32px"),
    ("10", "40px"),
    ("12", "48px"),
    ("16", "64px"),
    ("20", "80px"),
    ("24", "96px"),
    ("32", "128px"),
];

/// The 4px-based spacing scale
pub fn spacing_scale() -> SpacingScale {
    SPACING
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Named sizes for one density tier
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpacingTier {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl SpacingTier {
    /// Build a tier from five base-scale keys (xs..xl)
    fn from_scale(scale: &SpacingScale, keys: [&str; 5]) -> Self {
        let [xs, sm, md, lg, xl] = keys.map(|key| scale.get(key).cloned().unwrap_or_default());
        Self { xs, sm, md, lg, xl }
    }

    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }
}

/// Spacing aliases at three densities
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SemanticSpacing {
    pub compact: SpacingTier,
    pub default: SpacingTier,
    pub comfortable: SpacingTier,
}

impl SemanticSpacing {
    pub fn from_scale(scale: &SpacingScale) -> Self {
        Self {
            compact: SpacingTier::from_scale(scale, ["1", "2", "3", "4", "6"]),
            default: SpacingTier::from_scale(scale, ["2", "3", "4", "6", "8"]),
            comfortable: SpacingTier::from_scale(scale, ["3", "4", "6", "8", "12"]),
        }
    }

    /// `(density, tier)` pairs: compact, default, comfortable
    pub fn tiers(&self) -> [(&'static str, &SpacingTier); 3] {
        [
            ("compact", &self.compact),
            ("default", &self.default),
            ("comfortable", &self.comfortable),
        ]
    }
}

impl Default for SemanticSpacing {
    fn default() -> Self {
        Self::from_scale(&spacing_scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_keeps_declaration_order() {
        let scale = spacing_scale();
        let keys: Vec<&str> = scale.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["0", "px", "0.5", "1", "2", "3", "4", "5", "6", "8", "10", "12", "16", "20", "24", "32"]
        );
    }

    #[test]
    fn tiers_resolve_against_base_scale() {
        let spacing = SemanticSpacing::default();
        assert_eq!(spacing.compact.xs, "4px");
        assert_eq!(spacing.compact.xl, "24px");
        assert_eq!(spacing.default.md, "16px");
        assert_eq!(spacing.comfortable.xl, "48px");
    }
}
