//! Token aggregation
//!
//! [`create_design_tokens`] is the only producer of [`DesignTokens`]. It runs
//! the caller's brand seeds through the scale generator and composes the
//! result with the fixed scales and static tables.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tinct_core::Rgb;

use crate::scale::{generate_color_scale, ColorScale};
use crate::scheme::SchemePair;
use crate::tokens::*;

/// Optional brand seeds. `None` or an empty string selects the built-in seed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CustomColors {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}

impl CustomColors {
    pub fn with_primary(mut self, hex: impl Into<String>) -> Self {
        self.primary = Some(hex.into());
        self
    }

    pub fn with_secondary(mut self, hex: impl Into<String>) -> Self {
        self.secondary = Some(hex.into());
        self
    }

    pub fn with_accent(mut self, hex: impl Into<String>) -> Self {
        self.accent = Some(hex.into());
        self
    }

    /// The supplied seed for a role, ignoring empty strings
    pub fn seed(&self, role: ColorRole) -> Option<&str> {
        if !role.is_customizable() {
            return None;
        }
        let seed = match role {
            ColorRole::Primary => self.primary.as_deref(),
            ColorRole::Secondary => self.secondary.as_deref(),
            _ => self.accent.as_deref(),
        };
        seed.filter(|s| !s.is_empty())
    }

    /// Overlay `other` on top of `self`; seeds set in `other` win
    pub fn merge(self, other: CustomColors) -> Self {
        Self {
            primary: other.primary.or(self.primary),
            secondary: other.secondary.or(self.secondary),
            accent: other.accent.or(self.accent),
        }
    }
}

/// The complete token tree consumed by every exporter
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub colors: SemanticColors,
    pub surfaces: SchemePair<SurfaceColors>,
    pub borders: SchemePair<BorderColors>,
    pub typography: TypographyScale,
    pub spacing: SpacingScale,
    pub semantic_spacing: SemanticSpacing,
    pub border_radius: RadiusScale,
    pub elevation: ElevationScale,
    pub font_weights: FontWeights,
}

impl Default for DesignTokens {
    fn default() -> Self {
        create_design_tokens(&CustomColors::default())
    }
}

/// The built-in scale for every role, computed once
fn default_scales() -> &'static [ColorScale; 8] {
    static DEFAULTS: OnceLock<[ColorScale; 8]> = OnceLock::new();
    DEFAULTS.get_or_init(|| ColorRole::ALL.map(|role| generate_color_scale(role.default_seed())))
}

fn resolve_scale(role: ColorRole, custom: &CustomColors) -> ColorScale {
    match custom.seed(role) {
        Some(seed) => {
            if let Err(err) = Rgb::from_hex(seed) {
                tracing::warn!(
                    "create_design_tokens - {} seed {:?} is not a hex color ({}), using a gray scale",
                    role.id(),
                    seed,
                    err
                );
            }
            generate_color_scale(seed)
        }
        None => default_scales()[role.index()].clone(),
    }
}

/// Build the full token tree.
///
/// Deterministic: equal inputs always produce equal trees. Only `primary`,
/// `secondary` and `accent` are customizable; the other roles and all
/// static tables are fixed.
pub fn create_design_tokens(custom: &CustomColors) -> DesignTokens {
    tracing::debug!(
        "create_design_tokens - primary={:?} secondary={:?} accent={:?}",
        custom.seed(ColorRole::Primary),
        custom.seed(ColorRole::Secondary),
        custom.seed(ColorRole::Accent)
    );

    let colors = SemanticColors {
        primary: resolve_scale(ColorRole::Primary, custom),
        secondary: resolve_scale(ColorRole::Secondary, custom),
        accent: resolve_scale(ColorRole::Accent, custom),
        neutral: resolve_scale(ColorRole::Neutral, custom),
        success: resolve_scale(ColorRole::Success, custom),
        warning: resolve_scale(ColorRole::Warning, custom),
        error: resolve_scale(ColorRole::Error, custom),
        info: resolve_scale(ColorRole::Info, custom),
    };

    let spacing = spacing_scale();
    let semantic_spacing = SemanticSpacing::from_scale(&spacing);

    DesignTokens {
        colors,
        surfaces: SurfaceColors::pair(),
        borders: BorderColors::pair(),
        typography: TypographyScale::default(),
        spacing,
        semantic_spacing,
        border_radius: border_radius_scale(),
        elevation: elevation_scale(),
        font_weights: FontWeights::default(),
    }
}
