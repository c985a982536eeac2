//! Color tokens for theming

use serde::Serialize;

use crate::scale::ColorScale;
use crate::scheme::SchemePair;

/// Semantic color role, each backed by a full [`ColorScale`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Brand colors (seeded by the caller)
    Primary,
    Secondary,
    Accent,

    // Fixed scales
    Neutral,
    Success,
    Warning,
    Error,
    Info,
}

impl ColorRole {
    pub const ALL: [ColorRole; 8] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Neutral,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Error,
        ColorRole::Info,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Built-in seed used when the caller does not supply one
    pub fn default_seed(self) -> &'static str {
        match self {
            Self::Primary => "#2563eb",
            Self::Secondary => "#7c3aed",
            Self::Accent => "#06b6d4",
            Self::Neutral => "#64748b",
            Self::Success => "#22c55e",
            Self::Warning => "#f59e0b",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }

    /// Whether callers may replace this role's seed
    pub fn is_customizable(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary | Self::Accent)
    }
}

/// One color scale per semantic role
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SemanticColors {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub accent: ColorScale,
    pub neutral: ColorScale,
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
    pub info: ColorScale,
}

impl SemanticColors {
    /// Get a scale by role
    pub fn get(&self, role: ColorRole) -> &ColorScale {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Neutral => &self.neutral,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
            ColorRole::Info => &self.info,
        }
    }

    /// Scales in [`ColorRole::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &ColorScale)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

/// Background/foreground pairs for page, card, popover, modal and muted areas
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceColors {
    pub background: String,
    pub foreground: String,
    pub card: String,
    pub card_foreground: String,
    pub popover: String,
    pub popover_foreground: String,
    pub modal: String,
    pub modal_foreground: String,
    pub muted: String,
    pub muted_foreground: String,
}

impl SurfaceColors {
    /// `(camelCase slot, value)` pairs in declaration order
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
            ("card", self.card.as_str()),
            ("cardForeground", self.card_foreground.as_str()),
            ("popover", self.popover.as_str()),
            ("popoverForeground", self.popover_foreground.as_str()),
            ("modal", self.modal.as_str()),
            ("modalForeground", self.modal_foreground.as_str()),
            ("muted", self.muted.as_str()),
            ("mutedForeground", self.muted_foreground.as_str()),
        ]
    }

    pub fn light() -> Self {
        Self {
            background: "#ffffff".into(),
            foreground: "#0f172a".into(),
            card: "#ffffff".into(),
            card_foreground: "#0f172a".into(),
            popover: "#ffffff".into(),
            popover_foreground: "#0f172a".into(),
            modal: "#ffffff".into(),
            modal_foreground: "#0f172a".into(),
            muted: "#f1f5f9".into(),
            muted_foreground: "#64748b".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#0a0a0b".into(),
            foreground: "#fafafa".into(),
            card: "#18181b".into(),
            card_foreground: "#fafafa".into(),
            popover: "#18181b".into(),
            popover_foreground: "#fafafa".into(),
            modal: "#27272a".into(),
            modal_foreground: "#fafafa".into(),
            muted: "#27272a".into(),
            muted_foreground: "#a1a1aa".into(),
        }
    }

    /// Hand-tuned light and dark surfaces
    pub fn pair() -> SchemePair<Self> {
        SchemePair::new(Self::light(), Self::dark())
    }
}

/// Border colors; translucent except for the focus ring
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BorderColors {
    pub default: String,
    pub muted: String,
    pub strong: String,
    pub focus: String,
}

impl BorderColors {
    /// `(slot, value)` pairs in declaration order
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("default", self.default.as_str()),
            ("muted", self.muted.as_str()),
            ("strong", self.strong.as_str()),
            ("focus", self.focus.as_str()),
        ]
    }

    pub fn light() -> Self {
        Self {
            default: "rgba(0, 0, 0, 0.08)".into(),
            muted: "rgba(0, 0, 0, 0.04)".into(),
            strong: "rgba(0, 0, 0, 0.16)".into(),
            focus: "#2563eb".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            default: "rgba(255, 255, 255, 0.08)".into(),
            muted: "rgba(255, 255, 255, 0.04)".into(),
            strong: "rgba(255, 255, 255, 0.16)".into(),
            focus: "#3b82f6".into(),
        }
    }

    pub fn pair() -> SchemePair<Self> {
        SchemePair::new(Self::light(), Self::dark())
    }
}
