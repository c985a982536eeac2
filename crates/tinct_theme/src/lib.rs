//! Tinct Theme Engine
//!
//! Derives a complete design-token tree from a handful of seed colors.
//!
//! # Overview
//!
//! - **Color scales**: 11-step ramps (`50`..`950`) generated from one seed
//!   ([`generate_color_scale`]) plus a structural dark-mode mirror
//!   ([`generate_dark_mode_scale`])
//! - **Contrast**: WCAG 2.1 luminance, contrast ratio and AA/AAA checks
//! - **Static tables**: typography, spacing, radii, elevation, surface and
//!   border colors for light and dark mode
//! - **Aggregation**: [`create_design_tokens`] assembles everything into one
//!   immutable [`DesignTokens`] value
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_theme::{create_design_tokens, CustomColors, Shade};
//!
//! let tokens = create_design_tokens(&CustomColors::default().with_primary("#ff0000"));
//! assert_eq!(tokens.colors.primary.get(Shade::S500), "#ff0000");
//!
//! // Secondary keeps its built-in seed
//! assert_eq!(tokens.colors.secondary, tinct_theme::DesignTokens::default().colors.secondary);
//! ```
//!
//! # Degraded input
//!
//! Nothing in this crate fails on a malformed color string. A bad seed
//! produces a gray scale and a bad contrast input counts as black, so an
//! editor can regenerate tokens on every keystroke.

pub mod contrast;
pub mod design;
pub mod scale;
pub mod scheme;
pub mod tokens;

pub use contrast::{
    contrast_ratio, is_wcag_aa_compliant, is_wcag_aaa_compliant, luminance, ContrastReport,
    TextSize,
};
pub use design::{create_design_tokens, CustomColors, DesignTokens};
pub use scale::{generate_color_scale, generate_dark_mode_scale, ColorScale, Shade, SCALE_STEPS};
pub use scheme::{ColorScheme, SchemePair};
pub use tokens::*;
