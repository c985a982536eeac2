//! Design tokens
//!
//! Tokens are the atomic values that make up the design system:
//! - Color scales and light/dark surface and border colors
//! - Typography (sizes, line heights, letter spacing, weights)
//! - Spacing (base scale and density tiers)
//! - Border radii
//! - Elevation shadows

mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
