//! Tinct Core
//!
//! Color-space primitives shared by the rest of the Tinct workspace:
//!
//! - **Hex parsing**: strict [`Rgb::from_hex`] returning a [`ColorError`]
//! - **HSL conversion**: [`hex_to_hsl`] and [`hsl_to_hex`]
//!
//! The free conversion functions are lenient. A string that is not a
//! six-digit hex color converts to `Hsl { h: 0, s: 0, l: 0 }` instead of
//! failing, because callers routinely pass half-typed values from an editor.
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{hex_to_hsl, hsl_to_hex};
//!
//! let hsl = hex_to_hsl("#ff0000");
//! assert_eq!(hsl.h, 0.0);
//! assert_eq!(hsl.s, 100.0);
//! assert_eq!(hsl.l, 50.0);
//!
//! assert_eq!(hsl_to_hex(hsl.h, hsl.s, hsl.l), "#ff0000");
//! assert_eq!(hex_to_hsl("#ff00").l, 0.0);
//! ```

pub mod color;
pub mod error;

pub use color::{hex_to_hsl, hsl_to_hex, Hsl, Rgb};
pub use error::ColorError;
