//! Elevation (shadow) tokens for theming
//!
//! Dark-mode shadows are stronger and add a faint light ring so raised
//! surfaces stay distinguishable on near-black backgrounds.

use indexmap::IndexMap;

use crate::scheme::SchemePair;

/// Elevation level (1..=5) to its light/dark box-shadow
///
/// Keys are `u8` so JSON exporters write them as `"1"`..`"5"`.
pub type ElevationScale = IndexMap<u8, SchemePair<String>>;

pub fn elevation_scale() -> ElevationScale {
    [
        (
            1,
            "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            "0 1px 2px 0 rgba(0, 0, 0, 0.4), 0 0 0 1px rgba(255, 255, 255, 0.03)",
        ),
        (
            2,
            "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px -1px rgba(0, 0, 0, 0.1)",
            "0 1px 3px 0 rgba(0, 0, 0, 0.5), 0 1px 2px -1px rgba(0, 0, 0, 0.5), 0 0 0 1px rgba(255, 255, 255, 0.04)",
        ),
        (
            3,
            "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)",
            "0 4px 6px -1px rgba(0, 0, 0, 0.6), 0 2px 4px -2px rgba(0, 0, 0, 0.5), 0 0 0 1px rgba(255, 255, 255, 0.05)",
        ),
        (
            4,
            "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)",
            "0 10px 15px -3px rgba(0, 0, 0, 0.7), 0 4px 6px -4px rgba(0, 0, 0, 0.5), 0 0 0 1px rgba(255, 255, 255, 0.06)",
        ),
        (
            5,
            "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1)",
            "0 20px 25px -5px rgba(0, 0, 0, 0.8), 0 8px 10px -6px rgba(0, 0, 0, 0.5), 0 0 0 1px rgba(255, 255, 255, 0.07)",
        ),
    ]
    .into_iter()
    .map(|(level, light, dark)| (level, SchemePair::new(light.to_string(), dark.to_string())))
    .collect()
}
