//! Border radius tokens for theming

use indexmap::IndexMap;

/// Radius key (`none`, `sm`, ..., `full`) to length
pub type RadiusScale = IndexMap<String, String>;

/// Sentinel length for fully rounded (pill) corners
pub const RADIUS_FULL: &str = "9999px";

pub fn border_radius_scale() -> RadiusScale {
    [
        ("none", "0px"),
        ("sm", "4px"),
        ("md", "8px"),
        ("lg", "12px"),
        ("xl", "16px"),
        ("2xl", "24px"),
        ("full", RADIUS_FULL),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}
