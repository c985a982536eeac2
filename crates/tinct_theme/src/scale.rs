//! 11-step color scales
//!
//! A scale is derived from a single seed color. Hue and saturation come from
//! the seed; each shade then pins lightness to a fixed stop and scales the
//! saturation by a per-shade multiplier (clamped at 100%). The seed's own
//! lightness is ignored, so shade `500` is always the seed's hue and
//! saturation at 50% lightness.

use std::fmt;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tinct_core::{hex_to_hsl, hsl_to_hex};

/// Shade key of a color scale, from lightest (`50`) to darkest (`950`)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Numeric key as it appears in exported names (`"50"`, `"500"`, ...)
    pub fn key(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shade| shade.key() == key)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The shade at the mirrored position (`50` <-> `950`, `500` stays put)
    pub fn mirror(self) -> Self {
        Self::ALL[Self::ALL.len() - 1 - self.index()]
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// One row of the scale recipe: shade, saturation multiplier, lightness (%)
pub type ScaleStep = (Shade, f64, f64);

/// Saturation multiplier and lightness stop for every shade.
pub const SCALE_STEPS: [ScaleStep; 11] = [
    (Shade::S50, 0.3, 97.0),
    (Shade::S100, 0.4, 94.0),
    (Shade::S200, 0.5, 86.0),
    (Shade::S300, 0.6, 76.0),
    (Shade::S400, 0.8, 64.0),
    (Shade::S500, 1.0, 50.0),
    (Shade::S600, 1.1, 42.0),
    (Shade::S700, 1.15, 34.0),
    (Shade::S800, 1.2, 26.0),
    (Shade::S900, 1.25, 18.0),
    (Shade::S950, 1.3, 10.0),
];

/// An ordered set of 11 `#rrggbb` shades
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorScale {
    shades: [String; 11],
}

impl ColorScale {
    /// Build a scale from one value per shade, in [`Shade::ALL`] order
    pub fn from_fn(mut f: impl FnMut(Shade) -> String) -> Self {
        Self {
            shades: Shade::ALL.map(&mut f),
        }
    }

    pub fn get(&self, shade: Shade) -> &str {
        &self.shades[shade.index()]
    }

    /// Shades from `50` to `950`
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> + '_ {
        Shade::ALL
            .into_iter()
            .zip(self.shades.iter().map(String::as_str))
    }
}

impl Index<Shade> for ColorScale {
    type Output = str;

    fn index(&self, shade: Shade) -> &str {
        self.get(shade)
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (shade, value) in self.iter() {
            map.serialize_entry(shade.key(), value)?;
        }
        map.end()
    }
}

/// Generate an 11-step scale from a seed color.
///
/// A malformed seed behaves like hue 0 / saturation 0 and produces a
/// neutral gray scale.
pub fn generate_color_scale(seed: &str) -> ColorScale {
    let hsl = hex_to_hsl(seed);

    ColorScale::from_fn(|shade| {
        let (_, multiplier, lightness) = SCALE_STEPS[shade.index()];
        let saturation = (hsl.s * multiplier).min(100.0);
        hsl_to_hex(hsl.h, saturation, lightness)
    })
}

/// Mirror a light scale into a dark-mode scale.
///
/// Pure lookup: shade `50` takes the light `950`, `100` takes `900`, and so
/// on. `500` is unchanged. Applying it twice gives back the original scale.
pub fn generate_dark_mode_scale(light: &ColorScale) -> ColorScale {
    ColorScale::from_fn(|shade| light.get(shade.mirror()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::Rgb;

    #[test]
    fn shade_keys_round_trip() {
        for shade in Shade::ALL {
            assert_eq!(Shade::from_key(shade.key()), Some(shade));
        }
        assert_eq!(Shade::from_key("550"), None);
    }

    #[test]
    fn mirror_pairs() {
        assert_eq!(Shade::S50.mirror(), Shade::S950);
        assert_eq!(Shade::S400.mirror(), Shade::S600);
        assert_eq!(Shade::S500.mirror(), Shade::S500);
    }

    #[test]
    fn steps_cover_every_shade_in_order() {
        let shades: Vec<Shade> = SCALE_STEPS.iter().map(|(shade, _, _)| *shade).collect();
        assert_eq!(shades, Shade::ALL.to_vec());
    }

    #[test]
    fn red_seed_scale() {
        let scale = generate_color_scale("#ff0000");
        assert_eq!(scale.get(Shade::S50), "#faf5f5");
        assert_eq!(scale.get(Shade::S400), "#ed5a5a");
        assert_eq!(scale.get(Shade::S500), "#ff0000");
        assert_eq!(scale.get(Shade::S600), "#d60000");
        assert_eq!(scale.get(Shade::S950), "#330000");
    }

    #[test]
    fn default_primary_seed_scale() {
        let scale = generate_color_scale("#2563eb");
        let values: Vec<&str> = scale.iter().map(|(_, v)| v).collect();
        assert_eq!(
            values,
            vec![
                "#f5f7f9", "#ebeef5", "#ccd6ea", "#a3b6e0", "#668ce0", "#1558ea", "#0946cd",
                "#0438aa", "#002a84", "#001d5c", "#001033",
            ]
        );
    }

    #[test]
    fn malformed_seed_gives_gray_scale() {
        let scale = generate_color_scale("#zzz");
        assert_eq!(scale.get(Shade::S500), "#808080");
        for (_, value) in scale.iter() {
            let rgb = Rgb::from_hex(value).unwrap();
            assert!(rgb.r == rgb.g && rgb.g == rgb.b, "{value} is not gray");
        }
    }

    #[test]
    fn dark_mode_scale_swaps_ends() {
        let light = generate_color_scale("#7c3aed");
        let dark = generate_dark_mode_scale(&light);
        assert_eq!(dark.get(Shade::S50), light.get(Shade::S950));
        assert_eq!(dark.get(Shade::S300), light.get(Shade::S700));
        assert_eq!(dark.get(Shade::S500), light.get(Shade::S500));
        assert_eq!(dark.get(Shade::S950), light.get(Shade::S50));
    }

    #[test]
    fn index_by_shade() {
        let scale = generate_color_scale("#ff0000");
        assert_eq!(&scale[Shade::S500], "#ff0000");
    }
}
