//! WCAG 2.1 contrast evaluation.
//!
//! Colors are given as hex strings. Anything that does not parse as
//! `#rrggbb` is treated as luminance `0` (black) rather than an error.

use tinct_core::Rgb;

/// Minimum ratio for AA, normal text
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA, large text
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA, normal text
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AAA, large text
pub const AAA_LARGE: f64 = 4.5;

/// Text size class for WCAG thresholds
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum TextSize {
    #[default]
    Normal,
    /// 18pt+ regular or 14pt+ bold
    Large,
}

/// Linearize one sRGB channel in `[0, 1]`
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1, in `[0, 1]`.
///
/// `L = 0.2126 R + 0.7152 G + 0.0722 B` over linearized channels.
/// Malformed hex yields `0.0`.
pub fn luminance(hex: &str) -> f64 {
    let Ok(rgb) = Rgb::from_hex(hex) else {
        return 0.0;
    };
    let [r, g, b] = rgb.to_unit().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, in `[1, 21]`, independent of order.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn is_wcag_aa_compliant(foreground: &str, background: &str, size: TextSize) -> bool {
    let threshold = match size {
        TextSize::Normal => AA_NORMAL,
        TextSize::Large => AA_LARGE,
    };
    contrast_ratio(foreground, background) >= threshold
}

pub fn is_wcag_aaa_compliant(foreground: &str, background: &str, size: TextSize) -> bool {
    let threshold = match size {
        TextSize::Normal => AAA_NORMAL,
        TextSize::Large => AAA_LARGE,
    };
    contrast_ratio(foreground, background) >= threshold
}

/// Ratio plus every AA/AAA verdict for one color pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastReport {
    pub ratio: f64,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    pub fn evaluate(foreground: &str, background: &str) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            ratio,
            aa: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Luminance ───────────────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert_eq!(luminance("#000000"), 0.0);
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = luminance("#ffffff");
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_channels() {
        assert!(approx_eq(luminance("#ff0000"), 0.2126, 1e-9));
        assert!(approx_eq(luminance("#00ff00"), 0.7152, 1e-9));
        assert!(approx_eq(luminance("0000ff"), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_mid_gray() {
        // sRGB 0x80 linearizes to ~0.216
        let lum = luminance("#808080");
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_malformed_is_zero() {
        assert_eq!(luminance("#fff"), 0.0);
        assert_eq!(luminance("white"), 0.0);
        assert_eq!(luminance(""), 0.0);
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        for c in ["#000000", "#2563eb", "#ffffff", "#777777"] {
            assert_eq!(contrast_ratio(c, c), 1.0, "{c}");
        }
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#cc334d", "#1a1a66");
        let ba = contrast_ratio("#1a1a66", "#cc334d");
        assert_eq!(ab, ba);
    }

    #[test]
    fn malformed_counts_as_black() {
        assert_eq!(
            contrast_ratio("nope", "#ffffff"),
            contrast_ratio("#000000", "#ffffff")
        );
    }

    // ── Compliance ──────────────────────────────────────────────────

    #[test]
    fn black_on_white_passes_everything() {
        assert!(is_wcag_aa_compliant("#000000", "#ffffff", TextSize::Normal));
        assert!(is_wcag_aaa_compliant("#000000", "#ffffff", TextSize::Normal));
    }

    #[test]
    fn close_grays_fail_aa() {
        assert!(!is_wcag_aa_compliant("#777777", "#808080", TextSize::Normal));
        assert!(!is_wcag_aa_compliant("#777777", "#808080", TextSize::Large));
    }

    #[test]
    fn large_text_uses_lower_thresholds() {
        // #767676 on white is ~4.54:1
        assert!(is_wcag_aa_compliant("#767676", "#ffffff", TextSize::Normal));
        assert!(!is_wcag_aaa_compliant("#767676", "#ffffff", TextSize::Normal));
        assert!(is_wcag_aaa_compliant("#767676", "#ffffff", TextSize::Large));

        // #949494 on white is ~3.03:1
        assert!(!is_wcag_aa_compliant("#949494", "#ffffff", TextSize::Normal));
        assert!(is_wcag_aa_compliant("#949494", "#ffffff", TextSize::Large));
    }

    #[test]
    fn report_matches_predicates() {
        let report = ContrastReport::evaluate("#767676", "#ffffff");
        assert!(report.aa);
        assert!(report.aa_large);
        assert!(!report.aaa);
        assert!(report.aaa_large);
        assert!(approx_eq(report.ratio, 4.54, 0.01), "{}", report.ratio);
    }
}
