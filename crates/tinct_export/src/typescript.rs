//! Typed theme module
//!
//! The `theme` literal is the JSON serialization of [`DesignTokens`]
//! itself, so field names match the token tree one to one.

use tinct_theme::DesignTokens;

use crate::pretty_json;

const HEADER: &str = "\
// Design System Theme Object
// Generated by tinct - do not edit manually";

const TYPE_ALIASES: &str = "\
export type Theme = typeof theme;
export type ColorScale = typeof theme.colors.primary;
export type SemanticColors = typeof theme.colors;
export type SurfaceColors = typeof theme.surfaces.light;
export type BorderColors = typeof theme.borders.light;
export type TypographyScale = typeof theme.typography;
export type SpacingScale = typeof theme.spacing;
export type BorderRadiusScale = typeof theme.borderRadius;
export type ElevationScale = typeof theme.elevation;

// Utility types for component props
export type ColorName = keyof SemanticColors;
export type ColorShade = keyof ColorScale;
export type SpacingKey = keyof SpacingScale;
export type RadiusKey = keyof BorderRadiusScale;
export type ElevationLevel = keyof ElevationScale;";

/// Render the token tree as a `theme.ts` module.
pub fn export_to_typescript(tokens: &DesignTokens) -> String {
    let out = format!(
        "{HEADER}\n\nexport const theme = {} as const;\n\n{TYPE_ALIASES}\n\nexport default theme;\n",
        pretty_json(tokens)
    );
    tracing::trace!("export_to_typescript - {} bytes", out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_shape() {
        let ts = export_to_typescript(&DesignTokens::default());
        assert!(ts.starts_with("// Design System Theme Object\n"));
        assert!(ts.contains("export const theme = {\n"));
        assert!(ts.contains("} as const;\n"));
        assert!(ts.contains("export type ElevationLevel = keyof ElevationScale;"));
        assert!(ts.ends_with("export default theme;\n"));
    }

    #[test]
    fn declares_every_alias() {
        let ts = export_to_typescript(&DesignTokens::default());
        for alias in [
            "Theme",
            "ColorScale",
            "SemanticColors",
            "SurfaceColors",
            "BorderColors",
            "TypographyScale",
            "SpacingScale",
            "BorderRadiusScale",
            "ElevationScale",
            "ColorName",
            "ColorShade",
            "SpacingKey",
            "RadiusKey",
            "ElevationLevel",
        ] {
            assert!(ts.contains(&format!("export type {alias} = ")), "{alias}");
        }
    }
}
