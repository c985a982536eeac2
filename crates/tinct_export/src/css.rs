//! CSS custom-property sheet
//!
//! Layout of the generated file:
//!
//! ```text
//! :root { color scales, light surfaces, light borders, font weights,
//!         spacing, radii, light shadows }
//! .dark, [data-theme="dark"] { dark surfaces, dark borders, dark shadows }
//! .text-* typography utility classes
//! ```

use tinct_theme::{BorderColors, ColorScheme, DesignTokens, SurfaceColors, TypeGroup};

use crate::names::{css_ident, kebab_case};

const HEADER: &str = "\
/* ============================================================================
 * DESIGN TOKENS - CSS CUSTOM PROPERTIES
 * Generated by tinct - do not edit manually
 * ============================================================================ */";

/// Selector that activates the dark-mode overrides
pub const DARK_SELECTOR: &str = ".dark, [data-theme=\"dark\"]";

/// Accumulates lines; joined with `\n` at the end
#[derive(Default)]
struct Sheet {
    lines: Vec<String>,
}

impl Sheet {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn var(&mut self, name: &str, value: impl std::fmt::Display) {
        self.lines.push(format!("  --{name}: {value};"));
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn surface_vars(sheet: &mut Sheet, surfaces: &SurfaceColors) {
    for (slot, value) in surfaces.entries() {
        sheet.var(&format!("surface-{}", kebab_case(slot)), value);
    }
}

fn border_vars(sheet: &mut Sheet, borders: &BorderColors) {
    for (slot, value) in borders.entries() {
        sheet.var(&format!("border-{slot}"), value);
    }
}

fn shadow_vars(sheet: &mut Sheet, tokens: &DesignTokens, scheme: ColorScheme) {
    for (level, shadow) in &tokens.elevation {
        sheet.var(&format!("shadow-{level}"), shadow.for_scheme(scheme));
    }
}

/// Render the token tree as a CSS custom-property sheet.
pub fn export_to_css(tokens: &DesignTokens) -> String {
    let mut sheet = Sheet::default();
    sheet.line(HEADER);
    sheet.blank();

    // ── :root ───────────────────────────────────────────────────────
    sheet.line(":root {");

    sheet.line("  /* Color Scales */");
    for (role, scale) in tokens.colors.iter() {
        for (shade, value) in scale.iter() {
            sheet.var(&format!("color-{}-{shade}", role.id()), value);
        }
        sheet.blank();
    }

    sheet.line("  /* Surface Colors - Light Mode */");
    surface_vars(&mut sheet, &tokens.surfaces.light);
    sheet.blank();

    sheet.line("  /* Border Colors - Light Mode */");
    border_vars(&mut sheet, &tokens.borders.light);
    sheet.blank();

    sheet.line("  /* Typography - Font Weights */");
    for (name, weight) in tokens.font_weights.entries() {
        sheet.var(&format!("font-weight-{name}"), weight);
    }
    sheet.blank();

    sheet.line("  /* Spacing Scale */");
    for (key, value) in &tokens.spacing {
        sheet.var(&format!("spacing-{}", css_ident(key)), value);
    }
    sheet.blank();

    sheet.line("  /* Border Radius */");
    for (key, value) in &tokens.border_radius {
        sheet.var(&format!("radius-{}", css_ident(key)), value);
    }
    sheet.blank();

    sheet.line("  /* Elevation - Light Mode */");
    shadow_vars(&mut sheet, tokens, ColorScheme::Light);
    sheet.blank();

    sheet.line("}");
    sheet.blank();

    // ── dark overrides ──────────────────────────────────────────────
    sheet.line(format!("{DARK_SELECTOR} {{"));

    sheet.line("  /* Surface Colors - Dark Mode */");
    surface_vars(&mut sheet, &tokens.surfaces.dark);
    sheet.blank();

    sheet.line("  /* Border Colors - Dark Mode */");
    border_vars(&mut sheet, &tokens.borders.dark);
    sheet.blank();

    sheet.line("  /* Elevation - Dark Mode */");
    shadow_vars(&mut sheet, tokens, ColorScheme::Dark);

    sheet.line("}");
    sheet.blank();

    // ── typography classes ──────────────────────────────────────────
    sheet.line("/* Typography Utility Classes */");
    for entry in tokens.typography.entries() {
        let style = entry.style;
        sheet.line(format!(".text-{} {{", entry.utility_name()));
        sheet.line(format!("  font-size: {};", style.font_size));
        sheet.line(format!("  line-height: {};", style.line_height));
        sheet.line(format!("  letter-spacing: {};", style.letter_spacing));
        sheet.line(format!("  font-weight: {};", style.font_weight));
        if entry.group == TypeGroup::Overline {
            sheet.line("  text-transform: uppercase;");
        }
        sheet.line("}");
    }

    let css = sheet.finish();
    tracing::trace!("export_to_css - {} bytes", css.len());
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_block_lists_scales_first() {
        let css = export_to_css(&DesignTokens::default());
        let root = css.find(":root {").unwrap();
        let first_color = css.find("--color-primary-50:").unwrap();
        let first_surface = css.find("--surface-background:").unwrap();
        assert!(root < first_color && first_color < first_surface);
    }

    #[test]
    fn camel_case_slots_become_kebab_case() {
        let css = export_to_css(&DesignTokens::default());
        assert!(css.contains("  --surface-card-foreground: #0f172a;"));
        assert!(css.contains("  --surface-muted-foreground: #64748b;"));
    }

    #[test]
    fn fractional_spacing_key_is_escaped() {
        let css = export_to_css(&DesignTokens::default());
        assert!(css.contains("  --spacing-0\\.5: 2px;"));
        assert!(css.contains("  --spacing-px: 1px;"));
    }

    #[test]
    fn only_overline_is_uppercased() {
        let css = export_to_css(&DesignTokens::default());
        assert_eq!(css.matches("text-transform: uppercase;").count(), 1);
        let overline = css.find(".text-overline {").unwrap();
        assert!(css[overline..].contains("text-transform: uppercase;"));
    }
}
