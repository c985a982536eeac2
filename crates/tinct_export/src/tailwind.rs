//! Tailwind CSS configuration
//!
//! Color scales are inlined as literal hex values. Surface and border
//! aliases point at the CSS custom properties from [`crate::css`], so dark
//! mode follows whatever selector toggles those variables.

use indexmap::IndexMap;
use serde::Serialize;
use tinct_theme::{ColorScale, DesignTokens, FontWeights, RadiusScale, SpacingScale, TypeGroup};

use crate::pretty_json;

const HEADER: &str = "\
// tailwind.config.ts
// Design Tokens - Tailwind Configuration
// Generated by tinct - customize as needed

import type { Config } from 'tailwindcss';";

#[derive(Serialize)]
struct TailwindConfig<'a> {
    theme: ThemeSection<'a>,
}

#[derive(Serialize)]
struct ThemeSection<'a> {
    extend: Extend<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Extend<'a> {
    font_family: FontFamily,
    colors: IndexMap<&'static str, PaletteEntry<'a>>,
    spacing: &'a SpacingScale,
    border_radius: &'a RadiusScale,
    box_shadow: IndexMap<String, String>,
    font_size: IndexMap<String, (&'a str, FontSizeMeta<'a>)>,
    font_weight: &'a FontWeights,
}

#[derive(Serialize)]
struct FontFamily {
    sans: [&'static str; 3],
}

#[derive(Serialize)]
#[serde(untagged)]
enum PaletteEntry<'a> {
    Scale(&'a ColorScale),
    Var(String),
    Group(IndexMap<&'static str, String>),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FontSizeMeta<'a> {
    line_height: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    letter_spacing: Option<&'a str>,
}

fn var(name: &str) -> String {
    format!("var(--{name})")
}

fn group(entries: &[(&'static str, &str)]) -> PaletteEntry<'static> {
    PaletteEntry::Group(
        entries
            .iter()
            .map(|(key, name)| (*key, var(name)))
            .collect(),
    )
}

fn palette(tokens: &DesignTokens) -> IndexMap<&'static str, PaletteEntry<'_>> {
    let mut colors: IndexMap<&'static str, PaletteEntry<'_>> = tokens
        .colors
        .iter()
        .map(|(role, scale)| (role.id(), PaletteEntry::Scale(scale)))
        .collect();

    colors.insert("background", PaletteEntry::Var(var("surface-background")));
    colors.insert("foreground", PaletteEntry::Var(var("surface-foreground")));
    colors.insert(
        "card",
        group(&[
            ("DEFAULT", "surface-card"),
            ("foreground", "surface-card-foreground"),
        ]),
    );
    colors.insert(
        "popover",
        group(&[
            ("DEFAULT", "surface-popover"),
            ("foreground", "surface-popover-foreground"),
        ]),
    );
    colors.insert(
        "muted",
        group(&[
            ("DEFAULT", "surface-muted"),
            ("foreground", "surface-muted-foreground"),
        ]),
    );
    colors.insert(
        "border",
        group(&[
            ("DEFAULT", "border-default"),
            ("muted", "border-muted"),
            ("strong", "border-strong"),
            ("focus", "border-focus"),
        ]),
    );
    colors
}

fn font_sizes(tokens: &DesignTokens) -> IndexMap<String, (&str, FontSizeMeta<'_>)> {
    tokens
        .typography
        .entries()
        .into_iter()
        .map(|entry| {
            let style = entry.style;
            // Body copy inherits the document's letter spacing.
            let letter_spacing =
                (entry.group != TypeGroup::Body).then_some(style.letter_spacing.as_str());
            let meta = FontSizeMeta {
                line_height: &style.line_height,
                letter_spacing,
            };
            (entry.utility_name(), (style.font_size.as_str(), meta))
        })
        .collect()
}

/// Render the token tree as a `tailwind.config.ts` module.
pub fn export_to_tailwind(tokens: &DesignTokens) -> String {
    let config = TailwindConfig {
        theme: ThemeSection {
            extend: Extend {
                font_family: FontFamily {
                    sans: ["Inter", "system-ui", "sans-serif"],
                },
                colors: palette(tokens),
                spacing: &tokens.spacing,
                border_radius: &tokens.border_radius,
                box_shadow: tokens
                    .elevation
                    .keys()
                    .map(|level| (level.to_string(), var(&format!("shadow-{level}"))))
                    .collect(),
                font_size: font_sizes(tokens),
                font_weight: &tokens.font_weights,
            },
        },
    };

    let out = format!(
        "{HEADER}\n\nconst config: Config = {};\n\nexport default config;",
        pretty_json(&config)
    );
    tracing::trace!("export_to_tailwind - {} bytes", out.len());
    out
}
