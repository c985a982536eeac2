//! Figma variable collections
//!
//! Produces a JSON document with four collections:
//!
//! - **Colors** (modes `light`, `dark`): every scale shade plus every surface
//!   and border slot. Scale shades carry the same value in both modes.
//! - **Spacing** (mode `light`): base scale and each density tier, in pixels
//! - **Border Radius** (mode `light`): pixel radii, `9999px` as `9999`
//! - **Typography** (mode `light`): font weights, then font size and line
//!   height for every typography entry
//!
//! Variable names are `/`-separated paths such as `color/primary/500`.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Number;
use tinct_theme::{ColorScheme, DesignTokens, RADIUS_FULL};

use crate::names::{kebab_case, parse_length};
use crate::pretty_json;

/// Document format version
pub const FORMAT_VERSION: &str = "1.0.0";

/// Figma variable type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VariableType {
    Color,
    Float,
    String,
}

/// A variable value: color strings or numbers
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Text(String),
    Number(Number),
}

impl VariableValue {
    /// Whole numbers become JSON integers (`16`, not `16.0`)
    pub fn number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
            Self::Number(Number::from(value as i64))
        } else {
            Self::Number(Number::from_f64(value).unwrap_or_else(|| Number::from(0)))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: VariableType,
    pub values_by_mode: IndexMap<&'static str, VariableValue>,
}

impl Variable {
    fn color(name: String, light: &str, dark: &str) -> Self {
        let mut values_by_mode = IndexMap::new();
        values_by_mode.insert(ColorScheme::Light.id(), VariableValue::Text(light.to_string()));
        values_by_mode.insert(ColorScheme::Dark.id(), VariableValue::Text(dark.to_string()));
        Self {
            name,
            kind: VariableType::Color,
            values_by_mode,
        }
    }

    fn float(name: String, value: f64) -> Self {
        let mut values_by_mode = IndexMap::new();
        values_by_mode.insert(ColorScheme::Light.id(), VariableValue::number(value));
        Self {
            name,
            kind: VariableType::Float,
            values_by_mode,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableCollection {
    pub name: String,
    pub modes: Vec<&'static str>,
    pub variables: Vec<Variable>,
}

impl VariableCollection {
    fn multi_mode(name: &str, variables: Vec<Variable>) -> Self {
        Self {
            name: name.to_string(),
            modes: ColorScheme::ALL.iter().map(|s| s.id()).collect(),
            variables,
        }
    }

    fn single_mode(name: &str, variables: Vec<Variable>) -> Self {
        Self {
            name: name.to_string(),
            modes: vec![ColorScheme::Light.id()],
            variables,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaDocument {
    pub version: String,
    pub generated_at: String,
    pub collections: Vec<VariableCollection>,
}

fn color_collection(tokens: &DesignTokens) -> VariableCollection {
    let mut variables = Vec::new();

    for (role, scale) in tokens.colors.iter() {
        for (shade, value) in scale.iter() {
            variables.push(Variable::color(
                format!("color/{}/{shade}", role.id()),
                value,
                value,
            ));
        }
    }

    let surfaces = tokens.surfaces.light.entries().into_iter();
    for ((slot, light), (_, dark)) in surfaces.zip(tokens.surfaces.dark.entries()) {
        variables.push(Variable::color(
            format!("surface/{}", kebab_case(slot)),
            light,
            dark,
        ));
    }

    let borders = tokens.borders.light.entries().into_iter();
    for ((slot, light), (_, dark)) in borders.zip(tokens.borders.dark.entries()) {
        variables.push(Variable::color(format!("border/{slot}"), light, dark));
    }

    VariableCollection::multi_mode("Colors", variables)
}

fn spacing_collection(tokens: &DesignTokens) -> VariableCollection {
    let mut variables: Vec<Variable> = tokens
        .spacing
        .iter()
        .map(|(key, value)| Variable::float(format!("spacing/{key}"), parse_length(value)))
        .collect();

    for (density, tier) in tokens.semantic_spacing.tiers() {
        for (size, value) in tier.entries() {
            variables.push(Variable::float(
                format!("spacing/{density}/{size}"),
                parse_length(value),
            ));
        }
    }

    VariableCollection::single_mode("Spacing", variables)
}

fn radius_collection(tokens: &DesignTokens) -> VariableCollection {
    let variables = tokens
        .border_radius
        .iter()
        .map(|(key, value)| {
            let px = if value == RADIUS_FULL {
                9999.0
            } else {
                parse_length(value)
            };
            Variable::float(format!("radius/{key}"), px)
        })
        .collect();

    VariableCollection::single_mode("Border Radius", variables)
}

fn typography_collection(tokens: &DesignTokens) -> VariableCollection {
    let mut variables: Vec<Variable> = tokens
        .font_weights
        .entries()
        .into_iter()
        .map(|(name, weight)| Variable::float(format!("font-weight/{name}"), f64::from(weight)))
        .collect();

    for entry in tokens.typography.entries() {
        let path = entry.path();
        variables.push(Variable::float(
            format!("typography/{path}/font-size"),
            parse_length(&entry.style.font_size),
        ));
        variables.push(Variable::float(
            format!("typography/{path}/line-height"),
            parse_length(&entry.style.line_height),
        ));
    }

    VariableCollection::single_mode("Typography", variables)
}

/// Build the document with an explicit generation time.
pub fn figma_document(tokens: &DesignTokens, generated_at: DateTime<Utc>) -> FigmaDocument {
    FigmaDocument {
        version: FORMAT_VERSION.to_string(),
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        collections: vec![
            color_collection(tokens),
            spacing_collection(tokens),
            radius_collection(tokens),
            typography_collection(tokens),
        ],
    }
}

/// Render the Figma variables document stamped with `generated_at`.
pub fn export_figma_json_at(tokens: &DesignTokens, generated_at: DateTime<Utc>) -> String {
    let json = pretty_json(&figma_document(tokens, generated_at));
    tracing::trace!("export_figma_json - {} bytes", json.len());
    json
}

/// Render the Figma variables document stamped with the current time.
pub fn export_figma_json(tokens: &DesignTokens) -> String {
    export_figma_json_at(tokens, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn whole_numbers_serialize_as_integers() {
        assert_eq!(
            serde_json::to_string(&VariableValue::number(16.0)).unwrap(),
            "16"
        );
        assert_eq!(
            serde_json::to_string(&VariableValue::number(1.25)).unwrap(),
            "1.25"
        );
    }

    #[test]
    fn timestamp_is_iso_8601_with_millis() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        let doc = figma_document(&DesignTokens::default(), at);
        assert_eq!(doc.generated_at, "2024-03-01T12:30:05.000Z");
        assert_eq!(doc.version, "1.0.0");
    }

    #[test]
    fn collections_in_fixed_order() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let doc = figma_document(&DesignTokens::default(), at);
        let names: Vec<&str> = doc.collections.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Colors", "Spacing", "Border Radius", "Typography"]);
    }

    #[test]
    fn color_variable_count() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let doc = figma_document(&DesignTokens::default(), at);
        // 8 scales x 11 shades + 10 surfaces + 4 borders
        assert_eq!(doc.collections[0].variables.len(), 8 * 11 + 10 + 4);
    }
}
