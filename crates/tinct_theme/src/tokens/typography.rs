//! Typography tokens for theming

use serde::Serialize;

/// Font weight table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontWeights {
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

impl FontWeights {
    pub fn entries(&self) -> [(&'static str, u16); 4] {
        [
            ("regular", self.regular),
            ("medium", self.medium),
            ("semibold", self.semibold),
            ("bold", self.bold),
        ]
    }
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            regular: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        }
    }
}

/// A single text style
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_size: String,
    pub line_height: String,
    pub letter_spacing: String,
    pub font_weight: u16,
}

impl TypeStyle {
    pub fn new(font_size: &str, line_height: &str, letter_spacing: &str, font_weight: u16) -> Self {
        Self {
            font_size: font_size.to_string(),
            line_height: line_height.to_string(),
            letter_spacing: letter_spacing.to_string(),
            font_weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayScale {
    pub xl: TypeStyle,
    pub lg: TypeStyle,
    pub md: TypeStyle,
    pub sm: TypeStyle,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadingScale {
    pub h1: TypeStyle,
    pub h2: TypeStyle,
    pub h3: TypeStyle,
    pub h4: TypeStyle,
    pub h5: TypeStyle,
    pub h6: TypeStyle,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BodyScale {
    pub xl: TypeStyle,
    pub lg: TypeStyle,
    pub md: TypeStyle,
    pub sm: TypeStyle,
    pub xs: TypeStyle,
}

/// Group a typography entry belongs to
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypeGroup {
    Display,
    Heading,
    Body,
    Caption,
    Overline,
}

impl TypeGroup {
    pub fn id(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Heading => "heading",
            Self::Body => "body",
            Self::Caption => "caption",
            Self::Overline => "overline",
        }
    }
}

/// One typography entry with its position in the scale
#[derive(Clone, Copy, Debug)]
pub struct TypeEntry<'a> {
    pub group: TypeGroup,
    /// Size key within the group; `None` for `caption` and `overline`
    pub key: Option<&'static str>,
    pub style: &'a TypeStyle,
}

impl TypeEntry<'_> {
    /// Utility name: `display-xl`, `h1`, `body-sm`, `caption`, `overline`
    pub fn utility_name(&self) -> String {
        match (self.group, self.key) {
            (TypeGroup::Heading, Some(key)) => key.to_string(),
            (group, Some(key)) => format!("{}-{key}", group.id()),
            (group, None) => group.id().to_string(),
        }
    }

    /// Hierarchical path: `display/xl`, `heading/h1`, `caption`
    pub fn path(&self) -> String {
        match self.key {
            Some(key) => format!("{}/{key}", self.group.id()),
            None => self.group.id().to_string(),
        }
    }
}

/// Complete typography scale
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypographyScale {
    pub display: DisplayScale,
    pub heading: HeadingScale,
    pub body: BodyScale,
    pub caption: TypeStyle,
    pub overline: TypeStyle,
}

impl TypographyScale {
    /// Every entry: display, headings, body, caption, overline
    pub fn entries(&self) -> Vec<TypeEntry<'_>> {
        let entry = |group, key, style| TypeEntry { group, key, style };
        let d = &self.display;
        let h = &self.heading;
        let b = &self.body;

        vec![
            entry(TypeGroup::Display, Some("xl"), &d.xl),
            entry(TypeGroup::Display, Some("lg"), &d.lg),
            entry(TypeGroup::Display, Some("md"), &d.md),
            entry(TypeGroup::Display, Some("sm"), &d.sm),
            entry(TypeGroup::Heading, Some("h1"), &h.h1),
            entry(TypeGroup::Heading, Some("h2"), &h.h2),
            entry(TypeGroup::Heading, Some("h3"), &h.h3),
            entry(TypeGroup::Heading, Some("h4"), &h.h4),
            entry(TypeGroup::Heading, Some("h5"), &h.h5),
            entry(TypeGroup::Heading, Some("h6"), &h.h6),
            entry(TypeGroup::Body, Some("xl"), &b.xl),
            entry(TypeGroup::Body, Some("lg"), &b.lg),
            entry(TypeGroup::Body, Some("md"), &b.md),
            entry(TypeGroup::Body, Some("sm"), &b.sm),
            entry(TypeGroup::Body, Some("xs"), &b.xs),
            entry(TypeGroup::Caption, None, &self.caption),
            entry(TypeGroup::Overline, None, &self.overline),
        ]
    }
}

impl Default for TypographyScale {
    fn default() -> Self {
        let w = FontWeights::default();
        Self {
            display: DisplayScale {
                xl: TypeStyle::new("72px", "1.1", "-0.025em", w.bold),
                lg: TypeStyle::new("60px", "1.1", "-0.025em", w.bold),
                md: TypeStyle::new("48px", "1.15", "-0.02em", w.bold),
                sm: TypeStyle::new("36px", "1.2", "-0.015em", w.semibold),
            },
            heading: HeadingScale {
                h1: TypeStyle::new("32px", "1.25", "-0.01em", w.semibold),
                h2: TypeStyle::new("28px", "1.3", "-0.01em", w.semibold),
                h3: TypeStyle::new("24px", "1.35", "-0.005em", w.semibold),
                h4: TypeStyle::new("20px", "1.4", "0", w.medium),
                h5: TypeStyle::new("18px", "1.4", "0", w.medium),
                h6: TypeStyle::new("16px", "1.5", "0", w.medium),
            },
            body: BodyScale {
                xl: TypeStyle::new("20px", "1.6", "0", w.regular),
                lg: TypeStyle::new("18px", "1.6", "0", w.regular),
                md: TypeStyle::new("16px", "1.6", "0", w.regular),
                sm: TypeStyle::new("14px", "1.5", "0", w.regular),
                xs: TypeStyle::new("12px", "1.5", "0.01em", w.regular),
            },
            caption: TypeStyle::new("12px", "1.4", "0.02em", w.regular),
            overline: TypeStyle::new("11px", "1.4", "0.08em", w.medium),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_cover_every_style_in_order() {
        let scale = TypographyScale::default();
        let names: Vec<String> = scale.entries().iter().map(TypeEntry::utility_name).collect();
        assert_eq!(
            names,
            vec![
                "display-xl", "display-lg", "display-md", "display-sm", "h1", "h2", "h3", "h4",
                "h5", "h6", "body-xl", "body-lg", "body-md", "body-sm", "body-xs", "caption",
                "overline",
            ]
        );
    }

    #[test]
    fn entry_paths() {
        let scale = TypographyScale::default();
        let entries = scale.entries();
        assert_eq!(entries[0].path(), "display/xl");
        assert_eq!(entries[4].path(), "heading/h1");
        assert_eq!(entries[14].path(), "body/xs");
        assert_eq!(entries[16].path(), "overline");
    }

    #[test]
    fn weights_come_from_weight_table() {
        let scale = TypographyScale::default();
        assert_eq!(scale.display.xl.font_weight, 700);
        assert_eq!(scale.display.sm.font_weight, 600);
        assert_eq!(scale.heading.h4.font_weight, 500);
        assert_eq!(scale.body.md.font_weight, 400);
    }
}
