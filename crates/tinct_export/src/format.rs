use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tinct_theme::DesignTokens;

use crate::{css, figma, tailwind, typescript};

/// Signature shared by every exporter
pub type Exporter = fn(&DesignTokens) -> String;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown export format {0:?} (expected css, tailwind, figma or typescript)")]
pub struct FormatParseError(pub String);

/// One of the four output formats
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ExportFormat {
    Css,
    Tailwind,
    FigmaJson,
    TypeScript,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::FigmaJson,
        ExportFormat::TypeScript,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::FigmaJson => "figma",
            ExportFormat::TypeScript => "typescript",
        }
    }

    /// File name used when writing this format to disk
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Css => "design-tokens.css",
            ExportFormat::Tailwind => "tailwind.config.ts",
            ExportFormat::FigmaJson => "figma-variables.json",
            ExportFormat::TypeScript => "theme.ts",
        }
    }

    pub fn exporter(self) -> Exporter {
        match self {
            ExportFormat::Css => css::export_to_css,
            ExportFormat::Tailwind => tailwind::export_to_tailwind,
            ExportFormat::FigmaJson => figma::export_figma_json,
            ExportFormat::TypeScript => typescript::export_to_typescript,
        }
    }

    pub fn export(self, tokens: &DesignTokens) -> String {
        (self.exporter())(tokens)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "tailwind" => Ok(ExportFormat::Tailwind),
            "figma" | "figma-json" | "figmajson" => Ok(ExportFormat::FigmaJson),
            "typescript" | "ts" => Ok(ExportFormat::TypeScript),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ids_and_aliases() {
        for format in ExportFormat::ALL {
            assert_eq!(format.id().parse::<ExportFormat>(), Ok(format));
        }
        assert_eq!("figma-json".parse(), Ok(ExportFormat::FigmaJson));
        assert_eq!("TS".parse(), Ok(ExportFormat::TypeScript));
        assert_eq!(
            "scss".parse::<ExportFormat>(),
            Err(FormatParseError("scss".to_string()))
        );
    }

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<_> = ExportFormat::ALL.iter().map(|f| f.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
