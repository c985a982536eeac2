//! Tinct Exporters
//!
//! Turns a [`DesignTokens`] tree into the four text artifacts a design
//! system ships with:
//!
//! | Format | Function | File |
//! |--------|----------|------|
//! | CSS custom properties | [`export_to_css`] | `design-tokens.css` |
//! | Tailwind config | [`export_to_tailwind`] | `tailwind.config.ts` |
//! | Figma variables | [`export_figma_json`] | `figma-variables.json` |
//! | TypeScript theme | [`export_to_typescript`] | `theme.ts` |
//!
//! Every exporter is a total function of its input. Output is stable across
//! runs except the `generatedAt` field of the Figma document; use
//! [`export_figma_json_at`] to pin it.
//!
//! ```rust
//! use tinct_export::{export_all_formats, ExportFormat};
//! use tinct_theme::{create_design_tokens, CustomColors};
//!
//! let tokens = create_design_tokens(&CustomColors::default().with_primary("#ff0000"));
//! let bundle = export_all_formats(&tokens);
//! assert!(bundle.css.contains("--color-primary-500: #ff0000;"));
//! assert_eq!(bundle.get(ExportFormat::Css), bundle.css);
//! ```

pub mod css;
pub mod figma;
pub mod format;
mod names;
pub mod tailwind;
pub mod typescript;

use serde::Serialize;
use tinct_theme::DesignTokens;

pub use css::{export_to_css, DARK_SELECTOR};
pub use figma::{export_figma_json, export_figma_json_at, FigmaDocument};
pub use format::{ExportFormat, Exporter, FormatParseError};
pub use tailwind::export_to_tailwind;
pub use typescript::export_to_typescript;

/// Pretty JSON with two-space indentation.
pub(crate) fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Token trees only have string or integer map keys.
    serde_json::to_string_pretty(value).expect("token tree serializes to JSON")
}

/// All four formats rendered from the same tokens
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportBundle {
    pub css: String,
    pub tailwind: String,
    #[serde(rename = "figmaJSON")]
    pub figma_json: String,
    pub typescript: String,
}

impl ExportBundle {
    pub fn get(&self, format: ExportFormat) -> &str {
        match format {
            ExportFormat::Css => &self.css,
            ExportFormat::Tailwind => &self.tailwind,
            ExportFormat::FigmaJson => &self.figma_json,
            ExportFormat::TypeScript => &self.typescript,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExportFormat, &str)> + '_ {
        ExportFormat::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Render every format.
pub fn export_all_formats(tokens: &DesignTokens) -> ExportBundle {
    let bundle = ExportBundle {
        css: export_to_css(tokens),
        tailwind: export_to_tailwind(tokens),
        figma_json: export_figma_json(tokens),
        typescript: export_to_typescript(tokens),
    };
    tracing::debug!("export_all_formats - rendered {} formats", ExportFormat::ALL.len());
    bundle
}
