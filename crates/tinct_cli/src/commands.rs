//! Subcommand implementations

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tinct_core::Rgb;
use tinct_export::ExportFormat;
use tinct_theme::{
    create_design_tokens, generate_color_scale, generate_dark_mode_scale, ContrastReport,
    CustomColors, TextSize,
};

use crate::config::{TinctConfig, CONFIG_FILE};

/// Fully resolved inputs of `tinct export`
#[derive(Debug)]
pub struct ExportPlan {
    pub colors: CustomColors,
    pub formats: Vec<ExportFormat>,
    pub out_dir: PathBuf,
}

/// Render each format and write it under `out_dir`. Returns the written paths.
pub fn write_exports(plan: &ExportPlan) -> Result<Vec<PathBuf>> {
    let tokens = create_design_tokens(&plan.colors);

    fs::create_dir_all(&plan.out_dir)
        .with_context(|| format!("Failed to create {}", plan.out_dir.display()))?;

    let mut written = Vec::with_capacity(plan.formats.len());
    for &format in &plan.formats {
        let path = plan.out_dir.join(format.file_name());
        fs::write(&path, format.export(&tokens))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {} ({})", path.display(), format);
        written.push(path);
    }
    Ok(written)
}

/// Render each format to `out`, separated by a banner line
pub fn print_exports(plan: &ExportPlan, out: &mut impl Write) -> Result<()> {
    let tokens = create_design_tokens(&plan.colors);
    let single = plan.formats.len() == 1;
    for &format in &plan.formats {
        if !single {
            writeln!(out, "===== {} =====", format.file_name())?;
        }
        writeln!(out, "{}", format.export(&tokens))?;
    }
    Ok(())
}

/// Print the 11-step scale for `seed`, one `shade value` pair per line
pub fn print_scale(seed: &str, dark: bool, out: &mut impl Write) -> Result<()> {
    let rgb: Rgb = seed
        .parse()
        .with_context(|| format!("Invalid seed color {seed:?}"))?;

    let scale = generate_color_scale(&rgb.to_hex());
    let scale = if dark {
        generate_dark_mode_scale(&scale)
    } else {
        scale
    };

    for (shade, value) in scale.iter() {
        writeln!(out, "{shade:>4}  {value}")?;
    }
    Ok(())
}

/// Print the contrast ratio and WCAG verdicts for a color pair
pub fn print_contrast(
    foreground: &str,
    background: &str,
    size: TextSize,
    out: &mut impl Write,
) -> Result<()> {
    let fg: Rgb = foreground
        .parse()
        .with_context(|| format!("Invalid foreground color {foreground:?}"))?;
    let bg: Rgb = background
        .parse()
        .with_context(|| format!("Invalid background color {background:?}"))?;

    let report = ContrastReport::evaluate(&fg.to_hex(), &bg.to_hex());
    let (aa, aaa) = match size {
        TextSize::Normal => (report.aa, report.aaa),
        TextSize::Large => (report.aa_large, report.aaa_large),
    };
    let verdict = |pass: bool| if pass { "pass" } else { "fail" };

    writeln!(out, "{fg} on {bg}")?;
    writeln!(out, "ratio  {:.2}:1", report.ratio)?;
    writeln!(out, "AA     {}", verdict(aa))?;
    writeln!(out, "AAA    {}", verdict(aaa))?;
    Ok(())
}

/// Write a starter `tinct.toml` into `dir`
pub fn init(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, TinctConfig::starter().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tinct-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_every_requested_format() {
        let dir = scratch_dir("write");
        let plan = ExportPlan {
            colors: CustomColors::default().with_primary("#ff0000"),
            formats: ExportFormat::ALL.to_vec(),
            out_dir: dir.clone(),
        };

        let written = write_exports(&plan).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "design-tokens.css",
                "tailwind.config.ts",
                "figma-variables.json",
                "theme.ts"
            ]
        );

        let css = fs::read_to_string(dir.join("design-tokens.css")).unwrap();
        assert!(css.contains("--color-primary-500: #ff0000;"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn single_format_prints_without_banner() {
        let plan = ExportPlan {
            colors: CustomColors::default(),
            formats: vec![ExportFormat::Css],
            out_dir: PathBuf::from("."),
        };
        let mut out = Vec::new();
        print_exports(&plan, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("/* ===="));
        assert!(!text.contains("===== design-tokens.css ====="));
    }

    #[test]
    fn scale_lists_eleven_shades() {
        let mut out = Vec::new();
        print_scale("FF0000", false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "  50  #faf5f5");
        assert_eq!(lines[5], " 500  #ff0000");
        assert_eq!(lines[10], " 950  #330000");

        let mut dark = Vec::new();
        print_scale("#ff0000", true, &mut dark).unwrap();
        let dark = String::from_utf8(dark).unwrap();
        assert_eq!(dark.lines().next(), Some("  50  #330000"));
    }

    #[test]
    fn scale_rejects_malformed_seed() {
        let mut out = Vec::new();
        assert!(print_scale("#12345", false, &mut out).is_err());
    }

    #[test]
    fn contrast_report() {
        let mut out = Vec::new();
        print_contrast("#000000", "#ffffff", TextSize::Normal, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#000000 on #ffffff\nratio  21.00:1\nAA     pass\nAAA    pass\n"
        );

        let mut out = Vec::new();
        print_contrast("#949494", "#ffffff", TextSize::Large, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("AA     pass"));
        assert!(text.contains("AAA    fail"));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = scratch_dir("init");
        let path = init(&dir).unwrap();
        assert_eq!(TinctConfig::load(&path).unwrap(), TinctConfig::starter());
        assert!(init(&dir).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
