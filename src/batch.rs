use crate::config::Config;
use crate::font::resolve_font;
use crate::render::IconRenderer;
use anyhow::{Context, Result};
use image::ImageFormat;
use log::debug;
use std::io::Write;
use std::path::{self, Path, PathBuf};

/// Files written by a completed batch, in table order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
}

/// Render every configured icon into `config.output_dir`, reporting progress
/// to `out`. The output directory must already exist.
pub fn run_batch<W: Write>(config: &Config, out: &mut W) -> Result<BatchReport> {
    let mut renderer = IconRenderer::new(resolve_font(&config.font_sources()));
    run_batch_with(&mut renderer, config, out)
}

/// Same as [`run_batch`] with a caller-provided renderer.
pub fn run_batch_with<W: Write>(
    renderer: &mut IconRenderer,
    config: &Config,
    out: &mut W,
) -> Result<BatchReport> {
    let output_dir = &config.output_dir;
    let shown_dir = resolved_dir(output_dir);

    writeln!(out, "Generating HydraTrack water bottle icons...")?;
    writeln!(out, "Output directory: {}", shown_dir.display())?;
    writeln!(out)?;
    debug!("Label font: {:?}", renderer.font());

    let mut report = BatchReport::default();
    for icon in &config.icons {
        let img = renderer
            .render(icon.size)
            .with_context(|| format!("Failed to render {}", icon.name))?;

        let path = output_dir.join(&icon.name);
        img.save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        writeln!(out, "✓ Created: {}", icon.name)?;
        report.written.push(path);
    }

    writeln!(out)?;
    writeln!(
        out,
        "✅ All {} icons generated successfully!",
        report.written.len()
    )?;
    writeln!(out, "Icons saved to: {}", shown_dir.display())?;

    Ok(report)
}

/// The output directory as an absolute path, or as given if that fails.
fn resolved_dir(dir: &Path) -> PathBuf {
    path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}
