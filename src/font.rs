use crate::bitmap_font;
use anyhow::{Context, Result};
use cosmic_text::{
    fontdb, Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight,
};
use image::{imageops, GrayImage, Luma};
use log::{debug, warn};
use std::fmt;
use std::path::{Path, PathBuf};

/// Bold sans-serif faces tried before the built-in font, in order
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// One entry of the font fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// TrueType or OpenType file on disk
    File(PathBuf),
    /// The bitmap font compiled into the binary, which cannot fail
    Builtin,
}

impl FontSource {
    /// The files in `paths` followed by the built-in font.
    pub fn chain<P: AsRef<Path>>(paths: &[P]) -> Vec<FontSource> {
        paths
            .iter()
            .map(|path| FontSource::File(path.as_ref().to_path_buf()))
            .chain(std::iter::once(FontSource::Builtin))
            .collect()
    }

    pub fn default_chain() -> Vec<FontSource> {
        Self::chain(DEFAULT_FONT_PATHS)
    }
}

/// An outline font loaded from a single file and shaped with cosmic-text.
pub struct OutlineFont {
    system: FontSystem,
    cache: SwashCache,
    family: String,
}

impl OutlineFont {
    pub fn load(path: &Path) -> Result<Self> {
        let mut db = fontdb::Database::new();
        db.load_font_file(path)
            .with_context(|| format!("Failed to read font file {}", path.display()))?;

        let family = db
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .with_context(|| format!("No usable font face in {}", path.display()))?;

        Ok(OutlineFont {
            system: FontSystem::new_with_locale_and_db("en-US".to_string(), db),
            cache: SwashCache::new(),
            family,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    fn rasterize(&mut self, text: &str, px: f32) -> GrayImage {
        let width = px * (text.chars().count() as f32 + 1.0);
        let height = px * 2.0;

        let mut buffer = Buffer::new(&mut self.system, Metrics::new(px, px * 1.25));
        buffer.set_size(&mut self.system, Some(width), Some(height));
        let attrs = Attrs::new()
            .family(Family::Name(&self.family))
            .weight(Weight::BOLD);
        buffer.set_text(&mut self.system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.system, false);

        let mut mask = GrayImage::new(width.ceil() as u32, height.ceil() as u32);
        let (mask_w, mask_h) = (mask.width() as i32, mask.height() as i32);
        buffer.draw(
            &mut self.system,
            &mut self.cache,
            Color::rgb(255, 255, 255),
            |x, y, w, h, color| {
                let coverage = color.a();
                if coverage == 0 {
                    return;
                }
                for my in y.max(0)..(y + h as i32).min(mask_h) {
                    for mx in x.max(0)..(x + w as i32).min(mask_w) {
                        let pixel = mask.get_pixel_mut(mx as u32, my as u32);
                        pixel.0[0] = pixel.0[0].max(coverage);
                    }
                }
            },
        );
        mask
    }
}

pub enum Font {
    Outline(Box<OutlineFont>),
    Builtin,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Font::Outline(font) => f.debug_tuple("Outline").field(&font.family).finish(),
            Font::Builtin => f.write_str("Builtin"),
        }
    }
}

impl Font {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin)
    }

    /// Render `text` at `px` pixels per em into a coverage mask cropped to
    /// its ink, so the mask's dimensions are the text's bounding box.
    pub fn rasterize(&mut self, text: &str, px: f32) -> GrayImage {
        let px = px.max(1.0);
        let mask = match self {
            Font::Outline(font) => font.rasterize(text, px),
            Font::Builtin => bitmap_font::rasterize(text, px),
        };
        crop_to_ink(&mask)
    }
}

/// Load the first candidate that works, falling back to the built-in font.
pub fn resolve_font(candidates: &[FontSource]) -> Font {
    let mut skipped: Vec<&Path> = Vec::new();
    for source in candidates {
        match source {
            FontSource::File(path) => match OutlineFont::load(path) {
                Ok(font) => {
                    debug!("Using font '{}' from {}", font.family(), path.display());
                    return Font::Outline(Box::new(font));
                }
                Err(e) => {
                    debug!("Skipping font candidate: {:#}", e);
                    skipped.push(path);
                }
            },
            FontSource::Builtin => break,
        }
    }

    if skipped.is_empty() {
        debug!("Using built-in bitmap font");
    } else {
        let tried: Vec<String> = skipped.iter().map(|path| path.display().to_string()).collect();
        warn!(
            "No font file could be loaded ({}), using the built-in bitmap font",
            tried.join(", ")
        );
    }
    Font::Builtin
}

/// Crop a mask to the bounding box of its non-zero pixels.
pub fn crop_to_ink(mask: &GrayImage) -> GrayImage {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, Luma([coverage])) in mask.enumerate_pixels() {
        if *coverage == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    match bounds {
        Some((x0, y0, x1, y1)) => {
            imageops::crop_imm(mask, x0, y0, x1 - x0 + 1, y1 - y0 + 1).to_image()
        }
        None => GrayImage::new(0, 0),
    }
}
