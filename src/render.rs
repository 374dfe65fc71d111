use crate::canvas::{blend_mask, fill_polygon, fill_rect, fill_rounded_rect};
use crate::constants::{
    background, body, cap, highlight, label, neck, water, wave, REFERENCE_SIZE,
};
use crate::font::{resolve_font, Font, FontSource};
use anyhow::{bail, Result};
use image::{Rgb, RgbImage};
use std::f32::consts::PI;

/// Largest edge length the renderer accepts
pub const MAX_SIZE: u32 = 16384;

/// Axis-aligned box with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

/// Every layer's position for one icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub size: u32,
    pub scale: f32,
    pub cap: Rect,
    pub neck: Rect,
    pub body: Rect,
    pub water: Rect,
    pub highlight: Rect,
}

impl Geometry {
    pub fn new(size: u32) -> Self {
        let scale = size as f32 / REFERENCE_SIZE;
        let s = |value: f32| scaled(value, scale);
        let centered = |width: i32| (size as i32 - width).div_euclid(2);

        let cap_w = s(cap::WIDTH);
        let cap = Rect::new(centered(cap_w), s(cap::TOP), cap_w, s(cap::HEIGHT));

        let neck_w = s(neck::WIDTH);
        let neck = Rect::new(centered(neck_w), cap.y1, neck_w, s(neck::HEIGHT));

        let body_w = s(body::WIDTH);
        let body = Rect::new(centered(body_w), neck.y1, body_w, s(body::HEIGHT));

        let water_w = s(water::WIDTH);
        let water_h = s(water::HEIGHT);
        let water = Rect::new(
            centered(water_w),
            body.y1 - water_h - s(water::INSET),
            water_w,
            water_h,
        );

        let highlight = Rect::new(
            body.x0 + s(highlight::OFFSET),
            water.y0 + s(highlight::OFFSET),
            s(highlight::WIDTH),
            s(highlight::HEIGHT),
        );

        Geometry {
            size,
            scale,
            cap,
            neck,
            body,
            water,
            highlight,
        }
    }

    /// Scale a reference length, truncating to whole pixels.
    pub fn px(&self, value: f32) -> i32 {
        scaled(value, self.scale)
    }
}

fn scaled(value: f32, scale: f32) -> i32 {
    (value * scale) as i32
}

/// Outline of the water-surface wave, crest samples first and the two bottom
/// corners last. Empty when fewer than three crest samples fit.
pub fn wave_points(geometry: &Geometry) -> Vec<(f32, f32)> {
    let water = geometry.water;
    let scale = geometry.scale;
    let crest_y = water.y0 + geometry.px(wave::DROP);
    let step = geometry.px(wave::STEP).max(1) as usize;

    let mut points: Vec<(f32, f32)> = (water.x0..water.x1)
        .step_by(step)
        .map(|x| {
            let relative_x = (x - water.x0) as f32 / (wave::HALF_PERIOD * scale);
            let y = crest_y + ((relative_x * PI).sin() * wave::AMPLITUDE * scale) as i32;
            (x as f32, y as f32)
        })
        .collect();

    if points.len() < 3 {
        return Vec::new();
    }

    let bottom = (water.y0 + geometry.px(wave::DEPTH)) as f32;
    points.push((water.x1 as f32, bottom));
    points.push((water.x0 as f32, bottom));
    points
}

/// Draws the water bottle icon at any size with a fixed font.
#[derive(Debug)]
pub struct IconRenderer {
    font: Font,
}

impl IconRenderer {
    pub fn new(font: Font) -> Self {
        IconRenderer { font }
    }

    /// Renderer using the first available font of the default chain
    pub fn with_default_fonts() -> Self {
        Self::new(resolve_font(&FontSource::default_chain()))
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn render(&mut self, size: u32) -> Result<RgbImage> {
        if size == 0 {
            bail!("Icon size must be greater than 0");
        }
        if size > MAX_SIZE {
            bail!("Icon size {} exceeds the maximum of {}", size, MAX_SIZE);
        }

        let geometry = Geometry::new(size);
        let mut img = RgbImage::from_pixel(size, size, Rgb(background::BOTTOM));

        // Two flat bands, darker on top
        let split = (size as f32 * background::SPLIT) as i32;
        let top = background::TOP;
        fill_rect(&mut img, 0, 0, size as i32, split - 1, [top[0], top[1], top[2], 255]);

        let Geometry {
            cap: cap_rect,
            neck: neck_rect,
            body: body_rect,
            water: water_rect,
            highlight: highlight_rect,
            ..
        } = geometry;

        // Cap
        fill_rounded_rect(
            &mut img,
            cap_rect.x0,
            cap_rect.y0,
            cap_rect.x1,
            cap_rect.y1,
            geometry.px(cap::RADIUS),
            cap::COLOR,
        );
        // Neck
        fill_rect(
            &mut img,
            neck_rect.x0,
            neck_rect.y0,
            neck_rect.x1,
            neck_rect.y1,
            neck::COLOR,
        );
        // Body (glass outline)
        fill_rounded_rect(
            &mut img,
            body_rect.x0,
            body_rect.y0,
            body_rect.x1,
            body_rect.y1,
            geometry.px(body::RADIUS),
            body::COLOR,
        );
        // Water fill (70% of the body)
        fill_rounded_rect(
            &mut img,
            water_rect.x0,
            water_rect.y0,
            water_rect.x1,
            water_rect.y1,
            geometry.px(water::RADIUS),
            water::COLOR,
        );
        // Reflection streak on the left
        fill_rounded_rect(
            &mut img,
            highlight_rect.x0,
            highlight_rect.y0,
            highlight_rect.x1,
            highlight_rect.y1,
            geometry.px(highlight::RADIUS),
            highlight::COLOR,
        );

        // Water surface wave, skipped when too few samples fit
        fill_polygon(&mut img, &wave_points(&geometry), wave::COLOR);

        // "70%" label with drop shadow
        self.draw_label(&mut img, &geometry);

        Ok(img)
    }

    fn draw_label(&mut self, img: &mut RgbImage, geometry: &Geometry) {
        let font_size = geometry.px(label::FONT_SIZE).max(1) as f32;
        let mask = self.font.rasterize(label::TEXT, font_size);

        let size = geometry.size as i32;
        let x = (size - mask.width() as i32).div_euclid(2);
        let y = (size - mask.height() as i32).div_euclid(2) + geometry.px(label::OFFSET_Y);
        let shadow = geometry.px(label::SHADOW_OFFSET).max(1);

        blend_mask(img, x + shadow, y + shadow, &mask, label::SHADOW_COLOR);
        blend_mask(img, x, y, &mask, label::COLOR);
    }
}

/// Render one icon with the default font chain.
pub fn render(size: u32) -> Result<RgbImage> {
    IconRenderer::with_default_fonts().render(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_geometry() {
        let g = Geometry::new(1024);
        assert_eq!(g.cap, Rect::new(422, 150, 180, 80));
        assert_eq!(g.neck, Rect::new(437, 230, 150, 60));
        assert_eq!(g.body, Rect::new(312, 290, 400, 650));
        assert_eq!(g.water, Rect::new(332, 470, 360, 455));
        assert_eq!(g.highlight, Rect::new(362, 520, 120, 300));
    }

    #[test]
    fn test_water_sits_inside_body() {
        for size in [20, 29, 87, 180, 1024] {
            let g = Geometry::new(size);
            assert!(g.water.x0 >= g.body.x0 && g.water.x1 <= g.body.x1);
            assert!(g.water.y0 >= g.body.y0 && g.water.y1 <= g.body.y1);
        }
    }

    #[test]
    fn test_wave_samples_at_reference_size() {
        let points = wave_points(&Geometry::new(1024));
        // 360px wide water sampled every 5px, plus the two closing corners
        assert_eq!(points.len(), 72 + 2);
        assert_eq!(points[0], (332.0, 475.0));
        assert_eq!(points[72], (692.0, 520.0));
        assert_eq!(points[73], (332.0, 520.0));
    }

    #[test]
    fn test_wave_crest_stays_within_amplitude() {
        let g = Geometry::new(1024);
        let points = wave_points(&g);
        for &(_, y) in &points[..points.len() - 2] {
            assert!((y - 475.0).abs() <= 8.0);
        }
    }

    #[test]
    fn test_wave_step_at_small_sizes_is_one_pixel() {
        let g = Geometry::new(20);
        let points = wave_points(&g);
        assert_eq!(points.len(), g.water.width() as usize + 2);
    }

    #[test]
    fn test_wave_is_skipped_when_water_is_too_narrow() {
        assert!(wave_points(&Geometry::new(2)).is_empty());
        assert!(wave_points(&Geometry::new(1)).is_empty());
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let mut renderer = IconRenderer::new(Font::Builtin);
        assert!(renderer.render(0).is_err());
        assert!(renderer.render(MAX_SIZE + 1).is_err());
    }

    #[test]
    fn test_background_bands() {
        let mut renderer = IconRenderer::new(Font::Builtin);
        let img = renderer.render(100).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, background::TOP);
        assert_eq!(img.get_pixel(0, 29).0, background::TOP);
        assert_eq!(img.get_pixel(0, 30).0, background::BOTTOM);
        assert_eq!(img.get_pixel(99, 99).0, background::BOTTOM);
    }
}
