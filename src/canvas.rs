//! Alpha-compositing fill primitives over an opaque RGB canvas.
//!
//! All rectangle corners are inclusive and every primitive clips against the
//! canvas, so callers can pass coordinates that run off the edge.

use crate::constants::Rgba;
use image::{GrayImage, Rgb, RgbImage};

/// Source-over blend of `color` onto an opaque pixel.
pub fn blend(pixel: &mut Rgb<u8>, color: Rgba) {
    let alpha = color[3] as u32;
    if alpha == 0 {
        return;
    }
    for channel in 0..3 {
        let src = color[channel] as u32;
        let dst = pixel.0[channel] as u32;
        pixel.0[channel] = ((src * alpha + dst * (255 - alpha) + 127) / 255) as u8;
    }
}

/// Clip an inclusive span to `0..len`, returning `None` when nothing is left.
fn clip(lo: i32, hi: i32, len: u32) -> Option<(u32, u32)> {
    let lo = lo.max(0);
    let hi = hi.min(len as i32 - 1);
    if lo > hi {
        None
    } else {
        Some((lo as u32, hi as u32))
    }
}

pub fn fill_rect(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let (Some((xa, xb)), Some((ya, yb))) = (clip(x0, x1, img.width()), clip(y0, y1, img.height()))
    else {
        return;
    };
    for py in ya..=yb {
        for px in xa..=xb {
            blend(img.get_pixel_mut(px, py), color);
        }
    }
}

/// Fill a rectangle whose corners are quarter circles of `radius`.
///
/// The radius is clamped to half of the shorter side.
pub fn fill_rounded_rect(
    img: &mut RgbImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: Rgba,
) {
    let r = radius.min((x1 - x0) / 2).min((y1 - y0) / 2).max(0);
    if r == 0 {
        fill_rect(img, x0, y0, x1, y1, color);
        return;
    }
    let (Some((xa, xb)), Some((ya, yb))) = (clip(x0, x1, img.width()), clip(y0, y1, img.height()))
    else {
        return;
    };
    let r_sq = (r as i64) * (r as i64);
    for py in ya..=yb {
        let y = py as i32;
        let dy = (y - y.clamp(y0 + r, y1 - r)) as i64;
        for px in xa..=xb {
            let x = px as i32;
            let dx = (x - x.clamp(x0 + r, x1 - r)) as i64;
            if dx * dx + dy * dy <= r_sq {
                blend(img.get_pixel_mut(px, py), color);
            }
        }
    }
}

/// Even-odd scanline fill sampled at pixel centers.
pub fn fill_polygon(img: &mut RgbImage, points: &[(f32, f32)], color: Rgba) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
    let Some((ya, yb)) = clip(min_y.floor() as i32, max_y.ceil() as i32, img.height()) else {
        return;
    };

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    for py in ya..=yb {
        let yc = py as f32 + 0.5;
        crossings.clear();
        for (i, &(xa0, ya0)) in points.iter().enumerate() {
            let (xa1, ya1) = points[(i + 1) % points.len()];
            if (ya0 <= yc && yc < ya1) || (ya1 <= yc && yc < ya0) {
                crossings.push(xa0 + (yc - ya0) * (xa1 - xa0) / (ya1 - ya0));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil() as i32;
            let end = (span[1] - 0.5).ceil() as i32 - 1;
            if let Some((xa, xb)) = clip(start, end, img.width()) {
                for px in xa..=xb {
                    blend(img.get_pixel_mut(px, py), color);
                }
            }
        }
    }
}

/// Composite a coverage mask with its top-left corner at (`x`, `y`).
pub fn blend_mask(img: &mut RgbImage, x: i32, y: i32, mask: &GrayImage, color: Rgba) {
    let (width, height) = img.dimensions();
    for (mx, my, coverage) in mask.enumerate_pixels() {
        let coverage = coverage.0[0] as u32;
        if coverage == 0 {
            continue;
        }
        let px = x + mx as i32;
        let py = y + my as i32;
        if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
            continue;
        }
        let alpha = (color[3] as u32 * coverage + 127) / 255;
        blend(
            img.get_pixel_mut(px as u32, py as u32),
            [color[0], color[1], color[2], alpha as u8],
        );
    }
}
