/// Minimal 5x7 bitmap font that is always available.
///
/// Covers the characters the icon label needs. Anything else is drawn as a
/// hollow box so the label never silently disappears.
use image::{GrayImage, Luma};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in cells, including one blank column
const ADVANCE: u32 = GLYPH_WIDTH + 1;

const MISSING: [u8; 7] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

fn glyph(c: char) -> [u8; 7] {
    match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '%' => [0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        ' ' => [0; 7],
        _ => MISSING,
    }
}

/// Size of one font cell in pixels for a requested em size.
pub fn cell_size(px: f32) -> u32 {
    ((px / (GLYPH_HEIGHT + 1) as f32).round() as u32).max(1)
}

/// Render `text` into an uncropped coverage mask.
pub fn rasterize(text: &str, px: f32) -> GrayImage {
    let cell = cell_size(px);
    let count = text.chars().count() as u32;
    if count == 0 {
        return GrayImage::new(0, 0);
    }

    let mut mask = GrayImage::new((count * ADVANCE - 1) * cell, GLYPH_HEIGHT * cell);
    for (index, c) in text.chars().enumerate() {
        let origin = index as u32 * ADVANCE * cell;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                for dy in 0..cell {
                    for dx in 0..cell {
                        mask.put_pixel(
                            origin + col * cell + dx,
                            row as u32 * cell + dy,
                            Luma([255]),
                        );
                    }
                }
            }
        }
    }
    mask
}
