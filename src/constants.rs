/// Reference geometry and colors for the water bottle icon.
///
/// Every length is expressed on a 1024px canvas and multiplied by
/// `size / REFERENCE_SIZE` at render time.

/// Edge length of the canvas the reference values are drawn on
pub const REFERENCE_SIZE: f32 = 1024.0;

/// RGBA color as drawn onto the opaque canvas
pub type Rgba = [u8; 4];

/// How full the bottle is drawn. `water::HEIGHT` and `label::TEXT` are
/// literals that must both match it.
pub const FILL_PERCENT: u32 = 70;

pub mod background {
    /// Fraction of the height covered by the upper band
    pub const SPLIT: f32 = 0.3;
    pub const TOP: [u8; 3] = [26, 128, 230];
    pub const BOTTOM: [u8; 3] = [0, 179, 255];
}

pub mod cap {
    use super::Rgba;

    pub const WIDTH: f32 = 180.0;
    pub const HEIGHT: f32 = 80.0;
    pub const RADIUS: f32 = 15.0;
    pub const TOP: f32 = 150.0;
    pub const COLOR: Rgba = [255, 255, 255, 77];
}

pub mod neck {
    use super::Rgba;

    pub const WIDTH: f32 = 150.0;
    pub const HEIGHT: f32 = 60.0;
    pub const COLOR: Rgba = [255, 255, 255, 64];
}

pub mod body {
    use super::Rgba;

    pub const WIDTH: f32 = 400.0;
    pub const HEIGHT: f32 = 650.0;
    pub const RADIUS: f32 = 60.0;
    pub const COLOR: Rgba = [255, 255, 255, 51];
}

pub mod water {
    use super::Rgba;

    pub const WIDTH: f32 = 360.0;
    /// `FILL_PERCENT` of the body height
    pub const HEIGHT: f32 = 455.0;
    pub const RADIUS: f32 = 50.0;
    /// Gap between the bottom of the water and the bottom of the body
    pub const INSET: f32 = 15.0;
    pub const COLOR: Rgba = [77, 217, 255, 217];
}

pub mod highlight {
    use super::Rgba;

    pub const WIDTH: f32 = 120.0;
    pub const HEIGHT: f32 = 300.0;
    pub const RADIUS: f32 = 20.0;
    /// Offset from the body's left edge and from the water's top edge
    pub const OFFSET: f32 = 50.0;
    pub const COLOR: Rgba = [255, 255, 255, 77];
}

pub mod wave {
    use super::Rgba;

    /// Horizontal distance between crest samples
    pub const STEP: f32 = 5.0;
    /// Half a sine period spans this many reference pixels
    pub const HALF_PERIOD: f32 = 50.0;
    pub const AMPLITUDE: f32 = 8.0;
    /// Crest baseline below the top of the water
    pub const DROP: f32 = 5.0;
    /// Depth of the polygon's bottom edge below the top of the water
    pub const DEPTH: f32 = 50.0;
    pub const COLOR: Rgba = [128, 255, 255, 102];
}

pub mod label {
    use super::Rgba;

    /// `FILL_PERCENT` as shown on the bottle
    pub const TEXT: &str = "70%";
    pub const FONT_SIZE: f32 = 140.0;
    /// Downward shift from the vertical center
    pub const OFFSET_Y: f32 = 50.0;
    pub const SHADOW_OFFSET: f32 = 3.0;
    pub const SHADOW_COLOR: Rgba = [0, 0, 0, 77];
    pub const COLOR: Rgba = [255, 255, 255, 255];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_matches_fill_percent() {
        assert_eq!(label::TEXT, format!("{}%", FILL_PERCENT));
    }

    #[test]
    fn test_water_height_matches_fill_percent() {
        assert_eq!(water::HEIGHT * 100.0, body::HEIGHT * FILL_PERCENT as f32);
    }
}
