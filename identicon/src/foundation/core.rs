use crate::foundation::error::{IdenticonError, IdenticonResult};

pub use kurbo::Rect;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> IdenticonResult<Self> {
        if width == 0 || height == 0 {
            return Err(IdenticonError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// `width * height`, saturating.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 250,
            height: 250,
        }
    }
}

/// Straight (non-premultiplied) RGB8 color. Identicons are always painted fully opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// RGBA8 with alpha forced to 255.
    pub fn to_opaque_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }
}

/// Integer position in output canvas coordinates (origin top-left, y down).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: u32,
    /// Vertical offset from the top edge.
    pub y: u32,
}

impl Point {
    /// Build a point from its coordinates.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas coordinates. `bottom_right` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Inclusive top-left corner.
    pub top_left: Point,
    /// Exclusive bottom-right corner.
    pub bottom_right: Point,
}

impl Region {
    /// Horizontal extent in pixels.
    pub fn width(&self) -> u32 {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    /// Vertical extent in pixels.
    pub fn height(&self) -> u32 {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }

    /// Whether `p` lies inside the half-open rectangle.
    pub fn contains(&self, p: Point) -> bool {
        self.top_left.x <= p.x
            && p.x < self.bottom_right.x
            && self.top_left.y <= p.y
            && p.y < self.bottom_right.y
    }

    /// Same rectangle as a `kurbo` [`Rect`] for rasterization.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.top_left.x),
            f64::from(self.top_left.y),
            f64::from(self.bottom_right.x),
            f64::from(self.bottom_right.y),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
