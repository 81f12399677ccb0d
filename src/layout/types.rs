//! Core types for word placement

use crate::palette::PaletteColor;

/// A 2D point in the canvas coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box occupied by a placed word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of the given size centered on a point
    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box intersects another
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check if another box lies entirely inside this one
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Grow the box by `amount` on every side
    pub fn inflate(&self, amount: f64) -> BoundingBox {
        BoundingBox::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }
}

/// Word orientation on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    /// Rotated a quarter turn counter-clockwise, reading bottom to top
    Vertical,
}

impl Orientation {
    /// Counter-clockwise rotation in degrees
    pub fn degrees(self) -> f64 {
        match self {
            Orientation::Horizontal => 0.0,
            Orientation::Vertical => 90.0,
        }
    }
}

/// A word with its computed size, position and orientation
///
/// `position` is the top-left corner of the area the word occupies. The
/// color is unset until [`PlacedWord::with_color`] is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    text: String,
    font_size: f64,
    position: Point,
    orientation: Orientation,
    color: Option<PaletteColor>,
}

impl PlacedWord {
    pub fn new(
        text: impl Into<String>,
        font_size: f64,
        position: Point,
        orientation: Orientation,
    ) -> Self {
        Self {
            text: text.into(),
            font_size,
            position,
            orientation,
            color: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn color(&self) -> Option<PaletteColor> {
        self.color
    }

    /// Assign a palette color, keeping the first assignment
    pub fn with_color(mut self, color: PaletteColor) -> Self {
        self.color.get_or_insert(color);
        self
    }

    /// Replace any color already on the word
    pub(crate) fn recolor(mut self, color: PaletteColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Result of a layout run: placements and the engine-native markup
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutput {
    pub words: Vec<PlacedWord>,
    pub fragment: String,
}
