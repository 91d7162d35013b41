//! Simple geometry primitives.

/// An axis-aligned rectangle with its origin at the top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

/// Anything with an axis-aligned bounding box.
///
/// Collision partners only need to expose their box; [`Rect`] and [`Player`](crate::Player) both
/// implement this, and so can any game object that owns a position and a size.
pub trait Bounds {
    /// Left edge.
    fn x(&self) -> f32;

    /// Top edge.
    fn y(&self) -> f32;

    /// Horizontal extent.
    fn width(&self) -> f32;

    /// Vertical extent.
    fn height(&self) -> f32;

    /// The bounding box as a [`Rect`].
    fn rect(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.width(), self.height())
    }
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The x coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Test for intersections between two rectangles.
    ///
    /// Rectangles intersect when the geometry of either overlaps. The comparisons are strict, so
    /// rectangles which only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (top1, right1, bottom1, left1) = self.get_bounds();
        let (top2, right2, bottom2, left2) = other.get_bounds();

        left1 < right2 && right1 > left2 && top1 < bottom2 && bottom1 > top2
    }

    /// Compute the bounding box for this rectangle.
    ///
    /// # Returns
    ///
    /// Tuple of `(top, right, bottom, left)`, e.g. in CSS clockwise order.
    fn get_bounds(&self) -> (f32, f32, f32, f32) {
        (self.y, self.right(), self.bottom(), self.x)
    }
}

impl Bounds for Rect {
    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn rect(&self) -> Rect {
        *self
    }
}
