//! Pure rectangle math for frame compositing and preview layout
//!
//! This module provides the geometric primitives shared by the compositor
//! and the preview layout path:
//!
//! - [`aspect_fit_rect`]: scale-to-fit with centering, no cropping
//! - [`scale_rect`]: shrink/grow a rectangle around its own center
//! - [`flipped_y`]: conversion between top-origin and bottom-origin
//!   coordinate systems
//!
//! Compositing works in a bottom-origin coordinate system while on-screen
//! layout is top-origin. The flip between the two is an explicit, named
//! function rather than inline sign arithmetic, so both paths share one
//! formula.

use serde::{Deserialize, Serialize};

/// A width/height pair in pixels (or display points)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width:  f64,
    /// Height in pixels
    pub height: f64,
}

impl Size {
    /// Creates a new size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width/height aspect ratio
    ///
    /// The caller must guarantee a non-zero height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Returns a size with width and height exchanged
    pub fn transposed(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(f64::from(width), f64::from(height))
    }
}

/// An axis-aligned rectangle
///
/// The vertical meaning of `y` depends on the coordinate convention in
/// use: bottom-origin during compositing, top-origin during layout.
/// [`flipped_y`] converts between the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal origin
    pub x:      f64,
    /// Vertical origin (convention-dependent)
    pub y:      f64,
    /// Width
    pub width:  f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin with the given size
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Returns the size of the rectangle
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Maximum x coordinate (`x + width`)
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Maximum y coordinate (`y + height`)
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Returns this rectangle translated by (`dx`, `dy`)
    pub fn offset_by(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Scales `content` to the largest size that fits inside `container`
/// while preserving aspect ratio, centered on both axes
///
/// Degenerate input (zero-area content or container) is the caller's
/// responsibility to guard against; both dimensions of `content` must be
/// greater than zero.
///
/// # Examples
///
/// ```
/// use screenframe::geometry::{Rect, Size, aspect_fit_rect};
///
/// let fitted = aspect_fit_rect(Size::new(100.0, 50.0), Rect::new(0.0, 0.0, 10.0, 10.0));
/// assert_eq!(fitted, Rect::new(0.0, 2.5, 10.0, 5.0));
/// ```
pub fn aspect_fit_rect(content: Size, container: Rect) -> Rect {
    let content_aspect = content.aspect_ratio();
    let container_aspect = container.width / container.height;

    if content_aspect > container_aspect {
        // Content is wider: constrain by container width
        let height = container.width / content_aspect;
        Rect::new(
            container.x,
            container.y + (container.height - height) / 2.0,
            container.width,
            height,
        )
    } else {
        // Content is taller (or equal): constrain by container height
        let width = container.height * content_aspect;
        Rect::new(
            container.x + (container.width - width) / 2.0,
            container.y,
            width,
            container.height,
        )
    }
}

/// Shrinks or grows `rect` around its own center by `scale`
///
/// A scale of exactly `1.0` short-circuits to the input rectangle so that
/// repeated application introduces no floating-point drift.
///
/// # Examples
///
/// ```
/// use screenframe::geometry::{Rect, scale_rect};
///
/// let r = Rect::new(0.0, 0.0, 100.0, 100.0);
/// assert_eq!(scale_rect(r, 0.5), Rect::new(25.0, 25.0, 50.0, 50.0));
/// assert_eq!(scale_rect(r, 1.0), r);
/// ```
pub fn scale_rect(rect: Rect, scale: f64) -> Rect {
    if scale == 1.0 {
        return rect;
    }

    let new_width = rect.width * scale;
    let new_height = rect.height * scale;
    Rect::new(
        rect.x + (rect.width - new_width) / 2.0,
        rect.y + (rect.height - new_height) / 2.0,
        new_width,
        new_height,
    )
}

/// Converts a rectangle between top-origin and bottom-origin coordinates
///
/// The conversion is its own inverse: flipping twice through the same
/// container height yields the original rectangle.
///
/// # Examples
///
/// ```
/// use screenframe::geometry::{Rect, flipped_y};
///
/// let r = Rect::new(10.0, 20.0, 30.0, 40.0);
/// let flipped = flipped_y(r, 100.0);
/// assert_eq!(flipped, Rect::new(10.0, 40.0, 30.0, 40.0));
/// assert_eq!(flipped_y(flipped, 100.0), r);
/// ```
pub fn flipped_y(rect: Rect, container_height: f64) -> Rect {
    Rect::new(rect.x, container_height - rect.max_y(), rect.width, rect.height)
}
