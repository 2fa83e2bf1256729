//! Raster image wrapper for screenshots and frame assets
//!
//! This module provides a [`Raster`] wrapper around `image::DynamicImage`
//! used for both source screenshots and decorative frame assets. All
//! transformation methods return new `Raster` instances, leaving the
//! original unchanged.
//!
//! # Examples
//!
//! ```
//! use screenframe::raster::Raster;
//!
//! let img = Raster::from_test_pattern(1170, 2532);
//! assert_eq!(img.dimensions(), (1170, 2532));
//!
//! let rotated = img.rotated_90_ccw();
//! assert_eq!(rotated.dimensions(), (2532, 1170));
//! ```

use image::GenericImageView;

use crate::geometry::Size;

/// Wrapper around `image::DynamicImage`
///
/// Provides the small set of operations the rendering pipeline needs:
/// dimension queries, 90° rotation for landscape frames, and RGBA8
/// conversion for compositing and encoding.
#[derive(Clone, Debug)]
pub struct Raster {
    inner: image::DynamicImage,
}

impl Raster {
    /// Creates a new Raster from a DynamicImage
    pub fn new(image: image::DynamicImage) -> Self {
        Self { inner: image }
    }

    /// Decodes a raster from encoded bytes (PNG, JPEG, ...)
    ///
    /// Convenience for shells ingesting dropped files or embedded assets.
    /// Format detection is handled by the `image` crate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        Ok(Self::new(image::load_from_memory(bytes)?))
    }

    /// Returns the dimensions of the image as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    /// Returns the image width in pixels
    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    /// Returns the image height in pixels
    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    /// Returns the pixel dimensions as a geometric [`Size`]
    pub fn size(&self) -> Size {
        Size::from(self.dimensions())
    }

    /// Returns a copy rotated 90° counterclockwise
    ///
    /// The result's width and height are swapped relative to the
    /// original.
    ///
    /// # Examples
    ///
    /// ```
    /// use screenframe::raster::Raster;
    ///
    /// let img = Raster::from_test_pattern(400, 800);
    /// assert_eq!(img.rotated_90_ccw().dimensions(), (800, 400));
    /// ```
    pub fn rotated_90_ccw(&self) -> Self {
        Self::new(self.inner.rotate270())
    }

    /// Converts the image to RGBA8 format
    pub fn to_rgba8(&self) -> image::RgbaImage {
        self.inner.to_rgba8()
    }

    /// Returns a reference to the inner DynamicImage
    pub fn inner(&self) -> &image::DynamicImage {
        &self.inner
    }

    /// Consumes self and returns the inner DynamicImage
    pub fn into_inner(self) -> image::DynamicImage {
        self.inner
    }

    /// Creates an opaque test pattern image with the given dimensions
    ///
    /// Generates a vertical blue-to-cyan gradient useful for exercising
    /// the pipeline without real screenshot data.
    pub fn from_test_pattern(width: u32, height: u32) -> Self {
        use image::Rgba;

        let img = image::RgbaImage::from_fn(width, height, |_x, y| {
            let ratio = y as f32 / height.max(1) as f32;
            Rgba([0, (255.0 * ratio) as u8, 255, 255])
        });

        Self::new(image::DynamicImage::ImageRgba8(img))
    }
}
