//! Layered raster compositing
//!
//! Builds the final output canvas: the screenshot is aspect-fitted into
//! the frame's screen cutout, shrunk by the content scale, clipped to a
//! rounded rectangle, and drawn beneath the frame asset whose transparent
//! cutout reveals it.
//!
//! All cutout math happens in bottom-origin coordinates; the single
//! conversion to the raster's top-origin pixel space goes through
//! [`flipped_y`], never through inline sign arithmetic.

use crate::{
    error::RenderResult,
    geometry::{aspect_fit_rect, flipped_y, scale_rect},
    model::FrameStyle,
    raster::Raster,
    util::encode::encode_png,
};

/// Composites a screenshot into a frame asset and encodes the result
///
/// The canvas has the frame asset's native pixel size. Steps:
///
/// 1. Project the cutout rectangle from the style's insets
///    (bottom-origin).
/// 2. Aspect-fit the screenshot into the cutout.
/// 3. Shrink the fitted rectangle by `content_scale` around its center.
/// 4. Clip the screenshot to a rounded rectangle (radius = scaled width ×
///    corner ratio) and draw it as the bottom layer.
/// 5. Draw the frame asset over it at full canvas size.
/// 6. Encode the canvas losslessly as PNG.
///
/// The screenshot must have non-zero dimensions; the facade guarantees
/// this for all ingested items. The function is pure: identical inputs
/// produce byte-identical output.
pub fn compose(
    image: &Raster,
    frame: &Raster,
    style: &FrameStyle,
    content_scale: f64,
) -> RenderResult<Vec<u8>> {
    let canvas_size = frame.size();

    let cutout = style.insets.rect_in_bottom_coordinate(canvas_size);
    let fitted = aspect_fit_rect(image.size(), cutout);
    let scaled = scale_rect(fitted, content_scale);
    let corner_radius = scaled.width * style.screen_corner_radius_ratio;

    tracing::debug!(
        canvas_width = canvas_size.width,
        canvas_height = canvas_size.height,
        content_width = scaled.width,
        content_height = scaled.height,
        corner_radius,
        "compositing screenshot into frame"
    );

    // Pixel placement is top-origin; convert once through the named flip
    let placement = flipped_y(scaled, canvas_size.height);

    let content_width = (scaled.width.round() as u32).max(1);
    let content_height = (scaled.height.round() as u32).max(1);
    let mut content = image
        .inner()
        .resize_exact(content_width, content_height, image::imageops::FilterType::Lanczos3)
        .to_rgba8();
    apply_rounded_corners(&mut content, corner_radius);

    let (canvas_width, canvas_height) = frame.dimensions();
    let mut canvas = image::RgbaImage::new(canvas_width, canvas_height);
    image::imageops::overlay(
        &mut canvas,
        &content,
        placement.x.round() as i64,
        placement.y.round() as i64,
    );
    image::imageops::overlay(&mut canvas, &frame.to_rgba8(), 0, 0);

    encode_png(&canvas)
}

/// Multiplies each pixel's alpha by its rounded-rectangle coverage
///
/// The rounded rectangle spans the whole image; `radius` is clamped to
/// half the shorter side. Coverage uses the signed distance to the
/// rounded boundary with a one-pixel smoothing band, sampled at pixel
/// centers.
fn apply_rounded_corners(image: &mut image::RgbaImage, radius: f64) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let w = f64::from(width);
    let h = f64::from(height);
    let radius = radius.clamp(0.0, w.min(h) / 2.0);
    if radius <= 0.0 {
        return;
    }

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let px = f64::from(x) + 0.5;
        let py = f64::from(y) + 0.5;

        let coverage = rounded_rect_coverage(px, py, w, h, radius);
        if coverage < 1.0 {
            let alpha = f64::from(pixel[3]) * coverage;
            pixel[3] = alpha.round() as u8;
        }
    }
}

/// Coverage of the point (`px`, `py`) by a rounded rectangle spanning
/// `[0, w] x [0, h]` with the given corner radius
///
/// 1.0 well inside, 0.0 well outside, with a one-pixel linear band at
/// the boundary.
fn rounded_rect_coverage(px: f64, py: f64, w: f64, h: f64, radius: f64) -> f64 {
    // Signed distance from the rounded-rect boundary: distance from the
    // point to the inner (radius-inset) box, minus the radius.
    let dx = (radius - px).max(px - (w - radius)).max(0.0);
    let dy = (radius - py).max(py - (h - radius)).max(0.0);
    let distance = (dx * dx + dy * dy).sqrt() - radius;

    (0.5 - distance).clamp(0.0, 1.0)
}
