//! Non-destructive preview layout
//!
//! Computes the same scaled content rectangle as the compositor, but in
//! top-origin coordinates at an arbitrary on-screen size instead of the
//! asset's native resolution. Shells use the result to position an image
//! view and a frame view without rendering any pixels.
//!
//! Content fitting is defined in bottom-origin terms while layout
//! placement is top-origin, so the cutout is flipped down before the
//! aspect-fit and the fitted rectangle flipped back up. Inlining the fit
//! in top-origin math instead would silently break for vertically
//! asymmetric insets.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size, aspect_fit_rect, flipped_y, scale_rect};
use crate::model::ScreenInsets;

/// Layout rectangles for interactive display, top-origin
///
/// Both rectangles live in the coordinate space of the available display
/// area passed to [`layout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewLayout {
    /// Where to place the frame asset view, centered in the available
    /// area at the frame's aspect ratio
    pub frame_rect:    Rect,
    /// Where to place the screenshot view, inside the frame's cutout
    pub content_rect:  Rect,
    /// Corner radius for clipping the screenshot view, in display units
    pub corner_radius: f64,
}

/// Computes the preview layout for a screenshot inside a frame
///
/// `frame_size` and `insets` must already be oriented (rotated for
/// landscape items); `corner_radius_ratio` and `content_scale` come from
/// the resolved frame style. The frame is fitted to `available` by aspect
/// ratio and centered; the content rectangle is derived with the same
/// cutout/fit/scale steps the compositor uses, at display scale.
pub fn layout(
    image_size: Size,
    frame_size: Size,
    insets: ScreenInsets,
    corner_radius_ratio: f64,
    content_scale: f64,
    available: Size,
) -> PreviewLayout {
    // Fit the frame's aspect ratio into the available area
    let frame_aspect = frame_size.aspect_ratio();
    let container_aspect = available.aspect_ratio();
    let preview_width = if container_aspect > frame_aspect {
        available.height * frame_aspect
    } else {
        available.width
    };
    let preview_height = preview_width / frame_aspect;
    let preview_size = Size::new(preview_width, preview_height);

    let frame_rect = Rect::new(
        (available.width - preview_width) / 2.0,
        (available.height - preview_height) / 2.0,
        preview_width,
        preview_height,
    );

    // Cutout in the frame's own top-origin space
    let cutout_top = insets.rect_in_top_coordinate(preview_size);

    // The aspect-fit is defined against the bottom-origin cutout: flip
    // down, fit, flip back up
    let cutout_bottom = flipped_y(cutout_top, preview_height);
    let fitted_bottom = aspect_fit_rect(image_size, cutout_bottom);
    let fitted_top = flipped_y(fitted_bottom, preview_height);

    let scaled = scale_rect(fitted_top, content_scale);
    let corner_radius = scaled.width * corner_radius_ratio;

    PreviewLayout {
        frame_rect,
        content_rect: scaled.offset_by(frame_rect.x, frame_rect.y),
        corner_radius,
    }
}
