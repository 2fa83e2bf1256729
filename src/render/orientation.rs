//! Orientation adapter: landscape rotation of frame assets and insets
//!
//! Frame assets are authored in portrait. For a landscape screenshot the
//! raster is rotated 90° counterclockwise and the insets are remapped to
//! the rotated canvas's edges; the fractional values carry over directly
//! because each edge's fraction is measured against the dimension that
//! follows it through the rotation.
//!
//! Under a counterclockwise rotation the old trailing edge becomes the
//! new top, the old top becomes the new leading, the old leading becomes
//! the new bottom, and the old bottom becomes the new trailing.

use crate::{
    error::{RenderError, RenderResult},
    geometry::Size,
    model::{Orientation, ScreenInsets},
    raster::Raster,
};

/// Rotates a frame asset to match the declared orientation
///
/// Portrait passes the asset through unchanged. Landscape returns a copy
/// rotated 90° counterclockwise, whose width and height are swapped
/// relative to the original.
///
/// # Errors
///
/// [`RenderError::RotationFailed`] when the asset raster is degenerate
/// (zero-sized) and cannot be rotated. The caller must present a
/// placeholder rather than partial output.
pub fn oriented_frame(
    frame: &Raster,
    orientation: Orientation,
    asset_name: &str,
) -> RenderResult<Raster> {
    match orientation {
        Orientation::Portrait => Ok(frame.clone()),
        Orientation::Landscape => {
            let (width, height) = frame.dimensions();
            if width == 0 || height == 0 {
                tracing::warn!(asset = asset_name, "cannot rotate zero-sized frame asset");
                return Err(RenderError::RotationFailed {
                    asset: asset_name.to_string(),
                });
            }
            Ok(frame.rotated_90_ccw())
        }
    }
}

/// Remaps insets onto the rotated canvas for the declared orientation
///
/// Portrait insets are returned unchanged. Landscape insets are rotated
/// counterclockwise together with the raster, so the cutout they describe
/// tracks the same physical region of the frame.
pub fn oriented_insets(insets: ScreenInsets, orientation: Orientation) -> ScreenInsets {
    match orientation {
        Orientation::Portrait => insets,
        Orientation::Landscape => ScreenInsets::new(
            insets.trailing,
            insets.top,
            insets.leading,
            insets.bottom,
        ),
    }
}

/// Returns the frame's canvas size for the declared orientation
///
/// Used by the preview path, which needs the rotated dimensions without
/// touching pixels.
pub fn oriented_size(frame_size: Size, orientation: Orientation) -> Size {
    match orientation {
        Orientation::Portrait => frame_size,
        Orientation::Landscape => frame_size.transposed(),
    }
}
