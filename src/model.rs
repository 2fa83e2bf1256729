//! Data model for device profiles, frame styles, and screen items
//!
//! This module defines the core types used throughout the engine:
//!
//! - [`DeviceProfile`] / [`DeviceColor`]: catalog entries with
//!   identity-by-key equality
//! - [`ScreenInsets`] / [`FrameStyle`]: the fractional screen-cutout
//!   geometry of a frame asset
//! - [`Orientation`]: portrait/landscape classification
//! - [`ScreenItem`]: a screenshot together with its device, color, and
//!   scale selections
//!
//! Profiles and colors compare and hash by their stable string key only,
//! never structurally; two profiles with the same id are the same device
//! even if their data differs.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Rect, Size},
    raster::Raster,
};

/// Device family tag, used for catalog grouping in shells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFamily {
    /// Handset-class devices
    Phone,
    /// Tablet-class devices
    Tablet,
    /// Laptop-class devices
    Laptop,
}

impl DeviceFamily {
    /// Returns the family tag as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceFamily::Phone => "phone",
            DeviceFamily::Tablet => "tablet",
            DeviceFamily::Laptop => "laptop",
        }
    }
}

impl std::fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A color variant of a device, pointing at its frame asset
///
/// Equality and hashing use the `id` key only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceColor {
    /// Stable identity key
    pub id:         String,
    /// Human-readable color name
    pub name:       String,
    /// Asset reference, resolved externally to a bezel raster
    pub asset_name: String,
}

impl DeviceColor {
    /// Creates a new color variant
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        asset_name: impl Into<String>,
    ) -> Self {
        Self {
            id:         id.into(),
            name:       name.into(),
            asset_name: asset_name.into(),
        }
    }
}

impl PartialEq for DeviceColor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DeviceColor {}

impl Hash for DeviceColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Fractional margins between a frame's edges and its screen cutout
///
/// Each inset is the cutout's distance from the corresponding frame edge
/// as a fraction of the frame's own dimension on that axis, in `[0, 1)`.
/// The same four numbers describe the cutout in both vertical
/// conventions; see [`rect_in_top_coordinate`](Self::rect_in_top_coordinate)
/// and [`rect_in_bottom_coordinate`](Self::rect_in_bottom_coordinate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenInsets {
    /// Distance from the top edge
    pub top:      f64,
    /// Distance from the left edge
    pub leading:  f64,
    /// Distance from the bottom edge
    pub bottom:   f64,
    /// Distance from the right edge
    pub trailing: f64,
}

impl ScreenInsets {
    /// Creates a new inset set
    pub fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Insets that make the cutout cover the whole frame
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Projects the cutout rectangle in a top-left-origin coordinate
    /// system of the given frame size
    ///
    /// Used for interactive preview layout.
    pub fn rect_in_top_coordinate(&self, size: Size) -> Rect {
        Rect::new(
            size.width * self.leading,
            size.height * self.top,
            size.width * (1.0 - self.leading - self.trailing),
            size.height * (1.0 - self.top - self.bottom),
        )
    }

    /// Projects the cutout rectangle in a bottom-left-origin coordinate
    /// system of the given frame size
    ///
    /// Used when building the cutout during final pixel compositing.
    pub fn rect_in_bottom_coordinate(&self, size: Size) -> Rect {
        Rect::new(
            size.width * self.leading,
            size.height * self.bottom,
            size.width * (1.0 - self.leading - self.trailing),
            size.height * (1.0 - self.top - self.bottom),
        )
    }
}

/// Compositing geometry of a device's frame asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameStyle {
    /// Fractional position of the screen cutout within the frame
    pub insets: ScreenInsets,
    /// Fraction of the cutout width used as the screen corner radius
    pub screen_corner_radius_ratio: f64,
    /// Default shrink factor applied to the fitted image, in `(0, 1]`,
    /// typically near 0.94-0.97 to avoid edge bleed
    pub content_scale: f64,
}

impl FrameStyle {
    /// Creates a new frame style
    pub fn new(insets: ScreenInsets, screen_corner_radius_ratio: f64, content_scale: f64) -> Self {
        Self {
            insets,
            screen_corner_radius_ratio,
            content_scale,
        }
    }

    /// Resolves the content scale to use for a render
    ///
    /// An explicit per-item override replaces the style default when
    /// present. This is the single resolution point; callers never merge
    /// the two values themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use screenframe::model::{FrameStyle, ScreenInsets};
    ///
    /// let style = FrameStyle::new(ScreenInsets::zero(), 0.06, 0.97);
    /// assert_eq!(style.effective_content_scale(None), 0.97);
    /// assert_eq!(style.effective_content_scale(Some(0.9)), 0.9);
    /// ```
    pub fn effective_content_scale(&self, content_scale_override: Option<f64>) -> f64 {
        content_scale_override.unwrap_or(self.content_scale)
    }
}

/// A device profile: identity, display data, colors, and optional
/// compositing geometry
///
/// A profile without a [`FrameStyle`] can be listed in a catalog but not
/// rendered; attempting to render it fails with
/// [`RenderError::NoFrameStyle`](crate::error::RenderError::NoFrameStyle).
/// Equality and hashing use the `id` key only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Stable identity key
    pub id: String,
    /// Human-readable device name
    pub name: String,
    /// Family tag
    pub family: DeviceFamily,
    /// Native screen resolution of the device in pixels
    pub display_size: Size,
    /// Decorative corner radius for catalog display, not used in
    /// compositing
    pub corner_radius: f64,
    /// Ordered, non-empty list of color variants
    pub colors: Vec<DeviceColor>,
    /// Compositing geometry, absent for list-only profiles
    pub frame_style: Option<FrameStyle>,
}

impl DeviceProfile {
    /// Returns the first color variant
    ///
    /// Catalog profiles always carry at least one color; this is the
    /// fallback used when a selection becomes invalid after a device
    /// change.
    pub fn first_color(&self) -> Option<&DeviceColor> {
        self.colors.first()
    }

    /// Returns true if `color` belongs to this profile's color list
    pub fn has_color(&self, color: &DeviceColor) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

impl PartialEq for DeviceProfile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DeviceProfile {}

impl Hash for DeviceProfile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Portrait/landscape classification of a screenshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Height >= width
    Portrait,
    /// Width > height
    Landscape,
}

impl Orientation {
    /// Classifies an image size: wider than tall is landscape
    ///
    /// # Examples
    ///
    /// ```
    /// use screenframe::{geometry::Size, model::Orientation};
    ///
    /// assert_eq!(Orientation::from_image_size(Size::new(2532.0, 1170.0)), Orientation::Landscape);
    /// assert_eq!(Orientation::from_image_size(Size::new(1170.0, 2532.0)), Orientation::Portrait);
    /// ```
    pub fn from_image_size(size: Size) -> Self {
        if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Returns true for landscape
    pub fn is_landscape(&self) -> bool {
        *self == Orientation::Landscape
    }
}

/// A screenshot with its device, color, orientation, and scale selections
///
/// Created when an image is ingested (device auto-matched, color
/// defaulted, orientation auto-detected) and mutated by the shell's
/// pickers. The color invariant — the selected color always belongs to
/// the selected device's color list — is enforced by
/// [`set_device`](Self::set_device).
#[derive(Debug, Clone)]
pub struct ScreenItem {
    /// The source screenshot
    pub image: Raster,
    /// Selected device profile
    pub device: DeviceProfile,
    /// Selected color, always a member of `device.colors`
    pub color: DeviceColor,
    /// Per-item replacement for the style's default content scale
    pub content_scale_override: Option<f64>,
    /// Declared orientation, auto-detected at ingestion
    pub orientation: Orientation,
}

impl ScreenItem {
    /// Creates an item for an ingested screenshot
    ///
    /// The color defaults to the device's first variant and the
    /// orientation is detected from the image's aspect ratio.
    pub fn new(image: Raster, device: DeviceProfile) -> Self {
        let orientation = Orientation::from_image_size(image.size());
        let color = device.first_color().cloned().unwrap_or_else(|| {
            DeviceColor::new("missing", "Missing", "")
        });
        Self {
            image,
            device,
            color,
            content_scale_override: None,
            orientation,
        }
    }

    /// Switches the item to a different device
    ///
    /// If the current color is not in the new device's color list, the
    /// selection falls back to the new device's first color.
    pub fn set_device(&mut self, device: DeviceProfile) {
        if !device.has_color(&self.color) {
            if let Some(first) = device.first_color() {
                tracing::debug!(
                    device = %device.id,
                    color = %first.id,
                    "color not available on new device, falling back to first"
                );
                self.color = first.clone();
            }
        }
        self.device = device;
    }

    /// Selects a color variant
    ///
    /// Selections outside the current device's color list are ignored.
    pub fn set_color(&mut self, color: DeviceColor) {
        if self.device.has_color(&color) {
            self.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, colors: Vec<DeviceColor>) -> DeviceProfile {
        DeviceProfile {
            id: id.to_string(),
            name: id.to_uppercase(),
            family: DeviceFamily::Phone,
            display_size: Size::new(2532.0, 1170.0),
            corner_radius: 106.0,
            colors,
            frame_style: Some(FrameStyle::new(
                ScreenInsets::new(0.01, 0.02, 0.01, 0.02),
                0.06,
                0.97,
            )),
        }
    }

    #[test]
    fn test_device_family_serialization() {
        assert_eq!(serde_json::to_string(&DeviceFamily::Phone).unwrap(), r#""phone""#);
        assert_eq!(serde_json::to_string(&DeviceFamily::Tablet).unwrap(), r#""tablet""#);
        assert_eq!(serde_json::to_string(&DeviceFamily::Laptop).unwrap(), r#""laptop""#);
    }

    #[test]
    fn test_device_family_display() {
        assert_eq!(format!("{}", DeviceFamily::Phone), "phone");
        assert_eq!(DeviceFamily::Tablet.as_str(), "tablet");
    }

    #[test]
    fn test_color_identity_equality() {
        let a = DeviceColor::new("blue", "Blue", "frame_blue");
        let b = DeviceColor::new("blue", "Navy", "frame_navy");
        let c = DeviceColor::new("red", "Blue", "frame_blue");

        // Same key is the same color regardless of structural fields
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_profile_identity_equality_and_hash() {
        use std::collections::HashSet;

        let a = profile("phone_a", vec![DeviceColor::new("blue", "Blue", "x")]);
        let mut b = profile("phone_a", vec![DeviceColor::new("red", "Red", "y")]);
        b.corner_radius = 999.0;

        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_insets_top_coordinate_projection() {
        let insets = ScreenInsets::new(0.1, 0.2, 0.3, 0.1);
        let rect = insets.rect_in_top_coordinate(Size::new(100.0, 200.0));

        assert_eq!(rect, Rect::new(20.0, 20.0, 70.0, 120.0));
    }

    #[test]
    fn test_insets_bottom_coordinate_projection() {
        let insets = ScreenInsets::new(0.1, 0.2, 0.3, 0.1);
        let rect = insets.rect_in_bottom_coordinate(Size::new(100.0, 200.0));

        // Same x/width/height as the top projection, y measured from the
        // bottom inset instead
        assert_eq!(rect, Rect::new(20.0, 60.0, 70.0, 120.0));
    }

    #[test]
    fn test_insets_projections_agree_through_flip() {
        use crate::geometry::flipped_y;

        let insets = ScreenInsets::new(0.05, 0.125, 0.1, 0.25);
        let size = Size::new(640.0, 1280.0);

        let top = insets.rect_in_top_coordinate(size);
        let bottom = insets.rect_in_bottom_coordinate(size);
        assert_eq!(flipped_y(top, size.height), bottom);
    }

    #[test]
    fn test_zero_insets_cover_whole_frame() {
        let rect = ScreenInsets::zero().rect_in_bottom_coordinate(Size::new(421.0, 850.0));
        assert_eq!(rect, Rect::new(0.0, 0.0, 421.0, 850.0));
    }

    #[test]
    fn test_effective_content_scale_resolution() {
        let style = FrameStyle::new(ScreenInsets::zero(), 0.06, 0.97);

        assert_eq!(style.effective_content_scale(None), 0.97);
        assert_eq!(style.effective_content_scale(Some(0.85)), 0.85);
    }

    #[test]
    fn test_orientation_from_image_size() {
        assert_eq!(
            Orientation::from_image_size(Size::new(2532.0, 1170.0)),
            Orientation::Landscape
        );
        assert_eq!(
            Orientation::from_image_size(Size::new(1170.0, 2532.0)),
            Orientation::Portrait
        );
        // Square counts as portrait
        assert_eq!(Orientation::from_image_size(Size::new(512.0, 512.0)), Orientation::Portrait);
    }

    #[test]
    fn test_orientation_serialization() {
        assert_eq!(serde_json::to_string(&Orientation::Portrait).unwrap(), r#""portrait""#);
        assert_eq!(
            serde_json::from_str::<Orientation>(r#""landscape""#).unwrap(),
            Orientation::Landscape
        );
    }

    #[test]
    fn test_item_defaults_on_ingestion() {
        let device = profile(
            "phone_a",
            vec![
                DeviceColor::new("blue", "Blue", "frame_blue"),
                DeviceColor::new("red", "Red", "frame_red"),
            ],
        );
        let item = ScreenItem::new(Raster::from_test_pattern(2532, 1170), device);

        assert_eq!(item.color.id, "blue");
        assert_eq!(item.orientation, Orientation::Landscape);
        assert!(item.content_scale_override.is_none());
    }

    #[test]
    fn test_set_device_falls_back_to_first_color() {
        let original = profile("phone_a", vec![DeviceColor::new("blue", "Blue", "frame_blue")]);
        let replacement = profile(
            "phone_b",
            vec![
                DeviceColor::new("silver", "Silver", "frame_silver"),
                DeviceColor::new("black", "Black", "frame_black"),
            ],
        );

        let mut item = ScreenItem::new(Raster::from_test_pattern(100, 200), original);
        assert_eq!(item.color.id, "blue");

        item.set_device(replacement);
        assert_eq!(item.device.id, "phone_b");
        assert_eq!(item.color.id, "silver");
    }

    #[test]
    fn test_set_device_keeps_color_when_shared() {
        let shared = DeviceColor::new("blue", "Blue", "frame_blue");
        let original = profile("phone_a", vec![shared.clone()]);
        let replacement = profile(
            "phone_b",
            vec![DeviceColor::new("red", "Red", "frame_red"), shared.clone()],
        );

        let mut item = ScreenItem::new(Raster::from_test_pattern(100, 200), original);
        item.set_device(replacement);

        assert_eq!(item.color.id, "blue");
    }

    #[test]
    fn test_set_color_rejects_foreign_color() {
        let device = profile("phone_a", vec![DeviceColor::new("blue", "Blue", "frame_blue")]);
        let mut item = ScreenItem::new(Raster::from_test_pattern(100, 200), device);

        item.set_color(DeviceColor::new("green", "Green", "frame_green"));
        assert_eq!(item.color.id, "blue");
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let device = profile("phone_a", vec![DeviceColor::new("blue", "Blue", "frame_blue")]);
        let json = serde_json::to_string(&device).unwrap();
        let back: DeviceProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, "phone_a");
        assert_eq!(back.colors.len(), 1);
        assert!(back.frame_style.is_some());
    }
}
