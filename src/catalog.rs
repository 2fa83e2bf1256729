//! Device catalog and best-fit profile matching
//!
//! The catalog is an immutable table of [`DeviceProfile`]s with a scoring
//! function over image dimensions. Matching is orientation-independent:
//! both the image size and each profile's reference display size are
//! sorted ascending before comparison, so a landscape screenshot matches
//! the same profile as its portrait counterpart.
//!
//! A process-wide built-in catalog is available through
//! [`DeviceCatalog::builtin`]; shells with custom hardware tables can
//! construct their own with [`DeviceCatalog::new`].

use crate::{
    error::{RenderError, RenderResult},
    geometry::Size,
    model::{DeviceColor, DeviceFamily, DeviceProfile, FrameStyle, ScreenInsets},
};

/// An immutable, ordered table of device profiles
///
/// Iteration order is significant: when two profiles score equally for an
/// image, the first one in the table wins. Reordering entries can
/// therefore change match results for sizes that sit exactly between two
/// devices.
#[derive(Debug, Clone)]
pub struct DeviceCatalog {
    profiles: Vec<DeviceProfile>,
}

impl DeviceCatalog {
    /// Creates a catalog from an ordered list of profiles
    pub fn new(profiles: Vec<DeviceProfile>) -> Self {
        Self { profiles }
    }

    /// Returns the built-in catalog of known devices
    ///
    /// Profiles are ordered from oldest to newest hardware; every built-in
    /// profile carries at least one color and a frame style.
    pub fn builtin() -> Self {
        Self::new(builtin_profiles())
    }

    /// Returns all profiles in table order
    pub fn profiles(&self) -> &[DeviceProfile] {
        &self.profiles
    }

    /// Looks up a profile by its identity key
    pub fn profile(&self, id: &str) -> Option<&DeviceProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Returns the profile whose reference display best matches the image
    ///
    /// For each profile the score is the sum of the relative errors of the
    /// two sorted dimensions:
    ///
    /// ```text
    /// score = |img_small - dev_small| / dev_small
    ///       + |img_large - dev_large| / dev_large
    /// ```
    ///
    /// The minimal score wins; the first profile encountered wins ties. An
    /// image matching a profile's reference size exactly (in either
    /// orientation) scores zero and beats any non-exact match. Profiles
    /// without a frame style participate in matching; rejecting them is
    /// the renderer's job, not the matcher's.
    ///
    /// # Errors
    ///
    /// [`RenderError::NoDeviceAvailable`] if the catalog is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use screenframe::{catalog::DeviceCatalog, geometry::Size};
    ///
    /// let catalog = DeviceCatalog::builtin();
    /// let profile = catalog.matching_device(Size::new(1170.0, 2532.0)).unwrap();
    /// assert_eq!(profile.id, "iphone14");
    /// ```
    pub fn matching_device(&self, image_size: Size) -> RenderResult<&DeviceProfile> {
        let mut best: Option<(&DeviceProfile, f64)> = None;

        let (img_small, img_large) = sorted_dimensions(image_size);

        for profile in &self.profiles {
            let (dev_small, dev_large) = sorted_dimensions(profile.display_size);
            let score =
                (img_small - dev_small).abs() / dev_small + (img_large - dev_large).abs() / dev_large;

            // Strict comparison keeps the first entry on ties
            if best.is_none_or(|(_, best_score)| score < best_score) {
                tracing::debug!(device = %profile.id, score, "new best device match");
                best = Some((profile, score));
            }
        }

        let (profile, score) = best.ok_or(RenderError::NoDeviceAvailable)?;
        if profile.frame_style.is_none() {
            // Surfaced again at render time as NoFrameStyle
            tracing::warn!(device = %profile.id, score, "best match has no frame style");
        }
        Ok(profile)
    }
}

fn sorted_dimensions(size: Size) -> (f64, f64) {
    if size.width <= size.height {
        (size.width, size.height)
    } else {
        (size.height, size.width)
    }
}

fn color(id: &str, name: &str, asset_name: &str) -> DeviceColor {
    DeviceColor::new(id, name, asset_name)
}

fn builtin_profiles() -> Vec<DeviceProfile> {
    vec![
        DeviceProfile {
            id: "iphone14".to_string(),
            name: "iPhone 14".to_string(),
            family: DeviceFamily::Phone,
            display_size: Size::new(2532.0, 1170.0),
            corner_radius: 106.0,
            colors: vec![
                color("blue", "Blue", "iphone14_blue"),
                color("midnight", "Midnight", "iphone14_midnight"),
                color("purple", "Purple", "iphone14_purple"),
                color("red", "Red", "iphone14_red"),
                color("starlight", "Starlight", "iphone14_starlight"),
            ],
            frame_style: Some(FrameStyle::new(
                ScreenInsets::new(6.0 / 850.0, 10.0 / 421.0, 8.0 / 850.0, 11.0 / 421.0),
                0.06,
                0.97,
            )),
        },
        DeviceProfile {
            id: "iphone16".to_string(),
            name: "iPhone 16".to_string(),
            family: DeviceFamily::Phone,
            display_size: Size::new(2556.0, 1179.0),
            corner_radius: 108.0,
            colors: vec![color(
                "ultramarine",
                "Ultramarine",
                "iPhone 16 - Ultramarine - Portrait",
            )],
            frame_style: Some(FrameStyle::new(
                ScreenInsets::new(1.0 / 879.0, 0.0, 1.0 / 879.0, 0.0),
                0.06,
                0.97,
            )),
        },
        DeviceProfile {
            id: "iphone16Plus".to_string(),
            name: "iPhone 16 Plus".to_string(),
            family: DeviceFamily::Phone,
            display_size: Size::new(2796.0, 1290.0),
            corner_radius: 112.0,
            colors: vec![color("pink16", "Pink", "iPhone 16 Plus - Pink - Portrait 2")],
            frame_style: Some(FrameStyle::new(
                ScreenInsets::new(2.0 / 964.0, 0.0, 2.0 / 964.0, 0.0),
                0.06,
                0.97,
            )),
        },
        DeviceProfile {
            id: "iphone16Pro".to_string(),
            name: "iPhone 16 Pro".to_string(),
            family: DeviceFamily::Phone,
            display_size: Size::new(2556.0, 1179.0),
            corner_radius: 110.0,
            colors: vec![color(
                "blackTitanium",
                "Black Titanium",
                "iPhone 16 Pro - Black Titanium - Portrait 2",
            )],
            frame_style: Some(FrameStyle::new(
                ScreenInsets::new(3.0 / 884.0, 0.0, 1.0 / 884.0, 0.0),
                0.06,
                0.97,
            )),
        },
        DeviceProfile {
            id: "iphone16ProMax".to_string(),
            name: "iPhone 16 Pro Max".to_string(),
            family: DeviceFamily::Phone,
            display_size: Size::new(2796.0, 1290.0),
            corner_radius: 118.0,
            colors: vec![color(
                "desertTitanium",
                "Desert Titanium",
                "iPhone 16 Pro Max - Desert Titanium - Portrait 2",
            )],
            frame_style: Some(FrameStyle::new(
                ScreenInsets::new(1.0 / 958.0, 0.0, 1.0 / 958.0, 0.0),
                0.06,
                0.97,
            )),
        },
        DeviceProfile {
            id: "iphone17".to_string(),
            name: "iPhone 17".to_string(),
            family: DeviceFamily::Phone,
            display_size: Size::new(2556.0, 1179.0),
            corner_radius: 110.0,
            colors: vec![color("mistBlue", "Mist Blue", "iPhone 17 - Mist Blue - Portrait 1")],
            frame_style: Some(FrameStyle::new(
                ScreenInsets::new(0.009101, 0.011628, 0.009101, 0.011628),
                0.06,
                0.97,
            )),
        },
        DeviceProfile {
            id: "iphone17Pro".to_string(),
            name: "iPhone 17 Pro".to_string(),
            family: DeviceFamily::Phone,
            display_size: Size::new(2556.0, 1179.0),
            corner_radius: 112.0,
            colors: vec![color(
                "cosmicOrange",
                "Cosmic Orange",
                "iPhone 17 Pro - Cosmic Orange - Portrait 1",
            )],
            frame_style: Some(FrameStyle::new(
                ScreenInsets::new(0.006826, 0.009302, 0.006826, 0.009302),
                0.06,
                0.97,
            )),
        },
        DeviceProfile {
            id: "iphone17ProMax".to_string(),
            name: "iPhone 17 Pro Max".to_string(),
            family: DeviceFamily::Phone,
            display_size: Size::new(2796.0, 1290.0),
            corner_radius: 120.0,
            colors: vec![color(
                "cosmicOrangeMax",
                "Cosmic Orange",
                "iPhone 17 Pro Max - Cosmic Orange - Portrait 1",
            )],
            frame_style: Some(FrameStyle::new(
                ScreenInsets::new(0.006263, 0.010661, 0.006263, 0.010661),
                0.06,
                0.97,
            )),
        },
        DeviceProfile {
            id: "ipadPro129".to_string(),
            name: "iPad Pro 12.9".to_string(),
            family: DeviceFamily::Tablet,
            display_size: Size::new(2752.0, 2064.0),
            corner_radius: 0.0,
            colors: vec![color("spaceGray", "Space Gray", "iPad Pro 12.9 - Space Gray - Portrait")],
            frame_style: Some(FrameStyle::new(ScreenInsets::zero(), 0.0, 0.94)),
        },
    ]
}
