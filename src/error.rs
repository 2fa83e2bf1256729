//! Error types for frame rendering operations
//!
//! Every failure is terminal for the render attempt it occurred in: the
//! engine never retries internally and never substitutes fallback
//! geometry. Each variant carries enough context (device name, asset
//! name) for a caller to show a user-facing placeholder instead of a
//! partial result, and [`RenderError::placeholder_message`] provides
//! ready-made text for that placeholder.

/// Result type alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Error type for device matching, orientation, and compositing
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The device catalog contains no profiles at all
    #[error("Device catalog is empty, no profile can be matched")]
    NoDeviceAvailable,

    /// The selected profile has no compositing geometry
    #[error("No frame style defined for device '{device}'")]
    NoFrameStyle {
        /// Display name of the device lacking a frame style
        device: String,
    },

    /// The asset store could not resolve the frame asset
    #[error("Missing frame asset '{asset}'")]
    MissingAsset {
        /// Name of the unresolved asset
        asset: String,
    },

    /// Rotating the frame asset for landscape orientation failed
    #[error("Unable to rotate frame asset '{asset}'")]
    RotationFailed {
        /// Name of the asset that could not be rotated
        asset: String,
    },

    /// Serializing the composited canvas failed
    #[error("Failed to encode composited output: {reason}")]
    EncodingFailed {
        /// Reason reported by the encoder
        reason: String,
    },
}

impl RenderError {
    /// Returns user-facing text suitable for a placeholder view
    ///
    /// Callers are expected to present a placeholder rather than partial
    /// output when a render fails; this message describes the failure in
    /// terms a user of the shell application can act on.
    ///
    /// # Examples
    ///
    /// ```
    /// use screenframe::error::RenderError;
    ///
    /// let error = RenderError::MissingAsset {
    ///     asset: "phone_a_blue".to_string(),
    /// };
    /// assert!(error.placeholder_message().contains("phone_a_blue"));
    /// ```
    pub fn placeholder_message(&self) -> String {
        match self {
            RenderError::NoDeviceAvailable => {
                "No devices are available. Add at least one device profile to the catalog."
                    .to_string()
            }
            RenderError::NoFrameStyle { device } => {
                format!("No frame style for {device}. This device can be listed but not rendered.")
            }
            RenderError::MissingAsset { asset } => {
                format!("Asset {asset} not found. Check that the frame image is installed.")
            }
            RenderError::RotationFailed { asset } => {
                format!("Unable to rotate asset {asset}. The frame image may be unreadable.")
            }
            RenderError::EncodingFailed { .. } => {
                "Unable to produce the framed image. Try rendering again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_device_available_message() {
        let error = RenderError::NoDeviceAvailable;
        assert!(error.to_string().contains("catalog is empty"));
        assert!(error.placeholder_message().contains("No devices"));
    }

    #[test]
    fn test_no_frame_style_carries_device_name() {
        let error = RenderError::NoFrameStyle {
            device: "Phone A".to_string(),
        };

        assert!(error.to_string().contains("Phone A"));
        assert!(error.placeholder_message().contains("Phone A"));
    }

    #[test]
    fn test_missing_asset_carries_asset_name() {
        let error = RenderError::MissingAsset {
            asset: "phone_a_blue".to_string(),
        };

        assert!(error.to_string().contains("phone_a_blue"));
        assert!(error.placeholder_message().contains("phone_a_blue"));
    }

    #[test]
    fn test_rotation_failed_carries_asset_name() {
        let error = RenderError::RotationFailed {
            asset: "tablet_gray".to_string(),
        };

        assert!(error.to_string().contains("tablet_gray"));
        assert!(error.placeholder_message().contains("tablet_gray"));
    }

    #[test]
    fn test_encoding_failed_carries_reason() {
        let error = RenderError::EncodingFailed {
            reason: "canvas allocation failed".to_string(),
        };

        assert!(error.to_string().contains("canvas allocation failed"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = RenderError::NoDeviceAvailable;
        assert!(format!("{error:?}").contains("NoDeviceAvailable"));
    }
}
