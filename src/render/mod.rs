//! Rendering facade: catalog lookup, orientation, compositing, preview
//!
//! This module ties the engine together. It provides:
//!
//! - [`AssetStore`]: the consumed capability for resolving a frame
//!   asset name to its bezel raster
//! - [`MemoryAssetStore`]: a name-keyed in-memory store for shells that
//!   embed their assets, and for tests
//! - [`Renderer`]: the single entry point the shell and export layers
//!   talk to — `render` to bytes, `render_batch` over many items, and
//!   `preview_layout` for interactive display
//!
//! Rendering is synchronous, deterministic, and pure with respect to its
//! inputs; the renderer holds no cross-call state, so independent items
//! may be rendered from multiple threads without coordination.

use std::{collections::HashMap, sync::Arc};

use crate::{
    catalog::DeviceCatalog,
    error::{RenderError, RenderResult},
    geometry::Size,
    model::{DeviceProfile, FrameStyle, ScreenItem},
    raster::Raster,
};

pub mod compositor;
pub mod orientation;
pub mod preview;

pub use preview::PreviewLayout;

/// Name-keyed lookup resolving an asset reference to a bezel raster
///
/// The store is an external collaborator: how assets are acquired
/// (bundled files, downloads, a user-managed directory) is outside the
/// engine. Implementations must support safe concurrent lookups, since
/// batch renders may run items in parallel.
pub trait AssetStore: Send + Sync {
    /// Resolves an asset name to its decoded raster
    ///
    /// Returns `None` when the store has no asset under that name; the
    /// renderer turns that into
    /// [`RenderError::MissingAsset`](crate::error::RenderError::MissingAsset).
    fn resolve_asset(&self, name: &str) -> Option<Raster>;
}

/// In-memory asset store backed by a name-keyed map
///
/// Assets are decoded once at insertion and handed out as clones. Useful
/// for shells that embed their bezel images and for exercising the
/// pipeline in tests.
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    assets: HashMap<String, Raster>,
}

impl MemoryAssetStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a decoded raster under `name`, replacing any previous
    /// entry
    pub fn insert(&mut self, name: impl Into<String>, raster: Raster) {
        self.assets.insert(name.into(), raster);
    }

    /// Decodes `bytes` and inserts the result under `name`
    pub fn insert_bytes(
        &mut self,
        name: impl Into<String>,
        bytes: &[u8],
    ) -> Result<(), image::ImageError> {
        let raster = Raster::from_bytes(bytes)?;
        self.insert(name, raster);
        Ok(())
    }

    /// Number of stored assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true when the store holds no assets
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetStore for MemoryAssetStore {
    fn resolve_asset(&self, name: &str) -> Option<Raster> {
        self.assets.get(name).cloned()
    }
}

/// The engine's single rendering entry point
///
/// Owns the device catalog and an asset store handle, and orchestrates
/// matching, orientation adaptation, and compositing for
/// [`ScreenItem`]s. Cheap to clone; clones share the store.
#[derive(Clone)]
pub struct Renderer {
    catalog: DeviceCatalog,
    assets:  Arc<dyn AssetStore>,
}

impl Renderer {
    /// Creates a renderer over the given catalog and asset store
    pub fn new(catalog: DeviceCatalog, assets: Arc<dyn AssetStore>) -> Self {
        Self { catalog, assets }
    }

    /// Returns the catalog this renderer matches against
    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    /// Returns the best-fit profile for an image size
    ///
    /// Delegates to [`DeviceCatalog::matching_device`]; shells call this
    /// when the user has not overridden the device selection.
    pub fn matching_device(&self, image_size: Size) -> RenderResult<&DeviceProfile> {
        self.catalog.matching_device(image_size)
    }

    /// Creates a [`ScreenItem`] for a freshly ingested screenshot
    ///
    /// The device is auto-matched against the catalog, the color defaults
    /// to the matched profile's first variant, and the orientation is
    /// detected from the image's aspect ratio.
    ///
    /// # Errors
    ///
    /// [`RenderError::NoDeviceAvailable`] if the catalog is empty.
    pub fn ingest(&self, image: Raster) -> RenderResult<ScreenItem> {
        let device = self.matching_device(image.size())?.clone();
        tracing::debug!(device = %device.id, "auto-matched ingested screenshot");
        Ok(ScreenItem::new(image, device))
    }

    /// Renders an item to lossless PNG bytes at the frame's native size
    ///
    /// Pipeline: resolve the frame style and asset, rotate both asset and
    /// insets for landscape items, composite, encode. No partial output
    /// is ever produced; on failure the caller renders a placeholder from
    /// the error's context.
    ///
    /// # Errors
    ///
    /// - [`RenderError::NoFrameStyle`] if the item's device has no
    ///   compositing geometry
    /// - [`RenderError::MissingAsset`] if the asset store cannot resolve
    ///   the color's frame asset
    /// - [`RenderError::RotationFailed`] if the landscape rotation fails
    /// - [`RenderError::EncodingFailed`] if PNG serialization fails
    pub fn render(&self, item: &ScreenItem) -> RenderResult<Vec<u8>> {
        let style = self.resolved_style(&item.device)?;
        let asset_name = &item.color.asset_name;
        let frame = self.resolved_asset(asset_name)?;

        let frame = orientation::oriented_frame(&frame, item.orientation, asset_name)?;
        let insets = orientation::oriented_insets(style.insets, item.orientation);
        let oriented_style = FrameStyle::new(insets, style.screen_corner_radius_ratio, style.content_scale);

        let content_scale = style.effective_content_scale(item.content_scale_override);
        tracing::debug!(
            device = %item.device.id,
            color = %item.color.id,
            orientation = ?item.orientation,
            content_scale,
            "rendering item"
        );

        compositor::compose(&item.image, &frame, &oriented_style, content_scale)
    }

    /// Renders a set of items, collecting each result independently
    ///
    /// One item's failure never aborts its siblings; the output vector is
    /// index-aligned with the input slice.
    pub fn render_batch(&self, items: &[ScreenItem]) -> Vec<RenderResult<Vec<u8>>> {
        items.iter().map(|item| self.render(item)).collect()
    }

    /// Computes layout rectangles for interactive on-screen preview
    ///
    /// Produces the same content rectangle as [`render`](Self::render)
    /// would, scaled to `available` display units and expressed in
    /// top-origin coordinates. Only the asset's dimensions are consulted;
    /// no pixels are rendered.
    ///
    /// # Errors
    ///
    /// [`RenderError::NoFrameStyle`] and [`RenderError::MissingAsset`] as
    /// for [`render`](Self::render).
    pub fn preview_layout(&self, item: &ScreenItem, available: Size) -> RenderResult<PreviewLayout> {
        let style = self.resolved_style(&item.device)?;
        let frame = self.resolved_asset(&item.color.asset_name)?;

        let frame_size = orientation::oriented_size(frame.size(), item.orientation);
        let insets = orientation::oriented_insets(style.insets, item.orientation);
        let content_scale = style.effective_content_scale(item.content_scale_override);

        Ok(preview::layout(
            item.image.size(),
            frame_size,
            insets,
            style.screen_corner_radius_ratio,
            content_scale,
            available,
        ))
    }

    fn resolved_style(&self, device: &DeviceProfile) -> RenderResult<FrameStyle> {
        device.frame_style.ok_or_else(|| {
            tracing::warn!(device = %device.id, "device has no frame style");
            RenderError::NoFrameStyle {
                device: device.name.clone(),
            }
        })
    }

    fn resolved_asset(&self, name: &str) -> RenderResult<Raster> {
        self.assets.resolve_asset(name).ok_or_else(|| {
            tracing::warn!(asset = name, "asset store returned no frame asset");
            RenderError::MissingAsset {
                asset: name.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeviceColor, DeviceFamily, Orientation, ScreenInsets};

    fn test_device(id: &str, frame_style: Option<FrameStyle>) -> DeviceProfile {
        DeviceProfile {
            id: id.to_string(),
            name: format!("Device {id}"),
            family: DeviceFamily::Phone,
            display_size: Size::new(780.0, 380.0),
            corner_radius: 0.0,
            colors: vec![DeviceColor::new("gray", "Gray", "frame_gray")],
            frame_style,
        }
    }

    fn test_style() -> FrameStyle {
        FrameStyle::new(ScreenInsets::new(0.0125, 0.025, 0.0125, 0.025), 0.06, 0.97)
    }

    fn store_with_frame() -> Arc<MemoryAssetStore> {
        let mut store = MemoryAssetStore::new();
        store.insert("frame_gray", Raster::from_test_pattern(400, 800));
        Arc::new(store)
    }

    fn test_catalog() -> DeviceCatalog {
        DeviceCatalog::new(vec![test_device("a", Some(test_style()))])
    }

    #[test]
    fn test_memory_store_resolves_inserted_assets() {
        let mut store = MemoryAssetStore::new();
        assert!(store.is_empty());

        store.insert("frame_gray", Raster::from_test_pattern(10, 20));
        assert_eq!(store.len(), 1);

        let resolved = store.resolve_asset("frame_gray").unwrap();
        assert_eq!(resolved.dimensions(), (10, 20));
        assert!(store.resolve_asset("other").is_none());
    }

    #[test]
    fn test_ingest_auto_matches_catalog_device() {
        let renderer = Renderer::new(test_catalog(), store_with_frame());

        let item = renderer.ingest(Raster::from_test_pattern(380, 780)).unwrap();
        assert_eq!(item.device.id, "a");
        assert_eq!(item.color.id, "gray");
        assert_eq!(item.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_ingest_empty_catalog_has_no_device() {
        let renderer = Renderer::new(DeviceCatalog::new(vec![]), store_with_frame());

        let result = renderer.ingest(Raster::from_test_pattern(380, 780));
        assert!(matches!(result, Err(RenderError::NoDeviceAvailable)));
    }

    #[test]
    fn test_render_missing_style_fails_without_output() {
        let renderer = Renderer::new(test_catalog(), store_with_frame());
        let item = ScreenItem::new(Raster::from_test_pattern(380, 780), test_device("a", None));

        let result = renderer.render(&item);
        assert!(matches!(
            result,
            Err(RenderError::NoFrameStyle { device }) if device == "Device a"
        ));
    }

    #[test]
    fn test_render_missing_asset_fails_with_asset_name() {
        let renderer = Renderer::new(test_catalog(), Arc::new(MemoryAssetStore::new()));
        let item = ScreenItem::new(
            Raster::from_test_pattern(380, 780),
            test_device("a", Some(test_style())),
        );

        let result = renderer.render(&item);
        assert!(matches!(
            result,
            Err(RenderError::MissingAsset { asset }) if asset == "frame_gray"
        ));
    }

    #[test]
    fn test_render_produces_png() {
        let renderer = Renderer::new(test_catalog(), store_with_frame());
        let item = ScreenItem::new(
            Raster::from_test_pattern(380, 780),
            test_device("a", Some(test_style())),
        );

        let bytes = renderer.render(&item).unwrap();
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_batch_failures_are_independent() {
        let renderer = Renderer::new(test_catalog(), store_with_frame());

        let good = ScreenItem::new(
            Raster::from_test_pattern(380, 780),
            test_device("good", Some(test_style())),
        );
        let bad = ScreenItem::new(Raster::from_test_pattern(380, 780), test_device("bad", None));

        let results = renderer.render_batch(&[good.clone(), bad, good]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_preview_layout_uses_oriented_dimensions() {
        let renderer = Renderer::new(test_catalog(), store_with_frame());
        // Landscape screenshot: frame dims swap from 400x800 to 800x400
        let item = ScreenItem::new(
            Raster::from_test_pattern(780, 380),
            test_device("a", Some(test_style())),
        );
        assert!(item.orientation.is_landscape());

        let result = renderer.preview_layout(&item, Size::new(800.0, 400.0)).unwrap();
        assert_eq!(result.frame_rect.width, 800.0);
        assert_eq!(result.frame_rect.height, 400.0);
    }

    #[test]
    fn test_preview_layout_missing_asset() {
        let renderer = Renderer::new(test_catalog(), Arc::new(MemoryAssetStore::new()));
        let item = ScreenItem::new(
            Raster::from_test_pattern(380, 780),
            test_device("a", Some(test_style())),
        );

        let result = renderer.preview_layout(&item, Size::new(500.0, 500.0));
        assert!(matches!(result, Err(RenderError::MissingAsset { .. })));
    }
}
