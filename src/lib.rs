//! screenframe: device-bezel compositing engine for screenshots
//!
//! This library matches a screenshot to the best-fitting device profile,
//! fits it into the device frame's screen cutout, and composites the two
//! into a pixel-accurate PNG at the frame's native resolution. It also
//! computes the equivalent layout rectangles for interactive on-screen
//! preview.
//!
//! The engine is pure and synchronous: the same image, device, color,
//! and style always produce byte-identical output, and no shared state
//! is touched during a render. UI, persistence, and asset acquisition
//! are external collaborators; the only capability the engine consumes
//! is an [`AssetStore`](render::AssetStore) lookup.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use screenframe::{
//!     catalog::DeviceCatalog,
//!     model::ScreenItem,
//!     raster::Raster,
//!     render::{MemoryAssetStore, Renderer},
//! };
//!
//! let mut store = MemoryAssetStore::new();
//! store.insert("iphone14_blue", Raster::from_test_pattern(421, 850));
//!
//! let catalog = DeviceCatalog::builtin();
//! let screenshot = Raster::from_test_pattern(1170, 2532);
//! let device = catalog.matching_device(screenshot.size()).unwrap().clone();
//!
//! let item = ScreenItem::new(screenshot, device);
//! let renderer = Renderer::new(catalog, Arc::new(store));
//! let png = renderer.render(&item).unwrap();
//! assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
//! ```

pub mod catalog;
pub mod error;
pub mod geometry;
pub mod model;
pub mod raster;
pub mod render;
pub mod util;

pub use catalog::DeviceCatalog;
pub use error::{RenderError, RenderResult};
pub use geometry::{Rect, Size};
pub use model::{
    DeviceColor, DeviceFamily, DeviceProfile, FrameStyle, Orientation, ScreenInsets, ScreenItem,
};
pub use raster::Raster;
pub use render::{AssetStore, MemoryAssetStore, PreviewLayout, Renderer};
