//! 地点详情页画廊模型库（供渲染层只读消费，无 UI 依赖）。

pub mod assemble;
pub mod item;
pub mod section;

pub use assemble::{normalize_item, section_from_json, section_from_raw, GalleryError, RawGalleryItem};
pub use item::GalleryItem;
pub use section::GallerySection;
