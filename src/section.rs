//! 画廊区块（标题 + 有序条目，详情页画廊的一个分组）。

use serde::{Deserialize, Serialize};

use crate::item::GalleryItem;

/// 详情页画廊的一个区块。
///
/// 构造后不可变：渲染层只读取，不修改；画廊内容变化时由装配层重新构造
/// 一个新实例。条目顺序即显示顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySection {
    title: String,
    items: Vec<GalleryItem>,
}

impl GallerySection {
    /// 构造一个区块。`title` 和 `items` 都允许为空（空区块正常渲染）。
    pub fn new(title: String, items: Vec<GalleryItem>) -> Self {
        Self { title, items }
    }

    /// 区块标题（显示在画廊上方）
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 条目列表，顺序即显示顺序
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }
}
