//! 画廊装配：把上游抓来的原始 payload 变成可渲染的 [`GallerySection`]。
//!
//! 约定：
//! - payload 本身损坏（非法 JSON）是错误；
//! - 单个条目损坏（URL 非法、关键字段为空）只丢弃该条目，不影响整体；
//! - 条目顺序保持 payload 顺序。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use url::Url;

use crate::item::GalleryItem;
use crate::section::GallerySection;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("invalid gallery payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("invalid image url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("missing required field: {0}")]
    EmptyField(&'static str),
}

/// 上游 payload 中的原始条目（未校验，字段与抓取端 JSON 对齐）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGalleryItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}

/// 校验并规范化单个条目。
///
/// - `id` 和 `url` 去除首尾空白后不能为空
/// - `url` / `preview_url` 必须能解析为绝对 URL
/// - `preview_url` 缺省或为空时回退为 `url`
pub fn normalize_item(raw: RawGalleryItem) -> Result<GalleryItem, GalleryError> {
    let id = raw.id.trim();
    if id.is_empty() {
        return Err(GalleryError::EmptyField("id"));
    }

    let image_url = raw.url.trim();
    if image_url.is_empty() {
        return Err(GalleryError::EmptyField("url"));
    }
    let image_url = Url::parse(image_url)?;

    let preview_url = match raw.preview_url.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => Url::parse(p)?,
        _ => image_url.clone(),
    };

    Ok(GalleryItem {
        id: id.to_string(),
        image_url: image_url.into(),
        preview_url: preview_url.into(),
        description: raw.description.filter(|d| !d.trim().is_empty()),
        metadata: raw.metadata,
    })
}

/// 从已反序列化的原始条目装配区块。
///
/// 非法条目直接丢弃（与按行解析 metadata 的容错方式一致），其余条目保持
/// 原有顺序。全部丢弃时得到空区块。
pub fn section_from_raw(title: String, raw: Vec<RawGalleryItem>) -> GallerySection {
    let items: Vec<GalleryItem> = raw
        .into_iter()
        .filter_map(|r| normalize_item(r).ok())
        .collect();
    GallerySection::new(title, items)
}

/// 从 JSON payload（`RawGalleryItem` 数组）装配区块。
pub fn section_from_json(title: String, payload: &str) -> Result<GallerySection, GalleryError> {
    let raw: Vec<RawGalleryItem> = serde_json::from_str(payload)?;
    Ok(section_from_raw(title, raw))
}
