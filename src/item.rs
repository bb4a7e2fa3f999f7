//! 画廊条目模型（一张可展示的图片：原图 + 预览图 + 透传元数据）。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 画廊中的一个条目。
///
/// 字段由装配层校验后填充（见 `assemble`）：`preview_url` 缺省时已回退为
/// `image_url`，渲染层无需再做空值处理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    /// 上游标识，本 crate 不解释其含义
    pub id: String,
    pub image_url: String,
    /// 预览图 URL（缺省时与 `image_url` 相同）
    pub preview_url: String,
    pub description: Option<String>,
    /// 上游透传的附加字段（作者、来源页等），不在本层解释
    pub metadata: Option<HashMap<String, String>>,
}
