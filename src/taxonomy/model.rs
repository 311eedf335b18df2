//! 检测结果数据模型定义
//! 仅存储结果数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 单个分类的检测结果（技术按分类表顺序排列，无重复）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetection {
    pub category: String,
    pub technologies: Vec<String>,
}

// ======== 为 CategoryDetection 实现 Display trait（用于 CLI / Report 输出） ========
impl fmt::Display for CategoryDetection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.technologies.join(", "))
    }
}

/// 完整检测结果
/// 分类按内置分类表顺序排列；不变式：不包含技术列表为空的分类
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    categories: Vec<CategoryDetection>,
}

impl DetectionResult {
    /// 追加一个分类的检测结果；空技术列表直接丢弃，维持不变式
    pub fn push(&mut self, category: String, technologies: Vec<String>) {
        if technologies.is_empty() {
            return;
        }
        self.categories.push(CategoryDetection {
            category,
            technologies,
        });
    }

    /// 是否无任何命中
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// 命中的分类数量
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// 按分类表顺序迭代命中的分类
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDetection> {
        self.categories.iter()
    }

    /// 查询指定分类命中的技术列表
    pub fn technologies_of(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|d| d.category == category)
            .map(|d| d.technologies.as_slice())
    }
}
