//! 编译后模式模型
//! 正则编译后的结构

use regex::Regex;

/// 单个技术的编译后整词匹配模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub technology: String,
    pub regex: Regex,
}

impl CompiledPattern {
    /// 简单匹配判断（忽略大小写，两端整词边界）
    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

/// 单个分类的编译后模式组
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub name: String,
    pub patterns: Vec<CompiledPattern>,
}

/// 编译后的完整分类表（顺序与内置表一致）
#[derive(Debug, Clone)]
pub struct CompiledTaxonomy {
    pub categories: Vec<CompiledCategory>,
}

impl CompiledTaxonomy {
    /// 编译后的模式总数
    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns.len()).sum()
    }
}
