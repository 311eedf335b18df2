//! 分类表编译器核心
//! 仅负责将分类表编译为可执行的整词匹配正则

use std::time::Instant;
use regex::Regex;
use tracing::debug;

use super::pattern::{CompiledCategory, CompiledPattern, CompiledTaxonomy};
use crate::error::RtsResult;
use crate::taxonomy::CATEGORIES;

/// 分类表编译器
pub struct TaxonomyCompiler;

impl TaxonomyCompiler {
    /// 编译内置分类表
    pub fn compile() -> RtsResult<CompiledTaxonomy> {
        Self::compile_table(CATEGORIES)
    }

    /// 编译任意分类表（保持表顺序）
    pub fn compile_table(table: &[(&str, &[&str])]) -> RtsResult<CompiledTaxonomy> {
        let start = Instant::now();
        let mut categories = Vec::with_capacity(table.len());

        for (category, technologies) in table {
            let mut patterns = Vec::with_capacity(technologies.len());
            for technology in *technologies {
                patterns.push(Self::compile_single_pattern(technology)?);
            }
            categories.push(CompiledCategory {
                name: category.to_string(),
                patterns,
            });
        }

        let compiled = CompiledTaxonomy { categories };
        debug!(
            "分类表编译完成，共{}条模式，耗时{:?}",
            compiled.pattern_count(),
            start.elapsed()
        );

        Ok(compiled)
    }

    /// 编译单个技术名为整词匹配正则
    /// 名称整体转义后两端加\b并忽略大小写；多词名称（如"Ruby on Rails"）
    /// 按字面整体匹配，词边界仅作用于首尾两端
    fn compile_single_pattern(technology: &str) -> RtsResult<CompiledPattern> {
        let regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(technology)))?;
        Ok(CompiledPattern {
            technology: technology.to_string(),
            regex,
        })
    }
}
