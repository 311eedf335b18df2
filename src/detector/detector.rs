//! 匹配器核心：对任意文本执行整词指纹匹配，输出检测结果

use crate::compiler::{CompiledTaxonomy, TaxonomyCompiler};
use crate::error::RtsResult;
use crate::taxonomy::DetectionResult;

/// 技术匹配器
#[derive(Debug, Clone)]
pub struct TechMatcher {
    compiled: CompiledTaxonomy,
}

impl TechMatcher {
    /// 基于内置分类表创建匹配器
    pub fn new() -> RtsResult<Self> {
        Ok(Self {
            compiled: TaxonomyCompiler::compile()?,
        })
    }

    /// 基于已编译分类表创建匹配器
    pub fn with_taxonomy(compiled: CompiledTaxonomy) -> Self {
        Self { compiled }
    }

    /// 核心检测接口
    /// 纯函数，无副作用，可并发调用；输入为任意文本（HTML、头部文本均可），
    /// 无命中返回空结果而非错误
    pub fn detect(&self, content: &str) -> DetectionResult {
        let mut result = DetectionResult::default();

        for category in &self.compiled.categories {
            // 技术按分类表顺序收集；正则命中与出现次数无关，天然去重
            let technologies: Vec<String> = category
                .patterns
                .iter()
                .filter(|pattern| pattern.is_match(content))
                .map(|pattern| pattern.technology.clone())
                .collect();

            // 空分类由push丢弃
            result.push(category.name.clone(), technologies);
        }

        result
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> TechMatcher {
        TechMatcher::new().unwrap()
    }

    #[test]
    fn test_detect_wordpress_and_nginx() {
        // 测试场景：正文同时包含CMS与Web服务器指纹
        let result = matcher().detect("Powered by WordPress 6.2 running on Nginx/1.18");
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.technologies_of("CMSs"),
            Some(&["WordPress".to_string()][..])
        );
        assert_eq!(
            result.technologies_of("Web Servers"),
            Some(&["Nginx".to_string()][..])
        );
    }

    #[test]
    fn test_detect_empty_content() {
        // 测试场景：空正文返回空结果，而非错误
        let result = matcher().detect("");
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_substring_bleed() {
        // 测试场景：整词边界，"Go"不得命中"Golang"
        let m = matcher();
        assert!(m.detect("Golang is fun").technologies_of("Programming Languages").is_none());

        let result = m.detect("I use Go daily");
        assert_eq!(
            result.technologies_of("Programming Languages"),
            Some(&["Go".to_string()][..])
        );
    }

    #[test]
    fn test_case_insensitive_match() {
        // 测试场景：忽略大小写
        let result = matcher().detect("powered by WORDPRESS and nginx");
        assert!(result.technologies_of("CMSs").is_some());
        assert!(result.technologies_of("Web Servers").is_some());
    }

    #[test]
    fn test_taxonomy_order_not_occurrence_order() {
        // 测试场景：结果顺序为分类表顺序，与文本出现顺序无关
        // 表内 Apache 在 Nginx 之前，文本中顺序相反
        let result = matcher().detect("Nginx proxying to Apache backend");
        assert_eq!(
            result.technologies_of("Web Servers"),
            Some(&["Apache".to_string(), "Nginx".to_string()][..])
        );
    }

    #[test]
    fn test_duplicate_occurrences_reported_once() {
        // 测试场景：同一技术多次出现仅上报一次
        let result = matcher().detect("Redis Redis Redis");
        assert_eq!(
            result.technologies_of("Database Systems"),
            Some(&["Redis".to_string()][..])
        );
    }

    #[test]
    fn test_detect_idempotent() {
        // 测试场景：同一输入两次检测结果一致（纯函数）
        let m = matcher();
        let content = "Django on Nginx with PostgreSQL and Redis";
        assert_eq!(m.detect(content), m.detect(content));
    }

    #[test]
    fn test_empty_categories_omitted() {
        // 测试场景：未命中的分类不出现在结果中
        let result = matcher().detect("just some plain text about cooking");
        assert!(result.is_empty());

        let result = matcher().detect("MySQL only");
        assert_eq!(result.len(), 1);
        assert!(result.technologies_of("CMSs").is_none());
    }

    #[test]
    fn test_binary_ish_content_tolerated() {
        // 测试场景：夹杂控制字符的文本照常匹配
        let result = matcher().detect("\u{0}\u{1}garbage\u{2} Docker \u{3}");
        assert_eq!(
            result.technologies_of("DevOps Tools"),
            Some(&["Docker".to_string()][..])
        );
    }
}
