//! 全局匹配器单例管理
use once_cell::sync::OnceCell;

use super::detector::TechMatcher;
use crate::error::RtsResult;
use crate::taxonomy::DetectionResult;

/// 全局匹配器实例
static GLOBAL_MATCHER: OnceCell<TechMatcher> = OnceCell::new();

/// 获取全局匹配器（首次访问时编译内置分类表，之后复用）
pub fn get_global_matcher() -> RtsResult<&'static TechMatcher> {
    GLOBAL_MATCHER.get_or_try_init(TechMatcher::new)
}

/// 对外暴露的简化接口：直接对文本执行检测
pub fn detect_technologies(content: &str) -> RtsResult<DetectionResult> {
    Ok(get_global_matcher()?.detect(content))
}
