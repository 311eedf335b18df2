//! 扫描编排器：抓取→内容拼接→整词匹配

use crate::config::GlobalConfig;
use crate::detector::get_global_matcher;
use crate::error::RtsResult;
use crate::fetcher::PageFetcher;
use crate::taxonomy::DetectionResult;

/// 扫描目标：一个URL及其扫描模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub url: String,
    // true时头与Cookie一并参与扫描
    pub include_all: bool,
}

impl ScanTarget {
    pub fn new(url: impl Into<String>, include_all: bool) -> Self {
        Self {
            url: url.into(),
            include_all,
        }
    }
}

/// 扫描器
#[derive(Debug, Clone)]
pub struct Scanner {
    fetcher: PageFetcher,
}

impl Scanner {
    /// 创建扫描器
    pub fn new(config: &GlobalConfig) -> RtsResult<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
        })
    }

    /// 扫描单个目标
    /// 传输失败返回Err，由调用方上报后继续处理后续目标；
    /// 匹配本身不会失败，无命中返回空结果
    pub async fn scan(&self, target: &ScanTarget) -> RtsResult<DetectionResult> {
        // 1. 抓取页面
        let page = self.fetcher.fetch(&target.url).await?;

        // 2. 选择扫描内容：include_all时头/Cookie/正文拼为一个字符串
        let content = if target.include_all {
            page.combined_content()
        } else {
            page.body
        };

        // 3. 执行匹配
        let matcher = get_global_matcher()?;
        Ok(matcher.detect(&content))
    }
}
