//! 页面抓取器：单次HTTP GET，返回响应头、Cookie与正文

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::GlobalConfig;
use crate::error::RtsResult;

/// 抓取结果（头与Cookie保持响应中的顺序）
#[derive(Debug, Clone, Default)]
pub struct FetchedPage {
    pub headers: Vec<(String, String)>,
    pub cookies: Vec<(String, String)>,
    pub body: String,
}

impl FetchedPage {
    /// 拼接完整扫描内容：头部逐条渲染为"key: value"并以单个空格连接，
    /// 换行，Cookie同样处理，换行，最后是正文
    ///
    /// 已知限制：头/Cookie/正文拼为同一字符串，跨块边界可能产生伪命中
    pub fn combined_content(&self) -> String {
        let headers_content = Self::join_pairs(&self.headers);
        let cookies_content = Self::join_pairs(&self.cookies);
        format!("{}\n{}\n{}", headers_content, cookies_content, self.body)
    }

    fn join_pairs(pairs: &[(String, String)]) -> String {
        pairs
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 页面抓取器
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// 根据全局配置构建HTTP客户端（固定超时，跟随重定向）
    pub fn new(config: &GlobalConfig) -> RtsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()?;
        Ok(Self { client })
    }

    /// 执行单次GET
    /// 超时/DNS/TLS等传输失败返回Err；4xx/5xx不视为失败，正文照常返回
    pub async fn fetch(&self, url: &str) -> RtsResult<FetchedPage> {
        let parsed = url::Url::parse(url)?;
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            warn!("目标返回错误状态码{}，正文仍参与扫描", status);
        }

        // 头与Cookie需在正文消费response前收集
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.as_str().to_string(),
                    value.to_str().unwrap_or("").to_string(),
                )
            })
            .collect();
        let cookies: Vec<(String, String)> = response
            .cookies()
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect();
        let body = response.text().await?;

        debug!(
            "抓取完成：{}条头、{}条Cookie、正文{}字节",
            headers.len(),
            cookies.len(),
            body.len()
        );

        Ok(FetchedPage {
            headers,
            cookies,
            body,
        })
    }
}
