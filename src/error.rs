//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum RstechscanError {
    // 配置相关错误
    #[error("未提供扫描目标：需要 --url 或 --file 至少一项")]
    MissingTargetSource,
    #[error("File not found: {0}")]
    FileNotFound(String),

    // 指纹编译相关错误
    #[error("指纹正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type RtsResult<T> = Result<T, RstechscanError>;
