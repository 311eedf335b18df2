//! 命令行参数定义与扫描目标解析

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{RstechscanError, RtsResult};
use crate::scanner::ScanTarget;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(
    name = "rstechscan",
    version,
    about = "Detect technologies/frameworks used by websites."
)]
pub struct Args {
    /// Single URL to scan.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// File containing list of URLs to scan.
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Scan headers, cookies, and HTML content for technologies.
    #[arg(long)]
    pub all: bool,

    /// Enable verbose logging.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// 是否提供了任一目标来源
    pub fn has_target_source(&self) -> bool {
        self.url.is_some() || self.file.is_some()
    }

    /// 解析全部扫描目标
    /// --url目标在前，其后为文件行序；行首尾空白裁剪，空行跳过；
    /// 列表文件缺失为致命配置错误，不进入任何扫描
    pub fn resolve_targets(&self) -> RtsResult<Vec<ScanTarget>> {
        let mut targets = Vec::new();

        if let Some(url) = &self.url {
            targets.push(ScanTarget::new(url.clone(), self.all));
        }

        if let Some(path) = &self.file {
            if !path.exists() {
                return Err(RstechscanError::FileNotFound(path.display().to_string()));
            }
            let content = fs::read_to_string(path)?;
            targets.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(|line| ScanTarget::new(line, self.all)),
            );
        }

        Ok(targets)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_resolve_targets_skips_blank_lines() {
        // 测试场景：3条非空行+2条空行，恰好解析出3个目标且保持行序
        let path = write_temp_file(
            "rstechscan_cli_blank_lines.txt",
            "https://a.example\n\n  https://b.example  \n\nhttps://c.example\n",
        );
        let args = Args::parse_from(["rstechscan", "--file", path.to_str().unwrap()]);
        let targets = args.resolve_targets().unwrap();
        assert_eq!(
            targets
                .iter()
                .map(|t| t.url.as_str())
                .collect::<Vec<_>>(),
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_resolve_targets_url_before_file() {
        // 测试场景：--url目标排在文件目标之前
        let path = write_temp_file(
            "rstechscan_cli_url_first.txt",
            "https://from-file.example\n",
        );
        let args = Args::parse_from([
            "rstechscan",
            "--url",
            "https://direct.example",
            "--file",
            path.to_str().unwrap(),
            "--all",
        ]);
        let targets = args.resolve_targets().unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].url, "https://direct.example");
        assert_eq!(targets[1].url, "https://from-file.example");
        assert!(targets.iter().all(|t| t.include_all));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_resolve_targets_missing_file() {
        // 测试场景：列表文件缺失返回FileNotFound，错误信息包含路径
        let args = Args::parse_from(["rstechscan", "--file", "/no/such/urls.txt"]);
        let err = args.resolve_targets().unwrap_err();
        match err {
            RstechscanError::FileNotFound(path) => assert_eq!(path, "/no/such/urls.txt"),
            other => panic!("错误类型不符：{:?}", other),
        }
    }

    #[test]
    fn test_has_target_source() {
        // 测试场景：--url与--file均缺省时无目标来源
        let args = Args::parse_from(["rstechscan"]);
        assert!(!args.has_target_source());

        let args = Args::parse_from(["rstechscan", "-u", "https://example.com"]);
        assert!(args.has_target_source());
    }
}
