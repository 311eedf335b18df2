//! rstechscan 命令行入口
//! 目标严格按输入顺序逐个处理，单目标抓取失败不影响后续目标与退出码

use std::process;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use rstechscan::cli::Args;
use rstechscan::config::ConfigManager;
use rstechscan::reporter::Reporter;
use rstechscan::scanner::Scanner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ConfigManager::custom().verbose(args.verbose).build();

    // 日志初始化：环境变量优先，缺省时由--verbose决定级别
    let default_filter = if config.verbose {
        "rstechscan=debug"
    } else {
        "rstechscan=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // 1. 未提供任何目标来源：打印帮助并以非零码退出
    if !args.has_target_source() {
        Args::command().print_help()?;
        println!();
        process::exit(1);
    }

    // 2. 解析目标；配置错误（如列表文件缺失）为致命错误，不进入扫描
    let targets = match args.resolve_targets() {
        Ok(targets) => targets,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let scanner = Scanner::new(&config)?;

    // 3. 顺序处理全部目标；抓取失败由Reporter上报后继续
    for target in &targets {
        Reporter::announce(&target.url);
        let outcome = scanner.scan(target).await;
        Reporter::report(&target.url, &outcome);
    }

    Ok(())
}
