//! 控制台报告器：按目标渲染检测结果，区分分类与技术的强调样式

use colored::Colorize;

use crate::error::RtsResult;
use crate::taxonomy::DetectionResult;

/// 输出角色：决定强调样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Category,
    Technology,
}

/// 按角色强调文本（分类绿色、技术红色）
/// 匹配核心不感知任何终端样式，样式仅在此处施加
pub fn emphasize(text: &str, role: Role) -> String {
    match role {
        Role::Category => text.green().to_string(),
        Role::Technology => text.red().to_string(),
    }
}

/// 控制台报告器（无状态，纯展示）
pub struct Reporter;

impl Reporter {
    /// 抓取前公告目标
    pub fn announce(url: &str) {
        println!("Scanning {}...", url);
    }

    /// 上报单个目标的扫描结果
    /// 对每目标Result做模式匹配：命中→分类清单；无命中→固定提示；
    /// 抓取失败→错误行，不输出分类清单
    pub fn report(url: &str, outcome: &RtsResult<DetectionResult>) {
        match outcome {
            Ok(result) if !result.is_empty() => {
                println!("Technologies detected on {}:", url);
                for detection in result.iter() {
                    println!(
                        "  {}: {}",
                        emphasize(&detection.category, Role::Category),
                        Self::format_technologies(&detection.technologies)
                    );
                }
            }
            Ok(_) => println!("No technologies detected on {}.", url),
            Err(err) => println!("Error fetching {}: {}", url, err),
        }
    }

    /// 技术列表逐个强调后以逗号+空格连接
    fn format_technologies(technologies: &[String]) -> String {
        technologies
            .iter()
            .map(|tech| emphasize(tech, Role::Technology))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasize_plain_when_color_disabled() {
        // 测试场景：禁用着色时返回原文，角色不改变文本内容
        colored::control::set_override(false);
        assert_eq!(emphasize("CMSs", Role::Category), "CMSs");
        assert_eq!(emphasize("Nginx", Role::Technology), "Nginx");
        colored::control::unset_override();
    }

    #[test]
    fn test_format_technologies_comma_separated() {
        // 测试场景：多技术以逗号+空格连接，保持传入顺序
        colored::control::set_override(false);
        let line = Reporter::format_technologies(&[
            "Apache".to_string(),
            "Nginx".to_string(),
        ]);
        assert_eq!(line, "Apache, Nginx");
        colored::control::unset_override();
    }
}
