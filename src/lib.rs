//! rstechscan - 网站技术栈检测工具
//! 对HTTP响应执行整词指纹匹配，报告命中的技术分类

// 导出全局错误类型
pub use self::error::{RstechscanError, RtsResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig};

// 导出分类表与数据模型
pub use self::taxonomy::{CATEGORIES, CategoryDetection, DetectionResult};

// 导出编译模块核心接口
pub use self::compiler::{CompiledCategory, CompiledPattern, CompiledTaxonomy, TaxonomyCompiler};

// 导出检测模块核心接口（含兼容简化接口）
pub use self::detector::{TechMatcher, detect_technologies, get_global_matcher};

// 导出抓取与编排模块核心接口
pub use self::fetcher::{FetchedPage, PageFetcher};
pub use self::scanner::{ScanTarget, Scanner};

// 导出报告模块核心接口
pub use self::reporter::{Reporter, Role, emphasize};

// 声明所有子模块
pub mod cli;
pub mod compiler;
pub mod config;
pub mod detector;
pub mod error;
pub mod fetcher;
pub mod reporter;
pub mod scanner;
pub mod taxonomy;
