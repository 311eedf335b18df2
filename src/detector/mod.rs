//! 检测模块：整词指纹匹配核心与全局单例
pub mod detector;
pub mod global;

pub use self::detector::TechMatcher;
pub use self::global::{detect_technologies, get_global_matcher};
