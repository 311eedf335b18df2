//! 分类表模块：内置分类→技术名称表与检测结果数据模型
pub mod builtin;
pub mod model;

// 导出核心接口
pub use self::builtin::CATEGORIES;
pub use self::model::{CategoryDetection, DetectionResult};
