//! 编译模块：将内置分类表编译为可执行的整词匹配正则
pub mod compiler;
pub mod pattern;

pub use self::compiler::TaxonomyCompiler;
pub use self::pattern::{CompiledCategory, CompiledPattern, CompiledTaxonomy};
