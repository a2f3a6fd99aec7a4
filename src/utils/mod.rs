// ============================================================================
// log2u - 工具模块
// ============================================================================
//
// 文件: src/utils/mod.rs
// 职责: 颜色表、样式表和常量导出
//
// ============================================================================

pub mod colors;
pub mod constants;
pub mod styles;

pub use colors::Color;
pub use styles::TextStyle;
