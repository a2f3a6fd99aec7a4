// ============================================================================
// log2u - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 控制台分级日志格式化库的模块声明和公共导出
// 边界:
//   - ✅ 模块声明
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体实现
//
// ============================================================================

//! 控制台分级日志：编号、时间戳、调用位置和 ANSI 颜色。

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::core::Logger;
pub use error::{Error, Result};
pub use models::{CallSite, LoggerOptions, Message, Severity, StackPolicy};
pub use utils::{Color, TextStyle};
