// ============================================================================
// log2u - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 配置和消息数据模型导出
//
// ============================================================================

pub mod config;
pub mod message;

pub use config::LoggerOptions;
pub use message::{CallSite, Message, Severity, StackPolicy};
