// ============================================================================
// log2u - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 日志器和平台检测模块入口
// 边界:
//   - ✅ 核心子模块导出
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod logger;
pub mod platform;

pub use logger::Logger;
