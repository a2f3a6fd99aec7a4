// ============================================================================
// log2u - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 严重级别标签和默认值定义
// 边界:
//   - ✅ 默认时间格式
//   - ✅ 严重级别标签常量
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含格式化逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "log2u";

/// 严重级别标签
pub mod tags {
    pub const INFO: &str = "INF";
    pub const SUCCESS: &str = "SUC";
    pub const WARNING: &str = "WAR";
    pub const ERROR: &str = "ERR";
    pub const CRITICAL: &str = "CRT";
    pub const DEBUG: &str = "DBG";
    pub const CUSTOM: &str = "CUS";
}

/// 示例程序使用的默认时间格式
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
