// ============================================================================
// log2u - 平台检测
// ============================================================================
//
// 文件: src/core/platform.rs
// 职责: 判断当前平台是否可靠支持 ANSI 转义
// 边界:
//   - ✅ 纯函数，每次调用重新判断，不缓存
//   - ❌ 不应检测终端类型（是否为 TTY 由调用方决定）
//
// ============================================================================

/// 当前平台是否为 Windows
pub fn is_windows() -> bool {
    cfg!(windows)
}

/// 当前平台是否可以输出 ANSI 颜色
pub fn supports_ansi() -> bool {
    !is_windows()
}
