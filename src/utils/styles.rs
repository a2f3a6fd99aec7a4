// ============================================================================
// log2u - 文本样式表
// ============================================================================
//
// 文件: src/utils/styles.rs
// 职责: 终端文本样式代码定义
// 边界:
//   - ✅ 文本样式代码定义（粗体、斜体、下划线等）
//   - ✅ 样式名称解析
//   - ❌ 不应包含颜色相关功能
//   - ❌ 不应包含日志格式化逻辑
//
// ============================================================================

use std::fmt;
use std::str::FromStr;

use super::colors::normalize;
use crate::error::Error;

/// ANSI 文本样式
///
/// 与颜色共用同一个转义模板，但代码空间独立，不是颜色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TextStyle {
    /// 重置所有样式
    Reset = 0,
    /// 粗体
    Bold = 1,
    /// 暗淡
    Faint = 2,
    /// 斜体
    Italic = 3,
    /// 下划线
    Underline = 4,
    /// 反显
    ReverseVideo = 7,
    /// 隐藏
    Concealed = 8,
    /// 删除线
    CrossedOut = 9,
}

const NAMES: &[(TextStyle, &str)] = &[
    (TextStyle::Reset, "reset"),
    (TextStyle::Bold, "bold"),
    (TextStyle::Faint, "faint"),
    (TextStyle::Italic, "italic"),
    (TextStyle::Underline, "underline"),
    (TextStyle::ReverseVideo, "reverse-video"),
    (TextStyle::Concealed, "concealed"),
    (TextStyle::CrossedOut, "crossed-out"),
];

impl TextStyle {
    /// 所有样式
    pub fn all() -> impl Iterator<Item = TextStyle> {
        NAMES.iter().map(|&(style, _)| style)
    }

    /// 样式代码
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(style, _)| *style == self)
            .map_or("", |&(_, name)| name)
    }
}

impl From<TextStyle> for i32 {
    fn from(style: TextStyle) -> Self {
        style.code()
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TextStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        NAMES
            .iter()
            .find(|(_, name)| name.replace('-', "") == normalized)
            .map(|&(style, _)| style)
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}
