// ============================================================================
// log2u - 颜色表
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色代码定义和转义序列生成
// 边界:
//   - ✅ 基础前景色、反色、亮色代码定义
//   - ✅ 重置代码定义（前景和背景）
//   - ✅ 颜色名称解析
//   - ✅ ANSI 转义模板
//   - ❌ 不应包含文本样式（见 styles.rs）
//   - ❌ 不应包含日志格式化逻辑
//   - ❌ 不应包含平台检测
//
// ============================================================================

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 重置前景样式
pub const RESET: i32 = 0;

/// 重置背景样式（反色输出之后必须发送）
pub const RESET_BACK: i32 = 49;

/// 生成 `ESC [ <code> m` 转义序列，不做任何范围校验
pub fn ansi_code(code: i32) -> String {
    format!("\x1b[{}m", code)
}

/// 为文本添加颜色，结尾依次追加背景重置和前景重置
pub fn colorize(text: &str, code: i32) -> String {
    format!(
        "{}{}{}{}",
        ansi_code(code),
        text,
        ansi_code(RESET_BACK),
        ansi_code(RESET)
    )
}

/// 终端颜色
///
/// 基础色 30-37，反色（背景）40-47，亮色 90-97，亮反色 100-107。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Pink = 35,
    Cyan = 36,
    White = 37,

    ReverseBlack = 40,
    ReverseRed = 41,
    ReverseGreen = 42,
    ReverseYellow = 43,
    ReverseBlue = 44,
    ReversePink = 45,
    ReverseCyan = 46,
    ReverseWhite = 47,

    BrightBlack = 90,
    BrightRed = 91,
    BrightGreen = 92,
    BrightYellow = 93,
    BrightBlue = 94,
    BrightPink = 95,
    BrightCyan = 96,
    BrightWhite = 97,

    BrightReverseBlack = 100,
    BrightReverseRed = 101,
    BrightReverseGreen = 102,
    BrightReverseYellow = 103,
    BrightReverseBlue = 104,
    BrightReversePink = 105,
    BrightReverseCyan = 106,
    BrightReverseWhite = 107,
}

/// 名称表
const NAMES: &[(Color, &str)] = &[
    (Color::Black, "black"),
    (Color::Red, "red"),
    (Color::Green, "green"),
    (Color::Yellow, "yellow"),
    (Color::Blue, "blue"),
    (Color::Pink, "pink"),
    (Color::Cyan, "cyan"),
    (Color::White, "white"),
    (Color::ReverseBlack, "reverse-black"),
    (Color::ReverseRed, "reverse-red"),
    (Color::ReverseGreen, "reverse-green"),
    (Color::ReverseYellow, "reverse-yellow"),
    (Color::ReverseBlue, "reverse-blue"),
    (Color::ReversePink, "reverse-pink"),
    (Color::ReverseCyan, "reverse-cyan"),
    (Color::ReverseWhite, "reverse-white"),
    (Color::BrightBlack, "bright-black"),
    (Color::BrightRed, "bright-red"),
    (Color::BrightGreen, "bright-green"),
    (Color::BrightYellow, "bright-yellow"),
    (Color::BrightBlue, "bright-blue"),
    (Color::BrightPink, "bright-pink"),
    (Color::BrightCyan, "bright-cyan"),
    (Color::BrightWhite, "bright-white"),
    (Color::BrightReverseBlack, "bright-reverse-black"),
    (Color::BrightReverseRed, "bright-reverse-red"),
    (Color::BrightReverseGreen, "bright-reverse-green"),
    (Color::BrightReverseYellow, "bright-reverse-yellow"),
    (Color::BrightReverseBlue, "bright-reverse-blue"),
    (Color::BrightReversePink, "bright-reverse-pink"),
    (Color::BrightReverseCyan, "bright-reverse-cyan"),
    (Color::BrightReverseWhite, "bright-reverse-white"),
];

impl Color {
    /// 所有颜色
    pub fn all() -> impl Iterator<Item = Color> {
        NAMES.iter().map(|&(color, _)| color)
    }

    /// 终端颜色代码
    pub fn code(self) -> i32 {
        self as i32
    }

    /// 颜色名称（kebab-case）
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(color, _)| *color == self)
            .map_or("", |&(_, name)| name)
    }

    /// 对应的反色（前景/背景互换）版本，已是反色时原样返回
    pub fn reverse(self) -> Color {
        use Color::*;
        match self {
            Black => ReverseBlack,
            Red => ReverseRed,
            Green => ReverseGreen,
            Yellow => ReverseYellow,
            Blue => ReverseBlue,
            Pink => ReversePink,
            Cyan => ReverseCyan,
            White => ReverseWhite,
            BrightBlack => BrightReverseBlack,
            BrightRed => BrightReverseRed,
            BrightGreen => BrightReverseGreen,
            BrightYellow => BrightReverseYellow,
            BrightBlue => BrightReverseBlue,
            BrightPink => BrightReversePink,
            BrightCyan => BrightReverseCyan,
            BrightWhite => BrightReverseWhite,
            other => other,
        }
    }

    /// 对应的亮色版本，已是亮色时原样返回
    pub fn bright(self) -> Color {
        use Color::*;
        match self {
            Black => BrightBlack,
            Red => BrightRed,
            Green => BrightGreen,
            Yellow => BrightYellow,
            Blue => BrightBlue,
            Pink => BrightPink,
            Cyan => BrightCyan,
            White => BrightWhite,
            ReverseBlack => BrightReverseBlack,
            ReverseRed => BrightReverseRed,
            ReverseGreen => BrightReverseGreen,
            ReverseYellow => BrightReverseYellow,
            ReverseBlue => BrightReverseBlue,
            ReversePink => BrightReversePink,
            ReverseCyan => BrightReverseCyan,
            ReverseWhite => BrightReverseWhite,
            other => other,
        }
    }
}

impl From<Color> for i32 {
    fn from(color: Color) -> Self {
        color.code()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// 接受 `bright-cyan`、`bright_cyan`、`BrightCyan` 等写法，`magenta` 视为 `pink`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s).replace("magenta", "pink");
        NAMES
            .iter()
            .find(|(_, name)| name.replace('-', "") == normalized)
            .map(|&(color, _)| color)
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

/// 去掉分隔符并转小写
pub(crate) fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
