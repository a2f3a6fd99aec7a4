// ============================================================================
// log2u - 日志消息数据模型
// ============================================================================
//
// 文件: src/models/message.rs
// 职责: 严重级别表、消息结构和渲染
// 边界:
//   - ✅ 严重级别 -> {标签, 颜色, 调用位置策略} 映射
//   - ✅ 消息结构定义
//   - ✅ 消息渲染为最终输出文本
//   - ❌ 不应包含输出写入
//   - ❌ 不应包含编号计数
//
// ============================================================================

use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::panic::Location;

use super::config::LoggerOptions;
use crate::utils::colors::{colorize, Color};
use crate::utils::constants::tags;

/// 调用位置策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackPolicy {
    /// 跟随日志器的 `stack` 配置
    Configured,
    /// 总是附带调用位置
    Always,
    /// 从不附带调用位置
    Never,
}

/// 严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    Critical,
    Debug,
    /// 自定义代码，任意整数原样写入转义序列
    Custom(i32),
}

impl Severity {
    /// 三字母标签
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Info => tags::INFO,
            Severity::Success => tags::SUCCESS,
            Severity::Warning => tags::WARNING,
            Severity::Error => tags::ERROR,
            Severity::Critical => tags::CRITICAL,
            Severity::Debug => tags::DEBUG,
            Severity::Custom(_) => tags::CUSTOM,
        }
    }

    /// 颜色代码
    pub fn color_code(self) -> i32 {
        match self {
            Severity::Info => Color::White.code(),
            Severity::Success => Color::Green.code(),
            Severity::Warning => Color::Yellow.code(),
            Severity::Error => Color::Red.code(),
            Severity::Critical => Color::Pink.code(),
            Severity::Debug => Color::Blue.code(),
            Severity::Custom(code) => code,
        }
    }

    pub fn stack_policy(self) -> StackPolicy {
        match self {
            Severity::Debug => StackPolicy::Always,
            Severity::Custom(_) => StackPolicy::Never,
            _ => StackPolicy::Configured,
        }
    }

    /// 在给定配置下是否捕获调用位置
    pub fn captures_call_site(self, stack_enabled: bool) -> bool {
        match self.stack_policy() {
            StackPolicy::Configured => stack_enabled,
            StackPolicy::Always => true,
            StackPolicy::Never => false,
        }
    }

    /// 是否使用带调用位置的模板。自定义级别不捕获，但仍跟随 `stack` 配置，
    /// 此时文件名和行号为空
    pub fn uses_stack_template(self, stack_enabled: bool) -> bool {
        self == Severity::Debug || stack_enabled
    }
}

/// 调用位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// 当前 `#[track_caller]` 链最外层的调用者
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// 日志消息，每次调用创建，渲染后即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<'a> {
    pub text: &'a str,
    pub severity: Severity,
    /// 调用时计数器的值
    pub id: u64,
    /// 未捕获时为 `None`，渲染为空的文件名和行号
    pub call_site: Option<CallSite>,
}

impl<'a> Message<'a> {
    pub fn new(text: &'a str, severity: Severity, id: u64, call_site: Option<CallSite>) -> Self {
        Self {
            text,
            severity,
            id,
            call_site,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.severity.tag()
    }

    pub fn color_code(&self) -> i32 {
        self.severity.color_code()
    }

    /// 按当前配置和当前时间渲染
    pub fn render(&self, options: &LoggerOptions) -> String {
        let stamp = format_timestamp(Local::now(), &options.time_format);
        self.render_at(&stamp, options)
    }

    /// 使用给定时间戳渲染
    pub fn render_at(&self, stamp: &str, options: &LoggerOptions) -> String {
        if !options.rich_output {
            return format!("{}\n", self.text);
        }

        let message = if self.severity.uses_stack_template(options.stack) {
            let (file, line) = match self.call_site {
                Some(site) => (site.file, site.line.to_string()),
                None => ("", String::new()),
            };
            format!(
                "> #{} {} ⇒  ON {}:{} ⇒  {} > {}\n",
                self.id,
                stamp,
                file,
                line,
                self.tag(),
                self.text
            )
        } else {
            format!(
                "> #{} {} ⇒  {} > {}\n",
                self.id,
                stamp,
                self.tag(),
                self.text
            )
        };

        if options.color {
            colorize(&message, self.color_code())
        } else {
            message
        }
    }
}

/// 按 strftime 格式化时间。格式无法渲染时退回格式字符串本身
pub fn format_timestamp(now: DateTime<Local>, pattern: &str) -> String {
    let mut stamp = String::new();
    if write!(stamp, "{}", now.format(pattern)).is_err() {
        tracing::trace!(pattern, "time format not renderable, using it verbatim");
        return pattern.to_string();
    }
    stamp
}
