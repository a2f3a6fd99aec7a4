// ============================================================================
// log2u - 日志器
// ============================================================================
//
// 文件: src/core/logger.rs
// 职责: 日志器状态管理和消息输出
// 边界:
//   - ✅ 配置持有和修改
//   - ✅ 消息编号计数
//   - ✅ 调用位置捕获
//   - ✅ 渲染结果写入输出目标
//   - ❌ 不应包含渲染模板（见 models/message.rs）
//   - ❌ 不应负责输出目标的打开和关闭
//   - ❌ 不提供线程同步，跨线程使用需由调用方加锁
//
// ============================================================================

use std::fmt;
use std::io::Write;

use super::platform;
use crate::models::config::LoggerOptions;
use crate::models::message::{CallSite, Message, Severity};

/// 控制台日志器
///
/// 每次输出都会渲染一条消息写入 `out`，然后编号加一。编号从 1 开始，
/// 不论级别严格递增。写入失败被丢弃，不会返回给调用方。
///
/// ```
/// use log2u::Logger;
///
/// let mut log = Logger::new(false, true, false, true, Vec::new(), "STAMP");
/// log.info("hello");
/// log.warningf(format_args!("{} left", 3));
/// let text = String::from_utf8(log.into_inner()).unwrap();
/// assert_eq!(text, "> #1 STAMP ⇒  INF > hello\n> #2 STAMP ⇒  WAR > 3 left\n");
/// ```
#[derive(Debug)]
pub struct Logger<W: Write> {
    options: LoggerOptions,
    out: W,
    id: u64,
}

impl<W: Write> Logger<W> {
    /// 创建日志器，所有参数必填
    pub fn new(
        color: bool,
        date: bool,
        stack: bool,
        rich_output: bool,
        out: W,
        time_format: impl Into<String>,
    ) -> Self {
        Self::with_options(
            LoggerOptions {
                color,
                date,
                stack,
                rich_output,
                time_format: time_format.into(),
            },
            out,
        )
    }

    /// 从配置创建日志器，颜色开关与平台检测结果相与
    pub fn with_options(mut options: LoggerOptions, out: W) -> Self {
        options.color = options.color && platform::supports_ansi();
        Self {
            options,
            out,
            id: 1,
        }
    }

    // ========================================================================
    // 配置读取
    // ========================================================================

    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    pub fn color_enabled(&self) -> bool {
        self.options.color
    }

    pub fn date_enabled(&self) -> bool {
        self.options.date
    }

    pub fn stack_enabled(&self) -> bool {
        self.options.stack
    }

    pub fn rich_output_enabled(&self) -> bool {
        self.options.rich_output
    }

    pub fn time_format(&self) -> &str {
        &self.options.time_format
    }

    /// 下一条消息将使用的编号
    pub fn next_id(&self) -> u64 {
        self.id
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// 取回输出目标
    pub fn into_inner(self) -> W {
        self.out
    }

    // ========================================================================
    // 配置修改，只影响之后的输出
    // ========================================================================

    /// 设置颜色开关，每次都重新做平台检测
    pub fn set_color(&mut self, enabled: bool) {
        self.options.color = enabled && platform::supports_ansi();
        tracing::trace!(requested = enabled, color = self.options.color, "color toggled");
    }

    /// 设置日期开关。该值只保存，渲染时总是输出时间戳
    pub fn set_date(&mut self, enabled: bool) {
        self.options.date = enabled;
    }

    pub fn set_stack(&mut self, enabled: bool) {
        self.options.stack = enabled;
    }

    pub fn set_rich_output(&mut self, enabled: bool) {
        self.options.rich_output = enabled;
    }

    pub fn set_time_format(&mut self, time_format: impl Into<String>) {
        self.options.time_format = time_format.into();
    }

    /// 替换输出目标，返回原来的目标
    pub fn set_output(&mut self, out: W) -> W {
        std::mem::replace(&mut self.out, out)
    }

    // ========================================================================
    // 输出
    // ========================================================================

    /// 同 [`Logger::info`]
    #[track_caller]
    pub fn print(&mut self, text: &str) {
        self.emit(Severity::Info, text);
    }

    #[track_caller]
    pub fn printf(&mut self, args: fmt::Arguments<'_>) {
        self.print(&args.to_string());
    }

    /// 信息（白色）
    #[track_caller]
    pub fn info(&mut self, text: &str) {
        self.emit(Severity::Info, text);
    }

    #[track_caller]
    pub fn infof(&mut self, args: fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    /// 成功（绿色）
    #[track_caller]
    pub fn success(&mut self, text: &str) {
        self.emit(Severity::Success, text);
    }

    #[track_caller]
    pub fn successf(&mut self, args: fmt::Arguments<'_>) {
        self.success(&args.to_string());
    }

    /// 警告（黄色）
    #[track_caller]
    pub fn warning(&mut self, text: &str) {
        self.emit(Severity::Warning, text);
    }

    #[track_caller]
    pub fn warningf(&mut self, args: fmt::Arguments<'_>) {
        self.warning(&args.to_string());
    }

    /// 错误（红色）
    #[track_caller]
    pub fn error(&mut self, text: &str) {
        self.emit(Severity::Error, text);
    }

    #[track_caller]
    pub fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }

    /// 严重（粉色）
    #[track_caller]
    pub fn critical(&mut self, text: &str) {
        self.emit(Severity::Critical, text);
    }

    #[track_caller]
    pub fn criticalf(&mut self, args: fmt::Arguments<'_>) {
        self.critical(&args.to_string());
    }

    /// 调试（蓝色），不论 `stack` 配置总是附带调用位置
    #[track_caller]
    pub fn debug(&mut self, text: &str) {
        self.emit(Severity::Debug, text);
    }

    #[track_caller]
    pub fn debugf(&mut self, args: fmt::Arguments<'_>) {
        self.debug(&args.to_string());
    }

    /// 使用任意颜色或样式代码输出，代码不做校验，从不捕获调用位置
    ///
    /// 接受 [`Color`](crate::Color)、[`TextStyle`](crate::TextStyle) 或原始整数。
    #[track_caller]
    pub fn custom_ansi_print(&mut self, text: &str, code: impl Into<i32>) {
        self.emit(Severity::Custom(code.into()), text);
    }

    #[track_caller]
    pub fn custom_ansi_printf(&mut self, args: fmt::Arguments<'_>, code: impl Into<i32>) {
        self.custom_ansi_print(&args.to_string(), code);
    }

    /// 以错误级别输出后以状态码 1 终止进程
    #[track_caller]
    pub fn fatal(&mut self, text: &str) -> ! {
        self.error(text);
        std::process::exit(1)
    }

    #[track_caller]
    pub fn fatalf(&mut self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(&args.to_string())
    }

    #[track_caller]
    fn emit(&mut self, severity: Severity, text: &str) {
        let call_site = if severity.captures_call_site(self.options.stack) {
            Some(CallSite::caller())
        } else {
            None
        };
        let message = Message::new(text, severity, self.id, call_site);
        let rendered = message.render(&self.options);

        if let Err(err) = self
            .out
            .write_all(rendered.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::debug!(id = self.id, error = %err, "dropped log output");
        }
        self.id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn logger(color: bool, stack: bool, rich_output: bool) -> Logger<Vec<u8>> {
        Logger::new(color, true, stack, rich_output, Vec::new(), "STAMP")
    }

    fn output(logger: &Logger<Vec<u8>>) -> String {
        String::from_utf8_lossy(logger.get_ref()).into_owned()
    }

    /// 总是写入失败的输出目标
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn counter_starts_at_one_and_counts_every_severity() {
        let mut log = logger(false, false, true);
        assert_eq!(log.next_id(), 1);
        log.info("a");
        log.success("b");
        log.warning("c");
        log.error("d");
        log.critical("e");
        log.debug("f");
        log.custom_ansi_print("g", 1);
        log.print("h");
        assert_eq!(log.next_id(), 9);

        let ids: Vec<String> = output(&log)
            .lines()
            .map(|line| line.split_whitespace().nth(1).unwrap_or("").to_string())
            .collect();
        let expected: Vec<String> = (1..=8).map(|id| format!("#{}", id)).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn counter_advances_in_plain_mode_too() {
        let mut log = logger(false, false, false);
        log.info("a");
        log.debug("b");
        assert_eq!(output(&log), "a\nb\n");
        assert_eq!(log.next_id(), 3);
    }

    #[test]
    fn write_failures_are_swallowed() {
        let mut log = Logger::new(false, false, false, true, Broken, "STAMP");
        log.error("lost");
        log.error("lost again");
        assert_eq!(log.next_id(), 3);
    }

    #[test]
    fn color_follows_platform_check() {
        let mut log = logger(true, false, true);
        assert_eq!(log.color_enabled(), platform::supports_ansi());
        log.set_color(false);
        assert!(!log.color_enabled());
        log.set_color(true);
        assert_eq!(log.color_enabled(), platform::supports_ansi());
    }

    #[test]
    fn date_flag_is_stored_but_does_not_change_output() {
        let mut with_date = logger(false, false, true);
        let mut without_date = logger(false, false, true);
        without_date.set_date(false);
        assert!(with_date.date_enabled());
        assert!(!without_date.date_enabled());

        with_date.info("same");
        without_date.info("same");
        assert_eq!(output(&with_date), output(&without_date));
    }

    #[test]
    fn setters_apply_to_later_messages_only() {
        let mut log = logger(false, false, true);
        log.info("first");
        log.set_time_format("LATER");
        log.set_rich_output(false);
        log.info("second");
        assert_eq!(output(&log), "> #1 STAMP ⇒  INF > first\nsecond\n");
        assert_eq!(log.time_format(), "LATER");
        assert!(!log.rich_output_enabled());
    }

    #[test]
    fn stack_capture_reports_the_calling_line() {
        let mut log = logger(false, true, true);
        let line = line!() + 1;
        log.warning("here");
        let expected = format!("ON {}:{} ⇒  WAR > here", file!(), line);
        assert!(output(&log).contains(&expected), "{}", output(&log));
    }

    #[test]
    fn formatted_variant_reports_the_calling_line() {
        let mut log = logger(false, false, true);
        let line = line!() + 1;
        log.debugf(format_args!("n={}", 5));
        let expected = format!("ON {}:{} ⇒  DBG > n=5", file!(), line);
        assert!(output(&log).contains(&expected), "{}", output(&log));
        assert!(!log.stack_enabled());
    }

    #[test]
    fn set_output_swaps_sinks() {
        let mut log = logger(false, false, true);
        log.info("one");
        let previous = log.set_output(Vec::new());
        log.info("two");
        assert_eq!(String::from_utf8(previous).unwrap(), "> #1 STAMP ⇒  INF > one\n");
        assert_eq!(output(&log), "> #2 STAMP ⇒  INF > two\n");
    }

    #[test]
    fn with_options_keeps_every_field() {
        let options = LoggerOptions {
            color: false,
            date: false,
            stack: true,
            rich_output: false,
            time_format: "%H".to_string(),
        };
        let log = Logger::with_options(options.clone(), Vec::new());
        assert_eq!(log.options(), &options);
    }
}
