// ============================================================================
// log2u - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: 演示程序的命令行接口
// 边界:
//   - ✅ CLI 结构定义和参数解析
//   - ✅ 配置文件与命令行参数合并
//   - ✅ 演示各级别输出
//   - ❌ 不应包含渲染逻辑
//   - ❌ 不应包含颜色表定义
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::Logger;
use crate::models::config::LoggerOptions;
use crate::utils::constants::{APP_NAME, DEFAULT_TIME_FORMAT};
use crate::utils::{Color, TextStyle};

/// log2u - Leveled console logging demo
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(about = "Prints every severity through a configured console logger")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Load logger options from a TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Mark the date flag as disabled
    #[arg(long)]
    pub no_date: bool,

    /// Annotate every message with file and line
    #[arg(short, long)]
    pub stack: bool,

    /// Print raw text without id, timestamp or tag
    #[arg(long)]
    pub plain: bool,

    /// strftime pattern for timestamps
    #[arg(short, long)]
    pub time_format: Option<String>,

    /// Color name, style name or raw code for the custom line
    #[arg(long, default_value = "bright-cyan")]
    pub custom: String,

    /// Finish with a fatal message (exits with status 1)
    #[arg(long)]
    pub fatal: bool,
}

/// 命令行覆盖项
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub color: Option<bool>,
    pub date: Option<bool>,
    pub stack: Option<bool>,
    pub rich_output: Option<bool>,
    pub time_format: Option<String>,
}

impl RuntimeArgs {
    /// 把覆盖项合并进配置
    pub fn merge_into(self, options: &mut LoggerOptions) {
        if let Some(color) = self.color {
            options.color = color;
        }
        if let Some(date) = self.date {
            options.date = date;
        }
        if let Some(stack) = self.stack {
            options.stack = stack;
        }
        if let Some(rich_output) = self.rich_output {
            options.rich_output = rich_output;
        }
        if let Some(time_format) = self.time_format {
            options.time_format = time_format;
        }
    }
}

/// 解析自定义代码：颜色名、样式名或整数
pub fn parse_code(value: &str) -> Result<i32> {
    if let Ok(code) = value.parse::<i32>() {
        return Ok(code);
    }
    if let Ok(color) = value.parse::<Color>() {
        return Ok(color.code());
    }
    let style = value
        .parse::<TextStyle>()
        .with_context(|| format!("`{}` is neither a color, a style nor an integer", value))?;
    Ok(style.code())
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let options = build_options(&cli)?;
    let code = parse_code(&cli.custom)?;
    tracing::debug!(?options, code, "starting demo");

    let mut log = Logger::with_options(options, io::stdout());
    demo(&mut log, code);

    if cli.fatal {
        log.fatal("This is a fatal message");
    }
    Ok(())
}

/// 配置文件为基础，命令行参数覆盖
fn build_options(cli: &Cli) -> Result<LoggerOptions> {
    let mut options = match &cli.config {
        Some(path) => LoggerOptions::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => LoggerOptions {
            color: atty::is(atty::Stream::Stdout),
            date: true,
            stack: false,
            rich_output: true,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        },
    };
    build_runtime_args(cli).merge_into(&mut options);
    Ok(options)
}

fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        color: if cli.no_color { Some(false) } else { None },
        date: if cli.no_date { Some(false) } else { None },
        stack: if cli.stack { Some(true) } else { None },
        rich_output: if cli.plain { Some(false) } else { None },
        time_format: cli.time_format.clone(),
    }
}

/// 依次输出各级别，先普通后带调用位置
pub fn demo<W: Write>(log: &mut Logger<W>, code: i32) {
    let stack = log.stack_enabled();
    for with_stack in [false, true] {
        log.set_stack(with_stack);
        let suffix = if with_stack { " with stack" } else { "" };

        log.info(&format!("This is an info message{}", suffix));
        log.success(&format!("This is a success message{}", suffix));
        log.warning(&format!("This is a warning message{}", suffix));
        log.error(&format!("This is an error message{}", suffix));
        log.critical(&format!("This is a critical message{}", suffix));
        log.debug(&format!("This is a debug message{}", suffix));

        log.infof(format_args!("This is an info message {}{}", "with a string", suffix));
        log.successf(format_args!("This is a success message {}{}", "with a string", suffix));
        log.warningf(format_args!("This is a warning message {}{}", "with a string", suffix));
        log.errorf(format_args!("This is an error message {}{}", "with a string", suffix));
        log.criticalf(format_args!("This is a critical message {}{}", "with a string", suffix));
        log.debugf(format_args!("This is a debug message {}{}", "with a string", suffix));
    }
    log.set_stack(stack);
    log.custom_ansi_printf(format_args!("This is a custom message with code {}", code), code);
}
