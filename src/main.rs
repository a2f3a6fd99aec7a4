// ============================================================================
// log2u - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 初始化内部诊断日志并运行演示 CLI
//
// ============================================================================

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // 诊断信息写 stderr，避免与演示输出混在一起
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    log2u::cli::run_cli()
}
