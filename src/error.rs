// ============================================================================
// log2u - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 库级错误定义
// 边界:
//   - ✅ 配置加载错误
//   - ✅ 颜色/样式名称解析错误
//   - ❌ 日志输出永不返回错误（写入失败被丢弃）
//
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// 读取配置文件失败
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置内容无法解析
    #[error("invalid logger options: {0}")]
    Config(#[from] toml::de::Error),

    /// 配置无法序列化
    #[error("failed to serialize logger options: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("unknown text style: {0}")]
    UnknownStyle(String),
}
