// ============================================================================
// log2u - 日志配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 日志器配置结构定义和读写
// 边界:
//   - ✅ 配置结构定义（所有字段必填，无默认值）
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置文件读取
//   - ❌ 不应包含平台检测（由 Logger 在构造和修改时处理）
//   - ❌ 不应包含输出目标（输出目标不可序列化，由调用方传入）
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// 日志器配置
///
/// 所有字段都必须由调用方给出，刻意不实现 `Default`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerOptions {
    /// 是否彩色输出（构造时还会与平台检测结果相与）
    pub color: bool,
    /// 是否输出日期。只保存，不参与渲染
    pub date: bool,
    /// 是否附带调用位置（文件:行号）
    pub stack: bool,
    /// 是否使用带编号、时间戳、标签的富格式输出
    pub rich_output: bool,
    /// chrono strftime 格式，原样传给时间格式化
    pub time_format: String,
}

impl LoggerOptions {
    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 加载配置文件
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&content)?;
        tracing::trace!(path = %path.display(), ?options, "loaded logger options");
        Ok(options)
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
