//! 会话配置
//!
//! 可以直接用构建器方法设置，也可以从 TOML 文件读取：
//!
//! ```
//! use allude_console::config::{FailurePolicy, SessionConfig};
//!
//! let config = SessionConfig::from_toml_str(
//!     r#"
//!     reset_memory_mapped_regs = true
//!     on_replay_error = "continue"
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.reset_memory_mapped_regs);
//! assert_eq!(config.on_error, FailurePolicy::Continue);
//! assert_eq!(config.on_replay_error, FailurePolicy::Continue);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// 配置读取错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// 命令失败后的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// 报告错误，继续处理后续命令
    #[default]
    Continue,
    /// 报告错误，停止当前输入流
    Stop,
}

/// 交互会话配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// `reset` 命令是否同时复位内存映射寄存器
    pub reset_memory_mapped_regs: bool,
    /// 交互输入中命令失败时的处理方式
    pub on_error: FailurePolicy,
    /// 回放文件中命令失败时的处理方式
    pub on_replay_error: FailurePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reset_memory_mapped_regs: false,
            on_error: FailurePolicy::Continue,
            on_replay_error: FailurePolicy::Stop,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// 设置 `reset` 是否复位内存映射寄存器
    pub fn with_reset_memory_mapped_regs(mut self, flag: bool) -> Self {
        self.reset_memory_mapped_regs = flag;
        self
    }

    pub fn with_on_error(mut self, policy: FailurePolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn with_on_replay_error(mut self, policy: FailurePolicy) -> Self {
        self.on_replay_error = policy;
        self
    }
}
