//! allude_console: RISC-V 指令解码与交互式仿真控制台
//!
//! # 模块结构
//!
//! - `isa`: 指令目录、解码器与反汇编
//! - `hart`: 执行引擎接口
//! - `interact`: 交互命令会话与命令回放
//! - `config`: 会话配置

pub mod config;
pub mod hart;
pub mod interact;
pub mod isa;

pub use config::{ConfigError, FailurePolicy, SessionConfig};
pub use hart::{Hart, HartError};
pub use interact::{CommandError, Session};
pub use isa::{Catalog, DecodedInst, Decoder, InstId};
