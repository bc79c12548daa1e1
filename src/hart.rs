//! 硬件线程（hart）接口
//!
//! 交互会话只通过 `Hart` trait 驱动执行引擎：单步、运行到地址、
//! 读写寄存器与内存、加载程序、复位、注入异常。指令执行和内存内容
//! 都由实现方负责。

use std::path::{Path, PathBuf};

use thiserror::Error;

/// 执行引擎报告的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HartError {
    /// 访问了未映射的地址
    #[error("address 0x{0:x} is not mapped")]
    Unmapped(u64),
    /// ELF / HEX 加载失败，原因按加载器报告的原样保留
    #[error("failed to load {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },
    /// 非阻塞 load 的 tag 未知或已经完成
    #[error("no pending non-blocking load with tag {0}")]
    UnknownLoadTag(u64),
    /// 该 hart 不存在这个寄存器或位置
    #[error("invalid location")]
    InvalidLocation,
    #[error("{0}")]
    Other(String),
}

/// peek / poke 的目标位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    IntReg(u32),
    FpReg(u32),
    Csr(u32),
    /// 按 4 字节读写的内存字
    Memory(u64),
    Pc,
}

/// 一条指令退休时携带的陷入信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapInfo {
    pub cause: u64,
    pub tval: u64,
}

/// 退休的指令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retired {
    pub pc: u64,
    pub inst: u32,
    pub trap: Option<TrapInfo>,
}

/// 单步结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Retired(Retired),
    /// hart 已停机，没有执行任何指令
    Halted,
}

/// 运行到地址的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    ReachedTarget,
    Halted,
}

/// 排队等待下一次退休时触发的异常
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    /// 取指错误
    Inst { addr: u64 },
    /// 数据访问错误（不区分读写）
    Data { addr: u64 },
    Store { addr: u64 },
    /// 非阻塞 load 错误，`tag` 对应 `load_finished` 的 tag
    Load { addr: u64, tag: u64 },
    /// 不可屏蔽中断
    Nmi { cause: u64 },
}

/// 执行引擎
pub trait Hart {
    fn pc(&self) -> u64;

    /// 执行一条指令
    fn step_one(&mut self) -> Result<StepOutcome, HartError>;

    /// 一直执行到 pc == `addr` 或停机，每退休一条指令回调一次
    fn run_until(
        &mut self,
        addr: u64,
        on_retire: &mut dyn FnMut(&Retired),
    ) -> Result<RunStatus, HartError>;

    fn peek(&self, loc: Location) -> Result<u64, HartError>;

    fn poke(&mut self, loc: Location, value: u64) -> Result<(), HartError>;

    fn load_elf(&mut self, path: &Path) -> Result<(), HartError>;

    fn load_hex(&mut self, path: &Path) -> Result<(), HartError>;

    /// 复位；`preserve_memory_mapped_regs` 为真时保留内存映射寄存器的内容
    fn reset(&mut self, preserve_memory_mapped_regs: bool);

    fn queue_exception(&mut self, kind: ExceptionKind) -> Result<(), HartError>;

    /// 非阻塞 load 完成
    fn resolve_non_blocking_load(&mut self, tag: u64) -> Result<(), HartError>;
}

/// 没有连接执行引擎时的 hart 类型，不可构造
///
/// 命令行的 `interact` 使用 `Session<NoHart>`，所有 hart 命令都报告
/// "no current hart"。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoHart {}

impl Hart for NoHart {
    fn pc(&self) -> u64 {
        match *self {}
    }

    fn step_one(&mut self) -> Result<StepOutcome, HartError> {
        match *self {}
    }

    fn run_until(
        &mut self,
        _addr: u64,
        _on_retire: &mut dyn FnMut(&Retired),
    ) -> Result<RunStatus, HartError> {
        match *self {}
    }

    fn peek(&self, _loc: Location) -> Result<u64, HartError> {
        match *self {}
    }

    fn poke(&mut self, _loc: Location, _value: u64) -> Result<(), HartError> {
        match *self {}
    }

    fn load_elf(&mut self, _path: &Path) -> Result<(), HartError> {
        match *self {}
    }

    fn load_hex(&mut self, _path: &Path) -> Result<(), HartError> {
        match *self {}
    }

    fn reset(&mut self, _preserve_memory_mapped_regs: bool) {
        match *self {}
    }

    fn queue_exception(&mut self, _kind: ExceptionKind) -> Result<(), HartError> {
        match *self {}
    }

    fn resolve_non_blocking_load(&mut self, _tag: u64) -> Result<(), HartError> {
        match *self {}
    }
}
