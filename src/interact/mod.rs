//! 交互会话
//!
//! 逐行读取命令并驱动 hart：单步、运行到地址、读写寄存器和内存、
//! 反汇编、加载程序、注入异常，以及从文件回放命令。
//!
//! 每条成功执行的命令（`replay`、`replay_file`、`help` 除外）原样写入
//! 命令日志；每条退休指令写一行 trace。两个输出都是可选的，按调用借用。
//!
//! # 示例
//!
//! ```
//! use std::sync::Arc;
//! use allude_console::hart::NoHart;
//! use allude_console::interact::Session;
//! use allude_console::isa::Catalog;
//!
//! let mut out = Vec::new();
//! let mut session: Session<NoHart> =
//!     Session::new(Vec::new(), Arc::new(Catalog::new()), Default::default())
//!         .with_output(Box::new(std::io::sink()));
//! let ok = session.interact("help\nquit\n".as_bytes(), None, Some(&mut out));
//! assert!(ok);
//! assert_eq!(out, b"quit\n");
//! ```

mod commands;
mod error;
mod help;
mod parse;
mod replay;
mod symbols;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{FailurePolicy, SessionConfig};
use crate::hart::{Hart, Retired};
use crate::isa::{Catalog, Decoder, inst_size};

pub use error::CommandError;
pub use help::{COMMANDS, CommandHelp};
pub use parse::{parse_number, parse_value};
pub use symbols::{SymbolError, SymbolTable};

use replay::ReplayBinding;

/// 按调用借用的 trace 和命令日志输出
pub(crate) struct Sinks<'t, 'l> {
    trace: Option<&'t mut dyn Write>,
    log: Option<&'l mut dyn Write>,
}

/// 交互会话
pub struct Session<H: Hart> {
    harts: Vec<H>,
    current_hart: usize,
    config: SessionConfig,
    decoder: Decoder,
    /// 每个 hart 的 ELF 符号
    symbols: Vec<SymbolTable>,
    /// 每个 hart 的退休指令计数，用于 trace 编号
    retired: Vec<u64>,
    out: Box<dyn Write>,
    replay: ReplayBinding,
    replaying: bool,
    failures: u64,
    done: bool,
}

impl<H: Hart> Session<H> {
    /// 创建会话，输出写到标准输出
    pub fn new(harts: Vec<H>, catalog: Arc<Catalog>, config: SessionConfig) -> Self {
        let count = harts.len();
        Self {
            harts,
            current_hart: 0,
            config,
            decoder: Decoder::new(catalog),
            symbols: vec![SymbolTable::new(); count],
            retired: vec![0; count],
            out: Box::new(io::stdout()),
            replay: ReplayBinding::Idle,
            replaying: false,
            failures: 0,
            done: false,
        }
    }

    /// 替换会话输出
    pub fn with_output(mut self, out: Box<dyn Write>) -> Self {
        self.out = out;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn harts(&self) -> &[H] {
        &self.harts
    }

    pub fn hart_mut(&mut self, id: usize) -> Option<&mut H> {
        self.harts.get_mut(id)
    }

    pub fn current_hart(&self) -> usize {
        self.current_hart
    }

    pub fn symbols(&self, hart: usize) -> Option<&SymbolTable> {
        self.symbols.get(hart)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_replay_bound(&self) -> bool {
        matches!(self.replay, ReplayBinding::Bound { .. })
    }

    /// 读取并执行命令，直到 `quit`、输入结束或按失败策略停止
    ///
    /// 返回本次调用中的所有命令是否都成功。
    pub fn interact<R: BufRead>(
        &mut self,
        mut input: R,
        trace: Option<&mut dyn Write>,
        log: Option<&mut dyn Write>,
    ) -> bool {
        let mut sinks = Sinks { trace, log };
        let failures_before = self.failures;
        self.done = false;

        let mut raw = Vec::new();
        let mut line_no = 0u64;
        loop {
            raw.clear();
            match input.read_until(b'\n', &mut raw) {
                Ok(0) => break,
                Ok(_) => line_no += 1,
                Err(e) => {
                    self.report(&CommandError::Io(e));
                    break;
                }
            }
            // 编码错误和其他命令失败一样按策略处理
            let result = match std::str::from_utf8(&raw) {
                Ok(line) => self.execute_line(line, &mut sinks),
                Err(_) => Err(CommandError::BadEncoding { line: line_no }),
            };
            if let Err(e) = result {
                self.report(&e);
                if self.config.on_error == FailurePolicy::Stop {
                    break;
                }
            }
            if self.done {
                break;
            }
        }

        let _ = self.out.flush();
        self.failures == failures_before
    }

    /// 执行一行命令
    ///
    /// 空行和 `#` 开头的行忽略。成功时按规则写命令日志。
    pub(crate) fn execute_line(
        &mut self,
        line: &str,
        sinks: &mut Sinks<'_, '_>,
    ) -> Result<(), CommandError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let (command, args) = (tokens[0], &tokens[1..]);
        debug!(command, line = trimmed, "execute");

        match command {
            "step" => self.cmd_step(args, sinks)?,
            "until" => self.cmd_until(args, sinks)?,
            "peek" => self.cmd_peek(args)?,
            "poke" => self.cmd_poke(args)?,
            "disas" => self.cmd_disas(args)?,
            "elf" => self.cmd_elf(args)?,
            "hex" => self.cmd_hex(args)?,
            "reset" => self.cmd_reset(args)?,
            "exception" => self.cmd_exception(args)?,
            "load_finished" => self.cmd_load_finished(args)?,
            "hart" => self.cmd_hart(args)?,
            "quit" => self.cmd_quit(args)?,
            "help" => return self.cmd_help(args),
            "replay_file" => return self.cmd_replay_file(args),
            "replay" => return self.cmd_replay(args, sinks),
            _ => return Err(CommandError::UnknownCommand(command.to_string())),
        }

        if let Some(log) = sinks.log.as_mut() {
            writeln!(log, "{}", trimmed)?;
        }
        Ok(())
    }

    /// 报告一个失败的命令
    fn report(&mut self, err: &CommandError) {
        self.failures += 1;
        warn!(error = %err, "command failed");
        let _ = writeln!(self.out, "error: {}", err);
    }

    /// 当前 hart 的下标；没有 hart 时报错
    fn current(&self) -> Result<usize, CommandError> {
        if self.current_hart < self.harts.len() {
            Ok(self.current_hart)
        } else {
            Err(CommandError::NoCurrentHart)
        }
    }
}

/// 写一行 trace：`#<n> <hart> <pc> <inst> <text>`
fn write_trace(
    decoder: &Decoder,
    counter: &mut u64,
    hart: usize,
    retired: &Retired,
    trace: &mut Option<&mut dyn Write>,
) -> io::Result<()> {
    *counter += 1;
    let Some(out) = trace.as_mut() else {
        return Ok(());
    };
    let di = decoder.decode(retired.pc, retired.inst, inst_size(retired.inst));
    write!(
        out,
        "#{} {} {:08x} {:08x} {}",
        counter, hart, retired.pc, retired.inst, di
    )?;
    if let Some(trap) = retired.trap {
        write!(out, " trap={:#x}", trap.cause)?;
    }
    writeln!(out)
}
