//! 非回放命令的处理函数

use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::hart::{ExceptionKind, Hart, Location, RunStatus, StepOutcome};
use crate::isa::inst_size;

use super::error::CommandError;
use super::help;
use super::parse::{Resource, parse_number, parse_value};
use super::symbols::SymbolTable;
use super::{Session, Sinks, write_trace};

pub(super) fn usage_error(command: &'static str) -> CommandError {
    CommandError::Usage {
        command,
        usage: help::usage(command),
    }
}

impl<H: Hart> Session<H> {
    // ========== 执行 ==========

    pub(super) fn cmd_step(
        &mut self,
        args: &[&str],
        sinks: &mut Sinks<'_, '_>,
    ) -> Result<(), CommandError> {
        let count = match args {
            [] => 1,
            [n] => parse_number(n)?,
            _ => return Err(usage_error("step")),
        };
        let hart = self.current()?;

        for _ in 0..count {
            match self.harts[hart].step_one()? {
                StepOutcome::Retired(retired) => write_trace(
                    &self.decoder,
                    &mut self.retired[hart],
                    hart,
                    &retired,
                    &mut sinks.trace,
                )?,
                StepOutcome::Halted => {
                    writeln!(self.out, "hart {} halted", hart)?;
                    break;
                }
            }
        }
        Ok(())
    }

    pub(super) fn cmd_until(
        &mut self,
        args: &[&str],
        sinks: &mut Sinks<'_, '_>,
    ) -> Result<(), CommandError> {
        let [target] = args else {
            return Err(usage_error("until"));
        };
        let hart = self.current()?;
        let addr = self.resolve_address(hart, target)?;

        let mut trace_err = None;
        let status = {
            let Self {
                harts,
                decoder,
                retired,
                ..
            } = &mut *self;
            let counter = &mut retired[hart];
            let trace = &mut sinks.trace;
            harts[hart].run_until(addr, &mut |r| {
                if trace_err.is_none() {
                    if let Err(e) = write_trace(decoder, counter, hart, r, trace) {
                        trace_err = Some(e);
                    }
                }
            })?
        };
        if let Some(e) = trace_err {
            return Err(e.into());
        }

        if status == RunStatus::Halted {
            writeln!(self.out, "hart {} halted", hart)?;
        }
        Ok(())
    }

    // ========== 寄存器与内存 ==========

    pub(super) fn cmd_peek(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let Some((kind, rest)) = args.split_first() else {
            return Err(usage_error("peek"));
        };
        let resource = Resource::parse(kind)?;
        let loc = match (resource.takes_location(), rest) {
            (false, []) => Location::Pc,
            (true, [loc]) => resource.location(Some(*loc))?,
            _ => return Err(usage_error("peek")),
        };
        let hart = self.current()?;

        let value = match loc {
            Location::Pc => self.harts[hart].pc(),
            loc => self.harts[hart].peek(loc)?,
        };
        writeln!(self.out, "0x{:08x}", value)?;
        Ok(())
    }

    /// 所有参数检查通过后才写入
    pub(super) fn cmd_poke(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let Some((kind, rest)) = args.split_first() else {
            return Err(usage_error("poke"));
        };
        let resource = Resource::parse(kind)?;
        let (loc, value) = match (resource.takes_location(), rest) {
            (false, [value]) => (Location::Pc, parse_value(value)?),
            (true, [loc, value]) => (resource.location(Some(*loc))?, parse_value(value)?),
            _ => return Err(usage_error("poke")),
        };
        let hart = self.current()?;

        self.harts[hart].poke(loc, value)?;
        Ok(())
    }

    pub(super) fn cmd_disas(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let (target, count) = match args {
            [target] => (*target, 1),
            [target, count] => (*target, parse_number(count)?),
            _ => return Err(usage_error("disas")),
        };
        let hart = self.current()?;
        let mut addr = self.resolve_address(hart, target)?;

        for _ in 0..count {
            let word = self.harts[hart].peek(Location::Memory(addr))? as u32;
            let size = inst_size(word);
            let di = self.decoder.decode(addr, word, size);
            if size == 2 {
                writeln!(self.out, "{:08x} {:04x}     {}", addr, word & 0xFFFF, di)?;
            } else {
                writeln!(self.out, "{:08x} {:08x} {}", addr, word, di)?;
            }
            addr = addr.wrapping_add(u64::from(size));
        }
        Ok(())
    }

    // ========== 程序加载 ==========

    pub(super) fn cmd_elf(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let [path] = args else {
            return Err(usage_error("elf"));
        };
        let hart = self.current()?;
        let path = Path::new(path);

        self.harts[hart].load_elf(path)?;

        // 符号读取失败不影响已经完成的加载
        match SymbolTable::from_file(path) {
            Ok(table) => {
                info!(hart, path = %path.display(), symbols = table.len(), "loaded ELF symbols");
                self.symbols[hart] = table;
            }
            Err(e) => {
                warn!(hart, path = %path.display(), error = %e, "failed to read ELF symbols");
            }
        }
        Ok(())
    }

    pub(super) fn cmd_hex(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let [path] = args else {
            return Err(usage_error("hex"));
        };
        let hart = self.current()?;
        self.harts[hart].load_hex(Path::new(path))?;
        Ok(())
    }

    // ========== 复位与异常 ==========

    pub(super) fn cmd_reset(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let pc = match args {
            [] => None,
            [pc] => Some(parse_number(pc)?),
            _ => return Err(usage_error("reset")),
        };
        let hart = self.current()?;

        // 先确认 hart 接受这个 pc，不接受时不复位
        if let Some(pc) = pc {
            self.harts[hart].poke(Location::Pc, pc)?;
        }
        self.harts[hart].reset(!self.config.reset_memory_mapped_regs);
        if let Some(pc) = pc {
            self.harts[hart].poke(Location::Pc, pc)?;
        }
        Ok(())
    }

    pub(super) fn cmd_exception(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let Some((kind, rest)) = args.split_first() else {
            return Err(usage_error("exception"));
        };
        let kind = match (*kind, rest) {
            ("inst", [addr]) => ExceptionKind::Inst {
                addr: parse_number(addr)?,
            },
            ("data", [addr]) => ExceptionKind::Data {
                addr: parse_number(addr)?,
            },
            ("store", [addr]) => ExceptionKind::Store {
                addr: parse_number(addr)?,
            },
            ("load", [addr, tag]) => ExceptionKind::Load {
                addr: parse_number(addr)?,
                tag: parse_number(tag)?,
            },
            ("nmi", [cause]) => ExceptionKind::Nmi {
                cause: parse_number(cause)?,
            },
            ("inst" | "data" | "store" | "load" | "nmi", _) => {
                return Err(usage_error("exception"));
            }
            (other, _) => return Err(CommandError::UnknownException(other.to_string())),
        };
        let hart = self.current()?;

        self.harts[hart].queue_exception(kind)?;
        Ok(())
    }

    pub(super) fn cmd_load_finished(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let [tag] = args else {
            return Err(usage_error("load_finished"));
        };
        let tag = parse_number(tag)?;
        let hart = self.current()?;

        self.harts[hart].resolve_non_blocking_load(tag)?;
        Ok(())
    }

    // ========== 会话 ==========

    pub(super) fn cmd_hart(&mut self, args: &[&str]) -> Result<(), CommandError> {
        match args {
            [] => {
                let hart = self.current()?;
                writeln!(self.out, "{}", hart)?;
            }
            [id] => {
                let id = parse_number(id)?;
                let count = self.harts.len();
                match usize::try_from(id) {
                    Ok(index) if index < count => self.current_hart = index,
                    _ => return Err(CommandError::HartOutOfRange { id, count }),
                }
            }
            _ => return Err(usage_error("hart")),
        }
        Ok(())
    }

    pub(super) fn cmd_help(&mut self, args: &[&str]) -> Result<(), CommandError> {
        match args {
            [] => {
                for cmd in help::COMMANDS {
                    writeln!(self.out, "  {}", cmd.usage)?;
                }
            }
            [topic] => {
                let cmd = help::find(topic)
                    .ok_or_else(|| CommandError::UnknownTopic(topic.to_string()))?;
                writeln!(self.out, "{}", cmd.usage)?;
                writeln!(self.out, "  {}", cmd.summary)?;
            }
            _ => return Err(usage_error("help")),
        }
        Ok(())
    }

    pub(super) fn cmd_quit(&mut self, args: &[&str]) -> Result<(), CommandError> {
        if !args.is_empty() {
            return Err(usage_error("quit"));
        }
        self.done = true;
        Ok(())
    }

    /// 数字地址或当前 hart 的 ELF 符号
    fn resolve_address(&self, hart: usize, token: &str) -> Result<u64, CommandError> {
        if let Ok(addr) = parse_number(token) {
            return Ok(addr);
        }
        self.symbols
            .get(hart)
            .and_then(|table| table.lookup(token))
            .ok_or_else(|| CommandError::UnresolvedSymbol(token.to_string()))
    }
}
