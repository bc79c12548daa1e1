//! 交互会话测试

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use crate::config::{FailurePolicy, SessionConfig};
use crate::hart::{
    ExceptionKind, Hart, HartError, Location, Retired, RunStatus, StepOutcome, TrapInfo,
};
use crate::isa::{Catalog, inst_size};

use super::Session;

// ========== 测试用 hart ==========

const PROGRAM_BASE: u64 = 0x1000;

/// addi ra, zero, 1 / add ra, ra, sp / ecall
const PROGRAM: [u32; 3] = [0x0010_0093, 0x0020_80B3, 0x0000_0073];

#[derive(Debug, Default)]
struct MockHart {
    pc: u64,
    x: [u64; 32],
    f: [u64; 32],
    csrs: HashMap<u32, u64>,
    memory: HashMap<u64, u32>,
    queued: Vec<ExceptionKind>,
    pending_loads: HashSet<u64>,
    resets: Vec<bool>,
    hex_loaded: Vec<PathBuf>,
}

impl MockHart {
    fn with_program() -> Self {
        let mut hart = Self {
            pc: PROGRAM_BASE,
            ..Self::default()
        };
        for (i, word) in PROGRAM.iter().enumerate() {
            hart.memory.insert(PROGRAM_BASE + 4 * i as u64, *word);
        }
        hart.csrs.insert(0x300, 0x1800);
        hart
    }

    fn trap_cause(kind: ExceptionKind) -> u64 {
        match kind {
            ExceptionKind::Inst { .. } => 1,
            ExceptionKind::Data { .. } | ExceptionKind::Load { .. } => 5,
            ExceptionKind::Store { .. } => 7,
            ExceptionKind::Nmi { cause } => cause,
        }
    }
}

impl Hart for MockHart {
    fn pc(&self) -> u64 {
        self.pc
    }

    /// pc 处没有指令时停机
    fn step_one(&mut self) -> Result<StepOutcome, HartError> {
        let Some(&inst) = self.memory.get(&self.pc) else {
            return Ok(StepOutcome::Halted);
        };
        let trap = if self.queued.is_empty() {
            None
        } else {
            let kind = self.queued.remove(0);
            Some(TrapInfo {
                cause: Self::trap_cause(kind),
                tval: 0,
            })
        };
        let retired = Retired {
            pc: self.pc,
            inst,
            trap,
        };
        self.pc += u64::from(inst_size(inst));
        Ok(StepOutcome::Retired(retired))
    }

    fn run_until(
        &mut self,
        addr: u64,
        on_retire: &mut dyn FnMut(&Retired),
    ) -> Result<RunStatus, HartError> {
        while self.pc != addr {
            match self.step_one()? {
                StepOutcome::Retired(r) => on_retire(&r),
                StepOutcome::Halted => return Ok(RunStatus::Halted),
            }
        }
        Ok(RunStatus::ReachedTarget)
    }

    fn peek(&self, loc: Location) -> Result<u64, HartError> {
        match loc {
            Location::IntReg(r) => self.x.get(r as usize).copied().ok_or(HartError::InvalidLocation),
            Location::FpReg(r) => self.f.get(r as usize).copied().ok_or(HartError::InvalidLocation),
            Location::Csr(c) => self.csrs.get(&c).copied().ok_or(HartError::InvalidLocation),
            Location::Memory(a) => self
                .memory
                .get(&a)
                .map(|w| u64::from(*w))
                .ok_or(HartError::Unmapped(a)),
            // peek pc 走 Hart::pc()
            Location::Pc => Err(HartError::InvalidLocation),
        }
    }

    fn poke(&mut self, loc: Location, value: u64) -> Result<(), HartError> {
        match loc {
            Location::IntReg(r) => *self.x.get_mut(r as usize).ok_or(HartError::InvalidLocation)? = value,
            Location::FpReg(r) => *self.f.get_mut(r as usize).ok_or(HartError::InvalidLocation)? = value,
            Location::Csr(c) => {
                self.csrs.insert(c, value);
            }
            Location::Memory(a) => {
                *self.memory.get_mut(&a).ok_or(HartError::Unmapped(a))? = value as u32;
            }
            Location::Pc if value & 1 != 0 => {
                return Err(HartError::Other(format!("misaligned pc 0x{:x}", value)));
            }
            Location::Pc => self.pc = value,
        }
        Ok(())
    }

    fn load_elf(&mut self, path: &Path) -> Result<(), HartError> {
        let data = std::fs::read(path).map_err(|e| HartError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !data.starts_with(b"\x7fELF") {
            return Err(HartError::Load {
                path: path.to_path_buf(),
                reason: "bad magic".to_string(),
            });
        }
        Ok(())
    }

    fn load_hex(&mut self, path: &Path) -> Result<(), HartError> {
        self.hex_loaded.push(path.to_path_buf());
        Ok(())
    }

    fn reset(&mut self, preserve_memory_mapped_regs: bool) {
        self.resets.push(preserve_memory_mapped_regs);
        self.pc = PROGRAM_BASE;
        self.x = [0; 32];
    }

    fn queue_exception(&mut self, kind: ExceptionKind) -> Result<(), HartError> {
        if let ExceptionKind::Load { tag, .. } = kind {
            self.pending_loads.insert(tag);
        }
        self.queued.push(kind);
        Ok(())
    }

    fn resolve_non_blocking_load(&mut self, tag: u64) -> Result<(), HartError> {
        if self.pending_loads.remove(&tag) {
            Ok(())
        } else {
            Err(HartError::UnknownLoadTag(tag))
        }
    }
}

// ========== 辅助 ==========

/// 可以在测试里读取的会话输出
#[derive(Clone, Default)]
struct SharedOut(Rc<RefCell<Vec<u8>>>);

impl SharedOut {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedOut {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Harness {
    session: Session<MockHart>,
    out: SharedOut,
}

/// 一次 `interact` 的结果
struct Run {
    ok: bool,
    trace: String,
    log: String,
}

impl Harness {
    fn new(harts: usize, config: SessionConfig) -> Self {
        let out = SharedOut::default();
        let harts = (0..harts).map(|_| MockHart::with_program()).collect();
        let session = Session::new(harts, Arc::new(Catalog::new()), config)
            .with_output(Box::new(out.clone()));
        Self { session, out }
    }

    fn one() -> Self {
        Self::new(1, SessionConfig::default())
    }

    fn run(&mut self, input: &str) -> Run {
        self.run_bytes(input.as_bytes())
    }

    fn run_bytes(&mut self, input: &[u8]) -> Run {
        let mut trace = Vec::new();
        let mut log = Vec::new();
        let ok = self
            .session
            .interact(input, Some(&mut trace), Some(&mut log));
        Run {
            ok,
            trace: String::from_utf8_lossy(&trace).into_owned(),
            log: String::from_utf8_lossy(&log).into_owned(),
        }
    }

    fn hart(&self) -> &MockHart {
        &self.session.harts()[0]
    }

    fn output(&self) -> String {
        self.out.text()
    }
}

fn script(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

// ========== 基本命令 ==========

#[test]
fn test_no_current_hart() {
    let mut h = Harness::new(0, SessionConfig::default());
    let run = h.run("step\npeek pc\nhart\n");
    assert!(!run.ok);
    assert_eq!(h.output().matches("error: no current hart").count(), 3);
    assert!(run.trace.is_empty());
    assert!(run.log.is_empty());
}

#[test]
fn test_unknown_command() {
    let mut h = Harness::one();
    let run = h.run("Step\n");
    assert!(!run.ok);
    assert!(h.output().contains("error: unknown command: Step"));
}

#[test]
fn test_invalid_utf8_line_follows_policy() {
    let input = b"poke r a0 1\n\xff\xfe garbage\npoke r a1 2\n";

    let mut h = Harness::one();
    let run = h.run_bytes(input);
    assert!(!run.ok);
    assert_eq!(h.hart().x[10..12], [1, 2]);
    assert!(h.output().contains("error: line 2 is not valid UTF-8"));
    assert_eq!(run.log, "poke r a0 1\npoke r a1 2\n");

    let mut h = Harness::new(1, SessionConfig::new().with_on_error(FailurePolicy::Stop));
    let run = h.run_bytes(input);
    assert!(!run.ok);
    assert_eq!(h.hart().x[10..12], [1, 0]);
    assert_eq!(h.output().matches("error:").count(), 1);
}

#[test]
fn test_blank_and_comment_lines_ignored() {
    let mut h = Harness::one();
    let run = h.run("\n   \n# peek pc\n");
    assert!(run.ok);
    assert!(h.output().is_empty());
    assert!(run.log.is_empty());
}

#[test]
fn test_step_traces_each_retired_instruction() {
    let mut h = Harness::one();
    let run = h.run("step 2\n");
    assert!(run.ok);
    assert_eq!(
        run.trace,
        "#1 0 00001000 00100093 addi ra, zero, 1\n\
         #2 0 00001004 002080b3 add ra, ra, sp\n"
    );

    // 编号跨调用累计
    let run = h.run("step\n");
    assert_eq!(run.trace, "#3 0 00001008 00000073 ecall\n");
}

#[test]
fn test_step_rejects_bad_count() {
    let mut h = Harness::one();
    let run = h.run("step two\n");
    assert!(!run.ok);
    assert!(h.output().contains("error: invalid number: two"));
    assert!(run.trace.is_empty());
    assert_eq!(h.hart().pc, PROGRAM_BASE);
}

#[test]
fn test_step_stops_when_halted() {
    let mut h = Harness::one();
    let run = h.run("step 10\n");
    assert!(run.ok);
    assert_eq!(run.trace.lines().count(), 3);
    assert!(h.output().contains("hart 0 halted"));
}

#[test]
fn test_step_reports_trap() {
    let mut h = Harness::one();
    let run = h.run("exception nmi 0x3\nstep\n");
    assert!(run.ok);
    assert_eq!(run.trace, "#1 0 00001000 00100093 addi ra, zero, 1 trap=0x3\n");
}

#[test]
fn test_until_address() {
    let mut h = Harness::one();
    let run = h.run("until 0x1008\n");
    assert!(run.ok);
    assert_eq!(run.trace.lines().count(), 2);
    assert_eq!(h.hart().pc, 0x1008);
}

#[test]
fn test_until_symbol() {
    let mut h = Harness::one();
    h.session.symbols[0].insert("done", 0x1008);
    let run = h.run("until done\n");
    assert!(run.ok);
    assert_eq!(h.hart().pc, 0x1008);

    let run = h.run("until nowhere\n");
    assert!(!run.ok);
    assert!(h.output().contains("error: cannot resolve address or symbol: nowhere"));
}

// ========== peek / poke ==========

#[test]
fn test_peek_formats() {
    let mut h = Harness::one();
    let run = h.run("poke r a0 0x1234\npeek r a0\npeek pc\npeek m 0x1000\npeek c mstatus\n");
    assert!(run.ok);
    assert_eq!(
        h.output(),
        "0x00001234\n0x00001000\n0x00100093\n0x00001800\n"
    );
}

#[test]
fn test_peek_unknown_register() {
    let mut h = Harness::one();
    assert!(!h.run("peek r x32\n").ok);
    assert!(!h.run("peek f bogus\n").ok);
    assert!(!h.run("peek q 1\n").ok);
    let out = h.output();
    assert!(out.contains("error: unknown integer register: x32"));
    assert!(out.contains("error: unknown fp register: bogus"));
    assert!(out.contains("error: unknown peek/poke resource: q"));
}

#[test]
fn test_peek_unmapped_memory() {
    let mut h = Harness::one();
    assert!(!h.run("peek m 0x2000\n").ok);
    assert!(h.output().contains("error: address 0x2000 is not mapped"));
}

#[test]
fn test_poke_all_or_nothing() {
    let mut h = Harness::one();
    let run = h.run("poke r a0 zz\npoke r nope 5\npoke pc\npoke r a0\n");
    assert!(!run.ok);
    assert_eq!(h.hart().x[10], 0);
    assert_eq!(h.hart().pc, PROGRAM_BASE);
    assert_eq!(h.output().matches("error:").count(), 4);
    assert!(run.log.is_empty());
}

#[test]
fn test_poke_values() {
    let mut h = Harness::one();
    let run = h.run("poke r a1 -1\npoke f fa0 7\npoke pc 0x1004\npoke m 0x1000 0x13\n");
    assert!(run.ok);
    let hart = h.hart();
    assert_eq!(hart.x[11], u64::MAX);
    assert_eq!(hart.f[10], 7);
    assert_eq!(hart.pc, 0x1004);
    assert_eq!(hart.memory[&0x1000], 0x13);
}

// ========== disas ==========

#[test]
fn test_disas_over_memory() {
    let mut h = Harness::one();
    let run = h.run("disas 0x1000 3\n");
    assert!(run.ok);
    assert_eq!(
        h.output(),
        "00001000 00100093 addi ra, zero, 1\n\
         00001004 002080b3 add ra, ra, sp\n\
         00001008 00000073 ecall\n"
    );
}

#[test]
fn test_disas_compressed_is_illegal() {
    let mut h = Harness::one();
    h.session.harts[0].memory.insert(0x3000, 0x0000_4501);
    let run = h.run("disas 0x3000\n");
    assert!(run.ok);
    assert_eq!(h.output(), "00003000 4501     illegal\n");
}

#[test]
fn test_disas_unmapped() {
    let mut h = Harness::one();
    let run = h.run("disas 0x1004 3\n");
    assert!(!run.ok);
    let out = h.output();
    assert!(out.contains("00001008 00000073 ecall"));
    assert!(out.contains("error: address 0x100c is not mapped"));
}

// ========== 加载 ==========

#[test]
fn test_elf_loader_error_is_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "prog.elf", "garbage");
    let mut h = Harness::one();
    let run = h.run(&format!("elf {}\n", path.display()));
    assert!(!run.ok);
    assert!(
        h.output()
            .contains(&format!("error: failed to load {}: bad magic", path.display()))
    );
}

#[test]
fn test_elf_without_symbols_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prog.elf");
    std::fs::write(&path, b"\x7fELF truncated").unwrap();
    let mut h = Harness::one();
    let run = h.run(&format!("elf {}\n", path.display()));
    assert!(run.ok);
    assert!(h.session.symbols(0).unwrap().is_empty());
}

#[test]
fn test_hex() {
    let mut h = Harness::one();
    let run = h.run("hex image.hex\nhex\n");
    assert!(!run.ok);
    assert_eq!(h.hart().hex_loaded, vec![PathBuf::from("image.hex")]);
    assert!(h.output().contains("usage: hex <path>"));
}

// ========== 复位与异常 ==========

#[test]
fn test_reset_policy_flag() {
    let mut h = Harness::one();
    assert!(h.run("reset\n").ok);
    assert_eq!(h.hart().resets, vec![true]);

    let mut h = Harness::new(1, SessionConfig::new().with_reset_memory_mapped_regs(true));
    assert!(h.run("reset\n").ok);
    assert_eq!(h.hart().resets, vec![false]);
}

#[test]
fn test_reset_with_pc() {
    let mut h = Harness::one();
    assert!(h.run("reset 0x1004\n").ok);
    assert_eq!(h.hart().pc, 0x1004);

    // pc 无效时不复位
    assert!(!h.run("reset nowhere\n").ok);
    assert_eq!(h.hart().resets.len(), 1);
}

#[test]
fn test_reset_rejected_pc_leaves_hart_untouched() {
    let mut h = Harness::one();
    assert!(h.run("poke r a0 7\nstep\n").ok);

    // hart 拒绝奇数 pc，复位不能先生效
    let run = h.run("reset 0x1001\n");
    assert!(!run.ok);
    assert!(h.output().contains("error: misaligned pc 0x1001"));
    assert!(h.hart().resets.is_empty());
    assert_eq!(h.hart().pc, 0x1004);
    assert_eq!(h.hart().x[10], 7);
    assert!(run.log.is_empty());
}

#[test]
fn test_exception_kinds() {
    let mut h = Harness::one();
    let run = h.run(
        "exception inst 0x10\n\
         exception data 0x20\n\
         exception store 0x30\n\
         exception load 0x40 7\n\
         exception nmi 2\n",
    );
    assert!(run.ok);
    assert_eq!(
        h.hart().queued,
        vec![
            ExceptionKind::Inst { addr: 0x10 },
            ExceptionKind::Data { addr: 0x20 },
            ExceptionKind::Store { addr: 0x30 },
            ExceptionKind::Load { addr: 0x40, tag: 7 },
            ExceptionKind::Nmi { cause: 2 },
        ]
    );
}

#[test]
fn test_exception_errors() {
    let mut h = Harness::one();
    let run = h.run("exception bus 0x10\nexception load 0x40\nexception inst x\n");
    assert!(!run.ok);
    let out = h.output();
    assert!(out.contains("error: unknown exception kind: bus"));
    assert!(out.contains("error: invalid exception command"));
    assert!(out.contains("error: invalid number: x"));
    assert!(h.hart().queued.is_empty());
}

#[test]
fn test_load_finished() {
    let mut h = Harness::one();
    assert!(h.run("exception load 0x40 7\nload_finished 7\n").ok);

    let run = h.run("load_finished 7\n");
    assert!(!run.ok);
    assert!(h.output().contains("error: no pending non-blocking load with tag 7"));
}

// ========== hart 选择 ==========

#[test]
fn test_hart_selection() {
    let mut h = Harness::new(2, SessionConfig::default());
    let run = h.run("hart 1\nhart\npoke r a0 9\n");
    assert!(run.ok);
    assert_eq!(h.output(), "1\n");
    assert_eq!(h.session.harts()[1].x[10], 9);
    assert_eq!(h.session.harts()[0].x[10], 0);

    assert!(!h.run("hart 2\n").ok);
    assert!(h.output().contains("error: hart 2 out of range, 2 hart(s) attached"));
    assert_eq!(h.session.current_hart(), 1);
}

#[test]
fn test_trace_numbers_per_hart() {
    let mut h = Harness::new(2, SessionConfig::default());
    let run = h.run("step\nhart 1\nstep\n");
    assert_eq!(
        run.trace,
        "#1 0 00001000 00100093 addi ra, zero, 1\n\
         #1 1 00001000 00100093 addi ra, zero, 1\n"
    );
}

// ========== 失败策略 ==========

#[test]
fn test_interactive_continue_on_error() {
    let mut h = Harness::one();
    let run = h.run("bogus\npoke r a0 1\n");
    assert!(!run.ok);
    assert_eq!(h.hart().x[10], 1);
}

#[test]
fn test_interactive_stop_on_error() {
    let mut h = Harness::new(1, SessionConfig::new().with_on_error(FailurePolicy::Stop));
    let run = h.run("bogus\npoke r a0 1\n");
    assert!(!run.ok);
    assert_eq!(h.hart().x[10], 0);
}

#[test]
fn test_quit_stops_input() {
    let mut h = Harness::one();
    let run = h.run("poke r a0 1\nquit\npoke r a0 2\n");
    assert!(run.ok);
    assert!(h.session.is_done());
    assert_eq!(h.hart().x[10], 1);
    assert_eq!(run.log, "poke r a0 1\nquit\n");
}

// ========== 回放 ==========

#[test]
fn test_replay_without_file() {
    let mut h = Harness::one();
    let run = h.run("replay\n");
    assert!(!run.ok);
    assert!(h.output().contains("error: no replay file bound"));
    assert!(!h.session.is_replay_bound());
}

#[test]
fn test_replay_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "cmds", "poke r a0 1\n\n# skipped\npoke r a1 2\npoke r a2 3\n");
    let mut h = Harness::one();

    let run = h.run(&format!("replay_file {}\nreplay 2\npeek r a2\n", path.display()));
    assert!(run.ok);
    assert!(!h.session.is_done());
    assert_eq!(h.hart().x[10..13], [1, 2, 0]);
    assert_eq!(h.output(), "0x00000000\n");

    // 第二次从上次停下的地方继续
    let run = h.run("replay 1\n");
    assert!(run.ok);
    assert_eq!(h.hart().x[12], 3);
}

#[test]
fn test_replay_eof_ends_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "cmds", "poke r a0 1\npoke r a1 2\n");
    let mut h = Harness::one();

    let run = h.run(&format!("replay_file {}\nreplay 3\npeek pc\n", path.display()));
    assert!(run.ok);
    assert!(h.session.is_done());
    assert_eq!(h.hart().x[10..12], [1, 2]);
    // peek 没有执行
    assert!(h.output().is_empty());
}

#[test]
fn test_replay_step_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(
        &dir,
        "cmds",
        "poke r a0 1\nstep\npoke r a1 2\nstep\npoke r a2 3\n",
    );
    let mut h = Harness::one();

    let run = h.run(&format!("replay_file {}\nreplay step 1\n", path.display()));
    assert!(run.ok);
    assert_eq!(h.hart().x[10..13], [1, 0, 0]);
    assert_eq!(run.trace.lines().count(), 1);

    let run = h.run("replay step 1\n");
    assert!(run.ok);
    assert_eq!(h.hart().x[10..13], [1, 2, 0]);
    assert_eq!(run.trace, "#2 0 00001004 002080b3 add ra, ra, sp\n");
}

#[test]
fn test_replay_embedded_quit() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "cmds", "poke r a0 5\nquit\npoke r a0 6\n");
    let mut h = Harness::one();

    let run = h.run(&format!("replay_file {}\nreplay\npeek r a0\n", path.display()));
    assert!(run.ok);
    assert!(h.session.is_done());
    assert_eq!(h.hart().x[10], 5);
    assert!(h.output().is_empty());
}

#[test]
fn test_replay_rebind() {
    let dir = tempfile::tempdir().unwrap();
    let first = script(&dir, "first", "poke r a0 1\n");
    let second = script(&dir, "second", "poke r a0 2\n");
    let mut h = Harness::one();

    let run = h.run(&format!(
        "replay_file {}\nreplay_file {}\nreplay 1\n",
        first.display(),
        second.display()
    ));
    assert!(run.ok);
    assert_eq!(h.hart().x[10], 2);
}

#[test]
fn test_replay_failed_open_keeps_binding() {
    let dir = tempfile::tempdir().unwrap();
    let first = script(&dir, "first", "poke r a0 1\n");
    let missing = dir.path().join("missing");
    let mut h = Harness::one();

    let run = h.run(&format!(
        "replay_file {}\nreplay_file {}\nreplay 1\n",
        first.display(),
        missing.display()
    ));
    assert!(!run.ok);
    assert!(h.output().contains("error: failed to open replay file"));
    assert!(h.session.is_replay_bound());
    assert_eq!(h.hart().x[10], 1);
}

#[test]
fn test_replay_rejects_nesting() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "cmds", "replay 1\nreplay_file cmds\npoke r a0 1\n");
    let config = SessionConfig::new().with_on_replay_error(FailurePolicy::Continue);
    let mut h = Harness::new(1, config);

    let run = h.run(&format!("replay_file {}\nreplay 3\n", path.display()));
    assert!(!run.ok);
    let out = h.output();
    assert!(out.contains("error: replay is not allowed inside a replay"));
    assert!(out.contains("error: replay_file is not allowed inside a replay"));
    assert_eq!(h.hart().x[10], 1);
}

#[test]
fn test_replay_stops_on_error_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "cmds", "poke r a0 1\nbogus\npoke r a1 2\n");
    let mut h = Harness::one();

    let run = h.run(&format!("replay_file {}\nreplay\n", path.display()));
    assert!(!run.ok);
    assert_eq!(h.hart().x[10..12], [1, 0]);
    // 只报告一次，原因在同一行
    assert_eq!(h.output().matches("error:").count(), 1);
    assert!(h.output().contains(&format!(
        "error: replay stopped at {}:2: unknown command: bogus",
        path.display()
    )));

    // 停止后绑定还在，可以继续
    let run = h.run("replay 1\n");
    assert!(run.ok);
    assert_eq!(h.hart().x[11], 2);
}

#[test]
fn test_replay_continue_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "cmds", "poke r a0 1\nbogus\npoke r a1 2\n");
    let config = SessionConfig::new().with_on_replay_error(FailurePolicy::Continue);
    let mut h = Harness::new(1, config);

    let run = h.run(&format!("replay_file {}\nreplay\n", path.display()));
    assert!(!run.ok);
    assert_eq!(h.hart().x[10..12], [1, 2]);
    assert!(!h.output().contains("replay stopped"));
}

#[test]
fn test_replay_invalid_utf8_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmds");
    std::fs::write(&path, b"\xff bad\npoke r a0 1\nbogus\npoke r a1 2\n").unwrap();
    let mut h = Harness::one();

    // 默认停止：坏行也计入行号
    let run = h.run(&format!("replay_file {}\nreplay\n", path.display()));
    assert!(!run.ok);
    assert!(h.output().contains(&format!(
        "error: replay stopped at {}:1: line 1 is not valid UTF-8",
        path.display()
    )));

    let run = h.run("replay\n");
    assert!(!run.ok);
    assert_eq!(h.hart().x[10..12], [1, 0]);
    assert!(
        h.output()
            .contains(&format!("error: replay stopped at {}:3", path.display()))
    );
}

#[test]
fn test_replay_invalid_utf8_line_continue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmds");
    std::fs::write(&path, b"poke r a0 1\n\xc3\x28\npoke r a1 2\n").unwrap();
    let config = SessionConfig::new().with_on_replay_error(FailurePolicy::Continue);
    let mut h = Harness::new(1, config);

    let run = h.run(&format!("replay_file {}\nreplay\n", path.display()));
    assert!(!run.ok);
    assert_eq!(h.hart().x[10..12], [1, 2]);
    assert!(h.output().contains("error: line 2 is not valid UTF-8"));
    assert!(h.session.is_done());
}

#[test]
fn test_bind_replay_file_path_with_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "my cmds", "poke r a0 5\n");
    let mut h = Harness::one();

    h.session.bind_replay_file(&path).unwrap();
    let run = h.run("replay\n");
    assert!(run.ok);
    assert_eq!(h.hart().x[10], 5);

    // 打开失败时保留原绑定
    let missing = dir.path().join("no such file");
    let err = h.session.bind_replay_file(&missing).unwrap_err();
    assert!(err.to_string().contains("no such file"));
    assert!(h.session.is_replay_bound());
}

// ========== 命令日志 ==========

#[test]
fn test_command_log_mirrors_interactive_and_replay() {
    let commands = "poke r a0 1\nhelp step\n  step  \nbogus\npeek pc\n";
    let expected = "poke r a0 1\nstep\npeek pc\n";

    let mut interactive = Harness::one();
    let run = interactive.run(commands);
    assert_eq!(run.log, expected);

    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, "cmds", commands);
    let config = SessionConfig::new().with_on_replay_error(FailurePolicy::Continue);
    let mut replayed = Harness::new(1, config);
    let run = replayed.run(&format!("replay_file {}\nreplay\n", path.display()));
    assert_eq!(run.log, expected);
}

// ========== 帮助 ==========

#[test]
fn test_help_topics() {
    let mut h = Harness::one();
    assert!(h.run("help\n").ok);
    let listing = h.output();
    for cmd in super::COMMANDS {
        assert!(listing.contains(cmd.usage), "{}", cmd.name);
    }

    let mut h = Harness::one();
    assert!(h.run("help disas\n").ok);
    assert!(h.output().starts_with("disas <address|symbol> [count]\n"));

    let mut h = Harness::one();
    assert!(!h.run("help frobnicate\n").ok);
    assert!(h.output().contains("error: no help for: frobnicate"));
}
