//! 寄存器名称
//!
//! 整数 / 浮点寄存器的 ABI 名称，以及常用 CSR 的名称与地址。
//! 交互命令中的寄存器参数和反汇编输出都经过这里。

/// 整数寄存器 ABI 名称
pub const INT_REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2",
    "s0", "s1", "a0", "a1", "a2", "a3", "a4", "a5",
    "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7",
    "s8", "s9", "s10", "s11", "t3", "t4", "t5", "t6",
];

/// 浮点寄存器 ABI 名称
pub const FP_REG_NAMES: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7",
    "fs0", "fs1", "fa0", "fa1", "fa2", "fa3", "fa4", "fa5",
    "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7",
    "fs8", "fs9", "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

/// CSR 名称与地址
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsrName {
    pub name: &'static str,
    pub addr: u16,
}

// ========== Base Unprivileged ==========
pub const CSR_CYCLE: u16 = 0xC00;
pub const CSR_TIME: u16 = 0xC01;
pub const CSR_INSTRET: u16 = 0xC02;

// ========== F/D ==========
pub const CSR_FFLAGS: u16 = 0x001;
pub const CSR_FRM: u16 = 0x002;
pub const CSR_FCSR: u16 = 0x003;

// ========== Machine ==========
pub const CSR_MVENDORID: u16 = 0xF11;
pub const CSR_MARCHID: u16 = 0xF12;
pub const CSR_MIMPID: u16 = 0xF13;
pub const CSR_MHARTID: u16 = 0xF14;
pub const CSR_MSTATUS: u16 = 0x300;
pub const CSR_MISA: u16 = 0x301;
pub const CSR_MEDELEG: u16 = 0x302;
pub const CSR_MIDELEG: u16 = 0x303;
pub const CSR_MIE: u16 = 0x304;
pub const CSR_MTVEC: u16 = 0x305;
pub const CSR_MCOUNTEREN: u16 = 0x306;
pub const CSR_MSCRATCH: u16 = 0x340;
pub const CSR_MEPC: u16 = 0x341;
pub const CSR_MCAUSE: u16 = 0x342;
pub const CSR_MTVAL: u16 = 0x343;
pub const CSR_MIP: u16 = 0x344;
pub const CSR_MCYCLE: u16 = 0xB00;
pub const CSR_MINSTRET: u16 = 0xB02;

// ========== Supervisor ==========
pub const CSR_SSTATUS: u16 = 0x100;
pub const CSR_SIE: u16 = 0x104;
pub const CSR_STVEC: u16 = 0x105;
pub const CSR_SCOUNTEREN: u16 = 0x106;
pub const CSR_SSCRATCH: u16 = 0x140;
pub const CSR_SEPC: u16 = 0x141;
pub const CSR_SCAUSE: u16 = 0x142;
pub const CSR_STVAL: u16 = 0x143;
pub const CSR_SIP: u16 = 0x144;
pub const CSR_SATP: u16 = 0x180;

/// 已知 CSR 名称表
pub const CSR_NAMES: &[CsrName] = &[
    CsrName { name: "fflags",     addr: CSR_FFLAGS },
    CsrName { name: "frm",        addr: CSR_FRM },
    CsrName { name: "fcsr",       addr: CSR_FCSR },
    CsrName { name: "cycle",      addr: CSR_CYCLE },
    CsrName { name: "time",       addr: CSR_TIME },
    CsrName { name: "instret",    addr: CSR_INSTRET },
    CsrName { name: "sstatus",    addr: CSR_SSTATUS },
    CsrName { name: "sie",        addr: CSR_SIE },
    CsrName { name: "stvec",      addr: CSR_STVEC },
    CsrName { name: "scounteren", addr: CSR_SCOUNTEREN },
    CsrName { name: "sscratch",   addr: CSR_SSCRATCH },
    CsrName { name: "sepc",       addr: CSR_SEPC },
    CsrName { name: "scause",     addr: CSR_SCAUSE },
    CsrName { name: "stval",      addr: CSR_STVAL },
    CsrName { name: "sip",        addr: CSR_SIP },
    CsrName { name: "satp",       addr: CSR_SATP },
    CsrName { name: "mvendorid",  addr: CSR_MVENDORID },
    CsrName { name: "marchid",    addr: CSR_MARCHID },
    CsrName { name: "mimpid",     addr: CSR_MIMPID },
    CsrName { name: "mhartid",    addr: CSR_MHARTID },
    CsrName { name: "mstatus",    addr: CSR_MSTATUS },
    CsrName { name: "misa",       addr: CSR_MISA },
    CsrName { name: "medeleg",    addr: CSR_MEDELEG },
    CsrName { name: "mideleg",    addr: CSR_MIDELEG },
    CsrName { name: "mie",        addr: CSR_MIE },
    CsrName { name: "mtvec",      addr: CSR_MTVEC },
    CsrName { name: "mcounteren", addr: CSR_MCOUNTEREN },
    CsrName { name: "mscratch",   addr: CSR_MSCRATCH },
    CsrName { name: "mepc",       addr: CSR_MEPC },
    CsrName { name: "mcause",     addr: CSR_MCAUSE },
    CsrName { name: "mtval",      addr: CSR_MTVAL },
    CsrName { name: "mip",        addr: CSR_MIP },
    CsrName { name: "mcycle",     addr: CSR_MCYCLE },
    CsrName { name: "minstret",   addr: CSR_MINSTRET },
];

pub fn int_reg_name(reg: u32) -> &'static str {
    INT_REG_NAMES.get(reg as usize).copied().unwrap_or("?")
}

pub fn fp_reg_name(reg: u32) -> &'static str {
    FP_REG_NAMES.get(reg as usize).copied().unwrap_or("?")
}

/// 已知 CSR 返回名称，否则返回 `None`
pub fn csr_name(addr: u32) -> Option<&'static str> {
    CSR_NAMES.iter().find(|c| u32::from(c.addr) == addr).map(|c| c.name)
}

/// 解析整数寄存器：`x5`、`t0`，以及 `fp`（= s0）
pub fn parse_int_reg(s: &str) -> Option<u32> {
    if s == "fp" {
        return Some(8);
    }
    if let Some(n) = numbered(s, 'x') {
        return Some(n);
    }
    INT_REG_NAMES.iter().position(|&n| n == s).map(|i| i as u32)
}

/// 解析浮点寄存器：`f3`、`fa0`
pub fn parse_fp_reg(s: &str) -> Option<u32> {
    if let Some(n) = numbered(s, 'f') {
        return Some(n);
    }
    FP_REG_NAMES.iter().position(|&n| n == s).map(|i| i as u32)
}

/// 解析 CSR：已知名称或 12-bit 地址（十进制或 0x 前缀十六进制）
pub fn parse_csr(s: &str) -> Option<u32> {
    if let Some(c) = CSR_NAMES.iter().find(|c| c.name == s) {
        return Some(u32::from(c.addr));
    }
    let addr = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => s.parse().ok()?,
    };
    (addr <= 0xFFF).then_some(addr)
}

/// `x0`..`x31` 形式的编号寄存器
fn numbered(s: &str, prefix: char) -> Option<u32> {
    let digits = s.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = digits.parse().ok()?;
    (n < 32).then_some(n)
}
