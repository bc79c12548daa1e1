//! 操作数描述符
//!
//! 每个编码表项最多携带 4 个操作数描述符，描述操作数的类别、读写方式
//! 以及它在指令字中的位置。位置用闭合枚举 `Field` 表示：
//! `Field::mask()` 给出字段占用的位，`Field::extract()` 给出还原后的值
//! （寄存器号、零扩展字段，或重新拼接并符号扩展的立即数）。

use super::fields;

/// 操作数类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperandType {
    /// 无此操作数
    #[default]
    None,
    /// 整数寄存器 x0..x31
    IntReg,
    /// 浮点寄存器 f0..f31
    FpReg,
    /// 控制状态寄存器
    CsReg,
    /// 立即数
    Imm,
}

/// 操作数读写方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperandMode {
    #[default]
    None,
    Read,
    Write,
    ReadWrite,
}

impl OperandMode {
    pub fn is_read(self) -> bool {
        matches!(self, OperandMode::Read | OperandMode::ReadWrite)
    }

    pub fn is_write(self) -> bool {
        matches!(self, OperandMode::Write | OperandMode::ReadWrite)
    }
}

/// 操作数在指令字中的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    None,
    /// [11:7]
    Rd,
    /// [19:15]
    Rs1,
    /// [24:20]
    Rs2,
    /// [31:27]
    Rs3,
    /// I-type 立即数 [31:20]，符号扩展
    ImmI,
    /// S-type 立即数 [31:25|11:7]，符号扩展
    ImmS,
    /// B-type 偏移 [31:25|11:7]，符号扩展，单位为字节
    ImmB,
    /// U-type 立即数 [31:12]，取高 20 位
    ImmU,
    /// J-type 偏移 [31:12]，符号扩展，单位为字节
    ImmJ,
    /// 6-bit 移位量 [25:20]
    Shamt,
    /// 5-bit 移位量 [24:20]
    ShamtW,
    /// CSR 地址 [31:20]
    Csr,
    /// CSR 立即数 [19:15]
    Zimm,
    /// FENCE pred [27:24]
    Pred,
    /// FENCE succ [23:20]
    Succ,
}

impl Field {
    /// 字段占用的位
    pub const fn mask(self) -> u32 {
        match self {
            Field::None => 0,
            Field::Rd => 0x1F << 7,
            Field::Rs1 | Field::Zimm => 0x1F << 15,
            Field::Rs2 | Field::ShamtW => 0x1F << 20,
            Field::Rs3 => 0x1F << 27,
            Field::ImmI | Field::Csr => 0xFFF << 20,
            Field::ImmS | Field::ImmB => 0xFE00_0F80,
            Field::ImmU | Field::ImmJ => 0xFFFF_F000,
            Field::Shamt => 0x3F << 20,
            Field::Pred => 0xF << 24,
            Field::Succ => 0xF << 20,
        }
    }

    /// 从指令字中提取字段值
    pub const fn extract(self, raw: u32) -> i32 {
        match self {
            Field::None => 0,
            Field::Rd => fields::rd(raw) as i32,
            Field::Rs1 => fields::rs1(raw) as i32,
            Field::Rs2 => fields::rs2(raw) as i32,
            Field::Rs3 => fields::rs3(raw) as i32,
            Field::ImmI => fields::imm_i(raw),
            Field::ImmS => fields::imm_s(raw),
            Field::ImmB => fields::imm_b(raw),
            Field::ImmU => fields::imm_u(raw),
            Field::ImmJ => fields::imm_j(raw),
            Field::Shamt => fields::shamt(raw) as i32,
            Field::ShamtW => fields::shamt_w(raw) as i32,
            Field::Csr => fields::csr_addr(raw) as i32,
            Field::Zimm => fields::csr_zimm(raw) as i32,
            Field::Pred => fields::fence_pred(raw) as i32,
            Field::Succ => fields::fence_succ(raw) as i32,
        }
    }

    /// 立即数字段是否为有符号数
    pub const fn is_signed(self) -> bool {
        matches!(self, Field::ImmI | Field::ImmS | Field::ImmB | Field::ImmJ)
    }
}

/// 操作数描述符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Operand {
    pub operand_type: OperandType,
    pub mode: OperandMode,
    pub field: Field,
}

impl Operand {
    pub const NONE: Operand = Operand {
        operand_type: OperandType::None,
        mode: OperandMode::None,
        field: Field::None,
    };

    pub const fn new(operand_type: OperandType, mode: OperandMode, field: Field) -> Self {
        Self { operand_type, mode, field }
    }

    /// 被写的整数寄存器
    pub const fn int_dst(field: Field) -> Self {
        Self::new(OperandType::IntReg, OperandMode::Write, field)
    }

    /// 被读的整数寄存器
    pub const fn int_src(field: Field) -> Self {
        Self::new(OperandType::IntReg, OperandMode::Read, field)
    }

    /// 被写的浮点寄存器
    pub const fn fp_dst(field: Field) -> Self {
        Self::new(OperandType::FpReg, OperandMode::Write, field)
    }

    /// 被读的浮点寄存器
    pub const fn fp_src(field: Field) -> Self {
        Self::new(OperandType::FpReg, OperandMode::Read, field)
    }

    /// 读写的 CSR
    pub const fn csr(field: Field) -> Self {
        Self::new(OperandType::CsReg, OperandMode::ReadWrite, field)
    }

    pub const fn imm(field: Field) -> Self {
        Self::new(OperandType::Imm, OperandMode::None, field)
    }

    pub const fn is_none(&self) -> bool {
        matches!(self.operand_type, OperandType::None)
    }

    /// 字段掩码（`OperandType::None` 时为 0）
    pub const fn field_mask(&self) -> u32 {
        if self.is_none() { 0 } else { self.field.mask() }
    }

    /// 从指令字中解析该操作数的值
    pub const fn resolve(&self, raw: u32) -> i32 {
        if self.is_none() { 0 } else { self.field.extract(raw) }
    }
}
