//! 解码结果
//!
//! `DecodedInst` 是一次解码的值记录：地址、指令字、长度、命中的表项，
//! 以及按操作数描述符提取出的最多 4 个操作数。

use super::entry::CatalogEntry;
use super::inst_id::InstId;

/// 舍入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RoundingMode {
    /// 向最近偶数舍入
    #[default]
    Rne = 0b000,
    /// 向零舍入
    Rtz = 0b001,
    /// 向负无穷舍入
    Rdn = 0b010,
    /// 向正无穷舍入
    Rup = 0b011,
    /// 向最近舍入，远离零
    Rmm = 0b100,
    /// 使用 frm CSR 中的舍入模式
    Dyn = 0b111,
}

impl From<u8> for RoundingMode {
    fn from(val: u8) -> Self {
        match val {
            0b000 => RoundingMode::Rne,
            0b001 => RoundingMode::Rtz,
            0b010 => RoundingMode::Rdn,
            0b011 => RoundingMode::Rup,
            0b100 => RoundingMode::Rmm,
            _ => RoundingMode::Dyn,
        }
    }
}

impl RoundingMode {
    /// 转换为软浮点库的舍入模式，供执行引擎做浮点运算
    ///
    /// `Dyn` 需要从 frm 解析，返回 `None`，见 [`RoundingMode::resolve_soft_float`]。
    pub fn to_soft_float(self) -> Option<simple_soft_float::RoundingMode> {
        use simple_soft_float::RoundingMode as Sf;
        match self {
            RoundingMode::Rne => Some(Sf::TiesToEven),
            RoundingMode::Rtz => Some(Sf::TowardZero),
            RoundingMode::Rdn => Some(Sf::TowardNegative),
            RoundingMode::Rup => Some(Sf::TowardPositive),
            RoundingMode::Rmm => Some(Sf::TiesToAway),
            RoundingMode::Dyn => None,
        }
    }

    /// 按 frm CSR 的值解析 `Dyn` 后再转换
    ///
    /// frm 本身是保留值或 `Dyn` 时返回 `None`，执行引擎应当按非法指令处理。
    ///
    /// ```
    /// use allude_console::isa::RoundingMode;
    /// use simple_soft_float::RoundingMode as Sf;
    ///
    /// assert_eq!(RoundingMode::Dyn.resolve_soft_float(0b001), Some(Sf::TowardZero));
    /// assert_eq!(RoundingMode::Rup.resolve_soft_float(0b001), Some(Sf::TowardPositive));
    /// assert_eq!(RoundingMode::Dyn.resolve_soft_float(0b111), None);
    /// ```
    pub fn resolve_soft_float(self, frm: u8) -> Option<simple_soft_float::RoundingMode> {
        match self {
            RoundingMode::Dyn => RoundingMode::from(frm & 0b111).to_soft_float(),
            mode => mode.to_soft_float(),
        }
    }

    /// 汇编写法中的后缀
    pub fn mnemonic(self) -> &'static str {
        match self {
            RoundingMode::Rne => "rne",
            RoundingMode::Rtz => "rtz",
            RoundingMode::Rdn => "rdn",
            RoundingMode::Rup => "rup",
            RoundingMode::Rmm => "rmm",
            RoundingMode::Dyn => "dyn",
        }
    }
}

/// 解码后的指令
///
/// 默认值处于无效状态（未绑定表项）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodedInst {
    pub(super) address: u64,
    pub(super) inst: u32,
    pub(super) size: u32,
    pub(super) entry: Option<&'static CatalogEntry>,
    pub(super) op0: u32,
    pub(super) op1: u32,
    pub(super) op2: i32,
    pub(super) op3: i32,
    pub(super) rounding_mode: RoundingMode,
}

impl DecodedInst {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        address: u64,
        inst: u32,
        size: u32,
        entry: &'static CatalogEntry,
        op0: u32,
        op1: u32,
        op2: i32,
        op3: i32,
    ) -> Self {
        Self {
            address,
            inst,
            size,
            entry: Some(entry),
            op0,
            op1,
            op2,
            op3,
            rounding_mode: RoundingMode::default(),
        }
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    pub fn inst(&self) -> u32 {
        self.inst
    }

    /// 指令长度（字节）
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn entry(&self) -> Option<&'static CatalogEntry> {
        self.entry
    }

    /// 未绑定时返回 `InstId::Illegal`
    pub fn inst_id(&self) -> InstId {
        self.entry.map_or(InstId::Illegal, |e| e.id)
    }

    pub fn name(&self) -> &'static str {
        self.entry.map_or("illegal", |e| e.name)
    }

    pub fn is_valid(&self) -> bool {
        self.entry.is_some()
    }

    /// 已绑定且命中的是 `illegal` 表项
    pub fn is_illegal(&self) -> bool {
        self.inst_id().is_illegal()
    }

    /// 解除表项绑定，其余字段保持不变
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn op0(&self) -> u32 {
        self.op0
    }

    pub fn op1(&self) -> u32 {
        self.op1
    }

    pub fn op2(&self) -> i32 {
        self.op2
    }

    pub fn op3(&self) -> i32 {
        self.op3
    }

    /// 第 i 个操作数的原始值（按 i32 看待）
    pub fn operand(&self, i: usize) -> i32 {
        match i {
            0 => self.op0 as i32,
            1 => self.op1 as i32,
            2 => self.op2,
            3 => self.op3,
            _ => 0,
        }
    }

    pub fn operand_count(&self) -> usize {
        self.entry.map_or(0, |e| e.operand_count())
    }

    // ========== 别名 ==========

    pub fn rd(&self) -> u32 {
        self.op0
    }

    pub fn rs1(&self) -> u32 {
        self.op1
    }

    pub fn rs2(&self) -> u32 {
        self.op2 as u32
    }

    pub fn imm(&self) -> i32 {
        self.op2
    }

    pub fn rs3(&self) -> u32 {
        self.op3 as u32
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    pub fn set_rounding_mode(&mut self, mode: RoundingMode) {
        self.rounding_mode = mode;
    }
}
