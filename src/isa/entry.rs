//! 编码表项
//!
//! 一处定义，多处使用：
//! - 解码：`(raw & mask) == code` 时命中，再按操作数描述符提取字段
//! - 名称查找：`name` 建立散列索引
//! - 优先级校验：通过 mask/code 判断两条表项是否可能同时命中

use super::fields::FUNCT3_FIELD;
use super::inst_id::InstId;
use super::operand::Operand;

/// 指令分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstType {
    Int,
    Branch,
    Load,
    Store,
    Multiply,
    Divide,
    Csr,
    Atomic,
    /// 单精度浮点运算
    Fp,
    /// 双精度浮点运算
    FpDouble,
    System,
    /// 16-bit 压缩指令
    Compressed,
}

/// 编码表项
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 汇编助记符，表内唯一
    pub name: &'static str,
    pub id: InstId,
    /// 匹配值：被 mask 选中的位应该是什么
    pub code: u32,
    /// 匹配掩码：哪些位需要检查
    pub mask: u32,
    pub inst_type: InstType,
    /// 操作数描述符，第 4 个只给融合乘加的 rs3 使用
    pub operands: [Operand; 4],
}

impl CatalogEntry {
    pub const fn new(
        name: &'static str,
        id: InstId,
        code: u32,
        mask: u32,
        inst_type: InstType,
        operands: [Operand; 4],
    ) -> Self {
        Self { name, id, code, mask, inst_type, operands }
    }

    /// 保留编号、尚无位模式的表项（code == mask == 0）
    pub const fn placeholder(name: &'static str, id: InstId, inst_type: InstType) -> Self {
        Self::new(name, id, 0, 0, inst_type, [Operand::NONE; 4])
    }

    /// 检查指令字是否匹配此表项
    #[inline]
    pub const fn matches(&self, raw: u32) -> bool {
        (raw & self.mask) == self.code
    }

    pub const fn is_placeholder(&self) -> bool {
        self.code == 0 && self.mask == 0
    }

    /// 有效操作数个数
    pub fn operand_count(&self) -> usize {
        self.operands.iter().filter(|op| !op.is_none()).count()
    }

    #[inline]
    pub fn operand(&self, i: usize) -> Operand {
        self.operands.get(i).copied().unwrap_or(Operand::NONE)
    }

    pub const fn is_fp(&self) -> bool {
        matches!(self.inst_type, InstType::Fp | InstType::FpDouble)
    }

    /// 浮点表项且 funct3 未被 mask 固定时，funct3 位置就是 rm 字段
    pub const fn has_rounding_mode(&self) -> bool {
        self.is_fp() && self.mask & FUNCT3_FIELD == 0
    }

    /// 检查两个表项是否可能同时命中某个指令字
    pub const fn overlaps(&self, other: &CatalogEntry) -> bool {
        let common_mask = self.mask & other.mask;
        (self.code & common_mask) == (other.code & common_mask)
    }

    /// `other` 的 mask 是否为本表项 mask 的真子集，即 `other` 严格更宽泛
    pub const fn is_strictly_more_specific_than(&self, other: &CatalogEntry) -> bool {
        self.mask != other.mask && (self.mask & other.mask) == other.mask
    }

    /// 同时匹配两个表项的示例指令字（仅在 `overlaps` 为真时有意义）
    pub const fn overlap_example(&self, other: &CatalogEntry) -> u32 {
        (self.code & self.mask) | (other.code & other.mask)
    }
}

impl std::fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("code", &format_args!("0x{:08X}", self.code))
            .field("mask", &format_args!("0x{:08X}", self.mask))
            .field("type", &self.inst_type)
            .finish()
    }
}
