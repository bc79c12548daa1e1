//! 指令标识
//!
//! 每个变体的判别值等于它在编码表中的下标，`Catalog` 构建时会校验这一点。

/// 指令标识（闭合枚举）
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum InstId {
    /// 非法指令，查找失败时的兜底表项
    #[default]
    Illegal = 0,

    // ========== RV32I ==========
    Lui,
    Auipc,
    Jal,
    Jalr,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Fence,
    FenceI,
    Ecall,
    Ebreak,

    // ========== Zicsr ==========
    Csrrw,
    Csrrs,
    Csrrc,
    Csrrwi,
    Csrrsi,
    Csrrci,

    // ========== RV64I ==========
    Lwu,
    Ld,
    Sd,
    Addiw,
    Slliw,
    Srliw,
    Sraiw,
    Addw,
    Subw,
    Sllw,
    Srlw,
    Sraw,

    // ========== M ==========
    Mul,
    Mulh,
    Mulhsu,
    Mulhu,
    Div,
    Divu,
    Rem,
    Remu,

    // ========== RV64M ==========
    Mulw,
    Divw,
    Divuw,
    Remw,
    Remuw,

    // ========== A ==========
    LrW,
    ScW,
    AmoswapW,
    AmoaddW,
    AmoxorW,
    AmoandW,
    AmoorW,
    AmominW,
    AmomaxW,
    AmominuW,
    AmomaxuW,

    // ========== RV64A ==========
    LrD,
    ScD,
    AmoswapD,
    AmoaddD,
    AmoxorD,
    AmoandD,
    AmoorD,
    AmominD,
    AmomaxD,
    AmominuD,
    AmomaxuD,

    // ========== F ==========
    Flw,
    Fsw,
    FmaddS,
    FmsubS,
    FnmsubS,
    FnmaddS,
    FaddS,
    FsubS,
    FmulS,
    FdivS,
    FsqrtS,
    FsgnjS,
    FsgnjnS,
    FsgnjxS,
    FminS,
    FmaxS,
    FcvtWS,
    FcvtWuS,
    FmvXW,
    FeqS,
    FltS,
    FleS,
    FclassS,
    FcvtSW,
    FcvtSWu,
    FmvWX,

    // ========== RV64F ==========
    FcvtLS,
    FcvtLuS,
    FcvtSL,
    FcvtSLu,

    // ========== D ==========
    Fld,
    Fsd,
    FmaddD,
    FmsubD,
    FnmsubD,
    FnmaddD,
    FaddD,
    FsubD,
    FmulD,
    FdivD,
    FsqrtD,
    FsgnjD,
    FsgnjnD,
    FsgnjxD,
    FminD,
    FmaxD,
    FcvtSD,
    FcvtDS,
    FeqD,
    FltD,
    FleD,
    FclassD,
    FcvtWD,
    FcvtWuD,
    FcvtDW,
    FcvtDWu,

    // ========== RV64D ==========
    FcvtLD,
    FcvtLuD,
    FmvXD,
    FcvtDL,
    FcvtDLu,
    FmvDX,

    // ========== 特权指令 ==========
    Mret,
    Uret,
    Sret,
    Wfi,

    // ========== C（保留编号，尚无位模式）==========
    CAddi4spn,
    CFld,
    CLq,
    CLw,
    CFlw,
    CLd,
    CFsd,
    CSq,
    CSw,
    CFsw,
    CSd,
    CAddi,
    CJal,
    CLi,
    CAddi16sp,
    CLui,
    CSrli,
    CSrli64,
    CSrai,
    CSrai64,
    CAndi,
    CSub,
    CXor,
    COr,
    CAnd,
    CSubw,
    CAddw,
    CJ,
    CBeqz,
    CBnez,
    CSlli,
    CSlli64,
    CFldsp,
    CLwsp,
    CFlwsp,
    CJr,
    CEbreak,
    CJalr,
    CAdd,
    CFsdsp,
    CSwsp,
    CFswsp,
}

impl InstId {
    /// 变体总数，也就是标准编码表的长度
    pub const COUNT: usize = InstId::CFswsp as usize + 1;

    /// 在编码表中的下标
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_illegal(self) -> bool {
        matches!(self, InstId::Illegal)
    }
}
