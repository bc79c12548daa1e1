//! 指令字段提取辅助函数
//!
//! 提供从 32-bit 指令字中提取各字段的工具函数，以及编码表使用的
//! opcode / 掩码常量

/// 提取 opcode 字段 [6:0]
#[inline]
pub const fn opcode(raw: u32) -> u32 {
    raw & 0x7F
}

/// 提取 rd 字段 [11:7]
#[inline]
pub const fn rd(raw: u32) -> u32 {
    (raw >> 7) & 0x1F
}

/// 提取 funct3 字段 [14:12]
#[inline]
pub const fn funct3(raw: u32) -> u32 {
    (raw >> 12) & 0x7
}

/// 提取 rs1 字段 [19:15]
#[inline]
pub const fn rs1(raw: u32) -> u32 {
    (raw >> 15) & 0x1F
}

/// 提取 rs2 字段 [24:20]
#[inline]
pub const fn rs2(raw: u32) -> u32 {
    (raw >> 20) & 0x1F
}

/// 提取 rs3 字段 [31:27] (R4-type)
#[inline]
pub const fn rs3(raw: u32) -> u32 {
    (raw >> 27) & 0x1F
}

/// 提取 funct7 字段 [31:25]
#[inline]
pub const fn funct7(raw: u32) -> u32 {
    (raw >> 25) & 0x7F
}

/// 提取舍入模式 rm [14:12]
#[inline]
pub const fn rm(raw: u32) -> u8 {
    ((raw >> 12) & 0x7) as u8
}

/// 提取 I-type 立即数并符号扩展
/// imm[11:0] = raw[31:20]
#[inline]
pub const fn imm_i(raw: u32) -> i32 {
    (raw as i32) >> 20
}

/// 提取 S-type 立即数并符号扩展
/// imm[11:5] = raw[31:25], imm[4:0] = raw[11:7]
#[inline]
pub const fn imm_s(raw: u32) -> i32 {
    let imm_11_5 = (raw >> 25) & 0x7F;
    let imm_4_0 = (raw >> 7) & 0x1F;
    let imm = (imm_11_5 << 5) | imm_4_0;
    ((imm as i32) << 20) >> 20
}

/// 提取 B-type 立即数并符号扩展
/// imm[12] = raw[31], imm[10:5] = raw[30:25], imm[4:1] = raw[11:8], imm[11] = raw[7]
#[inline]
pub const fn imm_b(raw: u32) -> i32 {
    let imm_12 = (raw >> 31) & 0x1;
    let imm_10_5 = (raw >> 25) & 0x3F;
    let imm_4_1 = (raw >> 8) & 0xF;
    let imm_11 = (raw >> 7) & 0x1;
    let imm = (imm_12 << 12) | (imm_11 << 11) | (imm_10_5 << 5) | (imm_4_1 << 1);
    ((imm as i32) << 19) >> 19
}

/// 提取 U-type 立即数的高 20 位
/// 返回值为 raw[31:12]，即汇编写法 `lui rd, imm20` 中的 imm20
#[inline]
pub const fn imm_u(raw: u32) -> i32 {
    (raw >> 12) as i32
}

/// 提取 J-type 立即数并符号扩展
/// imm[20] = raw[31], imm[10:1] = raw[30:21], imm[11] = raw[20], imm[19:12] = raw[19:12]
#[inline]
pub const fn imm_j(raw: u32) -> i32 {
    let imm_20 = (raw >> 31) & 0x1;
    let imm_10_1 = (raw >> 21) & 0x3FF;
    let imm_11 = (raw >> 20) & 0x1;
    let imm_19_12 = (raw >> 12) & 0xFF;
    let imm = (imm_20 << 20) | (imm_19_12 << 12) | (imm_11 << 11) | (imm_10_1 << 1);
    ((imm as i32) << 11) >> 11
}

/// 提取 6-bit 移位量 shamt [25:20]（RV64 立即数移位）
#[inline]
pub const fn shamt(raw: u32) -> u32 {
    (raw >> 20) & 0x3F
}

/// 提取 5-bit 移位量 shamt [24:20]（*W 立即数移位）
#[inline]
pub const fn shamt_w(raw: u32) -> u32 {
    (raw >> 20) & 0x1F
}

/// 提取 CSR 地址 [31:20]
#[inline]
pub const fn csr_addr(raw: u32) -> u32 {
    (raw >> 20) & 0xFFF
}

/// 提取 CSR 立即数 (zimm) [19:15]，零扩展的 5-bit 无符号数
#[inline]
pub const fn csr_zimm(raw: u32) -> u32 {
    (raw >> 15) & 0x1F
}

/// 提取 FENCE 的前驱集合 pred [27:24]
#[inline]
pub const fn fence_pred(raw: u32) -> u32 {
    (raw >> 24) & 0xF
}

/// 提取 FENCE 的后继集合 succ [23:20]
#[inline]
pub const fn fence_succ(raw: u32) -> u32 {
    (raw >> 20) & 0xF
}

/// 根据低 2 位判断指令长度：`0b11` 为 32-bit，其余为 16-bit 压缩指令
#[inline]
pub const fn inst_size(raw: u32) -> u32 {
    if raw & 0x3 == 0x3 { 4 } else { 2 }
}

// ========== Opcode 常量 ==========
pub const OP_LOAD: u32 = 0b0000011;
pub const OP_LOAD_FP: u32 = 0b0000111;
pub const OP_MISC_MEM: u32 = 0b0001111;
pub const OP_IMM: u32 = 0b0010011;
pub const OP_AUIPC: u32 = 0b0010111;
pub const OP_IMM_32: u32 = 0b0011011;
pub const OP_STORE: u32 = 0b0100011;
pub const OP_STORE_FP: u32 = 0b0100111;
pub const OP_AMO: u32 = 0b0101111;
pub const OP_REG: u32 = 0b0110011;
pub const OP_LUI: u32 = 0b0110111;
pub const OP_REG_32: u32 = 0b0111011;
pub const OP_MADD: u32 = 0b1000011;
pub const OP_MSUB: u32 = 0b1000111;
pub const OP_NMSUB: u32 = 0b1001011;
pub const OP_NMADD: u32 = 0b1001111;
pub const OP_FP: u32 = 0b1010011;
pub const OP_BRANCH: u32 = 0b1100011;
pub const OP_JALR: u32 = 0b1100111;
pub const OP_JAL: u32 = 0b1101111;
pub const OP_SYSTEM: u32 = 0b1110011;

// ========== 编码掩码常量 ==========

/// 只检查 opcode（U/J-type）
pub const LOW7_MASK: u32 = 0x0000_007F;

/// 检查 opcode + funct3（I/S/B-type）
pub const FUNCT3_LOW7_MASK: u32 = 0x0000_707F;

/// 检查 opcode + funct3 + funct7（R-type）
pub const TOP7_FUNCT3_LOW7_MASK: u32 = 0xFE00_707F;

/// 检查 opcode + funct3 + funct7 高 6 位（RV64 立即数移位）
pub const TOP6_FUNCT3_LOW7_MASK: u32 = 0xFC00_707F;

/// 检查 opcode + funct3 + funct5（AMO，忽略 aq/rl）
pub const AMO_MASK: u32 = 0xF800_707F;

/// AMO 掩码再加上 rs2 = 0（LR）
pub const LR_MASK: u32 = 0xF9F0_707F;

/// 检查 opcode + funct7，rm 字段自由（浮点 R-type）
pub const FP_R_MASK: u32 = 0xFE00_007F;

/// 检查 opcode + funct7 + rs2，rm 字段自由（FSQRT / FCVT）
pub const FP_R_RS2_MASK: u32 = 0xFFF0_007F;

/// 检查 opcode + funct7 + rs2 + funct3（FMV / FCLASS）
pub const FP_R_RS2_FUNCT3_MASK: u32 = 0xFFF0_707F;

/// 检查 opcode + fmt[26:25]（R4-type 融合乘加）
pub const R4_MASK: u32 = 0x0600_007F;

/// 精确匹配整个指令（ECALL/EBREAK/MRET 等）
pub const EXACT_MASK: u32 = 0xFFFF_FFFF;

/// funct3 字段所在位
pub const FUNCT3_FIELD: u32 = 0x0000_7000;

// ========== 辅助函数：构造 match 值 ==========

/// 构造 R-type 的 match 值
#[inline]
pub const fn r_match(funct7: u32, funct3: u32, opcode: u32) -> u32 {
    (funct7 << 25) | (funct3 << 12) | opcode
}

/// 构造 I/S/B-type 的 match 值
#[inline]
pub const fn i_match(funct3: u32, opcode: u32) -> u32 {
    (funct3 << 12) | opcode
}

/// 构造 shift-imm 的 match 值（带 funct7 高 6 位）
#[inline]
pub const fn shift_match(funct6: u32, funct3: u32, opcode: u32) -> u32 {
    (funct6 << 26) | (funct3 << 12) | opcode
}

/// 构造 AMO 的 match 值
#[inline]
pub const fn amo_match(funct5: u32, funct3: u32) -> u32 {
    (funct5 << 27) | (funct3 << 12) | OP_AMO
}

/// 构造浮点 R-type 的 match 值（funct7 + 可选 rs2 + 可选 funct3）
#[inline]
pub const fn fp_match(funct7: u32, rs2: u32, funct3: u32) -> u32 {
    (funct7 << 25) | (rs2 << 20) | (funct3 << 12) | OP_FP
}

/// 构造 R4-type 的 match 值
#[inline]
pub const fn r4_match(fmt: u32, opcode: u32) -> u32 {
    (fmt << 25) | opcode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imm_b_positive() {
        let raw = 0x00208463; // beq x1, x2, 8
        assert_eq!(imm_b(raw), 8);
    }

    #[test]
    fn test_imm_b_negative() {
        let raw = 0xFE314CE3; // blt x2, x3, -8
        assert_eq!(imm_b(raw), -8);
    }

    #[test]
    fn test_imm_j_positive() {
        let raw = 0x0040006F; // jal x0, 4
        assert_eq!(imm_j(raw), 4);
    }

    #[test]
    fn test_imm_s() {
        let raw = 0x00112423; // sw x1, 8(x2)
        assert_eq!(imm_s(raw), 8);
    }

    #[test]
    fn test_imm_u_is_upper_20_bits() {
        let raw = 0x123450B7; // lui x1, 0x12345
        assert_eq!(imm_u(raw), 0x12345);
    }

    #[test]
    fn test_inst_size() {
        assert_eq!(inst_size(0x00000033), 4);
        assert_eq!(inst_size(0x0000_4501), 2); // c.li a0, 0
    }

    #[test]
    fn test_match_builders() {
        assert_eq!(r_match(0b0100000, 0b000, OP_REG), 0x4000_0033);
        assert_eq!(shift_match(0b010000, 0b101, OP_IMM), 0x4000_5013);
        assert_eq!(amo_match(0b00010, 0b010), 0x1000_202F);
        assert_eq!(fp_match(0b1100000, 1, 0), 0xC010_0053);
    }
}
