//! 标准指令编码表
//!
//! 表项顺序即优先级：同一 opcode 族内 mask 更具体的表项在前，
//! 解码时第一个命中者胜出。下标必须等于 `InstId` 的判别值。
//! 压缩指令只保留编号（code == mask == 0），不参与按字匹配。

use super::entry::InstType::{Divide, Fp, FpDouble, Int, Multiply};
use super::entry::{CatalogEntry, InstType};
use super::fields::*;
use super::inst_id::InstId;
use super::operand::{Field, Operand};

// ========== 常用操作数描述符 ==========

const NONE: Operand = Operand::NONE;
const RD: Operand = Operand::int_dst(Field::Rd);
const RS1: Operand = Operand::int_src(Field::Rs1);
const RS2: Operand = Operand::int_src(Field::Rs2);
const FD: Operand = Operand::fp_dst(Field::Rd);
const FS1: Operand = Operand::fp_src(Field::Rs1);
const FS2: Operand = Operand::fp_src(Field::Rs2);
const FS3: Operand = Operand::fp_src(Field::Rs3);
const IMM_I: Operand = Operand::imm(Field::ImmI);
const IMM_S: Operand = Operand::imm(Field::ImmS);
const IMM_B: Operand = Operand::imm(Field::ImmB);
const IMM_U: Operand = Operand::imm(Field::ImmU);
const IMM_J: Operand = Operand::imm(Field::ImmJ);
const CSR: Operand = Operand::csr(Field::Csr);
const ZIMM: Operand = Operand::imm(Field::Zimm);

// ========== 按指令格式构造表项 ==========

const fn row(
    name: &'static str,
    id: InstId,
    code: u32,
    mask: u32,
    inst_type: InstType,
    operands: [Operand; 4],
) -> CatalogEntry {
    CatalogEntry::new(name, id, code, mask, inst_type, operands)
}

/// 整数 R-type：rd, rs1, rs2
const fn r_int(name: &'static str, id: InstId, code: u32, inst_type: InstType) -> CatalogEntry {
    row(name, id, code, TOP7_FUNCT3_LOW7_MASK, inst_type, [RD, RS1, RS2, NONE])
}

/// 整数 I-type：rd, rs1, imm
const fn i_int(name: &'static str, id: InstId, code: u32) -> CatalogEntry {
    row(name, id, code, FUNCT3_LOW7_MASK, InstType::Int, [RD, RS1, IMM_I, NONE])
}

/// 立即数移位：rd, rs1, shamt
const fn shift_imm(name: &'static str, id: InstId, code: u32, mask: u32, shamt: Field) -> CatalogEntry {
    row(name, id, code, mask, InstType::Int, [RD, RS1, Operand::imm(shamt), NONE])
}

/// 条件分支：rs1, rs2, offset
const fn branch(name: &'static str, id: InstId, funct3: u32) -> CatalogEntry {
    row(name, id, i_match(funct3, OP_BRANCH), FUNCT3_LOW7_MASK, InstType::Branch, [RS1, RS2, IMM_B, NONE])
}

/// 访存读：rd, rs1, offset
const fn load(name: &'static str, id: InstId, funct3: u32, opcode: u32, dst: Operand) -> CatalogEntry {
    row(name, id, i_match(funct3, opcode), FUNCT3_LOW7_MASK, InstType::Load, [dst, RS1, IMM_I, NONE])
}

/// 访存写：rs1, rs2, offset
const fn store(name: &'static str, id: InstId, funct3: u32, opcode: u32, src: Operand) -> CatalogEntry {
    row(name, id, i_match(funct3, opcode), FUNCT3_LOW7_MASK, InstType::Store, [RS1, src, IMM_S, NONE])
}

/// CSR 指令：rd, rs1 或 zimm, csr
const fn csr(name: &'static str, id: InstId, funct3: u32, src: Operand) -> CatalogEntry {
    row(name, id, i_match(funct3, OP_SYSTEM), FUNCT3_LOW7_MASK, InstType::Csr, [RD, src, CSR, NONE])
}

/// AMO / SC：rd, rs1, rs2
const fn amo(name: &'static str, id: InstId, funct5: u32, funct3: u32) -> CatalogEntry {
    row(name, id, amo_match(funct5, funct3), AMO_MASK, InstType::Atomic, [RD, RS1, RS2, NONE])
}

/// LR：rd, rs1（rs2 固定为 0）
const fn lr(name: &'static str, id: InstId, funct3: u32) -> CatalogEntry {
    row(name, id, amo_match(0b00010, funct3), LR_MASK, InstType::Atomic, [RD, RS1, NONE, NONE])
}

/// 融合乘加：fd, fs1, fs2, fs3
const fn fma(name: &'static str, id: InstId, fmt: u32, opcode: u32, inst_type: InstType) -> CatalogEntry {
    row(name, id, r4_match(fmt, opcode), R4_MASK, inst_type, [FD, FS1, FS2, FS3])
}

/// 无操作数的精确匹配指令
const fn system(name: &'static str, id: InstId, code: u32) -> CatalogEntry {
    row(name, id, code, EXACT_MASK, InstType::System, [NONE; 4])
}

const fn compressed(name: &'static str, id: InstId) -> CatalogEntry {
    CatalogEntry::placeholder(name, id, InstType::Compressed)
}

/// 标准编码表
pub static STANDARD_TABLE: [CatalogEntry; InstId::COUNT] = [
    row("illegal", InstId::Illegal, EXACT_MASK, EXACT_MASK, InstType::System, [NONE; 4]),

    // ========== RV32I ==========
    row("lui", InstId::Lui, OP_LUI, LOW7_MASK, Int, [RD, IMM_U, NONE, NONE]),
    row("auipc", InstId::Auipc, OP_AUIPC, LOW7_MASK, Int, [RD, IMM_U, NONE, NONE]),
    row("jal", InstId::Jal, OP_JAL, LOW7_MASK, InstType::Branch, [RD, IMM_J, NONE, NONE]),
    row("jalr", InstId::Jalr, i_match(0b000, OP_JALR), FUNCT3_LOW7_MASK, InstType::Branch, [RD, RS1, IMM_I, NONE]),
    branch("beq", InstId::Beq, 0b000),
    branch("bne", InstId::Bne, 0b001),
    branch("blt", InstId::Blt, 0b100),
    branch("bge", InstId::Bge, 0b101),
    branch("bltu", InstId::Bltu, 0b110),
    branch("bgeu", InstId::Bgeu, 0b111),
    load("lb", InstId::Lb, 0b000, OP_LOAD, RD),
    load("lh", InstId::Lh, 0b001, OP_LOAD, RD),
    load("lw", InstId::Lw, 0b010, OP_LOAD, RD),
    load("lbu", InstId::Lbu, 0b100, OP_LOAD, RD),
    load("lhu", InstId::Lhu, 0b101, OP_LOAD, RD),
    store("sb", InstId::Sb, 0b000, OP_STORE, RS2),
    store("sh", InstId::Sh, 0b001, OP_STORE, RS2),
    store("sw", InstId::Sw, 0b010, OP_STORE, RS2),
    i_int("addi", InstId::Addi, i_match(0b000, OP_IMM)),
    i_int("slti", InstId::Slti, i_match(0b010, OP_IMM)),
    i_int("sltiu", InstId::Sltiu, i_match(0b011, OP_IMM)),
    i_int("xori", InstId::Xori, i_match(0b100, OP_IMM)),
    i_int("ori", InstId::Ori, i_match(0b110, OP_IMM)),
    i_int("andi", InstId::Andi, i_match(0b111, OP_IMM)),
    shift_imm("slli", InstId::Slli, shift_match(0b000000, 0b001, OP_IMM), TOP6_FUNCT3_LOW7_MASK, Field::Shamt),
    shift_imm("srli", InstId::Srli, shift_match(0b000000, 0b101, OP_IMM), TOP6_FUNCT3_LOW7_MASK, Field::Shamt),
    shift_imm("srai", InstId::Srai, shift_match(0b010000, 0b101, OP_IMM), TOP6_FUNCT3_LOW7_MASK, Field::Shamt),
    r_int("add", InstId::Add, r_match(0b0000000, 0b000, OP_REG), Int),
    r_int("sub", InstId::Sub, r_match(0b0100000, 0b000, OP_REG), Int),
    r_int("sll", InstId::Sll, r_match(0b0000000, 0b001, OP_REG), Int),
    r_int("slt", InstId::Slt, r_match(0b0000000, 0b010, OP_REG), Int),
    r_int("sltu", InstId::Sltu, r_match(0b0000000, 0b011, OP_REG), Int),
    r_int("xor", InstId::Xor, r_match(0b0000000, 0b100, OP_REG), Int),
    r_int("srl", InstId::Srl, r_match(0b0000000, 0b101, OP_REG), Int),
    r_int("sra", InstId::Sra, r_match(0b0100000, 0b101, OP_REG), Int),
    r_int("or", InstId::Or, r_match(0b0000000, 0b110, OP_REG), Int),
    r_int("and", InstId::And, r_match(0b0000000, 0b111, OP_REG), Int),
    row("fence", InstId::Fence, i_match(0b000, OP_MISC_MEM), FUNCT3_LOW7_MASK, Int,
        [Operand::imm(Field::Pred), Operand::imm(Field::Succ), NONE, NONE]),
    row("fence.i", InstId::FenceI, i_match(0b001, OP_MISC_MEM), FUNCT3_LOW7_MASK, Int, [NONE; 4]),
    system("ecall", InstId::Ecall, 0x0000_0073),
    system("ebreak", InstId::Ebreak, 0x0010_0073),

    // ========== Zicsr ==========
    csr("csrrw", InstId::Csrrw, 0b001, RS1),
    csr("csrrs", InstId::Csrrs, 0b010, RS1),
    csr("csrrc", InstId::Csrrc, 0b011, RS1),
    csr("csrrwi", InstId::Csrrwi, 0b101, ZIMM),
    csr("csrrsi", InstId::Csrrsi, 0b110, ZIMM),
    csr("csrrci", InstId::Csrrci, 0b111, ZIMM),

    // ========== RV64I ==========
    load("lwu", InstId::Lwu, 0b110, OP_LOAD, RD),
    load("ld", InstId::Ld, 0b011, OP_LOAD, RD),
    store("sd", InstId::Sd, 0b011, OP_STORE, RS2),
    i_int("addiw", InstId::Addiw, i_match(0b000, OP_IMM_32)),
    shift_imm("slliw", InstId::Slliw, r_match(0b0000000, 0b001, OP_IMM_32), TOP7_FUNCT3_LOW7_MASK, Field::ShamtW),
    shift_imm("srliw", InstId::Srliw, r_match(0b0000000, 0b101, OP_IMM_32), TOP7_FUNCT3_LOW7_MASK, Field::ShamtW),
    shift_imm("sraiw", InstId::Sraiw, r_match(0b0100000, 0b101, OP_IMM_32), TOP7_FUNCT3_LOW7_MASK, Field::ShamtW),
    r_int("addw", InstId::Addw, r_match(0b0000000, 0b000, OP_REG_32), Int),
    r_int("subw", InstId::Subw, r_match(0b0100000, 0b000, OP_REG_32), Int),
    r_int("sllw", InstId::Sllw, r_match(0b0000000, 0b001, OP_REG_32), Int),
    r_int("srlw", InstId::Srlw, r_match(0b0000000, 0b101, OP_REG_32), Int),
    r_int("sraw", InstId::Sraw, r_match(0b0100000, 0b101, OP_REG_32), Int),

    // ========== M ==========
    r_int("mul", InstId::Mul, r_match(0b0000001, 0b000, OP_REG), Multiply),
    r_int("mulh", InstId::Mulh, r_match(0b0000001, 0b001, OP_REG), Multiply),
    r_int("mulhsu", InstId::Mulhsu, r_match(0b0000001, 0b010, OP_REG), Multiply),
    r_int("mulhu", InstId::Mulhu, r_match(0b0000001, 0b011, OP_REG), Multiply),
    r_int("div", InstId::Div, r_match(0b0000001, 0b100, OP_REG), Divide),
    r_int("divu", InstId::Divu, r_match(0b0000001, 0b101, OP_REG), Divide),
    r_int("rem", InstId::Rem, r_match(0b0000001, 0b110, OP_REG), Divide),
    r_int("remu", InstId::Remu, r_match(0b0000001, 0b111, OP_REG), Divide),

    // ========== RV64M ==========
    r_int("mulw", InstId::Mulw, r_match(0b0000001, 0b000, OP_REG_32), Multiply),
    r_int("divw", InstId::Divw, r_match(0b0000001, 0b100, OP_REG_32), Divide),
    r_int("divuw", InstId::Divuw, r_match(0b0000001, 0b101, OP_REG_32), Divide),
    r_int("remw", InstId::Remw, r_match(0b0000001, 0b110, OP_REG_32), Divide),
    r_int("remuw", InstId::Remuw, r_match(0b0000001, 0b111, OP_REG_32), Divide),

    // ========== A ==========
    lr("lr.w", InstId::LrW, 0b010),
    amo("sc.w", InstId::ScW, 0b00011, 0b010),
    amo("amoswap.w", InstId::AmoswapW, 0b00001, 0b010),
    amo("amoadd.w", InstId::AmoaddW, 0b00000, 0b010),
    amo("amoxor.w", InstId::AmoxorW, 0b00100, 0b010),
    amo("amoand.w", InstId::AmoandW, 0b01100, 0b010),
    amo("amoor.w", InstId::AmoorW, 0b01000, 0b010),
    amo("amomin.w", InstId::AmominW, 0b10000, 0b010),
    amo("amomax.w", InstId::AmomaxW, 0b10100, 0b010),
    amo("amominu.w", InstId::AmominuW, 0b11000, 0b010),
    amo("amomaxu.w", InstId::AmomaxuW, 0b11100, 0b010),

    // ========== RV64A ==========
    lr("lr.d", InstId::LrD, 0b011),
    amo("sc.d", InstId::ScD, 0b00011, 0b011),
    amo("amoswap.d", InstId::AmoswapD, 0b00001, 0b011),
    amo("amoadd.d", InstId::AmoaddD, 0b00000, 0b011),
    amo("amoxor.d", InstId::AmoxorD, 0b00100, 0b011),
    amo("amoand.d", InstId::AmoandD, 0b01100, 0b011),
    amo("amoor.d", InstId::AmoorD, 0b01000, 0b011),
    amo("amomin.d", InstId::AmominD, 0b10000, 0b011),
    amo("amomax.d", InstId::AmomaxD, 0b10100, 0b011),
    amo("amominu.d", InstId::AmominuD, 0b11000, 0b011),
    amo("amomaxu.d", InstId::AmomaxuD, 0b11100, 0b011),

    // ========== F ==========
    load("flw", InstId::Flw, 0b010, OP_LOAD_FP, FD),
    store("fsw", InstId::Fsw, 0b010, OP_STORE_FP, FS2),
    fma("fmadd.s", InstId::FmaddS, 0b00, OP_MADD, Fp),
    fma("fmsub.s", InstId::FmsubS, 0b00, OP_MSUB, Fp),
    fma("fnmsub.s", InstId::FnmsubS, 0b00, OP_NMSUB, Fp),
    fma("fnmadd.s", InstId::FnmaddS, 0b00, OP_NMADD, Fp),
    row("fadd.s", InstId::FaddS, fp_match(0b0000000, 0, 0), FP_R_MASK, Fp, [FD, FS1, FS2, NONE]),
    row("fsub.s", InstId::FsubS, fp_match(0b0000100, 0, 0), FP_R_MASK, Fp, [FD, FS1, FS2, NONE]),
    row("fmul.s", InstId::FmulS, fp_match(0b0001000, 0, 0), FP_R_MASK, Fp, [FD, FS1, FS2, NONE]),
    row("fdiv.s", InstId::FdivS, fp_match(0b0001100, 0, 0), FP_R_MASK, Fp, [FD, FS1, FS2, NONE]),
    row("fsqrt.s", InstId::FsqrtS, fp_match(0b0101100, 0, 0), FP_R_RS2_MASK, Fp, [FD, FS1, NONE, NONE]),
    row("fsgnj.s", InstId::FsgnjS, fp_match(0b0010000, 0, 0b000), TOP7_FUNCT3_LOW7_MASK, Fp, [FD, FS1, FS2, NONE]),
    row("fsgnjn.s", InstId::FsgnjnS, fp_match(0b0010000, 0, 0b001), TOP7_FUNCT3_LOW7_MASK, Fp, [FD, FS1, FS2, NONE]),
    row("fsgnjx.s", InstId::FsgnjxS, fp_match(0b0010000, 0, 0b010), TOP7_FUNCT3_LOW7_MASK, Fp, [FD, FS1, FS2, NONE]),
    row("fmin.s", InstId::FminS, fp_match(0b0010100, 0, 0b000), TOP7_FUNCT3_LOW7_MASK, Fp, [FD, FS1, FS2, NONE]),
    row("fmax.s", InstId::FmaxS, fp_match(0b0010100, 0, 0b001), TOP7_FUNCT3_LOW7_MASK, Fp, [FD, FS1, FS2, NONE]),
    row("fcvt.w.s", InstId::FcvtWS, fp_match(0b1100000, 0, 0), FP_R_RS2_MASK, Fp, [RD, FS1, NONE, NONE]),
    row("fcvt.wu.s", InstId::FcvtWuS, fp_match(0b1100000, 1, 0), FP_R_RS2_MASK, Fp, [RD, FS1, NONE, NONE]),
    row("fmv.x.w", InstId::FmvXW, fp_match(0b1110000, 0, 0b000), FP_R_RS2_FUNCT3_MASK, Fp, [RD, FS1, NONE, NONE]),
    row("feq.s", InstId::FeqS, fp_match(0b1010000, 0, 0b010), TOP7_FUNCT3_LOW7_MASK, Fp, [RD, FS1, FS2, NONE]),
    row("flt.s", InstId::FltS, fp_match(0b1010000, 0, 0b001), TOP7_FUNCT3_LOW7_MASK, Fp, [RD, FS1, FS2, NONE]),
    row("fle.s", InstId::FleS, fp_match(0b1010000, 0, 0b000), TOP7_FUNCT3_LOW7_MASK, Fp, [RD, FS1, FS2, NONE]),
    row("fclass.s", InstId::FclassS, fp_match(0b1110000, 0, 0b001), FP_R_RS2_FUNCT3_MASK, Fp, [RD, FS1, NONE, NONE]),
    row("fcvt.s.w", InstId::FcvtSW, fp_match(0b1101000, 0, 0), FP_R_RS2_MASK, Fp, [FD, RS1, NONE, NONE]),
    row("fcvt.s.wu", InstId::FcvtSWu, fp_match(0b1101000, 1, 0), FP_R_RS2_MASK, Fp, [FD, RS1, NONE, NONE]),
    row("fmv.w.x", InstId::FmvWX, fp_match(0b1111000, 0, 0b000), FP_R_RS2_FUNCT3_MASK, Fp, [FD, RS1, NONE, NONE]),

    // ========== RV64F ==========
    row("fcvt.l.s", InstId::FcvtLS, fp_match(0b1100000, 2, 0), FP_R_RS2_MASK, Fp, [RD, FS1, NONE, NONE]),
    row("fcvt.lu.s", InstId::FcvtLuS, fp_match(0b1100000, 3, 0), FP_R_RS2_MASK, Fp, [RD, FS1, NONE, NONE]),
    row("fcvt.s.l", InstId::FcvtSL, fp_match(0b1101000, 2, 0), FP_R_RS2_MASK, Fp, [FD, RS1, NONE, NONE]),
    row("fcvt.s.lu", InstId::FcvtSLu, fp_match(0b1101000, 3, 0), FP_R_RS2_MASK, Fp, [FD, RS1, NONE, NONE]),

    // ========== D ==========
    load("fld", InstId::Fld, 0b011, OP_LOAD_FP, FD),
    store("fsd", InstId::Fsd, 0b011, OP_STORE_FP, FS2),
    fma("fmadd.d", InstId::FmaddD, 0b01, OP_MADD, FpDouble),
    fma("fmsub.d", InstId::FmsubD, 0b01, OP_MSUB, FpDouble),
    fma("fnmsub.d", InstId::FnmsubD, 0b01, OP_NMSUB, FpDouble),
    fma("fnmadd.d", InstId::FnmaddD, 0b01, OP_NMADD, FpDouble),
    row("fadd.d", InstId::FaddD, fp_match(0b0000001, 0, 0), FP_R_MASK, FpDouble, [FD, FS1, FS2, NONE]),
    row("fsub.d", InstId::FsubD, fp_match(0b0000101, 0, 0), FP_R_MASK, FpDouble, [FD, FS1, FS2, NONE]),
    row("fmul.d", InstId::FmulD, fp_match(0b0001001, 0, 0), FP_R_MASK, FpDouble, [FD, FS1, FS2, NONE]),
    row("fdiv.d", InstId::FdivD, fp_match(0b0001101, 0, 0), FP_R_MASK, FpDouble, [FD, FS1, FS2, NONE]),
    row("fsqrt.d", InstId::FsqrtD, fp_match(0b0101101, 0, 0), FP_R_RS2_MASK, FpDouble, [FD, FS1, NONE, NONE]),
    row("fsgnj.d", InstId::FsgnjD, fp_match(0b0010001, 0, 0b000), TOP7_FUNCT3_LOW7_MASK, FpDouble, [FD, FS1, FS2, NONE]),
    row("fsgnjn.d", InstId::FsgnjnD, fp_match(0b0010001, 0, 0b001), TOP7_FUNCT3_LOW7_MASK, FpDouble, [FD, FS1, FS2, NONE]),
    row("fsgnjx.d", InstId::FsgnjxD, fp_match(0b0010001, 0, 0b010), TOP7_FUNCT3_LOW7_MASK, FpDouble, [FD, FS1, FS2, NONE]),
    row("fmin.d", InstId::FminD, fp_match(0b0010101, 0, 0b000), TOP7_FUNCT3_LOW7_MASK, FpDouble, [FD, FS1, FS2, NONE]),
    row("fmax.d", InstId::FmaxD, fp_match(0b0010101, 0, 0b001), TOP7_FUNCT3_LOW7_MASK, FpDouble, [FD, FS1, FS2, NONE]),
    row("fcvt.s.d", InstId::FcvtSD, fp_match(0b0100000, 1, 0), FP_R_RS2_MASK, FpDouble, [FD, FS1, NONE, NONE]),
    row("fcvt.d.s", InstId::FcvtDS, fp_match(0b0100001, 0, 0), FP_R_RS2_MASK, FpDouble, [FD, FS1, NONE, NONE]),
    row("feq.d", InstId::FeqD, fp_match(0b1010001, 0, 0b010), TOP7_FUNCT3_LOW7_MASK, FpDouble, [RD, FS1, FS2, NONE]),
    row("flt.d", InstId::FltD, fp_match(0b1010001, 0, 0b001), TOP7_FUNCT3_LOW7_MASK, FpDouble, [RD, FS1, FS2, NONE]),
    row("fle.d", InstId::FleD, fp_match(0b1010001, 0, 0b000), TOP7_FUNCT3_LOW7_MASK, FpDouble, [RD, FS1, FS2, NONE]),
    row("fclass.d", InstId::FclassD, fp_match(0b1110001, 0, 0b001), FP_R_RS2_FUNCT3_MASK, FpDouble, [RD, FS1, NONE, NONE]),
    row("fcvt.w.d", InstId::FcvtWD, fp_match(0b1100001, 0, 0), FP_R_RS2_MASK, FpDouble, [RD, FS1, NONE, NONE]),
    row("fcvt.wu.d", InstId::FcvtWuD, fp_match(0b1100001, 1, 0), FP_R_RS2_MASK, FpDouble, [RD, FS1, NONE, NONE]),
    row("fcvt.d.w", InstId::FcvtDW, fp_match(0b1101001, 0, 0), FP_R_RS2_MASK, FpDouble, [FD, RS1, NONE, NONE]),
    row("fcvt.d.wu", InstId::FcvtDWu, fp_match(0b1101001, 1, 0), FP_R_RS2_MASK, FpDouble, [FD, RS1, NONE, NONE]),

    // ========== RV64D ==========
    row("fcvt.l.d", InstId::FcvtLD, fp_match(0b1100001, 2, 0), FP_R_RS2_MASK, FpDouble, [RD, FS1, NONE, NONE]),
    row("fcvt.lu.d", InstId::FcvtLuD, fp_match(0b1100001, 3, 0), FP_R_RS2_MASK, FpDouble, [RD, FS1, NONE, NONE]),
    row("fmv.x.d", InstId::FmvXD, fp_match(0b1110001, 0, 0b000), FP_R_RS2_FUNCT3_MASK, FpDouble, [RD, FS1, NONE, NONE]),
    row("fcvt.d.l", InstId::FcvtDL, fp_match(0b1101001, 2, 0), FP_R_RS2_MASK, FpDouble, [FD, RS1, NONE, NONE]),
    row("fcvt.d.lu", InstId::FcvtDLu, fp_match(0b1101001, 3, 0), FP_R_RS2_MASK, FpDouble, [FD, RS1, NONE, NONE]),
    row("fmv.d.x", InstId::FmvDX, fp_match(0b1111001, 0, 0b000), FP_R_RS2_FUNCT3_MASK, FpDouble, [FD, RS1, NONE, NONE]),

    // ========== 特权指令 ==========
    system("mret", InstId::Mret, 0x3020_0073),
    system("uret", InstId::Uret, 0x0020_0073),
    system("sret", InstId::Sret, 0x1020_0073),
    system("wfi", InstId::Wfi, 0x1050_0073),

    // ========== C ==========
    compressed("c.addi4spn", InstId::CAddi4spn),
    compressed("c.fld", InstId::CFld),
    compressed("c.lq", InstId::CLq),
    compressed("c.lw", InstId::CLw),
    compressed("c.flw", InstId::CFlw),
    compressed("c.ld", InstId::CLd),
    compressed("c.fsd", InstId::CFsd),
    compressed("c.sq", InstId::CSq),
    compressed("c.sw", InstId::CSw),
    compressed("c.fsw", InstId::CFsw),
    compressed("c.sd", InstId::CSd),
    compressed("c.addi", InstId::CAddi),
    compressed("c.jal", InstId::CJal),
    compressed("c.li", InstId::CLi),
    compressed("c.addi16sp", InstId::CAddi16sp),
    compressed("c.lui", InstId::CLui),
    compressed("c.srli", InstId::CSrli),
    compressed("c.srli64", InstId::CSrli64),
    compressed("c.srai", InstId::CSrai),
    compressed("c.srai64", InstId::CSrai64),
    compressed("c.andi", InstId::CAndi),
    compressed("c.sub", InstId::CSub),
    compressed("c.xor", InstId::CXor),
    compressed("c.or", InstId::COr),
    compressed("c.and", InstId::CAnd),
    compressed("c.subw", InstId::CSubw),
    compressed("c.addw", InstId::CAddw),
    compressed("c.j", InstId::CJ),
    compressed("c.beqz", InstId::CBeqz),
    compressed("c.bnez", InstId::CBnez),
    compressed("c.slli", InstId::CSlli),
    compressed("c.slli64", InstId::CSlli64),
    compressed("c.fldsp", InstId::CFldsp),
    compressed("c.lwsp", InstId::CLwsp),
    compressed("c.flwsp", InstId::CFlwsp),
    compressed("c.jr", InstId::CJr),
    compressed("c.ebreak", InstId::CEbreak),
    compressed("c.jalr", InstId::CJalr),
    compressed("c.add", InstId::CAdd),
    compressed("c.fsdsp", InstId::CFsdsp),
    compressed("c.swsp", InstId::CSwsp),
    compressed("c.fswsp", InstId::CFswsp),
];
