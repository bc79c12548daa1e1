//! 反汇编文本
//!
//! 按表项的操作数描述符把 `DecodedInst` 渲染成汇编文本，
//! 供 trace 与 `disas` 命令使用。

use std::fmt;

use super::decoded_inst::{DecodedInst, RoundingMode};
use super::entry::InstType;
use super::operand::{Field, OperandType};
use super::regs;

/// FENCE 的 pred/succ 集合写法，例如 `iorw`
fn fence_set(bits: i32) -> String {
    let set: String = [(8, 'i'), (4, 'o'), (2, 'r'), (1, 'w')]
        .iter()
        .filter(|(bit, _)| bits & bit != 0)
        .map(|&(_, c)| c)
        .collect();
    if set.is_empty() { "0".to_string() } else { set }
}

fn reg_name(operand_type: OperandType, reg: i32) -> &'static str {
    match operand_type {
        OperandType::FpReg => regs::fp_reg_name(reg as u32),
        _ => regs::int_reg_name(reg as u32),
    }
}

/// 渲染第 i 个操作数
fn operand_text(di: &DecodedInst, i: usize) -> Option<String> {
    let entry = di.entry()?;
    let op = entry.operand(i);
    let value = di.operand(i);
    let text = match op.operand_type {
        OperandType::None => return None,
        OperandType::IntReg | OperandType::FpReg => reg_name(op.operand_type, value).to_string(),
        OperandType::CsReg => match regs::csr_name(value as u32) {
            Some(name) => name.to_string(),
            None => format!("0x{:x}", value),
        },
        OperandType::Imm => match op.field {
            Field::ImmU => format!("0x{:x}", value),
            Field::Pred | Field::Succ => fence_set(value),
            _ => value.to_string(),
        },
    };
    Some(text)
}

impl fmt::Display for DecodedInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(entry) = self.entry() else {
            return write!(f, "illegal");
        };
        if entry.id.is_illegal() {
            return write!(f, "illegal");
        }

        let op = |i| operand_text(self, i).unwrap_or_default();

        match entry.inst_type {
            // rd, imm(rs1)
            InstType::Load => write!(f, "{} {}, {}({})", entry.name, op(0), op(2), op(1)),
            // rs2, imm(rs1)
            InstType::Store => write!(f, "{} {}, {}({})", entry.name, op(1), op(2), op(0)),
            // rd, csr, rs1/zimm
            InstType::Csr => write!(f, "{} {}, {}, {}", entry.name, op(0), op(2), op(1)),
            // lr: rd, (rs1)；sc/amo: rd, rs2, (rs1)
            InstType::Atomic if entry.operand_count() == 2 => {
                write!(f, "{} {}, ({})", entry.name, op(0), op(1))
            }
            InstType::Atomic => write!(f, "{} {}, {}, ({})", entry.name, op(0), op(2), op(1)),
            _ => {
                let ops: Vec<String> = (0..4).filter_map(|i| operand_text(self, i)).collect();
                write!(f, "{}", entry.name)?;
                if !ops.is_empty() {
                    write!(f, " {}", ops.join(", "))?;
                }
                if entry.has_rounding_mode() && self.rounding_mode() != RoundingMode::Dyn {
                    write!(f, ", {}", self.rounding_mode().mnemonic())?;
                }
                Ok(())
            }
        }
    }
}
