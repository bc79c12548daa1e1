//! 命令参数解析

use crate::hart::Location;
use crate::isa::regs;

use super::error::CommandError;

/// 十进制或 `0x` 开头的十六进制无符号数
pub fn parse_number(s: &str) -> Result<u64, CommandError> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|_| CommandError::BadNumber(s.to_string()))
}

/// 写入值，允许负数（按补码写入）
pub fn parse_value(s: &str) -> Result<u64, CommandError> {
    match s.strip_prefix('-') {
        Some(rest) => {
            let magnitude = parse_number(rest)?;
            if magnitude > i64::MAX as u64 + 1 {
                return Err(CommandError::BadNumber(s.to_string()));
            }
            Ok(magnitude.wrapping_neg())
        }
        None => parse_number(s),
    }
}

/// peek/poke 的资源种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    IntReg,
    FpReg,
    Csr,
    Memory,
    Pc,
}

impl Resource {
    pub fn parse(s: &str) -> Result<Self, CommandError> {
        match s {
            "r" => Ok(Self::IntReg),
            "f" => Ok(Self::FpReg),
            "c" => Ok(Self::Csr),
            "m" => Ok(Self::Memory),
            "pc" => Ok(Self::Pc),
            _ => Err(CommandError::UnknownResource(s.to_string())),
        }
    }

    /// 除 pc 外都需要一个位置参数
    pub fn takes_location(self) -> bool {
        self != Self::Pc
    }

    pub fn location(self, arg: Option<&str>) -> Result<Location, CommandError> {
        let Some(arg) = arg else {
            return Ok(Location::Pc);
        };
        match self {
            Self::IntReg => regs::parse_int_reg(arg)
                .map(Location::IntReg)
                .ok_or_else(|| unknown_register("integer", arg)),
            Self::FpReg => regs::parse_fp_reg(arg)
                .map(Location::FpReg)
                .ok_or_else(|| unknown_register("fp", arg)),
            Self::Csr => regs::parse_csr(arg)
                .map(Location::Csr)
                .ok_or_else(|| unknown_register("csr", arg)),
            Self::Memory => parse_number(arg).map(Location::Memory),
            Self::Pc => Ok(Location::Pc),
        }
    }
}

fn unknown_register(kind: &'static str, name: &str) -> CommandError {
    CommandError::UnknownRegister {
        kind,
        name: name.to_string(),
    }
}
