//! RISC-V 指令目录与解码
//!
//! 本模块提供表驱动的指令解码：
//! - `Catalog`: 有序的编码表，按编号 / 名称查找，优先级校验
//! - `Decoder`: 按 opcode 分桶的首个命中解码
//! - `DecodedInst`: 解码结果，带操作数与舍入模式
//! - `CatalogEntry`: 统一的表项定义，同时用于解码、查找和冲突检测

mod catalog;
mod decoded_inst;
mod decoder;
mod entry;
pub mod fields;
mod inst_id;
mod operand;
pub mod regs;
mod render;
mod table;

pub use catalog::{Catalog, CatalogError, PriorityViolation};
pub use decoded_inst::{DecodedInst, RoundingMode};
pub use decoder::Decoder;
pub use entry::{CatalogEntry, InstType};
pub use fields::inst_size;
pub use inst_id::InstId;
pub use operand::{Field, Operand, OperandMode, OperandType};
pub use table::STANDARD_TABLE;
