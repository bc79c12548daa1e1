//! ELF 符号表
//!
//! `elf` 命令加载成功后解析同一文件的符号，供 `until` / `disas`
//! 用符号名代替地址。32 位和 64 位 RISC-V ELF 都接受。

use std::collections::HashMap;
use std::path::Path;

use elf::ElfBytes;
use elf::abi::{EM_RISCV, STT_FILE, STT_SECTION};
use elf::endian::AnyEndian;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("failed to read ELF: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse ELF: {0}")]
    Parse(#[from] elf::ParseError),
    #[error("not a RISC-V ELF (machine type 0x{0:x})")]
    NotRiscv(u16),
}

/// 符号名到地址的映射
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, u64>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析 ELF 文件中的符号
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SymbolError> {
        let data = std::fs::read(path.as_ref())?;
        Self::parse_bytes(&data)
    }

    pub fn parse_bytes(data: &[u8]) -> Result<Self, SymbolError> {
        let elf_file = ElfBytes::<AnyEndian>::minimal_parse(data)?;

        if elf_file.ehdr.e_machine != EM_RISCV {
            return Err(SymbolError::NotRiscv(elf_file.ehdr.e_machine));
        }

        let mut table = Self::new();
        if let Some((symtab, strtab)) = elf_file.symbol_table()? {
            for sym in symtab.iter() {
                // 只保留有名字且有地址的符号
                if sym.st_value == 0 || sym.st_name == 0 {
                    continue;
                }
                if matches!(sym.st_symtype(), STT_FILE | STT_SECTION) {
                    continue;
                }
                if let Ok(name) = strtab.get(sym.st_name as usize) {
                    table.insert(name, sym.st_value);
                }
            }
        }
        Ok(table)
    }

    /// 同名符号保留第一个
    pub fn insert(&mut self, name: &str, addr: u64) {
        self.symbols.entry(name.to_string()).or_insert(addr);
    }

    pub fn lookup(&self, name: &str) -> Option<u64> {
        self.symbols.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
