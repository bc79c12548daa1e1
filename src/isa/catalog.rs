//! 指令目录
//!
//! 持有有序的 `'static` 编码表和名称索引，提供按编号、按下标、按名称的
//! 查找，以及表项优先级校验。查找失败一律返回 `illegal` 表项，不会报错。
//!
//! 目录在启动时构建一次，通过 `Arc<Catalog>` 在解码器和会话之间共享。

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::entry::CatalogEntry;
use super::fields::EXACT_MASK;
use super::inst_id::InstId;
use super::table::STANDARD_TABLE;

/// 自定义编码表不合法
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("instruction table is empty")]
    Empty,
    #[error("entry 0 must be the illegal sentinel (code = mask = 0xFFFFFFFF), found {0}")]
    MissingIllegal(&'static str),
    #[error("entry {index} ({name}) has id {id:?} whose index is {}", .id.index())]
    IndexMismatch {
        index: usize,
        name: &'static str,
        id: InstId,
    },
    #[error("duplicate instruction name {0}")]
    DuplicateName(&'static str),
}

/// 优先级冲突：靠后的表项并不比靠前的更宽泛，却可能与之同时命中
#[derive(Debug, Clone, Copy)]
pub struct PriorityViolation {
    pub earlier: &'static CatalogEntry,
    pub later: &'static CatalogEntry,
    /// 同时匹配两者的示例指令字
    pub example_raw: u32,
}

impl std::fmt::Display for PriorityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (mask 0x{:08X}) shadows {} (mask 0x{:08X}), example 0x{:08X}",
            self.earlier.name, self.earlier.mask, self.later.name, self.later.mask, self.example_raw
        )
    }
}

/// 指令目录
pub struct Catalog {
    entries: &'static [CatalogEntry],
    by_name: HashMap<&'static str, InstId>,
}

impl Catalog {
    /// 使用标准编码表构建目录
    pub fn new() -> Self {
        Self::build(&STANDARD_TABLE)
    }

    /// 使用任意 `'static` 编码表构建目录，并校验表的结构
    pub fn from_entries(entries: &'static [CatalogEntry]) -> Result<Self, CatalogError> {
        let first = entries.first().ok_or(CatalogError::Empty)?;
        if first.id != InstId::Illegal || first.code != EXACT_MASK || first.mask != EXACT_MASK {
            return Err(CatalogError::MissingIllegal(first.name));
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.id.index() != index {
                return Err(CatalogError::IndexMismatch {
                    index,
                    name: entry.name,
                    id: entry.id,
                });
            }
        }

        let catalog = Self::build(entries);
        if catalog.by_name.len() != entries.len() {
            let mut seen = std::collections::HashSet::new();
            if let Some(dup) = entries.iter().find(|e| !seen.insert(e.name)) {
                return Err(CatalogError::DuplicateName(dup.name));
            }
        }
        Ok(catalog)
    }

    fn build(entries: &'static [CatalogEntry]) -> Self {
        let by_name: HashMap<_, _> = entries.iter().map(|e| (e.name, e.id)).collect();
        debug!(
            entries = entries.len(),
            placeholders = entries.iter().filter(|e| e.is_placeholder()).count(),
            "instruction catalog built"
        );
        Self { entries, by_name }
    }

    /// `illegal` 兜底表项
    pub fn illegal(&self) -> &'static CatalogEntry {
        &self.entries[0]
    }

    pub fn by_id(&self, id: InstId) -> &'static CatalogEntry {
        self.by_index(id.index())
    }

    /// 越界返回 `illegal`
    pub fn by_index(&self, index: usize) -> &'static CatalogEntry {
        let entries = self.entries;
        entries.get(index).unwrap_or(&entries[0])
    }

    /// 未知名称返回 `illegal`
    pub fn by_name(&self, name: &str) -> &'static CatalogEntry {
        match self.by_name.get(name) {
            Some(&id) => self.by_id(id),
            None => self.illegal(),
        }
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 参与按字匹配的表项（排除占位项），保持声明顺序
    pub fn matchable(&self) -> impl Iterator<Item = &'static CatalogEntry> {
        self.entries.iter().filter(|e| !e.is_placeholder())
    }

    /// 检查声明顺序是否满足优先级要求
    ///
    /// 对任意两条非占位表项 i < j，若它们可能同时命中，
    /// 则 j 的 mask 必须是 i 的 mask 的真子集。
    pub fn priority_violations(&self) -> Vec<PriorityViolation> {
        let mut violations = Vec::new();
        let entries = self.entries;

        for (i, earlier) in entries.iter().enumerate() {
            if earlier.is_placeholder() {
                continue;
            }
            for later in entries.iter().skip(i + 1) {
                if later.is_placeholder() || !earlier.overlaps(later) {
                    continue;
                }
                if !earlier.is_strictly_more_specific_than(later) {
                    violations.push(PriorityViolation {
                        earlier,
                        later,
                        example_raw: earlier.overlap_example(later),
                    });
                }
            }
        }

        violations
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("entries", &self.entries.len())
            .finish()
    }
}
