//! 指令解码器
//!
//! 按 opcode 分桶的首个命中解码。每个桶内保持表的声明顺序，
//! mask 未覆盖 opcode 的表项进入所有桶，因此桶内扫描与线性首个命中
//! 扫描的结果一致。

use std::sync::Arc;

use super::catalog::Catalog;
use super::decoded_inst::{DecodedInst, RoundingMode};
use super::entry::CatalogEntry;
use super::fields::{self, LOW7_MASK};

/// 指令解码器
pub struct Decoder {
    catalog: Arc<Catalog>,
    /// 按 opcode 分桶的表项下标
    opcode_map: [Vec<u16>; 128],
}

impl Decoder {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mut opcode_map: [Vec<u16>; 128] = std::array::from_fn(|_| Vec::new());

        for (idx, entry) in catalog.entries().iter().enumerate() {
            if entry.is_placeholder() {
                continue;
            }
            let idx = idx as u16;
            if entry.mask & LOW7_MASK == LOW7_MASK {
                opcode_map[(entry.code & LOW7_MASK) as usize].push(idx);
            } else {
                // opcode 不完全固定：凡是可能匹配的桶都放一份
                for (op, bucket) in opcode_map.iter_mut().enumerate() {
                    if (op as u32 & entry.mask) == (entry.code & entry.mask & LOW7_MASK) {
                        bucket.push(idx);
                    }
                }
            }
        }

        Self { catalog, opcode_map }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// 查找指令字命中的表项，未命中返回 `illegal`
    pub fn lookup(&self, inst: u32) -> &'static CatalogEntry {
        let opcode = fields::opcode(inst) as usize;
        for &idx in &self.opcode_map[opcode] {
            let entry = self.catalog.by_index(idx as usize);
            if entry.matches(inst) {
                return entry;
            }
        }
        self.catalog.illegal()
    }

    /// 按名称查找表项，未知名称返回 `illegal`
    pub fn lookup_by_name(&self, name: &str) -> &'static CatalogEntry {
        self.catalog.by_name(name)
    }

    /// 解码一条指令
    ///
    /// `size == 2` 的压缩指令没有位级解码，结果绑定到 `illegal`。
    pub fn decode(&self, address: u64, inst: u32, size: u32) -> DecodedInst {
        let mut di = DecodedInst::default();
        self.decode_into(&mut di, address, inst, size);
        di
    }

    /// 解码到已有缓冲中，所有字段都会被覆盖
    pub fn decode_into(&self, di: &mut DecodedInst, address: u64, inst: u32, size: u32) {
        let entry = if size == 2 {
            self.catalog.illegal()
        } else {
            self.lookup(inst)
        };

        *di = DecodedInst::new(
            address,
            inst,
            size,
            entry,
            entry.operands[0].resolve(inst) as u32,
            entry.operands[1].resolve(inst) as u32,
            entry.operands[2].resolve(inst),
            entry.operands[3].resolve(inst),
        );

        if entry.has_rounding_mode() {
            di.set_rounding_mode(RoundingMode::from(fields::rm(inst)));
        }
    }
}

impl std::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder")
            .field("catalog", &self.catalog)
            .field(
                "buckets",
                &self.opcode_map.iter().filter(|b| !b.is_empty()).count(),
            )
            .finish()
    }
}
