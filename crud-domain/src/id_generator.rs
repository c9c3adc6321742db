//! 标识生成器（IdGenerator）
//!
//! 为内存版数据服务等存储在创建时分配新标识。
//!
use crate::entity_id::EntityId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub trait IdGenerator<Id>: Send + Sync {
    fn next_id(&self) -> Id;
}

impl<Id, F> IdGenerator<Id> for F
where
    F: Fn() -> Id + Send + Sync,
{
    fn next_id(&self) -> Id {
        self()
    }
}

/// 自增序列（从 1 开始，0 保留为空标识）
///
/// 适用于任何可由 `u64` 转换得到的标识（含 `u32`、`i64` 等较窄类型）。
/// 序列超出目标类型范围时返回空标识，由存储按“无可用标识”处理。
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id> IdGenerator<Id> for SequentialIds
where
    Id: TryFrom<u64> + EntityId,
{
    fn next_id(&self) -> Id {
        Id::try_from(self.next.fetch_add(1, Ordering::Relaxed))
            .unwrap_or_else(|_| Id::empty())
    }
}

/// 随机 UUID（v4）
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl<Id> IdGenerator<Id> for UuidIds
where
    Id: From<Uuid>,
{
    fn next_id(&self) -> Id {
        Id::from(Uuid::new_v4())
    }
}
