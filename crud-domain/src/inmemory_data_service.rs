//! 内存版数据服务（InMemoryDataService）
//!
//! 基于 `DashMap` 的 `EntityDataService` 参考实现，满足完整的 CRUD 契约：
//! - `add`：空标识时由 `IdGenerator` 分配；预设标识默认沿用，已被占用时返回 `Conflict`；
//! - `update`：标识未存储时失败；空标识仅在声明 `upsert_on_update` 时创建新记录；
//! - `delete`：空标识或未存储的实体均失败。
//!
//! 典型用途：测试环境、示例与本地开发。
use crate::{
    data_service::{EntityDataService, StoreCapabilities},
    entity::{Entity, entity_name},
    entity_id::EntityId,
    error::{DomainError, DomainResult},
    id_generator::{IdGenerator, SequentialIds, UuidIds},
};
use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use tracing::trace;
use uuid::Uuid;

// 生成器连续返回已占用/空标识的容忍次数
const MAX_ID_ATTEMPTS: usize = 64;

pub struct InMemoryDataService<E>
where
    E: Entity,
{
    entries: DashMap<E::Id, E>,
    id_generator: Box<dyn IdGenerator<E::Id>>,
    capabilities: StoreCapabilities,
}

impl<E> InMemoryDataService<E>
where
    E: Entity + Clone,
{
    /// 使用给定标识生成器创建一个空存储
    pub fn new(id_generator: impl IdGenerator<E::Id> + 'static) -> Self {
        Self {
            entries: DashMap::new(),
            id_generator: Box::new(id_generator),
            capabilities: StoreCapabilities::default(),
        }
    }

    /// 自增整数标识
    pub fn sequential() -> Self
    where
        E::Id: TryFrom<u64>,
    {
        Self::new(SequentialIds::new())
    }

    /// 随机 UUID 标识
    pub fn uuid() -> Self
    where
        E::Id: From<Uuid>,
    {
        Self::new(UuidIds)
    }

    pub fn with_capabilities(mut self, capabilities: StoreCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_free_id(&self) -> DomainResult<E::Id> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_generator.next_id();
            if !id.is_empty() && !self.entries.contains_key(&id) {
                return Ok(id);
            }
        }

        Err(DomainError::data_service(format!(
            "id generator for {} produced no free id after {MAX_ID_ATTEMPTS} attempts",
            entity_name::<E>()
        )))
    }

    fn insert_new(&self, entity: E) -> DomainResult<E> {
        match self.entries.entry(entity.id().clone()) {
            Entry::Occupied(_) => Err(DomainError::conflict::<E>(entity.id())),
            Entry::Vacant(slot) => {
                trace!(entity = entity_name::<E>(), id = %entity.id(), "inserted");
                slot.insert(entity.clone());
                Ok(entity)
            }
        }
    }
}

#[async_trait]
impl<E> EntityDataService<E> for InMemoryDataService<E>
where
    E: Entity + Clone,
{
    async fn get_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.entries.iter().map(|e| e.value().clone()).collect())
    }

    async fn get_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        Ok(self.entries.get(id).map(|e| e.value().clone()))
    }

    async fn add(&self, entity: Option<E>) -> DomainResult<E> {
        let Some(mut entity) = entity else {
            return Err(DomainError::invalid_argument("entity must not be absent"));
        };

        if entity.is_transient() || !self.capabilities.honors_preset_id() {
            entity.set_id(self.next_free_id()?);
        }

        self.insert_new(entity)
    }

    async fn update(&self, entity: Option<E>) -> DomainResult<E> {
        let Some(mut entity) = entity else {
            return Err(DomainError::invalid_argument("entity must not be absent"));
        };

        if entity.is_transient() {
            if !self.capabilities.upsert_on_update() {
                return Err(DomainError::data_service(format!(
                    "cannot update {} without identity",
                    entity_name::<E>()
                )));
            }
            entity.set_id(self.next_free_id()?);
            return self.insert_new(entity);
        }

        match self.entries.get_mut(entity.id()) {
            Some(mut stored) => {
                *stored = entity.clone();
                trace!(entity = entity_name::<E>(), id = %entity.id(), "replaced");
                Ok(entity)
            }
            None => Err(DomainError::data_service(format!(
                "cannot update {} with id={}: no such record",
                entity_name::<E>(),
                entity.id()
            ))),
        }
    }

    async fn delete(&self, entity: &E) -> DomainResult<()> {
        if entity.is_transient() {
            return Err(DomainError::data_service(format!(
                "cannot delete {} without identity",
                entity_name::<E>()
            )));
        }

        match self.entries.remove(entity.id()) {
            Some(_) => {
                trace!(entity = entity_name::<E>(), id = %entity.id(), "removed");
                Ok(())
            }
            None => Err(DomainError::data_service(format!(
                "cannot delete {} with id={}: no such record",
                entity_name::<E>(),
                entity.id()
            ))),
        }
    }

    fn capabilities(&self) -> StoreCapabilities {
        self.capabilities
    }
}
