//! 领域服务（DomainService）
//!
//! 面向应用层的通用 CRUD 编排器：校验调用方输入、在变更/删除前确认实体存在，
//! 并在新增与更新前后执行可选钩子；存储逻辑全部委托给注入的 `EntityDataService`。
//!
//! 错误策略：
//! - 参数校验失败立即返回 `InvalidArgument`，不触达数据服务；
//! - 按标识查找未命中统一转换为 `NotFound`（携带标识）；
//! - 数据服务返回的其它错误原样透传。
//!
use crate::{
    data_service::EntityDataService,
    entity::{Entity, entity_name},
    entity_id::EntityId,
    error::{DomainError, DomainResult},
    hooks::{AddHooks, UpdateHooks},
};
use std::marker::PhantomData;
use tracing::{debug, instrument, warn};

/// 通用领域服务。
///
/// - `E`：实体类型（实现 `Entity`）
/// - `S`：数据服务（实现 `EntityDataService<E>`）
///
/// 自身不持有任何状态，可在多个调用方之间共享。
pub struct DomainService<E, S>
where
    E: Entity,
    S: EntityDataService<E>,
{
    data_service: S,
    _marker: PhantomData<E>,
}

impl<E, S> DomainService<E, S>
where
    E: Entity,
    S: EntityDataService<E>,
{
    pub fn new(data_service: S) -> Self {
        Self {
            data_service,
            _marker: PhantomData,
        }
    }

    /// 注入的数据服务，便于上层服务组合使用
    pub fn data_service(&self) -> &S {
        &self.data_service
    }

    /// 返回全部实体，不做过滤与校验
    #[instrument(skip_all, fields(entity = entity_name::<E>()))]
    pub async fn get_all(&self) -> DomainResult<Vec<E>> {
        self.data_service.get_all().await
    }

    /// 按标识获取实体；空标识返回 `InvalidArgument`，未命中返回 `NotFound`
    #[instrument(skip_all, fields(entity = entity_name::<E>(), id = %id))]
    pub async fn get_by_id(&self, id: &E::Id) -> DomainResult<E> {
        if id.is_empty() {
            return Err(reject_empty_id());
        }

        match self.data_service.get_by_id(id).await? {
            Some(entity) => Ok(entity),
            None => {
                debug!("entity not found");
                Err(DomainError::not_found::<E>(id))
            }
        }
    }

    /// 新增实体（无钩子）
    pub async fn add(&self, entity: impl Into<Option<E>> + Send) -> DomainResult<E> {
        self.add_with(entity, AddHooks::default()).await
    }

    /// 新增实体：`pre_process(entity)` → 数据服务创建 → `post_process(created)`
    #[instrument(skip_all, fields(entity = entity_name::<E>()))]
    pub async fn add_with(
        &self,
        entity: impl Into<Option<E>> + Send,
        hooks: AddHooks<'_, E>,
    ) -> DomainResult<E> {
        let Some(mut entity) = entity.into() else {
            return Err(reject_absent_entity());
        };

        let AddHooks {
            pre_process,
            post_process,
        } = hooks;

        if let Some(pre_process) = pre_process {
            pre_process(&mut entity)?;
        }

        let mut created = self.data_service.add(Some(entity)).await?;

        if let Some(post_process) = post_process {
            post_process(&mut created)?;
        }

        debug!(id = %created.id(), "entity added");
        Ok(created)
    }

    /// 更新实体（无钩子）
    pub async fn update(
        &self,
        id: &E::Id,
        new_entity: impl Into<Option<E>> + Send,
    ) -> DomainResult<E> {
        self.update_with(id, new_entity, UpdateHooks::default())
            .await
    }

    /// 更新实体：
    /// 1. 校验标识与新实体；
    /// 2. 通过 `get_by_id` 加载旧实体（不存在时返回 `NotFound`）；
    /// 3. `pre_process(old, new)` → 数据服务更新 → `post_process(updated)`。
    #[instrument(skip_all, fields(entity = entity_name::<E>(), id = %id))]
    pub async fn update_with(
        &self,
        id: &E::Id,
        new_entity: impl Into<Option<E>> + Send,
        hooks: UpdateHooks<'_, E>,
    ) -> DomainResult<E> {
        if id.is_empty() {
            return Err(reject_empty_id());
        }

        let Some(mut new_entity) = new_entity.into() else {
            return Err(reject_absent_entity());
        };

        let old_entity = self.get_by_id(id).await?;

        let UpdateHooks {
            pre_process,
            post_process,
        } = hooks;

        if let Some(pre_process) = pre_process {
            pre_process(&old_entity, &mut new_entity)?;
        }

        let mut updated = self.data_service.update(Some(new_entity)).await?;

        if let Some(post_process) = post_process {
            post_process(&mut updated)?;
        }

        debug!("entity updated");
        Ok(updated)
    }

    /// 删除实体；实体须存在，否则返回 `NotFound`
    #[instrument(skip_all, fields(entity = entity_name::<E>(), id = %id))]
    pub async fn delete(&self, id: &E::Id) -> DomainResult<()> {
        if id.is_empty() {
            return Err(reject_empty_id());
        }

        let entity = self.get_by_id(id).await?;

        self.data_service.delete(&entity).await?;

        debug!("entity deleted");
        Ok(())
    }
}

fn reject_empty_id() -> DomainError {
    warn!("rejected empty id");
    DomainError::invalid_argument("id must not be empty")
}

fn reject_absent_entity() -> DomainError {
    warn!("rejected absent entity");
    DomainError::invalid_argument("entity must not be absent")
}
