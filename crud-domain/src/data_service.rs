//! 数据访问协议（EntityDataService）
//!
//! 领域服务所依赖、契约测试所验证的最小 CRUD 协议。具体存储（ORM、数据库、内存等）
//! 由上层实现并注入；本模块只约定语义：
//! - `get_by_id`：未命中返回 `Ok(None)`（包括空标识），而非错误；
//! - `add`：分配标识；传入缺失实体时返回 `InvalidArgument`；
//! - `update`：标识不对应已存记录时失败（声明支持 upsert 的存储除外）；
//! - `delete`：实体当前未被存储时失败。
//!
use crate::entity::Entity;
use crate::error::DomainResult;
use async_trait::async_trait;
use bon::Builder;
use std::sync::Arc;

/// 存储能力声明
///
/// 用于记录各存储在“实现相关”行为上的选择，契约测试据此决定断言方式。
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCapabilities {
    /// 更新空标识实体时是否创建新记录
    #[builder(default)]
    upsert_on_update: bool,
    /// 新增时是否沿用调用方预设的（未被占用的）标识；否则重新分配
    #[builder(default = true)]
    honors_preset_id: bool,
}

impl Default for StoreCapabilities {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl StoreCapabilities {
    pub fn upsert_on_update(&self) -> bool {
        self.upsert_on_update
    }

    pub fn honors_preset_id(&self) -> bool {
        self.honors_preset_id
    }
}

#[async_trait]
pub trait EntityDataService<E>: Send + Sync
where
    E: Entity,
{
    async fn get_all(&self) -> DomainResult<Vec<E>>;

    async fn get_by_id(&self, id: &E::Id) -> DomainResult<Option<E>>;

    async fn add(&self, entity: Option<E>) -> DomainResult<E>;

    async fn update(&self, entity: Option<E>) -> DomainResult<E>;

    async fn delete(&self, entity: &E) -> DomainResult<()>;

    fn capabilities(&self) -> StoreCapabilities {
        StoreCapabilities::default()
    }
}

#[async_trait]
impl<E, T> EntityDataService<E> for Arc<T>
where
    E: Entity,
    T: EntityDataService<E> + ?Sized,
{
    async fn get_all(&self) -> DomainResult<Vec<E>> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        (**self).get_by_id(id).await
    }

    async fn add(&self, entity: Option<E>) -> DomainResult<E> {
        (**self).add(entity).await
    }

    async fn update(&self, entity: Option<E>) -> DomainResult<E> {
        (**self).update(entity).await
    }

    async fn delete(&self, entity: &E) -> DomainResult<()> {
        (**self).delete(entity).await
    }

    fn capabilities(&self) -> StoreCapabilities {
        (**self).capabilities()
    }
}
