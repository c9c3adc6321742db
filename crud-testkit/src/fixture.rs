//! 契约测试夹具（DataServiceFixture）
//!
//! 每个被测存储提供一个夹具：实体工厂、一个“看似合理但未被使用”的标识、
//! 被测的数据服务实例，以及预置数据的方式。标识的读写复用 `Entity::id/set_id`。
//!
use async_trait::async_trait;
use crud_domain::{DomainResult, Entity, EntityDataService};
use std::fmt::Debug;

/// 夹具实体的标识类型
pub type IdOf<F> = <<F as DataServiceFixture>::Entity as Entity>::Id;

#[async_trait]
pub trait DataServiceFixture: Send + Sync {
    type Entity: Entity + Clone + Debug + 'static;
    type DataService: EntityDataService<Self::Entity>;

    fn data_service(&self) -> &Self::DataService;

    /// 构造一个合法的新实体，标识必须为空
    fn new_entity(&self) -> Self::Entity;

    /// 格式合法、非空，但在新夹具中从未被存储过的标识
    fn unused_id(&self) -> IdOf<Self>;

    /// 预置实体，默认经由被测存储的 `add`
    async fn seed(&self, entity: Self::Entity) -> DomainResult<Self::Entity> {
        self.data_service().add(Some(entity)).await
    }
}
