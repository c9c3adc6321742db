//! 通用 CRUD 领域服务基础库（crud-domain）
//!
//! 提供围绕实体数据访问接口的一层薄而可复用的领域编排：
//! - 实体（`entity`）与实体标识（`entity_id`）抽象，约定“空标识”即未持久化；
//! - 数据访问协议（`data_service`）：`get_all/get_by_id/add/update/delete`；
//! - 领域服务（`domain_service`）：参数校验、存在性检查、前后置钩子（`hooks`）；
//! - 内存版数据服务（`inmemory_data_service`）与标识生成器（`id_generator`），
//!   用于测试、示例与本地开发。
//!
//! 本 crate 不关心具体存储实现，仅定义协议与最小必要的错误类型（`error`），
//! 具体后端（ORM、数据库等）由上层实现 `EntityDataService` 并注入。
//!
//! 典型用法：
//! 1. 为实体实现 `Entity`（或使用 `crud-macros` 的 `#[entity]`）；
//! 2. 提供一个 `EntityDataService` 实现；
//! 3. 以该实现构造 `DomainService`，在应用层调用并按需传入钩子。
//!
pub mod data_service;
pub mod domain_service;
pub mod entity;
pub mod entity_id;
pub mod error;
pub mod hooks;
pub mod id_generator;
pub mod inmemory_data_service;

pub use data_service::{EntityDataService, StoreCapabilities};
pub use domain_service::DomainService;
pub use entity::Entity;
pub use entity_id::EntityId;
pub use error::{DomainError, DomainResult};
pub use hooks::{AddHooks, UpdateHooks};
pub use id_generator::{IdGenerator, SequentialIds, UuidIds};
pub use inmemory_data_service::InMemoryDataService;
