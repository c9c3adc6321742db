//! 数据服务契约测试套件（crud-testkit）
//!
//! 一组写一次、对所有具体存储复用的行为断言，确认各 `EntityDataService`
//! 实现遵循相同的 CRUD 语义（领域服务正是依赖这些语义）。
//!
//! 用法：为被测存储实现 `DataServiceFixture`，然后
//! - 以 `data_service_contract_tests!(模块名, 夹具表达式)` 为每个用例生成一个
//!   `#[tokio::test]`（调用方需依赖 `tokio`）；或
//! - 在单个测试中调用 `verify_data_service_contract(|| 夹具)`。
//!
pub mod contract;
pub mod fixture;

pub use contract::verify_data_service_contract;
pub use fixture::{DataServiceFixture, IdOf};

/// 为给定夹具生成全部契约用例，每个用例一个测试、一个新夹具
#[macro_export]
macro_rules! data_service_contract_tests {
    (@cases $fixture:expr; $($case:ident),+ $(,)?) => {
        $(
            #[tokio::test]
            async fn $case() {
                let fixture = $fixture;
                $crate::contract::$case(&fixture).await;
            }
        )+
    };
    ($name:ident, $fixture:expr) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;

            $crate::data_service_contract_tests!(
                @cases $fixture;
                add_valid_entity_assigns_identity,
                add_with_preset_unused_id_keeps_identity,
                add_absent_entity_is_invalid_argument,
                get_by_id_returns_seeded_entity,
                get_by_empty_id_returns_none,
                get_by_unused_id_returns_none,
                update_seeded_entity_keeps_identity,
                update_transient_entity_follows_upsert_capability,
                update_unseeded_id_fails,
                update_absent_entity_is_invalid_argument,
                delete_seeded_entity_removes_it,
                delete_transient_entity_fails,
                delete_unseeded_id_fails,
            );
        }
    };
}
