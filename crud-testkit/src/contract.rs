//! 数据访问契约用例
//!
//! 每个函数是一个独立用例，失败时 panic。用例只操作数据服务本身，
//! 不经过 `DomainService`：例如空标识查询在这里应返回 `None`，而非错误。
//!
use crate::fixture::{DataServiceFixture, IdOf};
use crud_domain::{DomainResult, Entity, EntityDataService, EntityId};
use std::fmt::Debug;
use tracing::debug;

fn succeeded<T>(result: DomainResult<T>, op: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{op} should succeed, got error: {err}"),
    }
}

fn failed<T: Debug>(result: DomainResult<T>, op: &str) -> crud_domain::DomainError {
    match result {
        Ok(value) => panic!("{op} should fail, got {value:?}"),
        Err(err) => err,
    }
}

fn transient_entity<F: DataServiceFixture>(fixture: &F) -> F::Entity {
    let entity = fixture.new_entity();
    assert!(
        entity.is_transient(),
        "fixture produced an entity with id {} instead of an empty one",
        entity.id()
    );
    entity
}

fn unused_id<F: DataServiceFixture>(fixture: &F) -> IdOf<F> {
    let id = fixture.unused_id();
    assert!(!id.is_empty(), "fixture produced an empty unused id");
    id
}

/// 带有未使用标识、从未存储过的实体
fn unseeded_entity<F: DataServiceFixture>(fixture: &F) -> F::Entity {
    let mut entity = transient_entity(fixture);
    entity.set_id(unused_id(fixture));
    entity
}

async fn seeded_entity<F: DataServiceFixture>(fixture: &F) -> F::Entity {
    let seeded = succeeded(fixture.seed(transient_entity(fixture)).await, "seed");
    assert!(!seeded.is_transient(), "seeded entity has an empty id");
    seeded
}

async fn count<F: DataServiceFixture>(fixture: &F) -> usize {
    succeeded(fixture.data_service().get_all().await, "get_all").len()
}

pub async fn add_valid_entity_assigns_identity<F: DataServiceFixture>(fixture: &F) {
    let entity = transient_entity(fixture);

    let created = succeeded(fixture.data_service().add(Some(entity)).await, "add");

    assert!(
        !created.is_transient(),
        "add returned an entity with an empty id"
    );
}

pub async fn add_with_preset_unused_id_keeps_identity<F: DataServiceFixture>(fixture: &F) {
    let entity = unseeded_entity(fixture);
    let preset = entity.id().clone();

    let created = succeeded(fixture.data_service().add(Some(entity)).await, "add");

    assert!(
        !created.is_transient(),
        "add with preset id {preset} returned an empty id"
    );
    if fixture.data_service().capabilities().honors_preset_id() {
        assert_eq!(created.id(), &preset, "store declared it honors preset ids");
    }
}

pub async fn add_absent_entity_is_invalid_argument<F: DataServiceFixture>(fixture: &F) {
    let before = count(fixture).await;

    let err = failed(fixture.data_service().add(None).await, "add(None)");

    assert!(err.is_invalid_argument(), "unexpected error: {err:?}");
    assert_eq!(count(fixture).await, before, "add(None) changed the store");
}

pub async fn get_by_id_returns_seeded_entity<F: DataServiceFixture>(fixture: &F) {
    let seeded = seeded_entity(fixture).await;

    let found = succeeded(
        fixture.data_service().get_by_id(seeded.id()).await,
        "get_by_id",
    );

    match found {
        Some(found) => assert_eq!(found.id(), seeded.id()),
        None => panic!("seeded entity {} was not found", seeded.id()),
    }
}

pub async fn get_by_empty_id_returns_none<F: DataServiceFixture>(fixture: &F) {
    seeded_entity(fixture).await;

    let found = succeeded(
        fixture.data_service().get_by_id(&<IdOf<F> as EntityId>::empty()).await,
        "get_by_id(empty)",
    );

    assert!(found.is_none(), "empty id matched {found:?}");
}

pub async fn get_by_unused_id_returns_none<F: DataServiceFixture>(fixture: &F) {
    let id = unused_id(fixture);

    let found = succeeded(
        fixture.data_service().get_by_id(&id).await,
        "get_by_id(unused)",
    );

    assert!(found.is_none(), "unused id {id} matched {found:?}");
}

pub async fn update_seeded_entity_keeps_identity<F: DataServiceFixture>(fixture: &F) {
    let seeded = seeded_entity(fixture).await;

    let updated = succeeded(
        fixture.data_service().update(Some(seeded.clone())).await,
        "update",
    );

    assert_eq!(updated.id(), seeded.id());
}

/// upsert 行为因存储而异：声明支持时必须创建记录；否则允许失败，但不得返回空标识
pub async fn update_transient_entity_follows_upsert_capability<F: DataServiceFixture>(
    fixture: &F,
) {
    let upsert = fixture.data_service().capabilities().upsert_on_update();
    let entity = transient_entity(fixture);

    match fixture.data_service().update(Some(entity)).await {
        Ok(created) => {
            assert!(
                !created.is_transient(),
                "update of a transient entity returned an empty id"
            );
            if upsert {
                let found = succeeded(
                    fixture.data_service().get_by_id(created.id()).await,
                    "get_by_id",
                );
                assert!(found.is_some(), "upserted entity {} is missing", created.id());
            }
        }
        Err(err) => assert!(
            !upsert,
            "store declared upsert on update but failed: {err}"
        ),
    }
}

pub async fn update_unseeded_id_fails<F: DataServiceFixture>(fixture: &F) {
    let entity = unseeded_entity(fixture);

    let err = failed(
        fixture.data_service().update(Some(entity)).await,
        "update(unseeded)",
    );

    assert!(
        !err.is_invalid_argument(),
        "a well-formed entity was rejected as invalid: {err}"
    );
}

pub async fn update_absent_entity_is_invalid_argument<F: DataServiceFixture>(fixture: &F) {
    let err = failed(fixture.data_service().update(None).await, "update(None)");

    assert!(err.is_invalid_argument(), "unexpected error: {err:?}");
}

pub async fn delete_seeded_entity_removes_it<F: DataServiceFixture>(fixture: &F) {
    let seeded = seeded_entity(fixture).await;

    succeeded(fixture.data_service().delete(&seeded).await, "delete");

    let found = succeeded(
        fixture.data_service().get_by_id(seeded.id()).await,
        "get_by_id",
    );
    assert!(found.is_none(), "deleted entity is still stored: {found:?}");
}

pub async fn delete_transient_entity_fails<F: DataServiceFixture>(fixture: &F) {
    seeded_entity(fixture).await;
    let entity = transient_entity(fixture);

    failed(
        fixture.data_service().delete(&entity).await,
        "delete(empty id)",
    );
}

pub async fn delete_unseeded_id_fails<F: DataServiceFixture>(fixture: &F) {
    let entity = unseeded_entity(fixture);

    failed(
        fixture.data_service().delete(&entity).await,
        "delete(unseeded)",
    );
}

/// 依次运行全部用例，每个用例使用新的夹具
pub async fn verify_data_service_contract<F, M>(make_fixture: M)
where
    F: DataServiceFixture,
    M: Fn() -> F,
{
    macro_rules! run {
        ($($case:ident),+ $(,)?) => {
            $(
                debug!(case = stringify!($case), "running data service contract case");
                $case(&make_fixture()).await;
            )+
        };
    }

    run!(
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
