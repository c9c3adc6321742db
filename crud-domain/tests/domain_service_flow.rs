use anyhow::Result as AnyResult;
use crud_domain::{
    AddHooks, DomainError, DomainService, Entity, EntityDataService, InMemoryDataService,
    StoreCapabilities, UpdateHooks,
};
use crud_macros::{entity, entity_id};
use std::sync::Arc;
use uuid::Uuid;

#[entity_id]
struct ArticleId(u64);

#[entity(id = ArticleId)]
struct Article {
    title: String,
    revision: u32,
}

impl Article {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }
}

#[entity_id]
struct TicketId(Uuid);

#[entity(id = TicketId)]
struct Ticket {
    subject: String,
}

type ArticleService = DomainService<Article, Arc<InMemoryDataService<Article>>>;

fn article_service() -> (ArticleService, Arc<InMemoryDataService<Article>>) {
    let store = Arc::new(InMemoryDataService::<Article>::sequential());
    (DomainService::new(store.clone()), store)
}

#[tokio::test]
async fn added_entities_always_carry_identity() -> AnyResult<()> {
    let (service, _) = article_service();

    for title in ["a", "b", "c"] {
        let created = service.add(Article::titled(title)).await?;
        assert!(!created.is_transient());
    }
    assert_eq!(service.get_all().await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn round_trip_by_assigned_id() -> AnyResult<()> {
    let (service, _) = article_service();

    let created = service.add(Article::titled("hello")).await?;
    let loaded = service.get_by_id(created.id()).await?;

    assert_eq!(loaded.id(), created.id());
    assert_eq!(loaded.title, "hello");
    Ok(())
}

#[tokio::test]
async fn missing_id_is_not_found_in_service_but_absent_in_store() {
    let (service, store) = article_service();
    let missing = ArticleId::new(100);

    let err = service.get_by_id(&missing).await.unwrap_err();
    assert!(err.is_not_found(), "unexpected {err:?}");

    // 数据服务层：未命中返回 None，而非错误
    assert!(store.get_by_id(&missing).await.unwrap().is_none());
}

#[tokio::test]
async fn empty_ids_are_invalid_arguments() {
    let (service, _) = article_service();
    let empty = ArticleId::default();

    assert!(service.get_by_id(&empty).await.unwrap_err().is_invalid_argument());
    assert!(service.delete(&empty).await.unwrap_err().is_invalid_argument());
    assert!(
        service
            .update(&empty, Article::titled("x"))
            .await
            .unwrap_err()
            .is_invalid_argument()
    );
}

#[tokio::test]
async fn adding_absent_entity_leaves_store_unchanged() {
    let (service, _) = article_service();
    service.add(Article::titled("kept")).await.unwrap();
    let before = service.get_all().await.unwrap().len();

    let err = service.add(None::<Article>).await.unwrap_err();
    assert!(err.is_invalid_argument());

    assert_eq!(service.get_all().await.unwrap().len(), before);
}

#[tokio::test]
async fn deleted_entities_are_gone() {
    let (service, store) = article_service();
    let created = service.add(Article::titled("temp")).await.unwrap();

    service.delete(created.id()).await.unwrap();

    assert!(service.get_by_id(created.id()).await.unwrap_err().is_not_found());
    assert!(service.delete(created.id()).await.unwrap_err().is_not_found());
    assert!(store.is_empty());
}

#[tokio::test]
async fn updating_never_persisted_entity_fails_at_store_level() {
    let (_, store) = article_service();
    let mut phantom = Article::titled("phantom");
    phantom.set_id(ArticleId::new(100));

    let err = store.update(Some(phantom)).await.unwrap_err();
    assert!(!err.is_invalid_argument());
    assert!(matches!(err, DomainError::DataService { .. }));
}

#[tokio::test]
async fn update_with_absent_entity_fails_before_lookup() {
    let (service, _) = article_service();
    let created = service.add(Article::titled("x")).await.unwrap();

    let err = service.update(created.id(), None::<Article>).await.unwrap_err();
    assert!(err.is_invalid_argument());
}

#[tokio::test]
async fn hooks_track_revisions() -> AnyResult<()> {
    let (service, _) = article_service();

    let created = service
        .add_with(
            Article::titled("draft"),
            AddHooks::new().pre_process(|a: &mut Article| {
                a.revision = 1;
                Ok(())
            }),
        )
        .await?;
    assert_eq!(created.revision, 1);

    let mut edit = created.clone();
    edit.title = "final".into();
    let updated = service
        .update_with(
            created.id(),
            edit,
            UpdateHooks::new().pre_process(|old: &Article, new: &mut Article| {
                new.revision = old.revision + 1;
                Ok(())
            }),
        )
        .await?;

    assert_eq!(updated.revision, 2);
    let stored = service.get_by_id(created.id()).await?;
    assert_eq!((stored.title.as_str(), stored.revision), ("final", 2));
    Ok(())
}

#[tokio::test]
async fn uuid_identities_with_upsert_store() {
    let store = InMemoryDataService::<Ticket>::uuid()
        .with_capabilities(StoreCapabilities::builder().upsert_on_update(true).build());
    let service = DomainService::<Ticket, _>::new(store);

    let ticket = service
        .add(Ticket {
            subject: "printer on fire".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(!ticket.is_transient());

    // upsert 仅对数据服务层生效；领域服务仍要求有效标识
    let upserted = service
        .data_service()
        .update(Some(Ticket {
            subject: "second".into(),
            ..Default::default()
        }))
        .await
        .unwrap();
    assert!(!upserted.is_transient());
    assert_eq!(service.get_all().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_service_across_tasks() {
    let (service, store) = article_service();
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for i in 0..20 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .add(Article::titled(&format!("a-{i}")))
                .await
                .unwrap()
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    assert_eq!(store.len(), 20);
}
