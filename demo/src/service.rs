//! 客户应用服务：组合通用领域服务，并以钩子补充业务规则
use crate::customer::{Customer, CustomerId};
use chrono::Utc;
use crud_domain::{
    AddHooks, DomainError, DomainResult, DomainService, Entity, EntityDataService, UpdateHooks,
};
use tracing::info;

pub struct CustomerService<S>
where
    S: EntityDataService<Customer>,
{
    domain: DomainService<Customer, S>,
}

fn normalize(customer: &mut Customer) -> DomainResult<()> {
    customer.name = customer.name.trim().to_string();
    customer.email = customer.email.trim().to_lowercase();

    if customer.name.is_empty() {
        return Err(DomainError::invalid_argument("customer name must not be blank"));
    }
    if !customer.email.contains('@') {
        return Err(DomainError::invalid_argument(format!(
            "malformed email: {}",
            customer.email
        )));
    }
    Ok(())
}

impl<S> CustomerService<S>
where
    S: EntityDataService<Customer>,
{
    pub fn new(data_service: S) -> Self {
        Self {
            domain: DomainService::new(data_service),
        }
    }

    pub async fn register(&self, customer: Customer) -> DomainResult<Customer> {
        let hooks = AddHooks::new()
            .pre_process(|c: &mut Customer| {
                normalize(c)?;
                c.created_at = Some(Utc::now());
                Ok(())
            })
            .post_process(|c: &mut Customer| {
                info!(id = %c.id(), email = %c.email, "customer registered");
                Ok(())
            });
        self.domain.add_with(customer, hooks).await
    }

    /// 修改客户资料；创建时间沿用旧值，更新时间重新盖戳
    pub async fn amend(&self, id: &CustomerId, changes: Customer) -> DomainResult<Customer> {
        let hooks = UpdateHooks::new().pre_process(|old: &Customer, new: &mut Customer| {
            normalize(new)?;
            new.created_at = old.created_at;
            new.updated_at = Some(Utc::now());
            Ok(())
        });
        self.domain.update_with(id, changes, hooks).await
    }

    pub async fn find(&self, id: &CustomerId) -> DomainResult<Customer> {
        self.domain.get_by_id(id).await
    }

    pub async fn list(&self) -> DomainResult<Vec<Customer>> {
        self.domain.get_all().await
    }

    pub async fn remove(&self, id: &CustomerId) -> DomainResult<()> {
        self.domain.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CustomerStore;

    fn service() -> CustomerService<CustomerStore> {
        CustomerService::new(CustomerStore::new())
    }

    #[tokio::test]
    async fn register_normalizes_and_stamps() {
        let service = service();

        let created = service
            .register(Customer::new("  Ada Lovelace ", " ADA@Example.com "))
            .await
            .unwrap();

        assert!(!created.is_transient());
        assert_eq!(created.name, "Ada Lovelace");
        assert_eq!(created.email, "ada@example.com");
        assert!(created.created_at.is_some());
        assert!(created.updated_at.is_none());
    }

    #[tokio::test]
    async fn register_rejects_blank_name_before_storing() {
        let service = service();

        let err = service
            .register(Customer::new("   ", "x@example.com"))
            .await
            .unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn amend_keeps_creation_time() {
        let service = service();
        let created = service
            .register(Customer::new("Grace", "grace@example.com"))
            .await
            .unwrap();

        let mut changes = Customer::new("Grace Hopper", "GRACE@navy.mil");
        changes.set_id(created.id().clone());
        let amended = service.amend(created.id(), changes).await.unwrap();

        assert_eq!(amended.created_at, created.created_at);
        assert!(amended.updated_at.is_some());
        assert_eq!(amended.email, "grace@navy.mil");
        assert_eq!(service.find(created.id()).await.unwrap(), amended);
    }

    #[tokio::test]
    async fn amend_rejects_malformed_email_and_keeps_record() {
        let service = service();
        let created = service
            .register(Customer::new("Alan", "alan@example.com"))
            .await
            .unwrap();

        let mut changes = Customer::new("Alan", "not-an-email");
        changes.set_id(created.id().clone());
        let err = service.amend(created.id(), changes).await.unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(service.find(created.id()).await.unwrap(), created);
    }

    #[tokio::test]
    async fn removed_customer_is_not_found() {
        let service = service();
        let created = service
            .register(Customer::new("Linus", "linus@example.com"))
            .await
            .unwrap();

        service.remove(created.id()).await.unwrap();

        assert!(service.find(created.id()).await.unwrap_err().is_not_found());
        assert!(service.remove(created.id()).await.unwrap_err().is_not_found());
    }
}
