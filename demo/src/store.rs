//! 基于 `Mutex<HashMap>` 的客户存储
//!
//! 新增时总是重新分配标识（忽略调用方预设值），不支持 upsert。
use crate::customer::{Customer, CustomerId};
use async_trait::async_trait;
use crud_domain::{DomainError, DomainResult, Entity, EntityDataService, StoreCapabilities};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Table {
    rows: HashMap<CustomerId, Customer>,
    last_id: u64,
}

#[derive(Default)]
pub struct CustomerStore {
    table: Mutex<Table>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Table>> {
        self.table
            .lock()
            .map_err(|_| DomainError::data_service("customer table lock poisoned"))
    }
}

#[async_trait]
impl EntityDataService<Customer> for CustomerStore {
    async fn get_all(&self) -> DomainResult<Vec<Customer>> {
        let table = self.lock()?;
        let mut all: Vec<Customer> = table.rows.values().cloned().collect();
        all.sort_by_key(|c| u64::from(c.id().clone()));
        Ok(all)
    }

    async fn get_by_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>> {
        Ok(self.lock()?.rows.get(id).cloned())
    }

    async fn add(&self, entity: Option<Customer>) -> DomainResult<Customer> {
        let mut customer =
            entity.ok_or_else(|| DomainError::invalid_argument("customer must not be absent"))?;
        let mut table = self.lock()?;
        table.last_id += 1;
        customer.set_id(CustomerId::new(table.last_id));
        table.rows.insert(customer.id().clone(), customer.clone());
        Ok(customer)
    }

    async fn update(&self, entity: Option<Customer>) -> DomainResult<Customer> {
        let customer =
            entity.ok_or_else(|| DomainError::invalid_argument("customer must not be absent"))?;
        let mut table = self.lock()?;
        match table.rows.get_mut(customer.id()) {
            Some(row) => {
                *row = customer.clone();
                Ok(customer)
            }
            None => Err(DomainError::data_service(format!(
                "no customer row with id={}",
                customer.id()
            ))),
        }
    }

    async fn delete(&self, entity: &Customer) -> DomainResult<()> {
        self.lock()?
            .rows
            .remove(entity.id())
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::data_service(format!("no customer row with id={}", entity.id()))
            })
    }

    fn capabilities(&self) -> StoreCapabilities {
        StoreCapabilities::builder().honors_preset_id(false).build()
    }
}
