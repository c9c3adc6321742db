use chrono::{DateTime, Utc};
use crud_macros::{entity, entity_id};

#[entity_id]
pub struct CustomerId(u64);

#[entity(id = CustomerId)]
#[derive(PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }
}
