//! 示例：客户管理
//!
//! 演示如何为实体提供一个具体存储，并在其上组合通用领域服务。
pub mod customer;
pub mod service;
pub mod store;

pub use customer::{Customer, CustomerId};
pub use service::CustomerService;
pub use store::CustomerStore;
