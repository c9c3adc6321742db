//! `crud-domain` 的过程宏
//!
//! - `#[entity]`：为具名字段结构体补齐 `id` 字段并实现 `Entity`；
//! - `#[entity_id]`：为单字段元组结构体生成标识类型所需的实现（含 `EntityId`）。
//!
use proc_macro::TokenStream;

mod attr_utils;
mod derive_utils;
mod entity;
mod entity_id;
mod field_utils;

/// 实体宏
/// - 若缺失则追加字段 `id: IdType`，并将其置于字段最前
/// - 合并派生：`Debug`（可关闭）、`Clone`、`Default`、`Serialize`、`Deserialize`
/// - 自动实现 `::crud_domain::entity::Entity`（`id/set_id`）
/// - 支持参数：`#[entity(id = IdType, debug = true|false)]`，`id` 默认 `u64`
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体 ID 宏
/// 用于 `tuple struct` 形式的标识类型（例如 `struct CustomerId(u64);`、`struct OrderId(Uuid);`）：
/// - 合并派生：`Clone`、`Default`、`Debug`（可关闭）、`PartialEq`、`Eq`、`Hash`、`Serialize`、`Deserialize`
/// - 提供 `new`、`Display`、`FromStr`、`AsRef`、双向 `From`
/// - 实现 `::crud_domain::entity_id::EntityId`，空值委托给内部类型
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
