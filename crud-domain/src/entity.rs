//! 实体（Entity）基础抽象
//!
//! 每个实体恰好拥有一个标识字段；标识为空（见 `EntityId::empty`）表示该实体从未被成功持久化。
//!
use crate::entity_id::EntityId;
use std::any::type_name;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync + 'static {
    /// 实体标识类型
    type Id: EntityId;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 设置实体标识（由数据服务在创建时分配，或由调用方预设）
    fn set_id(&mut self, id: Self::Id);

    /// 是否为尚未持久化的瞬态实体（标识为空）
    fn is_transient(&self) -> bool {
        self.id().is_empty()
    }
}

/// 实体类型的短名称（去掉模块路径与泛型参数），用于错误与日志
pub fn entity_name<E>() -> &'static str {
    let full = type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Widget {
        id: u32,
    }

    impl Entity for Widget {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }

        fn set_id(&mut self, id: Self::Id) {
            self.id = id;
        }
    }

    #[test]
    fn transient_until_identity_assigned() {
        let mut w = Widget::default();
        assert!(w.is_transient());

        w.set_id(7);
        assert!(!w.is_transient());
        assert_eq!(*w.id(), 7);
    }

    #[test]
    fn entity_name_strips_module_path() {
        assert_eq!(entity_name::<Widget>(), "Widget");
        assert_eq!(entity_name::<u64>(), "u64");
    }

    #[test]
    fn entity_name_drops_generic_arguments() {
        #[allow(dead_code)]
        struct Page<T>(T);

        assert_eq!(entity_name::<Page<Widget>>(), "Page");
        assert_eq!(entity_name::<Page<Vec<std::string::String>>>(), "Page");
    }
}
