//! 实体标识（EntityId）
//!
//! 标识需可比较、可哈希、可显示，并具备一个明确的“空值”（零、空字符串、nil UUID），
//! 空值与任何创建时分配的值都不同。
//!
use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

/// 实体标识抽象
pub trait EntityId: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// 空标识（尚未分配）
    fn empty() -> Self;

    /// 是否为空标识
    fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

macro_rules! impl_entity_id_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl EntityId for $t {
                fn empty() -> Self {
                    0
                }
            }
        )*
    };
}

impl_entity_id_for_int!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

impl EntityId for String {
    fn empty() -> Self {
        String::new()
    }

    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl EntityId for Uuid {
    fn empty() -> Self {
        Uuid::nil()
    }

    fn is_empty(&self) -> bool {
        self.is_nil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ids_are_empty_only_at_zero() {
        assert!(EntityId::is_empty(&0_u64));
        assert!(!EntityId::is_empty(&100_u64));
        assert!(EntityId::is_empty(&0_i32));
        assert!(!EntityId::is_empty(&-1_i32));
        assert_eq!(<u64 as EntityId>::empty(), 0);
    }

    #[test]
    fn string_ids() {
        assert!(EntityId::is_empty(&String::new()));
        assert!(!EntityId::is_empty(&"c-1".to_string()));
        assert_eq!(<String as EntityId>::empty(), "");
    }

    #[test]
    fn uuid_ids() {
        assert!(EntityId::is_empty(&Uuid::nil()));
        assert!(!EntityId::is_empty(&Uuid::new_v4()));
        assert_eq!(<Uuid as EntityId>::empty(), Uuid::nil());
    }
}
