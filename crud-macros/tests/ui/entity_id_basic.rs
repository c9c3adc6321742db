use crud_domain::entity_id::EntityId;
use crud_macros::entity_id;
use uuid::Uuid;

#[entity_id]
struct UserId(Uuid);

#[entity_id(debug = false)]
struct ProfileId(u64);

impl std::fmt::Debug for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProfileId(..)")
    }
}

fn main() {
    let id = UserId::new(Uuid::new_v4());
    let _ = format!("{:?}", id); // 默认启用 Debug
    assert!(!id.is_empty());
    assert!(UserId::empty().is_empty());

    // debug = false 时使用手写 Debug
    let pid: ProfileId = "42".parse().unwrap();
    assert_eq!(format!("{:?}", pid), "ProfileId(..)");
    assert_eq!(pid.to_string(), "42");
    assert_eq!(u64::from(pid), 42);
    assert!(ProfileId::default().is_empty());
}
