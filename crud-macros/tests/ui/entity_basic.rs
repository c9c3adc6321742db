use crud_domain::entity::Entity;
use crud_macros::{entity, entity_id};

#[entity_id]
struct NoteId(u64);

// 缺失 id 字段时按参数类型补齐
#[entity(id = NoteId)]
struct Note {
    title: String,
}

// 默认 id 类型为 u64
#[entity]
struct Counter {
    value: i64,
}

// 已有 id 字段时移动到最前并沿用其类型
#[entity]
#[derive(PartialEq)]
struct Tagged {
    label: String,
    id: String,
}

fn main() {
    let mut note = Note::default();
    assert!(note.is_transient());
    note.set_id(NoteId::new(7));
    assert_eq!(note.id(), &NoteId::new(7));
    let _copy = note.clone();
    let _ = format!("{:?}", note);

    let counter = Counter { id: 0, value: 1 };
    let _: &u64 = counter.id();

    let tagged = Tagged {
        id: "t-1".to_string(),
        label: "x".into(),
    };
    assert_eq!(tagged.id(), "t-1");
    assert!(tagged == tagged.clone());
}
