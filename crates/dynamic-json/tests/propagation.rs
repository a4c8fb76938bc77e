use dynamic_json::{dyn_path, JsonRead, JsonValue, WritableView};
use serde_json::json;

fn root() -> WritableView<'static> {
    WritableView::from_literal(json!({
        "a": {"b": {"c": 0}},
        "items": [{"id": 1, "tags": []}, {"id": 2, "tags": ["x"]}],
        "flag": false
    }))
}

#[test]
fn test_write_then_read() {
    let mut w = root();
    w.set_member("x", 5);
    assert_eq!(w.member("x").as_integer(), Some(5));
}

#[test]
fn test_grandchild_write_reaches_every_ancestor() {
    let mut root = root();
    {
        let mut child = root.member_mut("a");
        {
            let mut grandchild = child.member_mut("b");
            grandchild.set_member("c", 1);
        }
        assert_eq!(child.member("b").member("c").as_integer(), Some(1));
    }
    assert_eq!(root.member("a").member("b").member("c").as_integer(), Some(1));
}

#[test]
fn test_mixed_key_and_index_chain() {
    let mut root = root();
    {
        let mut items = root.member_mut("items");
        let mut second = items.index_mut(1).unwrap();
        let mut tags = second.member_mut("tags");
        tags.set_index(0, "y");
    }
    assert_eq!(root.path("items").index(1).unwrap().member("tags").index(0).unwrap(), "y");
    assert_eq!(
        root.path("items").index(0).unwrap().member("tags").into_value(),
        JsonValue::Array(vec![])
    );
}

#[test]
fn test_out_of_range_write_leaves_every_level_unchanged() {
    let mut root = root();
    let before = root.snapshot();
    {
        let mut items = root.member_mut("items");
        let mut first = items.index_mut(0).unwrap();
        let mut tags = first.member_mut("tags");
        tags.set_index(0, "never");
        assert_eq!(tags.as_array().map(<[_]>::len), Some(0));
    }
    assert_eq!(root, before);
}

#[test]
fn test_sequential_writes_through_fresh_children() {
    let mut root = root();
    for i in 0..3 {
        let mut a = root.member_mut("a");
        a.set_member(format!("k{i}"), i);
    }
    assert_eq!(root.path("a.k0"), 0);
    assert_eq!(root.path("a.k2"), 2);
    assert_eq!(root.path("a.b.c"), 0);
}

#[test]
fn test_set_value_replaces_node_in_parent() {
    let mut root = root();
    {
        let mut flag = root.member_mut("flag");
        flag.set_value(JsonValue::from(json!({"on": true})));
        flag.set_member("since", 2024);
    }
    assert_eq!(root.path("flag.on"), true);
    assert_eq!(root.path("flag.since"), 2024);
}

#[test]
fn test_destructive_member_set_up_the_chain() {
    let mut root = WritableView::from_literal(json!({"a": [1, 2, 3]}));
    {
        let mut a = root.member_mut("a");
        let mut b = a.member_mut("b");
        b.set_member("c", "deep");
    }
    assert_eq!(
        root.into_value(),
        JsonValue::from_literal(json!({"a": {"b": {"c": "deep"}}}))
    );
}

#[test]
fn test_path_child_chain_reaches_root() {
    let mut root = root();
    {
        let mut b = root.path_mut("a.b");
        let mut deeper = b.path_mut("x.y");
        deeper.set_member("z", 1);
        assert_eq!(b.path("x.y.z"), 1);
    }
    assert_eq!(root.path("a.b.x.y.z"), 1);
    assert_eq!(root.path("a.b.c"), 0);
}

#[test]
fn test_static_path_child_write() {
    let mut root = root();
    let target = dyn_path!(a.b);
    {
        let mut b = root.path_mut(&target);
        b.set_member("c", 5);
    }
    root.path_mut(&target.child("d").unwrap()).set_value("new");
    assert_eq!(root.path(&target.child("c").unwrap()), 5);
    assert_eq!(root.path("a.b.d"), "new");
}

#[test]
fn test_path_child_under_index_child() {
    let mut root = root();
    {
        let mut items = root.member_mut("items");
        let mut first = items.index_mut(0).unwrap();
        first.path_mut("meta.seen").set_value(true);
    }
    assert_eq!(
        root.member("items").index(0).unwrap().path("meta.seen"),
        true
    );
}

#[test]
fn test_path_snapshot_stays_stale() {
    let mut root = root();
    let before = root.path("a.b");
    root.path_mut("a.b").set_member("c", 9);
    assert_eq!(before.member("c"), 0);
    assert_eq!(root.path("a.b.c"), 9);
}
