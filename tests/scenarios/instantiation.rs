//! Instantiation journeys: plain factories, mixins, and extra members.

use blueprint::{define, json, Method, Specification, Value};

use crate::common::*;

#[test]
fn base_factory_answers_through_its_instances() {
    let base = greeter("hi");
    let instance = base.create();

    assert_eq!(instance.get("greeting"), Some(json!("hi")));
    assert_eq!(instance.call("who", &[]).unwrap(), json!("hi"));
}

#[test]
fn instance_members_are_the_factory_members() {
    let first = define(
        Specification::new()
            .member("property", "foo")
            .method("method1", |_| json!("method1"))
            .method("method2", |_| json!("method2")),
    )
    .unwrap();

    let instance = first.create();
    assert_eq!(instance.get("property"), Some(json!("foo")));

    // The instance resolves to the very same method handles the factory
    // holds, not copies.
    let factory_method = first
        .members()
        .get_own("method1")
        .and_then(|m| m.as_method().cloned())
        .unwrap();
    let instance_method = instance
        .member("method1")
        .and_then(|m| m.as_method().cloned())
        .unwrap();
    assert!(Method::ptr_eq(&factory_method, &instance_method));
}

#[test]
fn factory_mixins_reach_instances() {
    let mixin = define(
        Specification::new()
            .method("mixin_method1", |_| json!(1))
            .method("mixin_method2", |_| json!(2))
            .method("mixin_method3", |_| json!(3)),
    )
    .unwrap();

    let third = define(Specification::new().method("method4", |ctx| {
        ctx.call("mixin_method3", &[]).unwrap_or(Value::Null)
    }))
    .unwrap();
    third.implement(&mixin);

    let instance = third.create();
    assert_eq!(instance.call("mixin_method1", &[]).unwrap(), json!(1));
    // A factory method can invoke a mixed-in sibling through the chain.
    assert_eq!(instance.call("method4", &[]).unwrap(), json!(3));
}

#[test]
fn map_mixins_reach_instances() {
    let fifth = greeter("hi");
    fifth.implement(data_donor(&[("mixed_a", 1), ("mixed_b", 2)]));

    let instance = fifth.create();
    assert_eq!(instance.get("mixed_a"), Some(json!(1)));
    assert_eq!(instance.get("mixed_b"), Some(json!(2)));
    assert_eq!(instance.call("who", &[]).unwrap(), json!("hi"));
}

#[test]
fn initializer_runs_at_construction_time() {
    let forth = define(
        Specification::new()
            .initialize(|ctx| {
                ctx.set("constructed", true);
                Value::Null
            })
            .method("method4", |_| json!("method4")),
    )
    .unwrap();

    let instance = forth.construct(&[]);
    assert_eq!(instance.get("constructed"), Some(json!(true)));
    assert_eq!(instance.call("method4", &[]).unwrap(), json!("method4"));
}

#[test]
fn extra_members_extend_a_single_instance() {
    let base = greeter("hi");
    let special = base.create_with(data_donor(&[("rank", 1)]));

    assert_eq!(special.get("rank"), Some(json!(1)));
    assert_eq!(base.create().get("rank"), None);
}

#[test]
fn implement_chain_builds_up_a_factory() {
    let mixed = define(Specification::new()).unwrap();
    mixed
        .implement(data_donor(&[("k", 1)]))
        .implement(data_donor(&[("k", 2)]));

    assert_eq!(mixed.create().get("k"), Some(json!(2)));
}
