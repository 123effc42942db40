//! Parenting journeys: Extends chains and explicit superclass calls.

use blueprint::{define, json, Member, MemberSet, Specification, Value};

use crate::common::*;

#[test]
fn child_reaches_parent_members_and_overrides_them() {
    let base = greeter("hi");
    let child = define(Specification::new().extends(&base).member("greeting", "yo")).unwrap();

    let instance = child.create();
    // Inherited method, overridden data member.
    assert_eq!(instance.call("who", &[]).unwrap(), json!("yo"));
}

#[test]
fn parent_is_reachable_from_the_child_factory() {
    let first = greeter("hi");
    let second = define(Specification::new().extends(&first).method("method3", |_| {
        json!("method3")
    }))
    .unwrap();

    let parent = second.parent().unwrap();
    assert!(MemberSet::ptr_eq(&parent, &first.members()));
}

#[test]
fn child_method_can_invoke_superclass_behavior() {
    let first = define(
        Specification::new()
            .member("tag", "first")
            .method("describe", |ctx| ctx.get("tag").unwrap_or(Value::Null)),
    )
    .unwrap();
    let second = define(
        Specification::new()
            .extends(&first)
            .member("tag", "second")
            // Overrides `describe` but reaches for the parent's version
            // explicitly through the factory.
            .method("describe", |ctx| {
                let parent = ctx
                    .owner()
                    .and_then(|factory| factory.parent())
                    .expect("child factories expose their parent");
                match parent.get_own("describe") {
                    Some(Member::Method(method)) => method.invoke(ctx.receiver(), ctx.args()),
                    _ => Value::Null,
                }
            }),
    )
    .unwrap();

    // The parent's method runs, but against the child instance's chain.
    assert_eq!(
        second.create().call("describe", &[]).unwrap(),
        json!("second")
    );
}

#[test]
fn grandchildren_resolve_through_every_level() {
    let base = greeter("hi");
    let middle = define(Specification::new().extends(&base)).unwrap();
    let leaf = define(Specification::new().extends(&middle)).unwrap();

    assert_eq!(leaf.create().call("who", &[]).unwrap(), json!("hi"));
    assert!(leaf.parent().is_some());
    assert!(base.parent().is_none());
}

#[test]
fn mixins_do_not_disturb_the_parent_chain() {
    let base = greeter("hi");
    let child = define(Specification::new().extends(&base)).unwrap();
    child.implement(data_donor(&[("extra", 1)]));

    let instance = child.create();
    assert_eq!(instance.get("extra"), Some(json!(1)));
    assert_eq!(instance.call("who", &[]).unwrap(), json!("hi"));
    // The mixin landed on the child, never on the parent.
    assert_eq!(base.create().get("extra"), None);
}
