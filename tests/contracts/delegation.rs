//! Delegation contracts (DELEG-001, DELEG-002)

use blueprint::{define, json, Specification};

use crate::common::*;

/// CONTRACT DELEG-001: Delegation correctness
///
/// A member defined only on the parent is reachable through the child's
/// member set; a same-named member is resolved to the child's version.
mod parent_resolution {
    use super::*;

    #[test]
    fn contract_parent_member_reachable_through_child() {
        let parent = greeter("hi");
        let child = define(Specification::new().extends(&parent)).unwrap();

        let instance = child.create();
        assert_eq!(instance.get("greeting"), Some(json!("hi")));
        assert_eq!(instance.call("who", &[]).unwrap(), json!("hi"));
    }

    #[test]
    fn contract_child_member_shadows_parent() {
        let parent = greeter("hi");
        let child = define(Specification::new().extends(&parent).member("greeting", "yo")).unwrap();

        assert_eq!(child.create().call("who", &[]).unwrap(), json!("yo"));
        // The parent still answers for itself.
        assert_eq!(parent.create().call("who", &[]).unwrap(), json!("hi"));
    }

    #[test]
    fn contract_resolution_recurses_to_the_root() {
        let root = define(Specification::new().member("origin", "root")).unwrap();
        let middle = define(Specification::new().extends(&root)).unwrap();
        let leaf = define(Specification::new().extends(&middle)).unwrap();

        assert_eq!(leaf.create().get("origin"), Some(json!("root")));
    }
}

/// CONTRACT DELEG-002: The create chain is independent of the parent chain
///
/// Chained `create` calls add delegation levels in call order; `Extends`
/// levels are a separate chain.
mod create_chain {
    use super::*;

    #[test]
    fn contract_create_chain_matches_call_order() {
        let factory = greeter("hi");
        let first = factory.create();
        first.set("greeting", "first");
        let second = first.create();

        // The derived object resolves through the instance above it before
        // reaching the factory.
        assert_eq!(second.call("who", &[]).unwrap(), json!("first"));
    }

    #[test]
    fn contract_extra_members_stay_on_their_level() {
        let factory = greeter("hi");
        let first = factory.create_with(data_donor(&[("level", 1)]));
        let second = first.create();

        assert_eq!(second.get("level"), Some(json!(1)));
        assert!(!second.state().contains_own("level"));
        assert_eq!(factory.create().get("level"), None);
    }
}
