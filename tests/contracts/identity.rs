//! Identity contracts (IDENT-001, IDENT-002)
//!
//! Mixin composition never corrupts who a member set belongs to.

use blueprint::{define, Factory, Member, Method, Specification, Value};

use crate::common::*;

/// CONTRACT IDENT-001: Identity after merge
///
/// After `F.implement(D)`, every own member of D's source mapping (except
/// its self-reference) is present and equal on F's member set, and F's
/// self-reference still points to F, not D.
mod identity_after_merge {
    use super::*;

    #[test]
    fn contract_donor_members_arrive_and_identity_survives() {
        let donor = define(
            Specification::new()
                .member("color", "red")
                .method("describe", |ctx| ctx.get("color").unwrap_or(Value::Null)),
        )
        .unwrap();
        let target = greeter("hi");

        target.implement(&donor);

        let members = target.members();
        assert_eq!(
            members.get_own("color").unwrap().as_data(),
            Some(&Value::from("red"))
        );
        let donor_method = donor
            .members()
            .get_own("describe")
            .and_then(|m| m.as_method().cloned())
            .unwrap();
        let copied_method = members
            .get_own("describe")
            .and_then(|m| m.as_method().cloned())
            .unwrap();
        assert!(Method::ptr_eq(&donor_method, &copied_method));

        let owner = members.owner().unwrap();
        assert!(Factory::ptr_eq(&owner, &target));
        assert!(!Factory::ptr_eq(&owner, &donor));
    }

    #[test]
    fn contract_map_donor_cannot_overwrite_identity() {
        let target = greeter("hi");
        let impostor = greeter("impostor");
        let stray_owner = impostor.members().get_own("constructor").unwrap();

        target.implement(blueprint::Donor::members([
            ("constructor".to_string(), stray_owner),
            ("extra".to_string(), Member::data(1)),
        ]));

        let owner = target.members().owner().unwrap();
        assert!(Factory::ptr_eq(&owner, &target));
        assert!(target.members().contains_own("extra"));
    }
}

/// CONTRACT IDENT-002: Donors survive the merge untouched
mod donor_preservation {
    use super::*;

    #[test]
    fn contract_donor_keeps_its_members_and_identity() {
        let donor = greeter("donor");
        let target = define(Specification::new()).unwrap();

        target.implement(&donor);
        target.implement(data_donor(&[("greeting", 0)]));

        let owner = donor.members().owner().unwrap();
        assert!(Factory::ptr_eq(&owner, &donor));
        assert_eq!(
            donor.members().get_own("greeting").unwrap().as_data(),
            Some(&Value::from("donor"))
        );
    }
}
