//! Mixin merger
//!
//! Copies members from donor sources onto a target member set according to
//! the composition rules:
//! - donors apply in the given order; the last writer wins over earlier
//!   donors and over pre-existing members
//! - only declared entries cross; nothing reachable through a donor's
//!   fallback chain is copied
//! - identity never leaks: a donor's self-reference is not copied and the
//!   target's own self-reference survives the merge

use crate::domain::entities::{MemberSet, CONSTRUCTOR_KEY};
use crate::domain::value_objects::Donor;

pub fn merge(target: &MemberSet, donors: &[Donor]) {
    let own_identity = target.get_own(CONSTRUCTOR_KEY);

    for donor in donors {
        match donor {
            Donor::Factory(factory) => {
                let source = factory.members();
                for name in source.own_names() {
                    let Some(member) = source.get_own(&name) else {
                        continue;
                    };
                    if member.is_owner() {
                        continue;
                    }
                    target.insert(name, member);
                }
            }
            Donor::Members(map) => {
                for (name, member) in map {
                    if member.is_owner() {
                        continue;
                    }
                    target.insert(name.clone(), member.clone());
                }
            }
        }
    }

    if let Some(identity) = own_identity {
        target.insert(CONSTRUCTOR_KEY, identity);
    }
}
