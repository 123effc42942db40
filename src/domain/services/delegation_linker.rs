//! Delegation linker
//!
//! Produces a factory's member set. Without a parent the set is a fresh
//! mapping; with a parent it delegates unresolved lookups to the parent's
//! member set instead of copying it. Ordinary members are seeded on top and
//! the self-reference is written last so nothing can shadow it.

use crate::domain::entities::{Factory, MemberMap, MemberSet};

/// The member set a new factory starts from: fresh, or delegating to the
/// parent's member set.
pub fn link_delegation(parent: Option<&Factory>) -> MemberSet {
    match parent {
        Some(parent) => MemberSet::with_fallback(parent.members()),
        None => MemberSet::new(),
    }
}

/// Copy the ordinary members onto the factory's member set, shadowing any
/// same-named parent member, then write the self-reference.
pub fn seed_members(factory: &Factory, members: MemberMap) {
    let target = factory.members();
    for (name, member) in members {
        target.insert(name, member);
    }
    target.set_owner(factory.downgrade());
}
