//! Method binder
//!
//! Rewrites named members into closures pinned to the factory's member
//! set, so later detachment or re-attachment to unrelated objects cannot
//! change their execution context. The pinned wrapper is written as an own
//! entry, so an inherited method binds by shadowing its parent.

use crate::domain::entities::Factory;
use crate::domain::value_objects::Member;
use crate::error::{BlueprintError, BlueprintResult};

/// Bindings are independent; names are processed in the given order.
pub fn bind_members(names: &[String], factory: &Factory) -> BlueprintResult<()> {
    let members = factory.members();
    for name in names {
        match members.resolve(name) {
            Some(Member::Method(method)) => {
                members.insert(name.clone(), Member::Method(method.bind_to(members.clone())));
            }
            _ => {
                return Err(BlueprintError::NonInvokableBindTarget { name: name.clone() });
            }
        }
    }
    Ok(())
}
