//! Instance entity
//!
//! An object created from a factory. Its own state shadows the factory's
//! member set; everything unresolved falls through the delegation chain.

use serde_json::Value;

use crate::domain::entities::{Factory, MemberSet};
use crate::domain::services::merge;
use crate::domain::value_objects::{Donor, Member};
use crate::error::{BlueprintError, BlueprintResult};

#[derive(Debug)]
pub struct Instance {
    state: MemberSet,
}

impl Instance {
    pub(crate) fn delegating_to(members: MemberSet) -> Self {
        Self {
            state: MemberSet::with_fallback(members),
        }
    }

    /// The instance's own state. Entries written here shadow the factory's
    /// members for this instance only.
    pub fn state(&self) -> &MemberSet {
        &self.state
    }

    /// Resolve a data member through the delegation chain. A miss is an
    /// absent value, not an error.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.state.resolve(name)? {
            Member::Data(value) => Some(value),
            _ => None,
        }
    }

    /// Resolve any member through the delegation chain.
    pub fn member(&self, name: &str) -> Option<Member> {
        self.state.resolve(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.state.resolve(name).is_some()
    }

    /// Write a data member onto this instance's own state.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.state.insert(name, Member::Data(value.into()));
    }

    pub fn set_member(&self, name: impl Into<String>, member: Member) {
        self.state.insert(name, member);
    }

    /// Invoke a member through the delegation chain, with this instance's
    /// state as the execution context (unless the method is bound).
    pub fn call(&self, name: &str, args: &[Value]) -> BlueprintResult<Value> {
        match self.state.resolve(name) {
            Some(Member::Method(method)) => Ok(method.invoke(&self.state, args)),
            Some(_) => Err(BlueprintError::NotInvokable { name: name.into() }),
            None => Err(BlueprintError::UndefinedMember { name: name.into() }),
        }
    }

    /// The factory this instance was created from, recovered through the
    /// delegation chain.
    pub fn owner(&self) -> Option<Factory> {
        self.state.owner()
    }

    /// Derive a new object delegating to this instance. Chained calls build
    /// a delegation chain matching call order, independent of the factory's
    /// parent chain.
    pub fn create(&self) -> Instance {
        Instance::delegating_to(self.state.clone())
    }

    /// Derive a new object and merge `extra` onto its own state.
    pub fn create_with(&self, extra: impl Into<Donor>) -> Instance {
        let derived = self.create();
        merge(derived.state(), &[extra.into()]);
        derived
    }
}
