//! Specification value object
//!
//! A transient mapping from key to entry, interpreted exactly once by
//! `define`. Directives live under their literal reserved keys (both
//! historical spellings are honored by the parser); every other key is an
//! ordinary member. The builder methods are sugar over `entry`.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::entities::{Factory, MemberMap};
use crate::domain::value_objects::{CallContext, Donor, Member, Method};

/// Entry-point directive key.
pub const KEY_INITIALIZE: &str = "initialize";
/// Entry-point directive key, short spelling.
pub const KEY_INIT: &str = "init";
/// Parent directive key.
pub const KEY_EXTENDS: &str = "Extends";
/// Mixin directive key.
pub const KEY_BORROWS: &str = "Borrows";
/// Mixin directive key, alternate spelling.
pub const KEY_IMPLEMENTS: &str = "Implements";
/// Binding directive key.
pub const KEY_BINDS: &str = "Binds";
/// Binding directive key, alternate spelling.
pub const KEY_BIND: &str = "Bind";
/// Statics directive key.
pub const KEY_STATICS: &str = "Statics";
/// Statics directive key, alternate spelling.
pub const KEY_STATIC: &str = "Static";

/// What a specification key maps to: an ordinary member or a typed
/// directive payload.
#[derive(Clone, Debug)]
pub enum SpecEntry {
    Member(Member),
    Extends(Factory),
    Borrows(Vec<Donor>),
    Binds(Vec<String>),
    Statics(MemberMap),
    Initialize(Method),
}

#[derive(Clone, Debug, Default)]
pub struct Specification {
    entries: HashMap<String, SpecEntry>,
}

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw entry under an arbitrary key, replacing any previous
    /// entry for that key.
    pub fn entry(mut self, key: impl Into<String>, entry: SpecEntry) -> Self {
        self.entries.insert(key.into(), entry);
        self
    }

    /// An ordinary data member.
    pub fn member(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entry(name, SpecEntry::Member(Member::Data(value.into())))
    }

    /// An ordinary method member.
    pub fn method(
        self,
        name: impl Into<String>,
        func: impl Fn(&CallContext<'_>) -> Value + 'static,
    ) -> Self {
        self.entry(name, SpecEntry::Member(Member::method(func)))
    }

    /// The initializer entry point, invoked by `Factory::construct` and by
    /// eager creation.
    pub fn initialize(self, func: impl Fn(&CallContext<'_>) -> Value + 'static) -> Self {
        self.entry(KEY_INITIALIZE, SpecEntry::Initialize(Method::new(func)))
    }

    /// The parent factory (single inheritance).
    pub fn extends(self, parent: &Factory) -> Self {
        self.entry(KEY_EXTENDS, SpecEntry::Extends(parent.clone()))
    }

    /// Append one mixin source. Donors apply in insertion order.
    pub fn borrow(mut self, donor: impl Into<Donor>) -> Self {
        match self.entries.get_mut(KEY_BORROWS) {
            Some(SpecEntry::Borrows(list)) => list.push(donor.into()),
            _ => {
                self.entries
                    .insert(KEY_BORROWS.into(), SpecEntry::Borrows(vec![donor.into()]));
            }
        }
        self
    }

    /// Append several mixin sources.
    pub fn borrows(self, donors: impl IntoIterator<Item = Donor>) -> Self {
        donors.into_iter().fold(self, Self::borrow)
    }

    /// Append one method name to pin to the factory.
    pub fn bind(mut self, name: impl Into<String>) -> Self {
        match self.entries.get_mut(KEY_BINDS) {
            Some(SpecEntry::Binds(list)) => list.push(name.into()),
            _ => {
                self.entries
                    .insert(KEY_BINDS.into(), SpecEntry::Binds(vec![name.into()]));
            }
        }
        self
    }

    /// Append several method names to pin to the factory.
    pub fn binds<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, Self::bind)
    }

    /// A static data member, visible on the factory only.
    pub fn static_member(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push_static(name.into(), Member::Data(value.into()))
    }

    /// A static method member, visible on the factory only.
    pub fn static_method(
        self,
        name: impl Into<String>,
        func: impl Fn(&CallContext<'_>) -> Value + 'static,
    ) -> Self {
        self.push_static(name.into(), Member::method(func))
    }

    fn push_static(mut self, name: String, member: Member) -> Self {
        match self.entries.get_mut(KEY_STATICS) {
            Some(SpecEntry::Statics(map)) => {
                map.insert(name, member);
            }
            _ => {
                let mut map = MemberMap::new();
                map.insert(name, member);
                self.entries
                    .insert(KEY_STATICS.into(), SpecEntry::Statics(map));
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> HashMap<String, SpecEntry> {
        self.entries
    }
}
