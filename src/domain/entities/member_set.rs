//! Member set entity
//!
//! The collection of behavior and data an instance delegates to. Lookup is
//! explicit: `get_own` inspects only declared entries, `resolve` walks the
//! fallback chain until a member set with no fallback is reached.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::domain::entities::{Factory, FactoryRef};
use crate::domain::value_objects::Member;

/// Reserved key of the self-reference entry. It always points at the
/// factory that most recently owned the member set.
pub const CONSTRUCTOR_KEY: &str = "constructor";

/// A plain mapping from member name to member, used wherever a bag of
/// members moves between objects (donors, statics, parsed specifications).
pub type MemberMap = HashMap<String, Member>;

/// A shared handle to a member mapping with an optional fallback.
///
/// Cloning shares the underlying storage; two clones observe each other's
/// mutations. Handles are single-threaded (`Rc`-based), so unrelated
/// factories on different threads are always independent allocations and
/// the same factory can never be mutated concurrently.
#[derive(Clone)]
pub struct MemberSet {
    inner: Rc<RefCell<MemberSetData>>,
}

#[derive(Default)]
struct MemberSetData {
    entries: MemberMap,
    fallback: Option<MemberSet>,
}

impl MemberSet {
    /// A fresh, empty member set with no fallback.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemberSetData::default())),
        }
    }

    /// A fresh member set whose unresolved lookups fall through to
    /// `fallback`. This is a delegation link, not a copy.
    pub fn with_fallback(fallback: MemberSet) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemberSetData {
                entries: MemberMap::new(),
                fallback: Some(fallback),
            })),
        }
    }

    pub fn fallback(&self) -> Option<MemberSet> {
        self.inner.borrow().fallback.clone()
    }

    /// Insert or replace a declared entry.
    pub fn insert(&self, name: impl Into<String>, member: Member) {
        self.inner.borrow_mut().entries.insert(name.into(), member);
    }

    pub fn remove(&self, name: &str) -> Option<Member> {
        self.inner.borrow_mut().entries.remove(name)
    }

    /// A declared entry, ignoring the fallback chain.
    pub fn get_own(&self, name: &str) -> Option<Member> {
        self.inner.borrow().entries.get(name).cloned()
    }

    pub fn contains_own(&self, name: &str) -> bool {
        self.inner.borrow().entries.contains_key(name)
    }

    /// Resolve a member through the fallback chain. The nearest declared
    /// entry wins; a miss on every level is an absent value.
    pub fn resolve(&self, name: &str) -> Option<Member> {
        let mut current = self.clone();
        loop {
            let next = {
                let data = current.inner.borrow();
                if let Some(member) = data.entries.get(name) {
                    return Some(member.clone());
                }
                data.fallback.clone()
            };
            current = next?;
        }
    }

    /// Names of the declared entries, in no particular order.
    pub fn own_names(&self) -> Vec<String> {
        self.inner.borrow().entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Write the self-reference entry.
    pub(crate) fn set_owner(&self, owner: FactoryRef) {
        self.insert(CONSTRUCTOR_KEY, Member::Owner(owner));
    }

    /// The factory that owns this member set, recovered through the
    /// delegation chain.
    pub fn owner(&self) -> Option<Factory> {
        match self.resolve(CONSTRUCTOR_KEY)? {
            Member::Owner(owner) => owner.upgrade(),
            _ => None,
        }
    }

    /// Whether two handles share the same underlying storage.
    pub fn ptr_eq(a: &MemberSet, b: &MemberSet) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl Default for MemberSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        let mut names: Vec<&String> = data.entries.keys().collect();
        names.sort();
        f.debug_struct("MemberSet")
            .field("entries", &names)
            .field("has_fallback", &data.fallback.is_some())
            .finish()
    }
}
