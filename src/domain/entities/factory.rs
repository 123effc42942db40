//! Factory entity
//!
//! A factory is the reusable product of `define`: it owns the member set
//! new instances delegate to, an optional static set visible only on the
//! factory itself, and at most one parent reference fixed at creation.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde_json::Value;

use crate::domain::entities::{Instance, MemberMap, MemberSet};
use crate::domain::services::{bind_members, merge, DefineOptions};
use crate::domain::value_objects::{Donor, Member, Method};
use crate::error::{BlueprintError, BlueprintResult};

struct FactoryCore {
    initializer: Method,
    members: MemberSet,
    statics: RefCell<MemberMap>,
    parent: Option<MemberSet>,
    options: DefineOptions,
}

/// A cheap-clone handle to a defined factory. Identity is handle identity:
/// two clones of the same factory compare equal under [`Factory::ptr_eq`].
#[derive(Clone)]
pub struct Factory {
    core: Rc<FactoryCore>,
}

/// A weak factory handle, used for self-reference entries so the
/// member-set ⇄ factory link does not keep the factory alive.
#[derive(Clone)]
pub struct FactoryRef {
    core: Weak<FactoryCore>,
}

impl FactoryRef {
    pub fn upgrade(&self) -> Option<Factory> {
        self.core.upgrade().map(|core| Factory { core })
    }
}

impl fmt::Debug for FactoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FactoryRef")
    }
}

impl Factory {
    /// Assembles a factory from its composed parts. The member set arrives
    /// from the delegation linker; statics start empty and are attached by
    /// the statics pass.
    pub(crate) fn from_parts(
        initializer: Method,
        members: MemberSet,
        parent: Option<MemberSet>,
        options: DefineOptions,
    ) -> Self {
        Self {
            core: Rc::new(FactoryCore {
                initializer,
                members,
                statics: RefCell::new(MemberMap::new()),
                parent,
                options,
            }),
        }
    }

    /// The member set new instances delegate to.
    pub fn members(&self) -> MemberSet {
        self.core.members.clone()
    }

    /// The parent factory's member set, absent for a root factory. Exposed
    /// so callers can explicitly invoke superclass behavior.
    pub fn parent(&self) -> Option<MemberSet> {
        self.core.parent.clone()
    }

    pub fn initializer(&self) -> &Method {
        &self.core.initializer
    }

    pub(crate) fn downgrade(&self) -> FactoryRef {
        FactoryRef {
            core: Rc::downgrade(&self.core),
        }
    }

    /// Whether two handles refer to the same factory.
    pub fn ptr_eq(a: &Factory, b: &Factory) -> bool {
        Rc::ptr_eq(&a.core, &b.core)
    }

    /// Create a new instance delegating to this factory's member set.
    ///
    /// The initializer is not invoked unless the factory was defined with
    /// `DefineOptions::with_eager_initialize(true)`; [`Factory::construct`]
    /// is the explicit eager path.
    pub fn create(&self) -> Instance {
        self.finish_instance(Instance::delegating_to(self.members()))
    }

    /// Create a new instance and merge `extra` onto its own state. The
    /// extra members shadow the factory's, instance by instance.
    pub fn create_with(&self, extra: impl Into<Donor>) -> Instance {
        let instance = Instance::delegating_to(self.members());
        merge(instance.state(), &[extra.into()]);
        self.finish_instance(instance)
    }

    fn finish_instance(&self, instance: Instance) -> Instance {
        if self.core.options.eager_initialize() {
            self.core.initializer.invoke(instance.state(), &[]);
        }
        instance
    }

    /// Create a new instance and invoke the initializer with `args`,
    /// regardless of the eager-initialize option.
    pub fn construct(&self, args: &[Value]) -> Instance {
        let instance = Instance::delegating_to(self.members());
        self.core.initializer.invoke(instance.state(), args);
        instance
    }

    /// Merge a donor's members onto this factory's member set. Later calls
    /// overwrite earlier ones; the factory's identity is preserved.
    /// Chainable.
    pub fn implement(&self, donor: impl Into<Donor>) -> &Self {
        merge(&self.members(), &[donor.into()]);
        self
    }

    /// Permanently pin the named methods to this factory's member set, so
    /// detaching or re-attaching them elsewhere cannot change their
    /// execution context. Chainable.
    ///
    /// A member set holding its own bound methods forms a reference cycle
    /// and stays allocated until the entries are removed.
    pub fn bind<I, S>(&self, names: I) -> BlueprintResult<&Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        bind_members(&names, self)?;
        Ok(self)
    }

    /// Attach a static member, reachable only on the factory identity.
    pub fn set_static(&self, name: impl Into<String>, member: Member) {
        self.core.statics.borrow_mut().insert(name.into(), member);
    }

    pub fn static_member(&self, name: &str) -> Option<Member> {
        self.core.statics.borrow().get(name).cloned()
    }

    pub fn has_static(&self, name: &str) -> bool {
        self.core.statics.borrow().contains_key(name)
    }

    /// Names of the static members, in no particular order.
    pub fn static_names(&self) -> Vec<String> {
        self.core.statics.borrow().keys().cloned().collect()
    }

    /// Invoke a static method. Statics execute against the factory's member
    /// set; they are never reachable through instances.
    pub fn call_static(&self, name: &str, args: &[Value]) -> BlueprintResult<Value> {
        match self.static_member(name) {
            Some(Member::Method(method)) => Ok(method.invoke(&self.members(), args)),
            Some(_) => Err(BlueprintError::NotInvokable { name: name.into() }),
            None => Err(BlueprintError::UndefinedMember { name: name.into() }),
        }
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut statics: Vec<String> = self.core.statics.borrow().keys().cloned().collect();
        statics.sort();
        f.debug_struct("Factory")
            .field("members", &self.core.members)
            .field("statics", &statics)
            .field("has_parent", &self.core.parent.is_some())
            .finish()
    }
}
