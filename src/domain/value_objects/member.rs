//! Member value objects
//!
//! A member is what a member set stores under a name: plain data, an
//! invokable method, or the self-reference back to the owning factory.
//! Methods are explicit closures receiving a [`CallContext`]; execution
//! context is a first-class handle, never an implicit language feature.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::domain::entities::{Factory, FactoryRef, MemberSet};
use crate::error::{BlueprintError, BlueprintResult};

/// The closure type behind every invokable member.
pub type MethodFn = Rc<dyn Fn(&CallContext<'_>) -> Value>;

/// An invokable member: a shared closure plus an optional pinned execution
/// context. Cloning shares the underlying closure.
#[derive(Clone)]
pub struct Method {
    func: MethodFn,
    context: Option<MemberSet>,
}

impl Method {
    pub fn new(func: impl Fn(&CallContext<'_>) -> Value + 'static) -> Self {
        Self {
            func: Rc::new(func),
            context: None,
        }
    }

    /// The default initializer: does nothing, returns null.
    pub fn noop() -> Self {
        Self::new(|_| Value::Null)
    }

    /// Pin this method to `context`. Once pinned, the context is fixed:
    /// pinning an already-pinned method keeps the original context, the way
    /// nested bind wrappers resolve to the innermost binding.
    pub fn bind_to(&self, context: MemberSet) -> Self {
        match self.context {
            Some(_) => self.clone(),
            None => Self {
                func: Rc::clone(&self.func),
                context: Some(context),
            },
        }
    }

    pub fn is_bound(&self) -> bool {
        self.context.is_some()
    }

    /// Invoke against `receiver`, unless a pinned context overrides it.
    pub fn invoke(&self, receiver: &MemberSet, args: &[Value]) -> Value {
        let context = self.context.clone().unwrap_or_else(|| receiver.clone());
        (self.func)(&CallContext::new(context, args))
    }

    /// Whether two handles share the same underlying closure.
    pub fn ptr_eq(a: &Method, b: &Method) -> bool {
        Rc::ptr_eq(&a.func, &b.func)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("bound", &self.context.is_some())
            .finish_non_exhaustive()
    }
}

/// A single member-set entry.
#[derive(Clone, Debug)]
pub enum Member {
    /// A plain data value.
    Data(Value),
    /// An invokable method.
    Method(Method),
    /// The self-reference identifying the owning factory. Held weakly so
    /// the factory ⇄ member-set link does not leak.
    Owner(FactoryRef),
}

impl Member {
    pub fn data(value: impl Into<Value>) -> Self {
        Member::Data(value.into())
    }

    pub fn method(func: impl Fn(&CallContext<'_>) -> Value + 'static) -> Self {
        Member::Method(Method::new(func))
    }

    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Member::Data(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Member::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn is_owner(&self) -> bool {
        matches!(self, Member::Owner(_))
    }

    /// Short description used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Member::Data(_) => "data",
            Member::Method(_) => "method",
            Member::Owner(_) => "owner reference",
        }
    }
}

/// What a method closure executes against: the context member set plus the
/// positional arguments of the call.
pub struct CallContext<'a> {
    receiver: MemberSet,
    args: &'a [Value],
}

impl<'a> CallContext<'a> {
    pub(crate) fn new(receiver: MemberSet, args: &'a [Value]) -> Self {
        Self { receiver, args }
    }

    /// The member set this call executes against.
    pub fn receiver(&self) -> &MemberSet {
        &self.receiver
    }

    pub fn args(&self) -> &[Value] {
        self.args
    }

    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    /// Resolve a data member through the delegation chain. A miss is an
    /// absent value, not an error.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.receiver.resolve(name)? {
            Member::Data(value) => Some(value),
            _ => None,
        }
    }

    /// Resolve any member through the delegation chain.
    pub fn member(&self, name: &str) -> Option<Member> {
        self.receiver.resolve(name)
    }

    /// Write a data member onto the execution context, shadowing anything
    /// the chain would otherwise resolve.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.receiver.insert(name, Member::Data(value.into()));
    }

    /// The factory owning the execution context, if the chain still reaches
    /// one.
    pub fn owner(&self) -> Option<Factory> {
        self.receiver.owner()
    }

    /// Invoke a sibling member through the delegation chain.
    pub fn call(&self, name: &str, args: &[Value]) -> BlueprintResult<Value> {
        match self.receiver.resolve(name) {
            Some(Member::Method(method)) => Ok(method.invoke(&self.receiver, args)),
            Some(_) => Err(BlueprintError::NotInvokable { name: name.into() }),
            None => Err(BlueprintError::UndefinedMember { name: name.into() }),
        }
    }
}
