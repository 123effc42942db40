//! Blueprint - factory composition engine
//!
//! Blueprint turns a specification object describing a unit of behavior
//! into a reusable factory: instances delegate unresolved lookups to the
//! factory's member set, child factories delegate to a single parent,
//! mixins are merged last-write-wins, selected methods can be permanently
//! bound to their owning member set, and static members live on the
//! factory alone.
//!
//! ```
//! use blueprint::{define, json, Specification, Value};
//!
//! let base = define(
//!     Specification::new()
//!         .member("greeting", "hi")
//!         .method("who", |ctx| ctx.get("greeting").unwrap_or(Value::Null)),
//! )?;
//!
//! let instance = base.create();
//! assert_eq!(instance.call("who", &[])?, json!("hi"));
//! # Ok::<(), blueprint::BlueprintError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::entities::{Factory, FactoryRef, Instance, MemberMap, MemberSet, CONSTRUCTOR_KEY};
pub use domain::services::{define, define_with, merge, DefineOptions};
pub use domain::value_objects::{
    CallContext, Donor, Member, Method, MethodFn, SpecEntry, Specification,
};
pub use error::{BlueprintError, BlueprintResult};
pub use serde_json::{json, Value};
