//! Domain Entities
//!
//! Core entities with identity and lifecycle.
//! - `Factory` - the reusable product of `define`
//! - `MemberSet` - the delegation-linked member mapping
//! - `Instance` - an object created from a factory

mod factory;
mod instance;
mod member_set;

pub use factory::{Factory, FactoryRef};
pub use instance::Instance;
pub use member_set::{MemberMap, MemberSet, CONSTRUCTOR_KEY};
