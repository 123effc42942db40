//! Domain Value Objects
//!
//! Immutable-by-convention value types of the composition engine:
//! members and methods, donor sources, and the specification itself.

mod donor;
mod member;
mod specification;

pub use donor::Donor;
pub use member::{CallContext, Member, Method, MethodFn};
pub use specification::{
    SpecEntry, Specification, KEY_BIND, KEY_BINDS, KEY_BORROWS, KEY_EXTENDS, KEY_IMPLEMENTS,
    KEY_INIT, KEY_INITIALIZE, KEY_STATIC, KEY_STATICS,
};
