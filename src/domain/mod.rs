//! Domain Layer
//!
//! The whole composition engine is pure, synchronous, in-memory logic:
//! no I/O, no suspension points, no shared mutable state across factory
//! boundaries beyond the intentional delegation links.
//!
//! ## Structure
//!
//! - `entities/` - Factory, MemberSet, Instance
//! - `value_objects/` - Member, Method, Donor, Specification
//! - `services/` - the define pipeline: parse, link, merge, bind, statics

pub mod entities;
pub mod services;
pub mod value_objects;
