//! Domain Services
//!
//! The define pipeline, split along its responsibilities: specification
//! parsing, delegation linking, mixin merging, method binding, statics
//! attachment, and the composer that runs them in fixed order. All
//! services are pure, synchronous, and run to completion on the calling
//! thread.

mod composer;
mod delegation_linker;
mod method_binder;
mod mixin_merger;
mod spec_parser;
mod statics_attacher;

pub use composer::{define, define_with, DefineOptions};
pub use delegation_linker::{link_delegation, seed_members};
pub use method_binder::bind_members;
pub use mixin_merger::merge;
pub use spec_parser::{parse_specification, ParsedSpecification};
pub use statics_attacher::attach_statics;
