//! Blueprint composer
//!
//! The `define` pipeline. Runs once per blueprint definition, in fixed
//! order: parse the specification, link delegation, merge borrowed
//! members, bind methods, attach statics. Any failure propagates before a
//! factory is handed out; there is no partial factory.

use crate::domain::entities::Factory;
use crate::domain::services::{
    attach_statics, bind_members, link_delegation, merge, parse_specification, seed_members,
};
use crate::domain::value_objects::Specification;
use crate::error::BlueprintResult;

/// Options consumed by [`define_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefineOptions {
    eager_initialize: bool,
}

impl DefineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke the initializer on every `create`, with the fresh instance as
    /// the execution context and no arguments. Off by default;
    /// `Factory::construct` is the explicit alternative and takes arguments.
    pub fn with_eager_initialize(mut self, eager: bool) -> Self {
        self.eager_initialize = eager;
        self
    }

    pub fn eager_initialize(&self) -> bool {
        self.eager_initialize
    }
}

/// Compose a factory from a specification with default options.
pub fn define(specification: Specification) -> BlueprintResult<Factory> {
    define_with(specification, DefineOptions::default())
}

/// Compose a factory from a specification.
pub fn define_with(
    specification: Specification,
    options: DefineOptions,
) -> BlueprintResult<Factory> {
    let parsed = parse_specification(specification)?;

    let members = link_delegation(parsed.extends.as_ref());
    let parent = parsed.extends.as_ref().map(Factory::members);
    let factory = Factory::from_parts(parsed.initializer, members, parent, options);
    seed_members(&factory, parsed.members);

    merge(&factory.members(), &parsed.borrows);
    bind_members(&parsed.binds, &factory)?;
    attach_statics(&factory, parsed.statics);

    Ok(factory)
}
