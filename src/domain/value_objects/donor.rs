//! Donor value object
//!
//! A source of members for mixin composition: either another factory
//! (contributing its member set) or a plain member map.

use crate::domain::entities::{Factory, MemberMap};
use crate::domain::value_objects::Member;

#[derive(Clone, Debug)]
pub enum Donor {
    Factory(Factory),
    Members(MemberMap),
}

impl Donor {
    /// A map donor from an entry iterator.
    pub fn members<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Member)>,
        S: Into<String>,
    {
        Donor::Members(
            entries
                .into_iter()
                .map(|(name, member)| (name.into(), member))
                .collect(),
        )
    }
}

impl From<Factory> for Donor {
    fn from(factory: Factory) -> Self {
        Donor::Factory(factory)
    }
}

impl From<&Factory> for Donor {
    fn from(factory: &Factory) -> Self {
        Donor::Factory(factory.clone())
    }
}

impl From<MemberMap> for Donor {
    fn from(members: MemberMap) -> Self {
        Donor::Members(members)
    }
}
