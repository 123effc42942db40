//! Statics attachment
//!
//! Copies parsed statics onto the factory identity, never the member set,
//! then strips stray `Statics`/`Static` entries from the member set. The
//! stray keys can arrive through a donor map that still carries the
//! directive under its historical spelling.

use crate::domain::entities::{Factory, MemberMap};
use crate::domain::value_objects::{KEY_STATIC, KEY_STATICS};

pub fn attach_statics(factory: &Factory, statics: MemberMap) {
    for (name, member) in statics {
        factory.set_static(name, member);
    }

    let members = factory.members();
    members.remove(KEY_STATICS);
    members.remove(KEY_STATIC);
}
