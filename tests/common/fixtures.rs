//! Reusable factories and donors.

use blueprint::{define, Donor, Factory, Member, Specification, Value};

/// A factory with one data member and one method reading it through the
/// delegation chain.
pub fn greeter(greeting: &str) -> Factory {
    define(
        Specification::new()
            .member("greeting", greeting)
            .method("who", |ctx| ctx.get("greeting").unwrap_or(Value::Null)),
    )
    .expect("greeter factory definition")
}

/// A map donor of integer data members.
pub fn data_donor(entries: &[(&str, i64)]) -> Donor {
    Donor::members(
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), Member::data(*value))),
    )
}
