//! Specification parser
//!
//! Interprets a specification exactly once: reserved directive keys are
//! consumed (both historical spellings), loose payloads are coerced where
//! the directive allows it, and every remaining key becomes an ordinary
//! member. Malformed directives fail here, before any linking happens.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::entities::{Factory, MemberMap};
use crate::domain::value_objects::{
    Donor, Member, Method, SpecEntry, Specification, KEY_BIND, KEY_BINDS, KEY_BORROWS,
    KEY_EXTENDS, KEY_IMPLEMENTS, KEY_INIT, KEY_INITIALIZE, KEY_STATIC, KEY_STATICS,
};
use crate::error::{BlueprintError, BlueprintResult};

/// Outcome of interpreting a specification: directives on one side,
/// ordinary members on the other.
#[derive(Debug)]
pub struct ParsedSpecification {
    pub initializer: Method,
    pub extends: Option<Factory>,
    pub borrows: Vec<Donor>,
    pub binds: Vec<String>,
    pub statics: MemberMap,
    pub members: MemberMap,
}

pub fn parse_specification(spec: Specification) -> BlueprintResult<ParsedSpecification> {
    let mut entries = spec.into_entries();

    let initializer = take_initializer(&mut entries);
    let extends = take_extends(&mut entries)?;
    let borrows = take_borrows(&mut entries)?;
    let binds = take_binds(&mut entries)?;
    let statics = take_statics(&mut entries)?;

    let mut members = MemberMap::new();
    for (key, entry) in entries {
        match entry {
            SpecEntry::Member(member) => {
                members.insert(key, member);
            }
            other => {
                return Err(BlueprintError::MalformedDirective {
                    key,
                    found: describe(&other).to_string(),
                })
            }
        }
    }

    Ok(ParsedSpecification {
        initializer,
        extends,
        borrows,
        binds,
        statics,
        members,
    })
}

/// Both entry-point spellings are consumed; the canonical one wins when
/// both are present. A non-invokable entry point degrades to the no-op.
fn take_initializer(entries: &mut HashMap<String, SpecEntry>) -> Method {
    let mut found = None;
    for key in [KEY_INITIALIZE, KEY_INIT] {
        let Some(entry) = entries.remove(key) else {
            continue;
        };
        if found.is_none() {
            found = match entry {
                SpecEntry::Initialize(method) => Some(method),
                SpecEntry::Member(Member::Method(method)) => Some(method),
                _ => None,
            };
        }
    }
    found.unwrap_or_else(Method::noop)
}

fn take_extends(entries: &mut HashMap<String, SpecEntry>) -> BlueprintResult<Option<Factory>> {
    match entries.remove(KEY_EXTENDS) {
        None => Ok(None),
        Some(SpecEntry::Extends(factory)) => Ok(Some(factory)),
        Some(other) => Err(BlueprintError::InvalidParent {
            found: describe(&other).to_string(),
        }),
    }
}

/// Donor order is the directive order: everything under `Borrows` first,
/// then everything under `Implements`. A JSON object payload is coerced to
/// a single map donor.
fn take_borrows(entries: &mut HashMap<String, SpecEntry>) -> BlueprintResult<Vec<Donor>> {
    let mut donors = Vec::new();
    for key in [KEY_BORROWS, KEY_IMPLEMENTS] {
        let Some(entry) = entries.remove(key) else {
            continue;
        };
        match entry {
            SpecEntry::Borrows(list) => donors.extend(list),
            SpecEntry::Member(Member::Data(Value::Object(map))) => {
                donors.push(Donor::Members(data_members(map)));
            }
            other => {
                return Err(BlueprintError::InvalidDonor {
                    index: donors.len(),
                    found: describe(&other).to_string(),
                })
            }
        }
    }
    Ok(donors)
}

/// A single string payload is coerced to a one-element name list, an array
/// of strings to the list itself.
fn take_binds(entries: &mut HashMap<String, SpecEntry>) -> BlueprintResult<Vec<String>> {
    let mut names = Vec::new();
    for key in [KEY_BINDS, KEY_BIND] {
        let Some(entry) = entries.remove(key) else {
            continue;
        };
        match entry {
            SpecEntry::Binds(list) => names.extend(list),
            SpecEntry::Member(Member::Data(Value::String(name))) => names.push(name),
            SpecEntry::Member(Member::Data(Value::Array(items))) => {
                for item in items {
                    match item {
                        Value::String(name) => names.push(name),
                        _ => {
                            return Err(BlueprintError::MalformedDirective {
                                key: key.to_string(),
                                found: "non-string bind name".to_string(),
                            })
                        }
                    }
                }
            }
            other => {
                return Err(BlueprintError::MalformedDirective {
                    key: key.to_string(),
                    found: describe(&other).to_string(),
                })
            }
        }
    }
    Ok(names)
}

fn take_statics(entries: &mut HashMap<String, SpecEntry>) -> BlueprintResult<MemberMap> {
    let mut statics = MemberMap::new();
    for key in [KEY_STATICS, KEY_STATIC] {
        let Some(entry) = entries.remove(key) else {
            continue;
        };
        match entry {
            SpecEntry::Statics(map) => statics.extend(map),
            SpecEntry::Member(Member::Data(Value::Object(map))) => {
                statics.extend(data_members(map));
            }
            other => {
                return Err(BlueprintError::MalformedDirective {
                    key: key.to_string(),
                    found: describe(&other).to_string(),
                })
            }
        }
    }
    Ok(statics)
}

fn data_members(map: serde_json::Map<String, Value>) -> MemberMap {
    map.into_iter()
        .map(|(name, value)| (name, Member::Data(value)))
        .collect()
}

fn describe(entry: &SpecEntry) -> &'static str {
    match entry {
        SpecEntry::Member(member) => member.kind(),
        SpecEntry::Extends(_) => "extends directive",
        SpecEntry::Borrows(_) => "borrows directive",
        SpecEntry::Binds(_) => "binds directive",
        SpecEntry::Statics(_) => "statics directive",
        SpecEntry::Initialize(_) => "initializer directive",
    }
}
