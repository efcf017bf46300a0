//! Identifier type shared by nodes and edges

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier naming a node or an edge within its collection.
///
/// Identifiers come in string or numeric form, and two identifiers are
/// equal when their canonical string forms are equal: `Integer(1)`,
/// `Float(1.0)` and `Text("1")` all name the same entry. The canonical
/// form is what the store uses as its map key, so lookups accept any of
/// the equal spellings interchangeably.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// String identifier, used verbatim as the canonical form.
    Text(String),
    /// Integer identifier, canonicalized via decimal formatting.
    Integer(i64),
    /// Float identifier, canonicalized via shortest round-trip formatting
    /// (`1.0` becomes `"1"`, `1.5` becomes `"1.5"`).
    Float(f64),
}

impl Identifier {
    /// Returns the canonical string form used for equality and map keys.
    ///
    /// Negative zero is normalized to `"0"` so that `-0.0`, `0.0` and `0`
    /// all collapse to one key.
    pub fn canonical_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Text(s) => f.write_str(s),
            Identifier::Integer(i) => write!(f, "{}", i),
            Identifier::Float(v) if *v == 0.0 => f.write_str("0"),
            Identifier::Float(v) => write!(f, "{}", v),
        }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Identifier::Text(a), Identifier::Text(b)) => a == b,
            (Identifier::Integer(a), Identifier::Integer(b)) => a == b,
            _ => self.canonical_key() == other.canonical_key(),
        }
    }
}

// Equality is string equality over canonical forms, which is reflexive
// even for Float: NaN canonicalizes to "NaN" and equals itself.
impl Eq for Identifier {}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::Text(s)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Text(s.to_string())
    }
}

impl From<i64> for Identifier {
    fn from(i: i64) -> Self {
        Identifier::Integer(i)
    }
}

impl From<i32> for Identifier {
    fn from(i: i32) -> Self {
        Identifier::Integer(i64::from(i))
    }
}

impl From<u32> for Identifier {
    fn from(i: u32) -> Self {
        Identifier::Integer(i64::from(i))
    }
}

impl From<f64> for Identifier {
    fn from(v: f64) -> Self {
        Identifier::Float(v)
    }
}

impl From<&Identifier> for Identifier {
    fn from(id: &Identifier) -> Self {
        id.clone()
    }
}
