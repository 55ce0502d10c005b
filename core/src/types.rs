//! Domain DTOs for the ingredient inventory API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Deserializing an
//! `Ingredient` is the schema check at the API boundary: a negative quantity,
//! a non-string unit or an unparseable timestamp fails here instead of
//! reaching the render layer. An unfamiliar unit string is not malformed and
//! is kept as `Unit::Other`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unit of measure for an ingredient quantity.
///
/// The form only offers the named variants. Records read from the server may
/// carry any unit string; those land in `Other` verbatim so the row stays
/// visible and an edit writes the same string back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Piece,
    Other(String),
}

impl Unit {
    pub const ALL: [Unit; 5] = [
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milliliter,
        Unit::Liter,
        Unit::Piece,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Unit::Gram => "Gram",
            Unit::Kilogram => "Kilogram",
            Unit::Milliliter => "Milliliter",
            Unit::Liter => "Liter",
            Unit::Piece => "Piece",
            Unit::Other(raw) => raw.as_str(),
        }
    }

    /// Exact match on a variant name, else `Other` with the raw string.
    fn from_wire(raw: String) -> Self {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == raw)
            .unwrap_or(Unit::Other(raw))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Unit::from_wire)
    }
}

/// Error returned when a string names no known [`Unit`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit: {0}")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    /// Case-insensitive match on a named variant; never yields `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownUnit(wanted.to_string()))
    }
}

/// A single ingredient record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: u32,
    pub unit: Unit,
    pub last_edited: DateTime<Utc>,
}

/// Request payload for creating or updating an ingredient, keyed by `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpsertIngredient {
    pub name: String,
    pub quantity: u32,
    pub unit: Unit,
}

/// Request payload for removing several ingredients in one call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteIngredients {
    pub names: Vec<String>,
}
