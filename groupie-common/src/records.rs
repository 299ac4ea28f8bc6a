//! Canonical record types
//!
//! One representation per entity kind, independent of the envelope the
//! remote endpoint wraps it in. Decoding is permissive: unknown fields are
//! ignored, and missing fields or explicit `null`s become the zero value.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::endpoint::Endpoint;

/// A decoded unit of remote data keyed by an integer ID
pub trait Record {
    /// Endpoint this record kind is fetched from
    const ENDPOINT: Endpoint;

    /// Human-readable kind, used in not-found messages
    const KIND: &'static str;

    fn id(&self) -> i64;
}

/// Artist (or band) summary from the `/artists` endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Artist {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub image: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub members: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub creation_date: i64,
    #[serde(deserialize_with = "nullable")]
    pub first_album: String,
    /// Cross-reference to this artist's location record (remote URL)
    #[serde(deserialize_with = "nullable")]
    pub locations: String,
    /// Cross-reference to this artist's concert-date record (remote URL)
    #[serde(deserialize_with = "nullable")]
    pub concert_dates: String,
    /// Cross-reference to this artist's relation record (remote URL)
    #[serde(deserialize_with = "nullable")]
    pub relations: String,
}

/// Tour locations for one artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub locations: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub dates: String,
}

/// Last and upcoming concert dates for one artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcertDate {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub dates: Vec<String>,
}

/// Location -> dates mapping for one artist
///
/// Keys are kept sorted so pages list locations alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relation {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

impl Record for Artist {
    const ENDPOINT: Endpoint = Endpoint::Artists;
    const KIND: &'static str = "Artist";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Location {
    const ENDPOINT: Endpoint = Endpoint::Locations;
    const KIND: &'static str = "Location";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for ConcertDate {
    const ENDPOINT: Endpoint = Endpoint::Dates;
    const KIND: &'static str = "Dates";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Relation {
    const ENDPOINT: Endpoint = Endpoint::Relation;
    const KIND: &'static str = "Relation";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Treat an explicit JSON `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
