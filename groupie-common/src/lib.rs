//! # Groupie Common Library
//!
//! Shared code for the Groupie Tracker service:
//! - Canonical record types (artists, locations, dates, relations)
//! - Remote endpoint contract (path + envelope shape per endpoint)
//! - Envelope decoding and record selection
//! - Bootstrap configuration loading

pub mod config;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod records;
pub mod select;

pub use decode::{decode, Envelope};
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use records::{Artist, ConcertDate, Location, Record, Relation};
pub use select::select;
