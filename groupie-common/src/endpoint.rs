//! Remote endpoint contract
//!
//! Each remote endpoint has a fixed path and a fixed envelope shape. The
//! shape is part of the contract; it is never sniffed from the payload.

use std::fmt;

use crate::decode::Envelope;

/// Default base URL of the remote artist-tracking API
pub const DEFAULT_API_BASE_URL: &str = "https://groupietrackers.herokuapp.com/api";

/// The four read-only endpoints of the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Artists,
    Locations,
    Dates,
    Relation,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Artists,
        Endpoint::Locations,
        Endpoint::Dates,
        Endpoint::Relation,
    ];

    /// Path relative to the API base URL
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Artists => "/artists",
            Endpoint::Locations => "/locations",
            Endpoint::Dates => "/dates",
            Endpoint::Relation => "/relation",
        }
    }

    /// Envelope the endpoint wraps its records in
    pub fn envelope(self) -> Envelope {
        match self {
            Endpoint::Artists => Envelope::Flat,
            Endpoint::Locations | Endpoint::Dates | Endpoint::Relation => Envelope::Indexed,
        }
    }

    /// Absolute URL for this endpoint under `base_url`
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path()[1..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_under_default_base() {
        assert_eq!(
            Endpoint::Artists.url(DEFAULT_API_BASE_URL),
            "https://groupietrackers.herokuapp.com/api/artists"
        );
        assert_eq!(
            Endpoint::Relation.url(DEFAULT_API_BASE_URL),
            "https://groupietrackers.herokuapp.com/api/relation"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_is_ignored() {
        assert_eq!(
            Endpoint::Dates.url("http://127.0.0.1:9000/api/"),
            "http://127.0.0.1:9000/api/dates"
        );
    }

    #[test]
    fn test_only_artists_is_flat() {
        for endpoint in Endpoint::ALL {
            let expected = if endpoint == Endpoint::Artists {
                Envelope::Flat
            } else {
                Envelope::Indexed
            };
            assert_eq!(endpoint.envelope(), expected, "{endpoint}");
        }
    }
}
