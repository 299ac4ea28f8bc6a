//! Envelope decoding
//!
//! Turns a raw remote payload into a collection of canonical records. Two
//! adapters exist, one per envelope shape; both yield the same `Vec<R>`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Top-level JSON shape wrapping a collection of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `[record, ...]`
    Flat,
    /// `{"index": [record, ...]}`
    Indexed,
}

#[derive(Deserialize)]
#[serde(bound = "R: DeserializeOwned")]
struct Indexed<R> {
    #[serde(default)]
    index: Option<Vec<Option<R>>>,
}

/// Decode `bytes` as a collection of `R` wrapped in `envelope`
///
/// Malformed JSON, or a top-level value of the wrong type for the
/// envelope, is a decode error. An indexed wrapper without an `index` key
/// (or with `"index": null`) decodes to an empty collection. A `null`
/// element decodes to a zero-valued record.
pub fn decode<R>(bytes: &[u8], envelope: Envelope) -> serde_json::Result<Vec<R>>
where
    R: DeserializeOwned + Default,
{
    let elements = match envelope {
        Envelope::Flat => serde_json::from_slice::<Option<Vec<Option<R>>>>(bytes)?,
        Envelope::Indexed => serde_json::from_slice::<Indexed<R>>(bytes)?.index,
    };
    let records: Vec<R> = elements
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();

    debug!(
        envelope = ?envelope,
        records = records.len(),
        bytes = bytes.len(),
        "Decoded remote payload"
    );

    Ok(records)
}
