//! Slot payload encoding.
//!
//! Each collection is persisted as one JSON document wrapping the items in a
//! versioned envelope. Decoding is deliberately forgiving: an absent slot,
//! garbage, or an unknown shape comes back as an empty collection so a bad
//! slot never blocks startup. A bare top-level array is accepted as the
//! legacy un-versioned layout.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const SLOT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    items: &'a [T],
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[allow(dead_code)]
    version: u32,
    items: Vec<T>,
}

/// Serialize a collection into its slot payload.
pub fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    let envelope = EnvelopeRef {
        version: SLOT_VERSION,
        items,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Decode a slot payload, tolerating anything unreadable.
pub fn decode<T: DeserializeOwned>(payload: Option<&str>) -> Vec<T> {
    let Some(raw) = payload else {
        return Vec::new();
    };
    if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(raw) {
        return envelope.items;
    }
    serde_json::from_str::<Vec<T>>(raw).unwrap_or_default()
}
