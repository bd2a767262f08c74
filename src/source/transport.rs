//! Transport-log source: saved vendor responses, one per line
//!
//! Each line is a JSON envelope followed by the 6-character `/*""*/` guard.
//! The envelope's `d` field holds the actual response as a JSON string,
//! itself prefixed by the 4-character `)]}'` guard. Both guards are dropped
//! before parsing, so every line goes through two decode passes.
//!
//! Responses are positional arrays; fields are reached through fixed index
//! paths and anything missing falls back to a default.

use super::Source;
use crate::error::{ConvertError, Result};
use crate::traverse::{is_falsy, number, text, traverse_indices};
use crate::types::Point;
use serde_json::Value;

/// Characters trailing each envelope line
pub const ENVELOPE_SUFFIX_LEN: usize = 6;

/// Characters leading each payload string
pub const PAYLOAD_PREFIX_LEN: usize = 4;

/// Envelope field holding the payload
pub const PAYLOAD_FIELD: &str = "d";

// Relative to the first response
const TITLE: [usize; 2] = [32, 1];
// Relative to each response
const PLACES: [usize; 2] = [0, 1];
// Relative to each place record
const NAME: [usize; 2] = [14, 11];
const DESCRIPTION: [usize; 5] = [14, 25, 15, 0, 2];
const LONGITUDE: [usize; 3] = [14, 9, 2];
const LATITUDE: [usize; 3] = [14, 9, 3];

pub struct TransportLogSource {
    responses: Vec<Value>,
}

impl TransportLogSource {
    pub fn new(responses: Vec<Value>) -> Self {
        TransportLogSource { responses }
    }

    /// Decode every line; the first bad line fails the whole input
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let content = std::str::from_utf8(bytes).map_err(|source| ConvertError::Encoding {
            line: line_of_offset(bytes, source.valid_up_to()),
            source,
        })?;

        let mut responses = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            responses.push(decode_line(line, idx + 1)?);
        }

        log::debug!("decoded {} transport responses", responses.len());
        Ok(Self::new(responses))
    }

    pub fn responses(&self) -> &[Value] {
        &self.responses
    }

    pub fn name(place: &Value) -> String {
        text(traverse_indices(place, &NAME))
    }

    pub fn description(place: &Value) -> String {
        match traverse_indices(place, &DESCRIPTION) {
            Some(value) if !is_falsy(value) => text(Some(value)),
            _ => String::new(),
        }
    }

    pub fn longitude(place: &Value) -> f64 {
        number(traverse_indices(place, &LONGITUDE))
    }

    pub fn latitude(place: &Value) -> f64 {
        number(traverse_indices(place, &LATITUDE))
    }

    pub fn point(place: &Value) -> Point {
        Point {
            name: Self::name(place),
            description: Self::description(place),
            longitude: Self::longitude(place),
            latitude: Self::latitude(place),
        }
    }

    fn places(response: &Value) -> &[Value] {
        match traverse_indices(response, &PLACES).and_then(Value::as_array) {
            Some(places) => places.as_slice(),
            None => {
                log::warn!("response has no place list, skipping it");
                &[]
            }
        }
    }
}

impl Source for TransportLogSource {
    fn title(&self) -> Option<String> {
        self.responses
            .first()
            .and_then(|response| traverse_indices(response, &TITLE))
            .filter(|value| !value.is_null())
            .map(|value| text(Some(value)))
    }

    fn points(&self) -> Box<dyn Iterator<Item = Point> + '_> {
        Box::new(
            self.responses
                .iter()
                .flat_map(|response| Self::places(response).iter().map(Self::point)),
        )
    }
}

/// Decode one envelope line into its response
fn decode_line(line: &str, line_no: usize) -> Result<Value> {
    let envelope = drop_last_chars(line, ENVELOPE_SUFFIX_LEN);
    let outer: Value = serde_json::from_str(envelope).map_err(|source| ConvertError::Envelope {
        line: line_no,
        source,
    })?;

    let payload = outer
        .get(PAYLOAD_FIELD)
        .and_then(Value::as_str)
        .ok_or(ConvertError::MissingPayload {
            line: line_no,
            field: PAYLOAD_FIELD,
        })?;

    serde_json::from_str(drop_first_chars(payload, PAYLOAD_PREFIX_LEN)).map_err(|source| {
        ConvertError::Payload {
            line: line_no,
            source,
        }
    })
}

/// 1-based line holding byte `offset`
fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

fn drop_first_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(i, _)| &s[i..])
}

fn drop_last_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    s.char_indices().rev().nth(n - 1).map_or("", |(i, _)| &s[..i])
}
