//! Flat-array source: one JSON array of `{fields, geometry}` records
//!
//! ```json
//! [{"fields": {"auteur_s": "Hergé", "personnage_s": "Tintin"},
//!   "geometry": {"coordinates": [4.35, 50.85]}}]
//! ```

use super::Source;
use crate::error::{ConvertError, Result};
use crate::traverse::{number, text, traverse, Step};
use crate::types::Point;
use serde_json::Value;

/// Title given to every document built from this source
pub const COMIC_ROUTE_TITLE: &str = "comic_route";

const AUTHOR: [Step; 2] = [Step::Key("fields"), Step::Key("auteur_s")];
const CHARACTER: [Step; 2] = [Step::Key("fields"), Step::Key("personnage_s")];
const LONGITUDE: [Step; 3] = [Step::Key("geometry"), Step::Key("coordinates"), Step::Index(0)];
const LATITUDE: [Step; 3] = [Step::Key("geometry"), Step::Key("coordinates"), Step::Index(1)];

pub struct ComicRouteSource {
    records: Vec<Value>,
}

impl ComicRouteSource {
    pub fn new(records: Vec<Value>) -> Self {
        ComicRouteSource { records }
    }

    /// Parse the whole file as one JSON array
    pub fn from_bytes(mut bytes: Vec<u8>) -> Result<Self> {
        let value: Value =
            simd_json::serde::from_slice(&mut bytes).map_err(ConvertError::RecordArray)?;

        match value {
            Value::Array(records) => {
                log::debug!("decoded {} comic route records", records.len());
                Ok(Self::new(records))
            }
            other => Err(ConvertError::NotAnArray {
                found: kind_name(&other),
            }),
        }
    }

    /// `"{author} - {character}"`, used both as name and description
    pub fn name(record: &Value) -> String {
        format!(
            "{} - {}",
            text(traverse(record, &AUTHOR)),
            text(traverse(record, &CHARACTER))
        )
    }

    pub fn longitude(record: &Value) -> f64 {
        number(traverse(record, &LONGITUDE))
    }

    pub fn latitude(record: &Value) -> f64 {
        number(traverse(record, &LATITUDE))
    }

    pub fn point(record: &Value) -> Point {
        let name = Self::name(record);
        Point {
            description: name.clone(),
            name,
            longitude: Self::longitude(record),
            latitude: Self::latitude(record),
        }
    }
}

impl Source for ComicRouteSource {
    fn title(&self) -> Option<String> {
        Some(COMIC_ROUTE_TITLE.to_string())
    }

    fn points(&self) -> Box<dyn Iterator<Item = Point> + '_> {
        Box::new(self.records.iter().map(Self::point))
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
