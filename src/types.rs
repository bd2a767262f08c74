use serde::{Deserialize, Serialize};

/// A single point of interest, normalized from any input format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Label shown on the map
    pub name: String,

    /// Free text attached to the placemark
    pub description: String,

    pub longitude: f64,

    pub latitude: f64,
}

impl Point {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Point {
            name: name.into(),
            description: description.into(),
            longitude,
            latitude,
        }
    }
}

/// Icon style shared by every placemark of a document
#[derive(Debug, Clone)]
pub struct KmlStyle {
    /// Style id, referenced from each placemark as `#<id>`
    pub id: String,

    /// URL of the marker icon
    pub icon_href: String,
}

impl Default for KmlStyle {
    fn default() -> Self {
        KmlStyle {
            id: String::from("placemark-red"),
            icon_href: String::from("http://maps.me/placemarks/placemark-red.png"),
        }
    }
}

/// Configuration for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Exact file name that selects the flat-array source
    pub comic_route_file_name: String,

    /// Extension (without the dot) that selects the transport-log source
    pub transport_extension: String,

    /// Extension given to the output document
    pub output_extension: String,

    /// Document title used instead of the one the source provides
    pub title_override: Option<String>,

    pub style: KmlStyle,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            comic_route_file_name: String::from("comic_route.json"),
            transport_extension: String::from("google"),
            output_extension: String::from("kml"),
            title_override: None,
            style: KmlStyle::default(),
        }
    }
}
