//! KML output
//!
//! Documents are produced from fixed text templates: a header with the icon
//! style and document name, one `Placemark` block per point, and a footer.
//! Blocks are joined with newlines.

pub mod clock;

pub use clock::{Clock, FixedClock, LocalClock};

use crate::types::{KmlStyle, Point};
use quick_xml::escape::{escape, partial_escape};

pub const KML_NAMESPACE: &str = "http://earth.google.com/kml/2.2";

const FOOTER: &str = "</Document>\n</kml>";

/// A rendered document and the number of placemarks in it
#[derive(Debug, Clone, PartialEq)]
pub struct KmlDocument {
    pub text: String,
    pub placemarks: usize,
}

/// Renders points as a KML 2.2 document
pub struct KmlRenderer<C: Clock = LocalClock> {
    style: KmlStyle,
    clock: C,
}

impl KmlRenderer<LocalClock> {
    pub fn new(style: KmlStyle) -> Self {
        KmlRenderer {
            style,
            clock: LocalClock,
        }
    }
}

impl Default for KmlRenderer<LocalClock> {
    fn default() -> Self {
        Self::new(KmlStyle::default())
    }
}

impl<C: Clock> KmlRenderer<C> {
    pub fn with_clock(style: KmlStyle, clock: C) -> Self {
        KmlRenderer { style, clock }
    }

    /// Render every point under `title`. The clock is read once per placemark.
    pub fn render<I>(&self, title: Option<&str>, points: I) -> KmlDocument
    where
        I: IntoIterator<Item = Point>,
    {
        let mut text = self.header(title.unwrap_or(""));
        let mut placemarks = 0;

        for point in points {
            text.push('\n');
            text.push_str(&self.placemark(&point));
            placemarks += 1;
        }

        text.push('\n');
        text.push_str(FOOTER);

        KmlDocument { text, placemarks }
    }

    fn header(&self, title: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="{ns}">
<Document>
  <Style id="{id}">
    <IconStyle>
      <Icon>
        <href>{href}</href>
      </Icon>
    </IconStyle>
  </Style>
  <name>{name}</name>
  <visibility>1</visibility>"#,
            ns = KML_NAMESPACE,
            id = escape(self.style.id.as_str()),
            href = partial_escape(self.style.icon_href.as_str()),
            name = partial_escape(title),
        )
    }

    fn placemark(&self, point: &Point) -> String {
        format!(
            r#"  <Placemark>
    <name>{name}</name>
    <description>{description}</description>
    <TimeStamp><when>{date}</when></TimeStamp>
    <styleUrl>#{id}</styleUrl>
    <Point><coordinates>{longitude},{latitude}</coordinates></Point>
  </Placemark>"#,
            name = partial_escape(point.name.as_str()),
            description = partial_escape(point.description.as_str()),
            date = self.clock.timestamp(),
            id = partial_escape(self.style.id.as_str()),
            longitude = point.longitude,
            latitude = point.latitude,
        )
    }
}

/// Render with the default style and the local clock
pub fn render_kml<I>(title: Option<&str>, points: I) -> KmlDocument
where
    I: IntoIterator<Item = Point>,
{
    KmlRenderer::<LocalClock>::default().render(title, points)
}
