//! # Placemark - location JSON to KML
//!
//! Converts location-tagged JSON exports into KML documents with one
//! `Placemark` per point, ready to import into a mapping application.
//!
//! ## Modules
//!
//! - **source**: decode input formats into [`Point`]s
//! - **traverse**: total index/key walks over untyped JSON
//! - **kml**: render points as a KML 2.2 document
//!
//! ## Input formats
//!
//! - `comic_route.json`: one JSON array of `{fields, geometry}` records
//! - `*.google`: saved vendor responses, one doubly encoded JSON envelope per line
//!
//! Records are read best-effort: a missing or malformed field falls back to
//! an empty string or zero. Only a file that cannot be decoded at all fails
//! the conversion.
//!
//! ## Quick Start
//!
//! ```rust
//! use placemark::source::{ComicRouteSource, Source};
//! use placemark::kml::render_kml;
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = br#"[{"fields": {"auteur_s": "A", "personnage_s": "B"},
//!                  "geometry": {"coordinates": [2.5, 48.8]}}]"#;
//!
//! let source = ComicRouteSource::from_bytes(input.to_vec())?;
//! let title = source.title();
//! let doc = render_kml(title.as_deref(), source.points());
//!
//! assert_eq!(doc.placemarks, 1);
//! assert!(doc.text.contains("<coordinates>2.5,48.8</coordinates>"));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod error;
pub mod kml;
pub mod source;
pub mod traverse;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{ConvertError, Result};
pub use kml::{render_kml, Clock, KmlDocument, KmlRenderer, LocalClock};
pub use source::{ComicRouteSource, Source, SourceKind, TransportLogSource};
pub use types::{ConvertConfig, KmlStyle, Point};

/// Outcome of a file conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub output: PathBuf,
    pub placemarks: usize,
}

/// Path of the document written for `input`: same stem, output extension
pub fn output_path(input: &Path, config: &ConvertConfig) -> PathBuf {
    input.with_extension(&config.output_extension)
}

/// Title for a document: the configured override, else the source's own,
/// else the input file stem
pub fn resolve_title(source: &dyn Source, input: &Path, config: &ConvertConfig) -> String {
    if let Some(title) = &config.title_override {
        return title.clone();
    }
    source.title().unwrap_or_else(|| {
        let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned());
        log::warn!("input carries no title, using the file name");
        stem.unwrap_or_default()
    })
}

/// Render every point of `source` into a document
pub fn convert_source<C: Clock>(
    source: &dyn Source,
    title: &str,
    renderer: &KmlRenderer<C>,
) -> KmlDocument {
    renderer.render(Some(title), source.points())
}

/// Main entry point: convert `input` and write the document next to it (or
/// to `output`). The format is taken from `kind`, or detected from the file
/// name before anything is read. Nothing is written unless the whole input
/// decodes.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    kind: Option<SourceKind>,
    config: &ConvertConfig,
) -> Result<Conversion> {
    let kind = match kind {
        Some(kind) => kind,
        None => SourceKind::detect(input, config)?,
    };
    log::info!("reading {} as {:?}", input.display(), kind);

    let source = kind.open(input)?;
    let title = resolve_title(source.as_ref(), input, config);
    let renderer = KmlRenderer::new(config.style.clone());
    let doc = convert_source(source.as_ref(), &title, &renderer);

    let output = output.map_or_else(|| output_path(input, config), Path::to_path_buf);
    std::fs::write(&output, doc.text.as_bytes()).map_err(|source| ConvertError::Write {
        path: output.clone(),
        source,
    })?;

    Ok(Conversion {
        output,
        placemarks: doc.placemarks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_output_path() {
        let config = ConvertConfig::default();
        assert_eq!(
            output_path(Path::new("data/comic_route.json"), &config),
            PathBuf::from("data/comic_route.kml")
        );
        assert_eq!(
            output_path(Path::new("saved.places.google"), &config),
            PathBuf::from("saved.places.kml")
        );
    }

    #[test]
    fn test_convert_comic_route_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("comic_route.json");
        let records = json!([
            {"fields": {"auteur_s": "A", "personnage_s": "B"}, "geometry": {"coordinates": [2.5, 48.8]}},
            {"fields": {"auteur_s": "Franquin & co", "personnage_s": "<Gaston>"}},
            {}
        ]);
        fs::write(&input, records.to_string()).unwrap();

        let result = convert_file(&input, None, None, &ConvertConfig::default()).unwrap();
        assert_eq!(result.placemarks, 3);
        assert_eq!(result.output, dir.path().join("comic_route.kml"));

        let kml = fs::read_to_string(&result.output).unwrap();
        assert!(kml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(kml.ends_with("</Document>\n</kml>"));
        assert!(kml.contains("  <name>comic_route</name>"));
        assert!(kml.contains("<name>A - B</name>"));
        assert!(kml.contains("<coordinates>2.5,48.8</coordinates>"));
        assert!(kml.contains("<name>Franquin &amp; co - &lt;Gaston&gt;</name>"));
        assert!(kml.contains("<name> - </name>"));
        assert!(kml.contains("<coordinates>0,0</coordinates>"));
        assert_eq!(kml.matches("<Placemark>").count(), 3);
    }

    #[test]
    fn test_convert_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("comic_route.json");
        fs::write(&input, "[]").unwrap();

        let result = convert_file(&input, None, None, &ConvertConfig::default()).unwrap();
        assert_eq!(result.placemarks, 0);

        let kml = fs::read_to_string(&result.output).unwrap();
        assert!(!kml.contains("<Placemark>"));
    }

    #[test]
    fn test_convert_transport_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("saved.google");

        let mut details = vec![serde_json::Value::Null; 12];
        details[9] = json!([null, null, 4.3416, 50.8949]);
        details[11] = json!("Atomium");
        let mut place = vec![serde_json::Value::Null; 15];
        place[14] = json!(details);
        let mut response = vec![serde_json::Value::Null; 33];
        response[0] = json!([null, [place]]);
        response[32] = json!([null, "Brussels & around"]);

        let payload = format!(")]}}'\n{}", json!(response));
        let line = format!("{}/*\"\"*/", json!({"c": 0, "d": payload}));
        fs::write(&input, line).unwrap();

        let result = convert_file(&input, None, None, &ConvertConfig::default()).unwrap();
        assert_eq!(result.placemarks, 1);
        assert_eq!(result.output, dir.path().join("saved.kml"));

        let kml = fs::read_to_string(&result.output).unwrap();
        assert!(kml.contains("  <name>Brussels &amp; around</name>"));
        assert!(kml.contains("<name>Atomium</name>"));
        assert!(kml.contains("<description></description>"));
        assert!(kml.contains("<coordinates>4.3416,50.8949</coordinates>"));
    }

    #[test]
    fn test_undecodable_transport_log_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.google");
        fs::write(&input, "not an envelope at all\n").unwrap();

        let err = convert_file(&input, None, None, &ConvertConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Envelope { line: 1, .. }));
        assert!(!dir.path().join("broken.kml").exists());
    }

    #[test]
    fn test_unrecognized_input_fails_before_reading() {
        // The file does not exist; detection must fail first
        let err = convert_file(
            Path::new("/nonexistent/places.csv"),
            None,
            None,
            &ConvertConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::UnrecognizedInput { .. }));
    }

    #[test]
    fn test_forced_kind_output_and_title() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("murals.json");
        let output = dir.path().join("out").with_extension("kml");
        fs::write(&input, "[{}]").unwrap();

        let config = ConvertConfig {
            title_override: Some(String::from("Murals")),
            ..ConvertConfig::default()
        };
        let result =
            convert_file(&input, Some(&output), Some(SourceKind::ComicRoute), &config).unwrap();
        assert_eq!(result.output, output);

        let kml = fs::read_to_string(&output).unwrap();
        assert!(kml.contains("  <name>Murals</name>"));
    }

    #[test]
    fn test_title_falls_back_to_file_stem() {
        let source = TransportLogSource::new(Vec::new());
        let title = resolve_title(&source, Path::new("dir/my.places.google"), &ConvertConfig::default());
        assert_eq!(title, "my.places");
    }
}
