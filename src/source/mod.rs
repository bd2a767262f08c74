//! Input sources - turn raw location data into normalized points
//!
//! Every supported input format implements [`Source`]. The format of a file
//! is decided from its name before anything is read, see [`SourceKind::detect`].

pub mod comic;
pub mod transport;

pub use comic::ComicRouteSource;
pub use transport::TransportLogSource;

use crate::error::{ConvertError, Result};
use crate::types::{ConvertConfig, Point};
use std::path::Path;

/// A decoded input that can be enumerated as points
pub trait Source {
    /// Document title carried by the input, if it has one
    fn title(&self) -> Option<String>;

    /// Points in input order. Each call starts a fresh pass.
    fn points(&self) -> Box<dyn Iterator<Item = Point> + '_>;
}

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A single JSON array of `{fields, geometry}` records
    ComicRoute,
    /// Line-oriented, doubly encoded vendor responses
    TransportLog,
}

impl SourceKind {
    /// Pick the format from the file name alone
    pub fn detect(path: &Path, config: &ConvertConfig) -> Result<Self> {
        let file_name = path.file_name().and_then(|n| n.to_str());
        let extension = path.extension().and_then(|e| e.to_str());

        if file_name == Some(config.comic_route_file_name.as_str()) {
            Ok(SourceKind::ComicRoute)
        } else if extension == Some(config.transport_extension.as_str()) {
            Ok(SourceKind::TransportLog)
        } else {
            Err(ConvertError::UnrecognizedInput {
                path: path.to_path_buf(),
                file_name: config.comic_route_file_name.clone(),
                extension: config.transport_extension.clone(),
            })
        }
    }

    /// Decode `bytes` as this format
    pub fn decode(self, bytes: Vec<u8>) -> Result<Box<dyn Source>> {
        let source: Box<dyn Source> = match self {
            SourceKind::ComicRoute => Box::new(ComicRouteSource::from_bytes(bytes)?),
            SourceKind::TransportLog => Box::new(TransportLogSource::from_bytes(&bytes)?),
        };
        Ok(source)
    }

    /// Read and decode the file at `path`
    pub fn open(self, path: &Path) -> Result<Box<dyn Source>> {
        let bytes = std::fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        self.decode(bytes)
    }
}
