use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors of a conversion run. Problems inside a single record never
/// surface here; they degrade to default field values instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot tell the input format of {path:?}: expected a file named `{file_name}` or ending in `.{extension}`")]
    UnrecognizedInput {
        path: PathBuf,
        file_name: String,
        extension: String,
    },

    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: input is not valid UTF-8")]
    Encoding {
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("failed to parse record array")]
    RecordArray(#[source] simd_json::Error),

    #[error("expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },

    #[error("line {line}: failed to parse envelope")]
    Envelope {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: envelope has no string field `{field}`")]
    MissingPayload { line: usize, field: &'static str },

    #[error("line {line}: failed to parse payload")]
    Payload {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
